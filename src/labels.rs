/// Vertex label registry for mapping between string labels and dense
/// integer indices
///
/// Only labeled edge lists use this. Indexed edge lists (those opening with
/// a `vertices N` directive) carry integer endpoints already and skip label
/// interning entirely.

use std::collections::HashMap;

/// Registry that maps vertex labels to dense indices `[0, len)`
#[derive(Debug, Default, Clone)]
pub struct VertexLabels {
    /// Label of each vertex, indexed by vertex
    labels: Vec<String>,

    /// Map from label back to vertex index
    index: HashMap<String, usize>,
}

impl VertexLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or assign the index for a label. Indices are handed out densely
    /// from zero, in first-appearance order.
    pub fn get_or_assign(&mut self, label: &str) -> usize {
        if let Some(&index) = self.index.get(label) {
            return index;
        }

        let index = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), index);
        index
    }

    /// Look up the index of a previously interned label
    pub fn resolve(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Look up the label of a vertex index
    pub fn name(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|s| s.as_str())
    }

    /// Number of distinct labels interned so far
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_appearance_order() {
        let mut labels = VertexLabels::new();

        let a = labels.get_or_assign("alpha");
        let b = labels.get_or_assign("beta");
        assert_eq!(a, 0);
        assert_eq!(b, 1);

        // Re-interning returns the existing index
        assert_eq!(labels.get_or_assign("alpha"), 0);
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_lookup_both_ways() {
        let mut labels = VertexLabels::new();
        labels.get_or_assign("hub");
        labels.get_or_assign("leaf");

        assert_eq!(labels.resolve("leaf"), Some(1));
        assert_eq!(labels.resolve("missing"), None);
        assert_eq!(labels.name(0), Some("hub"));
        assert_eq!(labels.name(9), None);
    }
}
