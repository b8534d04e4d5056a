/// Disjoint-set (union-find) over a fixed universe of vertices `[0, n)`,
/// with path compression and union by rank. One instance is scoped to a
/// single spanning-tree computation and never shared between them.
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    set_count: usize,
}

impl DisjointSet {
    /// Create a new DisjointSet with every vertex its own singleton set
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
            set_count: n,
        }
    }

    /// Find the root representative of x's set, with path compression:
    /// every vertex visited on the walk is re-pointed directly at the root
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Merge the sets containing x and y. Returns true if a merge happened,
    /// false if x and y were already in the same set. That false is the
    /// cycle signal consumed by Kruskal's builder.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        // Union by rank: shorter tree goes under the taller root
        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }

        self.set_count -= 1;
        true
    }

    /// Check if two vertices are in the same set
    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets currently held
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// The current partition as groups of member vertices. Groups are ordered
    /// by their smallest member; members are ascending.
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut by_root = vec![Vec::new(); n];

        for v in 0..n {
            let root = self.find(v);
            by_root[root].push(v);
        }

        let mut sets: Vec<Vec<usize>> = by_root
            .into_iter()
            .filter(|set| !set.is_empty())
            .collect();
        // Roots move around with union by rank; the smallest member does not
        sets.sort_by_key(|set| set[0]);
        sets
    }
}
