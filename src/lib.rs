// Library exports for spantree
pub mod edge_list;
pub mod generate;
pub mod graph;
pub mod kruskal;
pub mod labels;
pub mod prim;
pub mod spanning;
pub mod union_find;
