//! Path search and traversal over the graph store.
//!
//! Dijkstra and A* share a single best-first search; breadth-first
//! traversal yields discovery edges lazily.

mod bfs;
mod config;
mod shortest;

pub use bfs::{BfsEdges, bfs_edges, hop_distances};
pub use config::{HeuristicFn, PathConfig};
pub use shortest::{Path, astar, dijkstra, zero_heuristic};
