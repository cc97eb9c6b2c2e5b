//! Graph store and derived adjacency views.

mod export;
mod store;

pub use export::{AdjacencyList, AdjacencyMatrix};
pub use store::{Graph, GraphBuilder};

pub(crate) use store::StopIndex;
