// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Algorithm Suite
//!
//! Algorithms over [`fungraph_common::Graph`], grouped as:
//!
//! - **Traversal**: DFS/BFS walks, visitor-driven early exit, path search,
//!   the [`Bfs`] level iterator.
//! - **Properties**: topological order, cycles, bipartiteness, tree and
//!   connectivity checks, Eulerian circuits and paths.
//! - **Components**: connected and strongly connected components, the
//!   condensation DAG.
//! - **Pathfinding**: Dijkstra, A*, Bellman-Ford.
//! - **MST**: Kruskal and Prim.
//! - **Transform**: reversal, edge contraction, induced subgraphs.
//!
//! Every algorithm only reads its input graph; transforms return new graphs.
//! Output order is deterministic: ties are broken by ascending node id.
//!
//! # Example
//!
//! ```ignore
//! use fungraph_algo::algo::{dijkstra, strongly_connected_components};
//! use fungraph_common::Graph;
//!
//! let graph: Graph<&str, (), f64> =
//!     Graph::from_edges([("a", "b", 1.0), ("b", "c", 2.0), ("c", "a", 4.0)]);
//!
//! let path = dijkstra(&graph, &"a", &"c")?;
//! assert_eq!(path.distance, 3.0);
//! assert_eq!(strongly_connected_components(&graph).len(), 1);
//! ```

mod id_map;
mod traversal;

pub mod algorithms;
pub mod transform;

pub use algorithms::*;
pub use id_map::IdMap;
pub use transform::{clear_isolated, contract_edge, reverse, subgraph};
pub use traversal::{
    Bfs, BfsConfig, Direction, Visit, bfs, bfs_path, bfs_visit, bfs_with, dfs, dfs_path,
    dfs_visit, dfs_visit_with, dfs_with, reachable,
};

#[cfg(test)]
pub mod test_utils;
