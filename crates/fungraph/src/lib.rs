// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! # fungraph - Functional Inductive Graphs
//!
//! A persistent, immutable directed graph built from node contexts, with a
//! classic algorithm suite on top: traversal, cycle and shape checks,
//! components, shortest paths, spanning trees and structural transforms.
//!
//! Every graph operation returns a new graph and leaves its receiver
//! untouched. Clones are O(1) and updates share structure with the graph they
//! came from.
//!
//! ```ignore
//! use fungraph::prelude::*;
//!
//! let g: Graph<u32, (), f64> = Graph::from_edges([(1, 2, 1.0), (2, 3, 2.0), (1, 3, 3.0)]);
//! assert_eq!(kruskal(&g)?.total_weight, 3.0);
//! ```

pub use fungraph_common::{Context, EdgeWeight, Graph, GraphError, NodeId, Result};

// Re-export crates
pub use fungraph_algo as algo_crate;
pub use fungraph_collections as collections;
pub use fungraph_common as common;

pub mod algo {
    pub use crate::algo_crate::algo::*;
}

/// Graph model, errors and every algorithm entry point.
pub mod prelude {
    pub use crate::algo::*;
    pub use fungraph_common::{Context, EdgeWeight, Graph, GraphError, NodeId, Result};
}
