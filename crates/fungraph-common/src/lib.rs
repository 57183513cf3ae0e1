// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod core {
    pub mod id;
}

pub mod graph {
    pub mod context;
    pub mod inductive_graph;
    pub mod weight;
}

// Re-exports for convenience
pub use api::error::{GraphError, Result};
pub use core::id::NodeId;
pub use graph::context::Context;
pub use graph::inductive_graph::Graph;
pub use graph::weight::EdgeWeight;
