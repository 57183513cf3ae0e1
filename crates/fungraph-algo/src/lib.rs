// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{Bipartition, ShortestPath, ShortestPaths, SpanningTree};
pub use algo::{BfsConfig, DijkstraConfig, Direction, IdMap, PrimConfig, Visit};
