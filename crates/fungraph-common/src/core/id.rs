// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Node identifier bound.
//!
//! Identifiers are supplied by the caller and never generated by the graph.
//! The total order drives iteration order of the persistent maps, which keeps
//! algorithm output and tie-breaking deterministic; `Hash` backs the
//! algorithms' scratch sets; `Debug` renders ids into [`GraphError`].
//!
//! [`GraphError`]: crate::api::error::GraphError

use std::fmt::Debug;
use std::hash::Hash;

/// Bound satisfied by every usable node identifier.
pub trait NodeId: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> NodeId for T {}
