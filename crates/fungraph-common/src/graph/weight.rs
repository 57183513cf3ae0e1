// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Numeric view of edge labels for weighted algorithms.
//!
//! Weighted algorithms read an edge's cost through [`EdgeWeight`]. Unit labels
//! and `None` weigh 0, so unweighted graphs and graphs with partially labelled
//! edges need no special casing.

/// Edge label that can be read as a numeric cost.
pub trait EdgeWeight {
    fn weight(&self) -> f64;
}

impl EdgeWeight for () {
    #[inline]
    fn weight(&self) -> f64 {
        0.0
    }
}

impl<T: EdgeWeight> EdgeWeight for Option<T> {
    #[inline]
    fn weight(&self) -> f64 {
        self.as_ref().map_or(0.0, EdgeWeight::weight)
    }
}

impl<T: EdgeWeight + ?Sized> EdgeWeight for &T {
    #[inline]
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

macro_rules! impl_numeric_weight {
    ($($ty:ty),*) => {
        $(
            impl EdgeWeight for $ty {
                #[inline]
                fn weight(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_weight!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);
