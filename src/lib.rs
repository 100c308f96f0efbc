//! # Quickhull 2D
//!
//! Convex hulls for 2D point sets, computed with the Quickhull
//! divide-and-conquer algorithm.
//!
//! The entry points are [`ConvexHull2d`], which keeps the input point set
//! alongside a lazily computed, cached hull, and the one-shot drivers
//! [`convex_hull`] and [`convex_hull_iterative`]. All of them return the
//! hull points ordered to trace the boundary clockwise.
//!
//! ## References
//!
//! - C. Bradford Barber et al. 1996. [The Quickhull Algorithm for Convex Hulls](https://www.cise.ufl.edu/~ungor/courses/fall06/papers/QuickHull.pdf) (the original paper)

#![warn(missing_docs)]

mod geometry;
mod hull;

pub use hull::{convex_hull, convex_hull_iterative, ConvexHull2d, ConvexHull2dError};
