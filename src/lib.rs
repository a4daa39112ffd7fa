// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve analysis and arc parameterization for 2D shapes.
//!
//! This crate is the numerical kernel of a 2D shape library. It
//! analyzes Bézier segments of degree 1 to 3 — extrema, inflection
//! points, and decomposition into "simple" bounded-turning sub-curves —
//! converts elliptical arcs between the SVG endpoint encoding and a
//! canonical center encoding, and re-parameterizes point sequences by
//! cumulative arc length.
//!
//! All operations are pure functions over immutable values. The crate
//! keeps no caches of its own; embedding shape objects that memoize
//! derived data (extrema, reductions, arc-length tables) own the cache
//! keys and their invalidation.
//!
//! # Examples
//!
//! Decomposing a curve into simple segments:
//!
//! ```
//! use curvo::Bezier;
//!
//! let c = Bezier::cubic((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
//! assert!(!c.is_simple());
//! let segments = c.reduce();
//! assert!(segments.len() > 1);
//! for pair in segments.windows(2) {
//!     assert!((pair[1].curve.start() - pair[0].curve.end()).hypot() < 1e-6);
//! }
//! ```
//!
//! Converting an SVG endpoint arc to center parameterization:
//!
//! ```
//! use curvo::{Arc, Point, SvgArc, Vec2};
//!
//! let endpoint = SvgArc {
//!     from: Point::new(0.0, 0.0),
//!     to: Point::new(10.0, 0.0),
//!     radii: Vec2::new(5.0, 5.0),
//!     x_rotation: 0.0,
//!     large_arc: false,
//!     sweep: true,
//! };
//! let arc = Arc::from_svg_arc(&endpoint).unwrap();
//! assert!((arc.center.x - 5.0).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]

mod arc;
mod bezier;
pub mod common;
mod derivative;
mod error;
mod extrema;
mod point;
mod polyline;
mod reduce;
mod simple;
mod vec2;

pub use crate::arc::*;
pub use crate::bezier::*;
pub use crate::derivative::*;
pub use crate::error::*;
pub use crate::point::*;
pub use crate::polyline::*;
pub use crate::reduce::*;
pub use crate::vec2::*;

/// The maximum number of extrema a curve can report: two roots per
/// velocity component plus one per acceleration component of a cubic.
pub const MAX_EXTREMA: usize = 6;
