// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argument-validation errors.

use thiserror::Error;

/// Errors produced at the crate's argument-validation boundaries.
///
/// The numerical algorithms themselves are total over their domain;
/// degenerate inputs inside that domain resolve to empty result sets as
/// documented on each operation. This type only covers inputs that are
/// structurally invalid before any arithmetic is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A control polygon outside the supported degree range (1 to 3).
    #[error("control polygon must have 2 to 4 points, got {0}")]
    InvalidControlPolygon(usize),
    /// A point sequence too short to form a single edge.
    #[error("point sequence must have at least 2 points, got {0}")]
    TooFewPoints(usize),
}
