// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The simplicity heuristic for curve segments.

use std::f64::consts::FRAC_PI_3;

use crate::Bezier;

impl Bezier {
    /// Heuristic test of whether this segment is "simple": safe to treat
    /// as free of gross self-crossing or looping.
    ///
    /// The segment is simple iff the angle between its end normals stays
    /// under 60°, bounding the total turning across the segment. A
    /// zero-length derivative at either end (a cusp) yields `NaN`
    /// normals and classifies as not simple.
    ///
    /// This is a sufficient condition used by [`Bezier::reduce`], not a
    /// proof of non-self-intersection: a segment whose end tangents are
    /// parallel can still cross itself.
    pub fn is_simple(&self) -> bool {
        let n0 = self.normal(0.0);
        let n1 = self.normal(1.0);
        // The dot of two unit vectors can escape [-1, 1] by a rounding
        // error; an unclamped acos would turn that into NaN and
        // misclassify exactly straight segments.
        let s = n0.dot(n1).clamp(-1.0, 1.0);
        s.acos().abs() < FRAC_PI_3
    }
}
