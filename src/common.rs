// Copyright 2025 the Curvo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar root finding for curve components in Bernstein form.

#![allow(missing_docs)]

use arrayvec::ArrayVec;

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0.
///
/// If the equation is nearly linear, the quadratic term is ignored and
/// the single remaining root is returned; the other root would be out
/// of representable range. Results are sorted ascending.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        }
        return result;
    }
    let arg = sc1 * sc1 - 4. * sc0;
    if !arg.is_finite() {
        // sc1 * sc1 overflowed; the surviving root is -sc1.
        result.push(-sc1);
        return result;
    }
    if arg < 0.0 {
        return result;
    }
    if arg == 0.0 {
        result.push(-0.5 * sc1);
        return result;
    }
    // See https://math.stackexchange.com/questions/866331
    let root1 = -0.5 * (sc1 + arg.sqrt().copysign(sc1));
    let root2 = sc0 / root1;
    if root2.is_finite() {
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}

/// Find the roots in [0, 1] of a scalar Bézier given by its ordered
/// control values.
///
/// Handles sequences of up to 3 control values (linear and quadratic
/// components); shorter sequences are constant and have no isolated
/// roots. A sequence that is identically zero also returns no roots, so
/// a degenerate component never manufactures spurious parameter values.
pub fn bernstein_roots(vals: &[f64]) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    match *vals {
        [a, b] => {
            // a + (b - a) t
            let root = a / (a - b);
            if root.is_finite() && (0.0..=1.0).contains(&root) {
                result.push(root);
            }
        }
        [a, b, c] => {
            for root in solve_quadratic(a, 2.0 * (b - a), a - 2.0 * b + c) {
                if (0.0..=1.0).contains(&root) {
                    result.push(root);
                }
            }
        }
        _ => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrayvec::ArrayVec;

    fn verify<const N: usize>(mut roots: ArrayVec<f64, N>, expected: &[f64]) {
        assert_eq!(expected.len(), roots.len());
        let epsilon = 1e-12;
        roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for i in 0..expected.len() {
            assert!((roots[i] - expected[i]).abs() < epsilon);
        }
    }

    #[test]
    fn test_solve_quadratic() {
        verify(
            solve_quadratic(-5.0, 0.0, 1.0),
            &[-(5.0f64.sqrt()), 5.0f64.sqrt()],
        );
        verify(solve_quadratic(5.0, 0.0, 1.0), &[]);
        verify(solve_quadratic(5.0, 1.0, 0.0), &[-5.0]);
        verify(solve_quadratic(1.0, 2.0, 1.0), &[-1.0]);
    }

    #[test]
    fn bernstein_linear() {
        // 1 - 2t crosses zero at t = 0.5
        verify(bernstein_roots(&[1.0, -1.0]), &[0.5]);
        // strictly positive, no crossing
        verify(bernstein_roots(&[1.0, 2.0]), &[]);
        // root outside [0, 1]
        verify(bernstein_roots(&[1.0, 0.5]), &[]);
    }

    #[test]
    fn bernstein_quadratic() {
        // symmetric hat: double root at the midpoint
        verify(bernstein_roots(&[1.0, -1.0, 1.0]), &[0.5]);
        // (3t - 1)(t - 1) in power basis
        verify(bernstein_roots(&[1.0, -1.0, 0.0]), &[1.0 / 3.0, 1.0]);
        verify(bernstein_roots(&[1.0, 1.0, 1.0]), &[]);
        // endpoint root
        verify(bernstein_roots(&[0.0, 1.0, 2.0]), &[0.0]);
    }

    #[test]
    fn bernstein_degenerate() {
        verify(bernstein_roots(&[0.0, 0.0]), &[]);
        verify(bernstein_roots(&[0.0, 0.0, 0.0]), &[]);
        verify(bernstein_roots(&[7.0]), &[]);
        verify(bernstein_roots(&[]), &[]);
    }
}
