use crate::WfError;

/// Floating point type used throughout the system
pub type Real = f64;

/// One tolerance pair for everything iterative
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WfError::NonFinite { what, value: v })
    }
}

/// Uniformly spaced points from `start` to `end` inclusive.
///
/// Used for the fixed radial grids of the closed-form pressure profiles.
/// The final point is pinned to `end` exactly.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n <= 1 {
        return vec![start];
    }

    let delta = (end - start) / (n - 1) as Real;
    let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
    points[n - 1] = end;
    points
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_is_ordered_and_pinned(
            start in -1.0e3_f64..1.0e3,
            span in 1.0e-3_f64..1.0e6,
            n in 2_usize..500,
        ) {
            let end = start + span;
            let pts = linspace(start, end, n);
            prop_assert_eq!(pts.len(), n);
            prop_assert_eq!(pts[0], start);
            prop_assert_eq!(pts[n - 1], end);
            prop_assert!(pts.windows(2).all(|w| w[1] > w[0]));
        }
    }
}
