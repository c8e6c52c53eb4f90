use std::cell::Cell;

use num_traits::Float;
use tracing::{debug, trace};

use crate::quadrature::{constant, count, Quadrature};
use crate::utils::error::Result;
use crate::utils::validation::{check_finite_limits, check_intervals};

pub const DEFAULT_TOLERANCE: f64 = 1e-2;
pub const DEFAULT_ABS_TOLERANCE: f64 = 1e-12;
pub const DEFAULT_MAX_DEPTH: usize = 20;
pub const DEFAULT_INTERVALS: usize = 2;

/// Value plus bookkeeping from an adaptive run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveEstimate<T> {
    pub value: T,
    /// Number of times the underlying rule was invoked
    pub rule_calls: usize,
    /// Deepest recursion level visited
    pub max_depth_reached: usize,
}

/// Adaptive refinement driven by any fixed rule
///
/// The interval is split into `intervals` pieces, each integrated with the
/// wrapped rule, and any piece whose estimate disagrees with the coarser one
/// by more than `tolerance` (relative) is refined recursively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveQuadrature<Q> {
    rule: Q,
    tolerance: f64,
    abs_tolerance: f64,
    max_depth: usize,
    intervals: usize,
}

impl<Q: Default> Default for AdaptiveQuadrature<Q> {
    fn default() -> Self {
        Self::new(Q::default())
    }
}

impl<Q> AdaptiveQuadrature<Q> {
    pub const fn new(rule: Q) -> Self {
        Self {
            rule,
            tolerance: DEFAULT_TOLERANCE,
            abs_tolerance: DEFAULT_ABS_TOLERANCE,
            max_depth: DEFAULT_MAX_DEPTH,
            intervals: DEFAULT_INTERVALS,
        }
    }

    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Changes at or below this size always count as converged
    #[must_use]
    pub const fn with_abs_tolerance(mut self, abs_tolerance: f64) -> Self {
        self.abs_tolerance = abs_tolerance;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_intervals(mut self, intervals: usize) -> Self {
        self.intervals = intervals;
        self
    }

    pub const fn rule(&self) -> &Q {
        &self.rule
    }

    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub const fn intervals(&self) -> usize {
        self.intervals
    }
}

/// Per call state threaded through the recursion
struct Run<'a, Q, F> {
    rule: &'a Q,
    f: F,
    calls: Cell<usize>,
    deepest: Cell<usize>,
}

impl<Q> AdaptiveQuadrature<Q> {
    /// Integrate `f` over `[a, b]` using the configured interval count
    pub fn integrate<T, F>(&self, f: F, a: T, b: T) -> Result<T>
    where
        T: Float,
        Q: Quadrature<T>,
        F: Fn(T) -> T,
    {
        Ok(self.integrate_with_stats(f, a, b)?.value)
    }

    pub fn integrate_with_stats<T, F>(&self, f: F, a: T, b: T) -> Result<AdaptiveEstimate<T>>
    where
        T: Float,
        Q: Quadrature<T>,
        F: Fn(T) -> T,
    {
        check_intervals(self.intervals, 1)?;
        check_finite_limits(a, b)?;

        let run = Run {
            rule: &self.rule,
            f,
            calls: Cell::new(0),
            deepest: Cell::new(0),
        };

        let estimate = run.estimate(a, b, self.intervals)?;
        let value = self.refine(&run, a, b, estimate, 0)?;

        debug!(
            rule_calls = run.calls.get(),
            depth = run.deepest.get(),
            "adaptive integration finished"
        );
        Ok(AdaptiveEstimate {
            value,
            rule_calls: run.calls.get(),
            max_depth_reached: run.deepest.get(),
        })
    }

    fn refine<T, F>(&self, run: &Run<'_, Q, F>, a: T, b: T, estimate: T, depth: usize) -> Result<T>
    where
        T: Float,
        Q: Quadrature<T>,
        F: Fn(T) -> T,
    {
        run.deepest.set(run.deepest.get().max(depth));
        if depth > self.max_depth {
            return Ok(estimate);
        }

        let n = self.intervals;
        let dx = (b - a) / count(n);
        let mut pieces = Vec::with_capacity(n);
        for i in 0..n {
            let left = a + count::<T>(i) * dx;
            let right = if i + 1 == n { b } else { left + dx };
            pieces.push((left, right, run.estimate(left, right, n)?));
        }

        let sum = pieces.iter().fold(T::zero(), |sum, &(_, _, piece)| sum + piece);
        if self.converged(sum, estimate) {
            return Ok(sum);
        }

        trace!(depth, "refining adaptive sub-intervals");
        pieces
            .into_iter()
            .try_fold(T::zero(), |total, (left, right, piece)| {
                Ok(total + self.refine(run, left, right, piece, depth + 1)?)
            })
    }

    fn converged<T: Float>(&self, refined: T, estimate: T) -> bool {
        let change = (refined - estimate).abs();
        if change <= constant(self.abs_tolerance) {
            return true;
        }
        // relative test; a zero denominator only passes the absolute test above
        let scale = (refined + estimate).abs();
        change + change <= constant::<T>(self.tolerance) * scale
    }
}

impl<Q, F> Run<'_, Q, F> {
    fn estimate<T>(&self, a: T, b: T, n: usize) -> Result<T>
    where
        T: Float,
        Q: Quadrature<T>,
        F: Fn(T) -> T,
    {
        self.calls.set(self.calls.get() + 1);
        self.rule.integrate(&self.f, a, b, n)
    }
}
