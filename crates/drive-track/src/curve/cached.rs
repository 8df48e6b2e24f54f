//! Memoizing wrapper for expensive curves.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use drive_math::Point3;

use super::Curve;

#[derive(Debug, Default)]
struct CacheState {
    entries: VecDeque<(i64, Point3)>,
    hits: u64,
    misses: u64,
}

/// Wraps a curve with a small ring of recently evaluated points.
///
/// Parameters are quantized to multiples of `step` before lookup, so two
/// parameters closer than `step / 2` share an entry. When the ring is full
/// the oldest entry is evicted. Parameters that cannot be quantized (non-finite,
/// or too large for the key range) go straight to the wrapped curve.
#[derive(Debug)]
pub struct CachedCurve<C> {
    inner: C,
    step: f64,
    capacity: usize,
    state: Mutex<CacheState>,
}

impl<C: Curve> CachedCurve<C> {
    pub const DEFAULT_CAPACITY: usize = 10;
    pub const DEFAULT_STEP: f64 = 1e-9;

    pub fn new(inner: C) -> Self {
        Self::with_capacity(inner, Self::DEFAULT_CAPACITY, Self::DEFAULT_STEP)
    }

    pub fn with_capacity(inner: C, capacity: usize, step: f64) -> Self {
        Self {
            inner,
            step,
            capacity: capacity.max(1),
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// `(hits, misses)` since construction.
    pub fn stats(&self) -> (u64, u64) {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        (state.hits, state.misses)
    }

    fn key(&self, t: f64) -> Option<i64> {
        let q = (t / self.step).round();
        // i64::MAX is not representable; stay strictly inside the range
        if q.is_finite() && q.abs() < i64::MAX as f64 {
            Some(q as i64)
        } else {
            None
        }
    }
}

impl<C: Curve> Curve for CachedCurve<C> {
    fn point_at(&self, t: f64) -> Point3 {
        let Some(key) = self.key(t) else {
            return self.inner.point_at(t);
        };
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(&(_, p)) = state.entries.iter().rev().find(|(k, _)| *k == key) {
            state.hits += 1;
            return p;
        }
        state.misses += 1;
        let p = self.inner.point_at(t);
        if state.entries.len() == self.capacity {
            state.entries.pop_front();
        }
        state.entries.push_back((key, p));
        p
    }

    fn domain(&self) -> (f64, f64) {
        self.inner.domain()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}
