//! Aggregate and quantifier terminal operations.
//!
//! Numeric requirements are expressed as trait bounds (`Sum`, [`ToF64`],
//! `Ord`), so asking for a sum or an average of a non-numeric element type
//! is a compile error rather than a runtime failure.

use std::iter::Sum;

use crate::error::{Result, SequinError};
use crate::stage::Stage;

/// Conversion into `f64` for mean computation.
///
/// `average` works in floating point regardless of the input numeric type,
/// so integer sequences do not lose precision to integer division.
pub trait ToF64 {
    /// Returns this value as an `f64`.
    fn to_f64(&self) -> f64;
}

impl ToF64 for i8 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for i16 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for i32 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for i64 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for isize {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for u8 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for u16 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for u32 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for u64 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for usize {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for f32 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl ToF64 for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }
}

impl<T: 'static> Stage<T> {
    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Counts the surviving elements.
    pub fn count(&self) -> usize {
        self.run().len()
    }

    /// Counts the elements satisfying `predicate`.
    pub fn count_where(&self, predicate: impl Fn(&T) -> bool + 'static) -> usize {
        self.clone().where_(predicate).count()
    }

    /// Sums the surviving elements. Zero (the empty sum) for an empty
    /// result.
    pub fn sum(&self) -> T
    where
        T: Sum<T>,
    {
        self.run().into_iter().sum()
    }

    /// Sums a derived key over the surviving elements.
    pub fn sum_by<K, F>(&self, selector: F) -> K
    where
        K: Sum<K>,
        F: Fn(&T) -> K,
    {
        self.run().iter().map(selector).sum()
    }

    /// Returns the arithmetic mean of the surviving elements, or `0.0` for
    /// an empty result.
    pub fn average(&self) -> f64
    where
        T: ToF64,
    {
        let items = self.run();
        if items.is_empty() {
            return 0.0;
        }
        let total: f64 = items.iter().map(ToF64::to_f64).sum();
        total / items.len() as f64
    }

    /// Returns the arithmetic mean of a derived key, or `0.0` for an empty
    /// result.
    pub fn average_by<K, F>(&self, selector: F) -> f64
    where
        K: ToF64,
        F: Fn(&T) -> K,
    {
        let items = self.run();
        if items.is_empty() {
            return 0.0;
        }
        let total: f64 = items.iter().map(|item| selector(item).to_f64()).sum();
        total / items.len() as f64
    }

    /// Returns the largest surviving element.
    ///
    /// Fails with [`SequinError::EmptySequence`] on an empty result.
    pub fn max(&self) -> Result<T>
    where
        T: Ord,
    {
        self.run()
            .into_iter()
            .max()
            .ok_or(SequinError::EmptySequence)
    }

    /// Returns the smallest surviving element.
    ///
    /// Fails with [`SequinError::EmptySequence`] on an empty result.
    pub fn min(&self) -> Result<T>
    where
        T: Ord,
    {
        self.run()
            .into_iter()
            .min()
            .ok_or(SequinError::EmptySequence)
    }

    // ========================================================================
    // Quantifiers
    // ========================================================================

    /// Returns `true` if the pipeline yields at least one element.
    pub fn any(&self) -> bool {
        !self.run().is_empty()
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    pub fn any_where(&self, predicate: impl Fn(&T) -> bool + 'static) -> bool {
        self.clone().where_(predicate).any()
    }

    /// Returns `true` if every surviving element satisfies `predicate`.
    /// Vacuously true on an empty result.
    pub fn all(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.run().iter().all(predicate)
    }
}
