//! Element terminal operations: first, last, single.
//!
//! All of these force evaluation and replay the chain from the source. The
//! predicate-taking variants narrow a disposable clone of the stage, so the
//! receiver is never changed by calling them.

use crate::error::{Result, SequinError};
use crate::stage::Stage;

impl<T: 'static> Stage<T> {
    /// Returns the first surviving element.
    ///
    /// Fails with [`SequinError::EmptySequence`] when the pipeline yields
    /// nothing.
    pub fn first(&self) -> Result<T> {
        self.run()
            .into_iter()
            .next()
            .ok_or(SequinError::EmptySequence)
    }

    /// Returns the first element satisfying `predicate`.
    pub fn first_where(&self, predicate: impl Fn(&T) -> bool + 'static) -> Result<T> {
        self.clone().where_(predicate).first()
    }

    /// Returns the first surviving element, or `None` when there is none.
    pub fn first_or_default(&self) -> Option<T> {
        self.run().into_iter().next()
    }

    /// Returns the first element satisfying `predicate`, or `None`.
    pub fn first_or_default_where(&self, predicate: impl Fn(&T) -> bool + 'static) -> Option<T> {
        self.clone().where_(predicate).first_or_default()
    }

    /// Returns the last surviving element.
    ///
    /// Fails with [`SequinError::EmptySequence`] when the pipeline yields
    /// nothing.
    pub fn last(&self) -> Result<T> {
        self.run().pop().ok_or(SequinError::EmptySequence)
    }

    /// Returns the last element satisfying `predicate`.
    pub fn last_where(&self, predicate: impl Fn(&T) -> bool + 'static) -> Result<T> {
        self.clone().where_(predicate).last()
    }

    /// Returns the last surviving element, or `None` when there is none.
    pub fn last_or_default(&self) -> Option<T> {
        self.run().pop()
    }

    /// Returns the last element satisfying `predicate`, or `None`.
    pub fn last_or_default_where(&self, predicate: impl Fn(&T) -> bool + 'static) -> Option<T> {
        self.clone().where_(predicate).last_or_default()
    }

    /// Returns the only surviving element.
    ///
    /// Fails with [`SequinError::NotExactlyOne`] when the pipeline yields
    /// zero elements or more than one; the error reports how many were
    /// found.
    pub fn single(&self) -> Result<T> {
        let mut items = self.run();
        if items.len() == 1 {
            Ok(items.remove(0))
        } else {
            Err(SequinError::NotExactlyOne { found: items.len() })
        }
    }

    /// Returns the only element satisfying `predicate`.
    pub fn single_where(&self, predicate: impl Fn(&T) -> bool + 'static) -> Result<T> {
        self.clone().where_(predicate).single()
    }

    /// Returns the only surviving element, or `None` for an empty result.
    ///
    /// Still fails with [`SequinError::NotExactlyOne`] when more than one
    /// element survives; only the empty case is softened to `Ok(None)`.
    pub fn single_or_default(&self) -> Result<Option<T>> {
        let mut items = self.run();
        match items.len() {
            0 => Ok(None),
            1 => Ok(Some(items.remove(0))),
            found => Err(SequinError::NotExactlyOne { found }),
        }
    }

    /// Returns the only element satisfying `predicate`, or `None` when no
    /// element matches.
    pub fn single_or_default_where(
        &self,
        predicate: impl Fn(&T) -> bool + 'static,
    ) -> Result<Option<T>> {
        self.clone().where_(predicate).single_or_default()
    }
}
