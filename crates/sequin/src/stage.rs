//! The pipeline stage: deferred construction and execution.
//!
//! A [`Stage`] is one immutable node in a query pipeline. Chain operations
//! consume the stage value and return a new one; nothing is evaluated until
//! a terminal operation (first/single, count/sum, to_vec/to_map, ...)
//! forces the chain, and every terminal call replays the chain from the
//! source.

use std::fmt;
use std::rc::Rc;

use crate::ordering::{by_key, then, Comparator, Dir};

/// Starts a pipeline from a sequence.
///
/// The input is collected into a private copy, so later changes to the
/// caller's collection are never observed by the pipeline — each terminal
/// call replays from this copy.
///
/// # Example
///
/// ```
/// use sequin::from;
///
/// let evens = from(vec![5, 1, 4, 1, 3, -2])
///     .where_(|n| n % 2 == 0)
///     .to_vec();
/// assert_eq!(evens, vec![4, -2]);
/// ```
pub fn from<T, I>(source: I) -> Stage<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
{
    let items: Vec<T> = source.into_iter().collect();
    Stage::new(move || items.clone())
}

/// One immutable, composable unit of deferred sequence computation.
///
/// A stage holds a producer for its upstream sequence plus up to one layer
/// of each transformation:
///
/// - a predicate chain (`where_`), evaluated as a short-circuiting AND;
/// - a composite comparator (`order_by` / `then_by`), applied with a
///   stable sort;
/// - partition bounds (`skip` / `take`).
///
/// Within a single stage node these layers always apply in the fixed order
/// **filter → sort → skip → take**, independent of the order the builder
/// methods were called in. The type-changing operations (`select`,
/// `select_many`) start a fresh node whose producer captures this one, so a
/// `where_` after a `select` filters the projected elements.
///
/// Stages have value semantics: every chain method consumes `self` and
/// returns a new stage, and [`Clone`] is cheap (reference-counted
/// internals), so a stage can be forked into several independent pipelines:
///
/// ```
/// use sequin::from;
///
/// let bears = from(vec![("David", 90), ("Eve", 80), ("Alice", 50)])
///     .where_(|p| p.1 >= 60);
///
/// // Two terminals over the same stage; each replays the chain.
/// assert_eq!(bears.count(), 2);
/// assert_eq!(bears.average_by(|p| p.1), 85.0);
/// ```
pub struct Stage<T> {
    producer: Rc<dyn Fn() -> Vec<T>>,
    filters: Vec<Rc<dyn Fn(&T) -> bool>>,
    comparator: Option<Comparator<T>>,
    skip: usize,
    take: Option<usize>,
}

impl<T> Clone for Stage<T> {
    fn clone(&self) -> Self {
        Stage {
            producer: Rc::clone(&self.producer),
            filters: self.filters.clone(),
            comparator: self.comparator.clone(),
            skip: self.skip,
            take: self.take,
        }
    }
}

impl<T> fmt::Debug for Stage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("filters", &self.filters.len())
            .field("sorted", &self.comparator.is_some())
            .field("skip", &self.skip)
            .field("take", &self.take)
            .finish()
    }
}

impl<T: 'static> Stage<T> {
    /// Creates a fresh node over a producer, with no layers applied.
    pub(crate) fn new(producer: impl Fn() -> Vec<T> + 'static) -> Self {
        Stage {
            producer: Rc::new(producer),
            filters: Vec::new(),
            comparator: None,
            skip: 0,
            take: None,
        }
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Appends a predicate to the filter chain.
    ///
    /// An element survives only if every registered predicate accepts it;
    /// predicates run in registration order and stop at the first failure.
    /// Filtering preserves the relative order of surviving elements.
    ///
    /// (The trailing underscore avoids the `where` keyword.)
    pub fn where_(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.filters.push(Rc::new(predicate));
        self
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Sorts by `key` in the given direction, replacing any previous order.
    ///
    /// This establishes a new primary sort key; use [`then_by`](Self::then_by)
    /// to add tie-breaks instead. The key selector returns an owned key
    /// (clone what you extract, e.g. `p.team.clone()`).
    pub fn order_by<K, F>(mut self, key: F, dir: Dir) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.comparator = Some(by_key(key, dir));
        self
    }

    /// Sorts ascending by `key`, replacing any previous order.
    pub fn order_asc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.order_by(key, Dir::Asc)
    }

    /// Sorts descending by `key`, replacing any previous order.
    pub fn order_desc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.order_by(key, Dir::Desc)
    }

    /// Adds a tie-break key to the current order.
    ///
    /// The existing comparator decides first; only when it reports equality
    /// does `key` compare, in the given direction. The sort is stable, so
    /// elements equal under the full composite keep their source order.
    /// With no order established yet this is the same as
    /// [`order_by`](Self::order_by).
    pub fn then_by<K, F>(mut self, key: F, dir: Dir) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        let tie_break = by_key(key, dir);
        self.comparator = Some(match self.comparator.take() {
            Some(primary) => then(primary, tie_break),
            None => tie_break,
        });
        self
    }

    /// Adds an ascending tie-break key to the current order.
    pub fn then_asc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.then_by(key, Dir::Asc)
    }

    /// Adds a descending tie-break key to the current order.
    pub fn then_desc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.then_by(key, Dir::Desc)
    }

    // ========================================================================
    // Partitioning
    // ========================================================================

    /// Drops the first `count` elements, after filtering and sorting.
    ///
    /// Skipping past the end yields an empty sequence. Calling `skip` again
    /// on the same node replaces the earlier count.
    pub fn skip(mut self, count: usize) -> Self {
        self.skip = count;
        self
    }

    /// Keeps at most `count` elements, after filtering, sorting and skip.
    ///
    /// A shorter sequence is left unchanged. Calling `take` again on the
    /// same node replaces the earlier count.
    pub fn take(mut self, count: usize) -> Self {
        self.take = Some(count);
        self
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Maps every element through `selector`, changing the element type.
    ///
    /// Order and count are preserved. The new stage captures this one as
    /// its upstream producer; evaluation still replays the whole chain from
    /// the original source.
    pub fn select<R, F>(self, selector: F) -> Stage<R>
    where
        R: 'static,
        F: Fn(&T) -> R + 'static,
    {
        Stage::new(move || self.run().iter().map(&selector).collect())
    }

    /// Maps every element to a sub-sequence and flattens the results.
    ///
    /// The output is the in-order concatenation of each element's
    /// sub-sequence, so its length is the sum of sub-sequence lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use sequin::from;
    ///
    /// let letters = from(vec!["ab".to_string(), "c".to_string()])
    ///     .select_many(|s| s.chars().collect::<Vec<_>>())
    ///     .to_vec();
    /// assert_eq!(letters, vec!['a', 'b', 'c']);
    /// ```
    pub fn select_many<R, I, F>(self, selector: F) -> Stage<R>
    where
        R: 'static,
        I: IntoIterator<Item = R>,
        F: Fn(&T) -> I + 'static,
    {
        Stage::new(move || self.run().iter().flat_map(&selector).collect())
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Materializes this node: pulls the upstream sequence, then applies
    /// filter, stable sort, skip and take, in that order.
    pub(crate) fn run(&self) -> Vec<T> {
        let mut items = (self.producer)();

        if !self.filters.is_empty() {
            items.retain(|item| self.filters.iter().all(|keep| keep(item)));
        }

        if let Some(compare) = &self.comparator {
            // Vec::sort_by is stable; tie-break semantics depend on it.
            items.sort_by(|a, b| compare(a, b));
        }

        if self.skip > 0 {
            if self.skip >= items.len() {
                items.clear();
            } else {
                items.drain(..self.skip);
            }
        }

        if let Some(limit) = self.take {
            items.truncate(limit);
        }

        items
    }
}
