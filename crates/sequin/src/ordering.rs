//! Sort direction and comparator composition.
//!
//! A pipeline's sort order is a single composed comparison function:
//! [`by_key`] builds one from a key selector and a [`Dir`], and [`then`]
//! chains a tie-break that only runs when the earlier comparison is equal.

use std::cmp::Ordering;
use std::rc::Rc;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A composed total-order comparison over elements of a stage.
///
/// Shared via `Rc` so cloning a stage shares its comparator.
pub(crate) type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Builds a comparator from a key selector and a direction.
pub(crate) fn by_key<T, K, F>(key: F, dir: Dir) -> Comparator<T>
where
    K: Ord,
    F: Fn(&T) -> K + 'static,
    T: 'static,
{
    Rc::new(move |a, b| dir.apply(key(a).cmp(&key(b))))
}

/// Chains a tie-break onto a primary comparator.
///
/// The tie-break only runs when the primary reports equality, which gives
/// multi-key sorts their primary-then-secondary semantics.
pub(crate) fn then<T: 'static>(primary: Comparator<T>, tie_break: Comparator<T>) -> Comparator<T> {
    Rc::new(move |a, b| primary(a, b).then_with(|| tie_break(a, b)))
}
