//! Sequin - deferred, chainable query pipelines over in-memory collections.
//!
//! Sequin lets you describe a query as a chain of stages — filter, sort,
//! partition, project — without running any of it, then materialize the
//! result with a terminal operation. It supports:
//!
//! - Predicate filtering with short-circuiting AND across chained `where_`
//! - Multi-key sorting with ascending/descending directions and stable
//!   tie-breaks (`order_by` / `then_by`)
//! - Partitioning with `skip` and `take`
//! - Type-changing projection (`select`, one-to-one) and flattening
//!   (`select_many`, one-to-many)
//! - Element, aggregate, quantifier and conversion terminals
//!
//! # Quick Start
//!
//! ```rust
//! use sequin::from;
//!
//! #[derive(Clone)]
//! struct Player {
//!     name: String,
//!     team: String,
//!     score: i32,
//! }
//!
//! let player = |name: &str, team: &str, score| Player {
//!     name: name.into(),
//!     team: team.into(),
//!     score,
//! };
//!
//! let players = vec![
//!     player("Alice", "Eagles", 50),
//!     player("David", "Bears", 90),
//!     player("Bob", "Eagles", 80),
//!     player("Eve", "Bears", 80),
//! ];
//!
//! // Nothing runs until the terminal call.
//! let standings = from(players)
//!     .where_(|p| p.score >= 60)
//!     .order_asc(|p| p.team.clone())
//!     .then_desc(|p| p.score)
//!     .select(|p| p.name.clone())
//!     .to_vec();
//!
//! assert_eq!(standings, vec!["David", "Eve", "Bob"]);
//! ```
//!
//! # Execution Model
//!
//! A [`Stage`] is an immutable value. Chain methods consume it and return a
//! new stage; [`Stage::clone`] is cheap and forks a pipeline, so one stage
//! can root several independent queries. Terminal operations take `&self`
//! and replay the whole chain from the original source on every call —
//! nothing is cached between calls, and predicate-taking terminals such as
//! [`Stage::first_where`] narrow a disposable copy rather than the
//! receiver.
//!
//! Within a single stage node the layers apply in a fixed order:
//!
//! ```text
//! filter -> stable sort -> skip -> take
//! ```
//!
//! independent of builder call order. [`Stage::select`] and
//! [`Stage::select_many`] are the only operations that change the element
//! type; each starts a fresh node over the previous one, so layers added
//! afterwards see the projected sequence.
//!
//! # Errors
//!
//! Building a chain never fails. Terminals that require elements report
//! [`SequinError::EmptySequence`], the `single` family reports
//! [`SequinError::NotExactlyOne`], and map conversion reports
//! [`SequinError::DuplicateKey`] on a key collision. Numeric requirements
//! (`sum`, `average`, `max`/`min`) are trait bounds, enforced at compile
//! time.

mod aggregate;
mod convert;
mod element;
mod error;
mod ordering;
mod stage;

// Re-export public API
pub use aggregate::ToF64;
pub use error::{Result, SequinError};
pub use ordering::Dir;
pub use stage::{from, Stage};
