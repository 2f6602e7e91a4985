//! White-box access to a unit's private state
//!
//! A unit under test opts in by implementing [`WhiteBox`], usually behind
//! `#[cfg(test)]` or a cargo feature, and returns a view of whatever
//! private fields its tests need to see. Code that does not enable the
//! impl cannot reach those fields.
//!
//! ```
//! use ztest::{inspect, WhiteBox};
//!
//! pub struct Counter {
//!     hits: u32,
//! }
//!
//! pub struct CounterInternals<'a> {
//!     pub hits: &'a u32,
//! }
//!
//! impl WhiteBox for Counter {
//!     type Internals<'a> = CounterInternals<'a>;
//!
//!     fn internals(&self) -> CounterInternals<'_> {
//!         CounterInternals { hits: &self.hits }
//!     }
//! }
//!
//! let counter = Counter { hits: 3 };
//! assert_eq!(*inspect(&counter).hits, 3);
//! ```

/// Read-only view of a unit's private state, granted by the unit itself
pub trait WhiteBox {
    /// The view handed to tests
    type Internals<'a>
    where
        Self: 'a;

    fn internals(&self) -> Self::Internals<'_>;
}

/// Borrow the internals of a unit that opted in to white-box testing
pub fn inspect<T: WhiteBox + ?Sized>(unit: &T) -> T::Internals<'_> {
    unit.internals()
}
