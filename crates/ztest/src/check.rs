//! Check primitives - the assertions used inside test case bodies
//!
//! Every check returns a [`CheckResult`]. A failed check yields a
//! [`CheckFailure`] carrying the source text of the condition, which the
//! case body propagates with `?` up to the suite runner.
//!
//! The `z_expect_*` macros capture that source text with `stringify!` and
//! apply the `?` themselves, so a case body reads as a flat list of
//! checks.
//!
//! # API
//!
//! ## Boolean
//! - `expect_true(condition, text)` - condition holds
//! - `expect_false(condition, text)` - condition does not hold
//!
//! ## Relational
//! - `expect_eq(left, right, ..)` / `expect_ne(left, right, ..)`
//! - `expect_ordered(relation, left, right, ..)` for `>=`, `<=`, `>`, `<`
//!
//! ## Approximate and textual
//! - `expect_double_eq(left, right, ..)` - within [`DOUBLE_TOLERANCE`]
//! - `expect_str_eq(left, right, ..)` - ordinal string equality

use std::fmt;

/// Largest absolute difference accepted by [`expect_double_eq`].
pub const DOUBLE_TOLERANCE: f64 = 0.001;

/// Outcome of a single check, and of a whole test case body.
pub type CheckResult = Result<(), CheckFailure>;

/// The failure signal raised by a check whose condition does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    text: String,
}

impl CheckFailure {
    /// Create a failure describing the condition that did not hold
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The failed condition as written in the source
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Check failed] {}", self.text)
    }
}

impl std::error::Error for CheckFailure {}

/// Binary relation checked by the relational checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
}

impl Relation {
    /// Operator token used in failure messages
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Eq => "==",
            Relation::Ne => "!=",
            Relation::Ge => ">=",
            Relation::Le => "<=",
            Relation::Gt => ">",
            Relation::Lt => "<",
        }
    }

    /// Whether `left <op> right` holds
    pub fn holds<L, R>(self, left: &L, right: &R) -> bool
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        match self {
            Relation::Eq => left == right,
            Relation::Ne => left != right,
            Relation::Ge => left >= right,
            Relation::Le => left <= right,
            Relation::Gt => left > right,
            Relation::Lt => left < right,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Internal helpers
// ============================================================================

fn binary_text(left_text: &str, relation: Relation, right_text: &str) -> String {
    format!("{} {} {}", left_text, relation.symbol(), right_text)
}

fn verdict(holds: bool, text: impl FnOnce() -> String) -> CheckResult {
    if holds {
        Ok(())
    } else {
        Err(CheckFailure::new(text()))
    }
}

// ============================================================================
// Boolean checks
// ============================================================================

/// Fails with `text` when `condition` is false.
pub fn expect_true(condition: bool, text: &str) -> CheckResult {
    verdict(condition, || text.to_string())
}

/// Fails with `!(text)` when `condition` is true.
pub fn expect_false(condition: bool, text: &str) -> CheckResult {
    verdict(!condition, || format!("!({})", text))
}

// ============================================================================
// Relational checks
// ============================================================================

/// Fails when `left == right` does not hold.
///
/// Only needs `PartialEq`, so it accepts values with no ordering.
pub fn expect_eq<L, R>(left: &L, right: &R, left_text: &str, right_text: &str) -> CheckResult
where
    L: PartialEq<R> + ?Sized,
    R: ?Sized,
{
    verdict(left == right, || {
        binary_text(left_text, Relation::Eq, right_text)
    })
}

/// Fails when `left != right` does not hold.
pub fn expect_ne<L, R>(left: &L, right: &R, left_text: &str, right_text: &str) -> CheckResult
where
    L: PartialEq<R> + ?Sized,
    R: ?Sized,
{
    verdict(left != right, || {
        binary_text(left_text, Relation::Ne, right_text)
    })
}

/// Fails when `left <relation> right` does not hold.
pub fn expect_ordered<L, R>(
    relation: Relation,
    left: &L,
    right: &R,
    left_text: &str,
    right_text: &str,
) -> CheckResult
where
    L: PartialOrd<R> + ?Sized,
    R: ?Sized,
{
    verdict(relation.holds(left, right), || {
        binary_text(left_text, relation, right_text)
    })
}

// ============================================================================
// Approximate and textual checks
// ============================================================================

/// Fails when `left` lies outside `right ± DOUBLE_TOLERANCE`.
///
/// Any operand convertible to `f64` is accepted. Equal infinities pass.
/// A NaN operand is never outside the band, so it passes too.
pub fn expect_double_eq(
    left: impl Into<f64>,
    right: impl Into<f64>,
    left_text: &str,
    right_text: &str,
) -> CheckResult {
    let (left, right) = (left.into(), right.into());
    let outside = left < right - DOUBLE_TOLERANCE || left > right + DOUBLE_TOLERANCE;
    verdict(!outside, || binary_text(left_text, Relation::Eq, right_text))
}

/// Fails when the two strings differ in content.
pub fn expect_str_eq<L, R>(left: L, right: R, left_text: &str, right_text: &str) -> CheckResult
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    verdict(left.as_ref() == right.as_ref(), || {
        format!("cstreq: {}, {}", left_text, right_text)
    })
}
