//! ztest - a lightweight suite-based unit testing framework
//!
//! A suite owns an ordered list of test cases. Cases are registered
//! explicitly, run strictly in registration order, and report a single
//! kind of failure: a [`CheckFailure`] raised by one of the check macros.
//!
//! # Layout
//!
//! - [`check`] - assertion primitives and the `z_expect_*` macros
//! - [`suite`] - the registry and sequential runner
//! - [`reporter`] - the textual progress protocol written to stderr
//! - [`access`] - opt-in white-box access to a unit's private state
//! - [`config`] - environment-driven settings
//!
//! # Example
//!
//! ```no_run
//! use ztest::{z_expect_eq, z_expect_true, CheckResult, Suite};
//!
//! fn addition(_: &mut ()) -> CheckResult {
//!     z_expect_eq!(2 + 2, 4);
//!     Ok(())
//! }
//!
//! fn truthiness(_: &mut ()) -> CheckResult {
//!     z_expect_true!("ztest".starts_with('z'));
//!     Ok(())
//! }
//!
//! let mut suite = Suite::new("Arith");
//! suite.add("addition", addition).unwrap();
//! suite.add("truthiness", truthiness).unwrap();
//! let report = suite.run_all().unwrap();
//! assert!(report.all_passed());
//! ```

#[macro_use]
mod macros;

pub mod access;
pub mod check;
pub mod config;
pub mod error;
pub mod reporter;
pub mod suite;

pub use access::{inspect, WhiteBox};
pub use check::{CheckFailure, CheckResult, Relation, DOUBLE_TOLERANCE};
pub use config::Config;
pub use error::{SuiteError, SuiteResult};
pub use reporter::Reporter;
pub use suite::{RunReport, Suite, TestCase};
