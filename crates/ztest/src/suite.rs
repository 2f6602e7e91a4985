//! Suite registry and runner
//!
//! A [`Suite`] owns an ordered list of [`TestCase`]s and, optionally, a
//! state value every case receives by `&mut`. Cases run strictly in
//! registration order. A [`CheckFailure`] returned by a case is reported
//! and counted, and the run moves on to the next case. A panic inside a
//! case is not a check failure: it unwinds out of [`Suite::run_all`] and
//! no later case runs.

use crate::check::{CheckFailure, CheckResult};
use crate::config::Config;
use crate::error::{SuiteError, SuiteResult};
use crate::reporter::Reporter;
use std::fmt;
use std::io::Write;
use tracing::{debug, trace};

type CaseBody<S> = Box<dyn FnMut(&mut S) -> CheckResult>;

/// A named test case body
pub struct TestCase<S> {
    name: String,
    body: CaseBody<S>,
}

impl<S> TestCase<S> {
    /// Create a test case from a name and a body
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: FnMut(&mut S) -> CheckResult + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// Display name of the case
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the body once against `state`
    pub fn run(&mut self, state: &mut S) -> CheckResult {
        (self.body)(state)
    }
}

impl<S> fmt::Debug for TestCase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Counts produced by one suite run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    total: usize,
    passed: usize,
}

impl RunReport {
    pub fn new(total: usize, passed: usize) -> Self {
        debug_assert!(passed <= total);
        Self { total, passed }
    }

    /// Number of cases run
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of cases that completed without a check failure
    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// An ordered group of test cases run and reported as one unit
pub struct Suite<S = ()> {
    name: String,
    cases: Vec<TestCase<S>>,
    state: S,
    config: Config,
}

impl Suite<()> {
    /// Create an empty stateless suite
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_state(name, ())
    }
}

impl<S> Suite<S> {
    /// Create an empty suite whose cases share `state`
    pub fn with_state(name: impl Into<String>, state: S) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
            state,
            config: Config::from_env(),
        }
    }

    /// Replace the configuration loaded from the environment
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Case names in registration (and execution) order
    pub fn case_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cases.iter().map(TestCase::name)
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Consume the suite and return its state
    pub fn into_state(self) -> S {
        self.state
    }

    /// Register a case at the end of the run order
    ///
    /// Fails with [`SuiteError::DuplicateCase`] if a case with the same
    /// name is already registered; the suite is left unchanged.
    pub fn add<F>(&mut self, name: impl Into<String>, body: F) -> SuiteResult<&mut Self>
    where
        F: FnMut(&mut S) -> CheckResult + 'static,
    {
        let name = name.into();
        if self.cases.iter().any(|case| case.name == name) {
            return Err(SuiteError::duplicate(&self.name, name));
        }
        trace!(suite = %self.name, case = %name, "registered test case");
        self.cases.push(TestCase::new(name, body));
        Ok(self)
    }

    /// Run every case, reporting to standard error
    pub fn run_all(&mut self) -> SuiteResult<RunReport> {
        let mut reporter = Reporter::stderr(&self.config);
        self.run_with(&mut reporter)
    }

    /// Run every case, reporting to `out`
    pub fn run_all_to<W: Write>(&mut self, out: W) -> SuiteResult<RunReport> {
        let mut reporter = Reporter::new(out).with_no_color(self.config.no_color);
        self.run_with(&mut reporter)
    }

    /// Run every case through an existing reporter
    ///
    /// Several suites can share one reporter to produce a single log.
    pub fn run_with<W: Write>(&mut self, reporter: &mut Reporter<W>) -> SuiteResult<RunReport> {
        debug!(suite = %self.name, cases = self.cases.len(), "running suite");
        reporter.suite_started(&self.name)?;

        let mut passed = 0;
        for (index, case) in self.cases.iter_mut().enumerate() {
            reporter.case_started(index, &case.name)?;
            trace!(suite = %self.name, case = %case.name, index, "running test case");

            match case.run(&mut self.state) {
                Ok(()) => {
                    reporter.case_passed()?;
                    passed += 1;
                }
                Err(failure) => {
                    log_failure(&self.name, &case.name, &failure);
                    reporter.case_failed(&failure)?;
                }
            }
        }

        let report = RunReport::new(self.cases.len(), passed);
        reporter.summary(&report)?;
        debug!(
            suite = %self.name,
            total = report.total(),
            passed = report.passed(),
            "suite finished"
        );
        Ok(report)
    }
}

impl<S> fmt::Debug for Suite<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("name", &self.name)
            .field("cases", &self.cases)
            .finish_non_exhaustive()
    }
}

fn log_failure(suite: &str, case: &str, failure: &CheckFailure) {
    debug!(suite, case, failure = failure.text(), "check failed");
}
