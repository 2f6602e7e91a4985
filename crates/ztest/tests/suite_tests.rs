//! Suite registration, execution and report tests
//!
//! Covers:
//! - Exact report bytes
//! - Registration order equals execution order
//! - Failure isolation for check failures
//! - Non-isolation of panics
//! - Count properties over arbitrary pass/fail mixes

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use ztest::{
    z_expect_double_eq, z_expect_eq, z_expect_str_eq, z_expect_true, z_suite, CheckFailure,
    CheckResult, Config, Reporter, RunReport, Suite, SuiteError,
};

fn rule() -> String {
    "-".repeat(76)
}

fn run_plain<S>(suite: &mut Suite<S>) -> (RunReport, String) {
    let mut out = Vec::new();
    let report = suite.run_all_to(&mut out).unwrap();
    (report, String::from_utf8(out).unwrap())
}

// ============================================================================
// Report output
// ============================================================================

#[test]
fn test_report_output_exact() {
    let mut suite = Suite::new("Arith").with_config(Config::plain());
    suite
        .add("addition", |_| {
            z_expect_eq!(2 + 3, 5);
            Ok(())
        })
        .unwrap()
        .add("wrong_sum", |_| {
            z_expect_eq!(2 + 2, 5);
            Ok(())
        })
        .unwrap()
        .add("halves", |_| {
            z_expect_double_eq!(1.0 / 2.0, 0.5);
            Ok(())
        })
        .unwrap();

    let (report, output) = run_plain(&mut suite);

    assert_eq!(report, RunReport::new(3, 2));
    assert_eq!(
        output,
        format!(
            "\n{}\n\
             Begin running test cases of Arith:\n\
             [0] Running test case: addition \t [Passed]\n\
             [1] Running test case: wrong_sum \t [Check failed] 2 + 2 == 5\n\
             [2] Running test case: halves \t [Passed]\n\
             Tatal 3 cases, passed 2\n",
            rule()
        )
    );
}

#[test]
fn test_empty_suite_output() {
    let mut suite = Suite::new("Nothing").with_config(Config::plain());
    let (report, output) = run_plain(&mut suite);

    assert_eq!(report.total(), 0);
    assert_eq!(report.passed(), 0);
    assert_eq!(
        output,
        format!(
            "\n{}\nBegin running test cases of Nothing:\nTatal 0 cases, passed 0\n",
            rule()
        )
    );
}

#[test]
fn test_shared_reporter_concatenates_suites() {
    let mut first = Suite::new("First").with_config(Config::plain());
    first.add("one", |_| Ok(())).unwrap();
    let mut second = Suite::new("Second").with_config(Config::plain());
    second
        .add("two", |_| Err(CheckFailure::new("flag")))
        .unwrap();

    let mut reporter = Reporter::new(Vec::new()).with_no_color(true);
    let a = first.run_with(&mut reporter).unwrap();
    let b = second.run_with(&mut reporter).unwrap();
    let output = String::from_utf8(reporter.into_inner()).unwrap();

    assert!(a.all_passed());
    assert_eq!(b.failed(), 1);
    assert_eq!(output.matches("Begin running test cases of").count(), 2);
    assert!(output.contains("[0] Running test case: two \t [Check failed] flag\n"));
}

// ============================================================================
// Ordering and isolation
// ============================================================================

#[test]
fn test_registration_order_is_execution_order() {
    let mut suite = Suite::with_state("Order", Vec::new()).with_config(Config::plain());
    for name in ["A", "B", "C"] {
        suite
            .add(name, move |log: &mut Vec<&'static str>| {
                log.push(name);
                Ok(())
            })
            .unwrap();
    }

    let (_, output) = run_plain(&mut suite);

    assert_eq!(suite.state(), &["A", "B", "C"]);
    let a = output.find("test case: A").unwrap();
    let b = output.find("test case: B").unwrap();
    let c = output.find("test case: C").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_check_failure_does_not_stop_the_run() {
    let mut suite = Suite::with_state("Isolation", 0usize).with_config(Config::plain());
    suite
        .add("fails_first", |attempts: &mut usize| {
            *attempts += 1;
            z_expect_true!(*attempts > 10);
            Ok(())
        })
        .unwrap()
        .add("fails_second", |attempts: &mut usize| {
            *attempts += 1;
            z_expect_str_eq!("left", "right");
            Ok(())
        })
        .unwrap()
        .add("passes", |attempts: &mut usize| {
            *attempts += 1;
            Ok(())
        })
        .unwrap();

    let (report, output) = run_plain(&mut suite);

    assert_eq!(*suite.state(), 3);
    assert_eq!(report, RunReport::new(3, 1));
    assert!(output.contains("[Check failed] *attempts > 10"));
    assert!(output.contains("[Check failed] cstreq: \"left\", \"right\""));
}

#[test]
fn test_panic_aborts_remaining_cases() {
    let mut suite = Suite::with_state("Panicky", Vec::new()).with_config(Config::plain());
    suite
        .add("before", |log: &mut Vec<&'static str>| {
            log.push("before");
            Ok(())
        })
        .unwrap()
        .add("explodes", |log: &mut Vec<&'static str>| {
            log.push("explodes");
            panic!("not a check failure");
        })
        .unwrap()
        .add("after", |log: &mut Vec<&'static str>| {
            log.push("after");
            Ok(())
        })
        .unwrap();

    let mut out = Vec::new();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| suite.run_all_to(&mut out)));

    assert!(outcome.is_err());
    assert_eq!(suite.state(), &["before", "explodes"]);

    let output = String::from_utf8(out).unwrap();
    assert!(output.ends_with("[1] Running test case: explodes \t"));
    assert!(!output.contains("Tatal"));
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut suite = Suite::new("Dups");
    suite.add("twice", |_| Ok(())).unwrap();

    match suite.add("twice", |_| Ok(())) {
        Err(SuiteError::DuplicateCase { suite, case }) => {
            assert_eq!(suite, "Dups");
            assert_eq!(case, "twice");
        }
        other => panic!("expected duplicate error, got {:?}", other.map(|_| ())),
    }
    assert_eq!(suite.len(), 1);
}

// ============================================================================
// Declarative suites
// ============================================================================

mod cases {
    use super::*;

    pub fn lengths(_: &mut ()) -> CheckResult {
        z_expect_eq!("four".len(), 4);
        Ok(())
    }

    pub fn broken(_: &mut ()) -> CheckResult {
        z_expect_eq!("four".len(), 5);
        Ok(())
    }

    pub fn bump(counter: &mut u32) -> CheckResult {
        *counter += 1;
        Ok(())
    }
}

#[test]
fn test_z_suite_names_cases_after_functions() {
    let mut suite = z_suite!(Strings; cases::lengths, cases::broken)
        .unwrap()
        .with_config(Config::plain());

    assert_eq!(suite.name(), "Strings");
    assert_eq!(suite.case_names().collect::<Vec<_>>(), ["lengths", "broken"]);

    let (report, output) = run_plain(&mut suite);
    assert_eq!(report, RunReport::new(2, 1));
    assert!(output.contains("[1] Running test case: broken \t [Check failed] \"four\".len() == 5"));
}

#[test]
fn test_z_suite_with_state() {
    let mut suite = z_suite!(Counting with 0u32; cases::bump)
        .unwrap()
        .with_config(Config::plain());

    run_plain(&mut suite);
    run_plain(&mut suite);
    assert_eq!(suite.into_state(), 2);
}

#[test]
fn test_z_suite_rejects_duplicates() {
    let result = z_suite!(Twice; cases::lengths, cases::lengths);
    assert!(matches!(result, Err(SuiteError::DuplicateCase { .. })));
}

// ============================================================================
// Count properties
// ============================================================================

proptest! {
    #[test]
    fn prop_counts_match_outcomes(outcomes in proptest::collection::vec(any::<bool>(), 0..40)) {
        let mut suite = Suite::with_state("Property", Vec::new()).with_config(Config::plain());
        for (index, passes) in outcomes.iter().copied().enumerate() {
            suite
                .add(format!("case_{}", index), move |seen: &mut Vec<usize>| {
                    seen.push(index);
                    if passes {
                        Ok(())
                    } else {
                        Err(CheckFailure::new(format!("case {} failed", index)))
                    }
                })
                .unwrap();
        }

        let report = suite.run_all_to(Vec::new()).unwrap();
        let expected_passed = outcomes.iter().filter(|p| **p).count();

        prop_assert_eq!(report.total(), outcomes.len());
        prop_assert_eq!(report.passed(), expected_passed);
        prop_assert_eq!(report.failed(), outcomes.len() - expected_passed);
        prop_assert_eq!(suite.state().clone(), (0..outcomes.len()).collect::<Vec<_>>());
    }
}
