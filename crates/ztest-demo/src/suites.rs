//! Bundled demo suites

use crate::bounded_stack::BoundedStack;
use clap::ValueEnum;
use std::io::Write;
use ztest::{
    z_expect_double_eq, z_expect_eq, z_expect_false, z_expect_ge, z_expect_gt, z_expect_le,
    z_expect_lt, z_expect_ne, z_expect_str_eq, z_expect_true, z_suite, CheckResult, Config,
    Reporter, RunReport, SuiteResult,
};

/// Suites the driver knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoSuite {
    /// Order-dependent cases sharing one bounded stack
    Stack,
    /// Relational and floating point checks
    Arith,
    /// Deliberately failing cases, to show failure isolation
    Broken,
}

impl DemoSuite {
    pub const ALL: [DemoSuite; 3] = [DemoSuite::Stack, DemoSuite::Arith, DemoSuite::Broken];

    pub fn name(self) -> &'static str {
        match self {
            DemoSuite::Stack => "Stack",
            DemoSuite::Arith => "Arith",
            DemoSuite::Broken => "Broken",
        }
    }

    /// Build the suite and run it through `reporter`
    pub fn run<W: Write>(self, config: &Config, reporter: &mut Reporter<W>) -> SuiteResult<RunReport> {
        match self {
            DemoSuite::Stack => {
                #[allow(unused_mut)]
                let mut suite = z_suite!(Stack with BoundedStack::new(3);
                    stack::starts_empty,
                    stack::fills_to_capacity,
                    stack::rejects_overflow,
                    stack::drains_in_lifo_order,
                )?;
                #[cfg(any(test, feature = "white-box"))]
                suite.add("remembers_high_water", stack::remembers_high_water)?;
                suite.with_config(config.clone()).run_with(reporter)
            }
            DemoSuite::Arith => z_suite!(Arith;
                arith::integer_relations,
                arith::float_tolerance,
                arith::string_contents,
            )?
            .with_config(config.clone())
            .run_with(reporter),
            DemoSuite::Broken => z_suite!(Broken;
                broken::off_by_one,
                broken::still_runs,
                broken::too_precise,
            )?
            .with_config(config.clone())
            .run_with(reporter),
        }
    }
}

mod stack {
    use super::*;

    type Stack = BoundedStack<i32>;

    pub fn starts_empty(stack: &mut Stack) -> CheckResult {
        z_expect_true!(stack.is_empty());
        z_expect_eq!(stack.peek(), None);
        Ok(())
    }

    pub fn fills_to_capacity(stack: &mut Stack) -> CheckResult {
        for n in 1..=3 {
            z_expect_true!(stack.push(n * 10).is_ok());
        }
        z_expect_eq!(stack.len(), 3);
        z_expect_true!(stack.is_full());
        Ok(())
    }

    pub fn rejects_overflow(stack: &mut Stack) -> CheckResult {
        let rejected = stack.push(40).err().map(|full| full.0);
        z_expect_eq!(rejected, Some(40));
        z_expect_eq!(stack.len(), 3);
        Ok(())
    }

    pub fn drains_in_lifo_order(stack: &mut Stack) -> CheckResult {
        z_expect_eq!(stack.pop(), Some(30));
        z_expect_eq!(stack.pop(), Some(20));
        z_expect_eq!(stack.pop(), Some(10));
        z_expect_eq!(stack.pop(), None);
        Ok(())
    }

    #[cfg(any(test, feature = "white-box"))]
    pub fn remembers_high_water(stack: &mut Stack) -> CheckResult {
        let internals = ztest::inspect(&*stack);
        z_expect_true!(internals.items.is_empty());
        z_expect_eq!(internals.capacity, 3);
        z_expect_eq!(internals.high_water, 3);
        Ok(())
    }
}

mod arith {
    use super::*;

    pub fn integer_relations(_: &mut ()) -> CheckResult {
        let answer = 6 * 7;
        z_expect_eq!(answer, 42);
        z_expect_ne!(answer, 24);
        z_expect_ge!(answer, 42);
        z_expect_le!(answer, 42);
        z_expect_gt!(answer, 41);
        z_expect_lt!(answer, 43);
        Ok(())
    }

    pub fn float_tolerance(_: &mut ()) -> CheckResult {
        z_expect_double_eq!(0.1 + 0.2, 0.3);
        z_expect_double_eq!(1.0, 1.0005);
        z_expect_false!((1.0_f64 - 1.002).abs() <= ztest::DOUBLE_TOLERANCE);
        Ok(())
    }

    pub fn string_contents(_: &mut ()) -> CheckResult {
        let greeting = format!("{}, {}", "hello", "world");
        z_expect_str_eq!(greeting, "hello, world");
        Ok(())
    }
}

mod broken {
    use super::*;

    pub fn off_by_one(_: &mut ()) -> CheckResult {
        let items = [1, 2, 3];
        z_expect_eq!(items.len(), 4);
        Ok(())
    }

    pub fn still_runs(_: &mut ()) -> CheckResult {
        z_expect_lt!(1, 2);
        Ok(())
    }

    pub fn too_precise(_: &mut ()) -> CheckResult {
        z_expect_double_eq!(1.0, 1.002);
        Ok(())
    }
}
