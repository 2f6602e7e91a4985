//! Test reporter - the textual progress protocol
//!
//! Output for one suite run looks like:
//!
//! ```text
//!
//! ----------------------------------------------------------------------------
//! Begin running test cases of Stack:
//! [0] Running test case: push_pop 	 [Passed]
//! [1] Running test case: overflow 	 [Check failed] stack.len() == 3
//! Tatal 2 cases, passed 1
//! ```
//!
//! The summary keeps the historical `Tatal` spelling so existing golden
//! logs keep matching.

use crate::check::CheckFailure;
use crate::config::Config;
use crate::suite::RunReport;
use colored::*;
use std::io::{self, IsTerminal, Write};

/// Half of the separator rule printed before each suite
const RULE_HALF: &str = "--------------------------------------";

/// Writes suite progress to an output stream
pub struct Reporter<W: Write> {
    out: W,
    /// Disable colored markers
    no_color: bool,
}

impl Reporter<io::Stderr> {
    /// Reporter writing to standard error
    ///
    /// Colored only when `config` allows it and stderr is a terminal.
    pub fn stderr(config: &Config) -> Self {
        let no_color = stream_no_color(config.no_color, io::stderr().is_terminal());
        Self::new(io::stderr()).with_no_color(no_color)
    }
}

fn stream_no_color(config_no_color: bool, is_terminal: bool) -> bool {
    config_no_color || !is_terminal
}

/// Render `styled` with its escape codes
///
/// `colored` otherwise takes its default from stdout, not the report stream.
fn painted(styled: ColoredString) -> String {
    colored::control::set_override(true);
    let text = styled.to_string();
    colored::control::unset_override();
    text
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            no_color: false,
        }
    }

    /// Disable colored output
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Print the separator rule and suite banner
    pub fn suite_started(&mut self, suite: &str) -> io::Result<()> {
        write!(self.out, "\n{}{}\n", RULE_HALF, RULE_HALF)?;
        writeln!(self.out, "Begin running test cases of {}:", suite)
    }

    /// Print the marker for a case about to run
    ///
    /// The line stays open until the outcome is known, so it is flushed
    /// now in case the body never returns.
    pub fn case_started(&mut self, index: usize, name: &str) -> io::Result<()> {
        write!(self.out, "[{}] Running test case: {} \t", index, name)?;
        self.out.flush()
    }

    /// Close the current case line as passed
    pub fn case_passed(&mut self) -> io::Result<()> {
        if self.no_color {
            writeln!(self.out, " [Passed]")
        } else {
            writeln!(self.out, " {}", painted("[Passed]".green().bold()))
        }
    }

    /// Close the current case line with the failure message
    pub fn case_failed(&mut self, failure: &CheckFailure) -> io::Result<()> {
        if self.no_color {
            writeln!(self.out, " {}", failure)
        } else {
            writeln!(self.out, " {}", painted(failure.to_string().red()))
        }
    }

    /// Print the total and passed counts
    pub fn summary(&mut self, report: &RunReport) -> io::Result<()> {
        let line = format!(
            "Tatal {} cases, passed {}",
            report.total(),
            report.passed()
        );
        if self.no_color {
            writeln!(self.out, "{}", line)?;
        } else {
            writeln!(self.out, "{}", painted(line.bold()))?;
        }
        self.out.flush()
    }

    /// Recover the underlying stream
    pub fn into_inner(self) -> W {
        self.out
    }
}
