use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ztest::{Config, Reporter, RunReport};

mod bounded_stack;
mod suites;

use suites::DemoSuite;

/// Run the bundled ztest demo suites.
///
/// Each suite prints its progress to stderr and ends with a count of
/// total and passed cases. The process exits with status 1 if any case
/// failed a check.
///
/// EXAMPLES:
///     ztest-demo                        Run the Stack and Arith suites
///     ztest-demo --suite broken         Watch failures being isolated
///     ztest-demo --list                 List available suites
///
/// ENVIRONMENT VARIABLES:
///     ZTEST_NO_COLOR    Set to disable colored markers
///     NO_COLOR          Set to disable colored markers
///     ZTEST_LOG         tracing filter, e.g. 'ztest=trace' (default: warn)
#[derive(Parser, Debug)]
#[command(name = "ztest-demo")]
#[command(version)]
struct Cli {
    /// Suite to run (repeatable); defaults to stack and arith
    #[arg(long, short = 's', value_enum)]
    suite: Vec<DemoSuite>,

    /// List available suites and exit
    #[arg(long, short = 'l')]
    list: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn selected(&self) -> Vec<DemoSuite> {
        if self.suite.is_empty() {
            vec![DemoSuite::Stack, DemoSuite::Arith]
        } else {
            self.suite.clone()
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(ztest::config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if cli.no_color {
        config = config.with_no_color(true);
    }
    init_tracing(&config);

    if cli.list {
        for suite in DemoSuite::ALL {
            println!("{}", suite.name());
        }
        return Ok(());
    }

    let mut reporter = Reporter::stderr(&config);
    let mut reports: Vec<RunReport> = Vec::new();
    for suite in cli.selected() {
        tracing::debug!(suite = suite.name(), "starting demo suite");
        reports.push(suite.run(&config, &mut reporter)?);
    }

    // Exit with code 1 if any case failed
    if reports.iter().any(|report| !report.all_passed()) {
        std::process::exit(1);
    }

    Ok(())
}
