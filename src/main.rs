use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use rematch::pattern::matcher::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_STEPS};
use rematch::suite::Suite;
use rematch::{Limits, Matcher, Pattern, Verdict, checker, report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Maximum states evaluated per match before giving up
    #[arg(long, env = "REMATCH_MAX_STEPS", default_value_t = DEFAULT_MAX_STEPS, global = true)]
    max_steps: usize,

    /// Maximum recursion depth per match before giving up
    #[arg(long, env = "REMATCH_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    max_depth: usize,

    /// Worker threads for suite evaluation (0 = one per CPU)
    #[arg(short = 'j', long, env = "REMATCH_JOBS", default_value_t = 0, global = true)]
    jobs: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match one pattern against one target
    Match {
        /// Pattern to match with
        pattern: String,
        /// Target the pattern must match completely
        target: String,
    },
    /// Match every pattern in a file against the target on the same line
    Run(RunArgs),
    /// Compare verdict output against expected verdicts
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// File with one pattern per line
    #[arg(value_name = "EXPRESSIONS", required_unless_present = "suite")]
    expressions: Option<PathBuf>,

    /// File with one target per line
    #[arg(value_name = "TARGETS", required_unless_present = "suite")]
    targets: Option<PathBuf>,

    /// File with one expected verdict line per pair
    #[arg(short, long, value_name = "FILE", conflicts_with = "suite")]
    expected: Option<PathBuf>,

    /// Load NAME-expressions.txt, NAME-targets.txt and NAME-expected.txt
    #[arg(short, long, value_name = "NAME", conflicts_with_all = ["expressions", "targets"])]
    suite: Option<String>,

    /// Directory holding the suite files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Output file, a PREFIX for PREFIX-output.txt, or with --all a directory
    #[arg(value_name = "OUTPUT|PREFIX|DIR")]
    first: Option<String>,

    /// Expected verdict file
    #[arg(value_name = "EXPECTED", conflicts_with = "all")]
    expected: Option<PathBuf>,

    /// Summarise every *-output.txt in a directory
    #[arg(long)]
    all: bool,

    /// Where to write mismatched lines
    #[arg(long, value_name = "FILE", default_value = "mismatches.txt")]
    mismatches: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("REMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let code = run().unwrap_or_else(|err| {
        eprintln!("rematch: {err:#}");
        2
    });
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let matcher = Matcher::new(Limits {
        max_steps: cli.max_steps,
        max_depth: cli.max_depth,
    });
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Match { pattern, target } => {
            let outcome = Pattern::parse(&pattern).and_then(|p| matcher.is_match(&p, &target));
            if let Err(err) = &outcome {
                eprintln!("rematch: {err}");
            }
            let verdict = Verdict::from_outcome(&outcome);
            writeln!(out, "{}", verdict.render(&pattern, &target))?;
            Ok(match verdict {
                Verdict::Yes => 0,
                Verdict::No => 1,
                Verdict::SyntaxError | Verdict::Error => 2,
            })
        }
        Command::Run(args) => {
            rayon::ThreadPoolBuilder::new()
                .num_threads(cli.jobs)
                .build_global()?;
            let suite = match (&args.suite, &args.expressions, &args.targets) {
                (Some(name), _, _) => Suite::from_prefix(&args.dir, name)?,
                (None, Some(expressions), Some(targets)) => {
                    Suite::load(expressions, targets, args.expected.as_deref())?
                }
                _ => bail!("either --suite or both EXPRESSIONS and TARGETS are required"),
            };
            tracing::info!(pairs = suite.len(), "running suite");
            report::run(&suite, &matcher, &mut out)?;
            Ok(0)
        }
        Command::Check(args) => {
            if args.all {
                let dir = PathBuf::from(args.first.as_deref().unwrap_or("."));
                checker::check_all(&dir, &mut out)?;
                return Ok(0);
            }
            let (output, expected) = match (args.first, args.expected) {
                (Some(output), Some(expected)) => (PathBuf::from(output), expected),
                (Some(prefix), None) => (
                    PathBuf::from(format!("{prefix}-output.txt")),
                    PathBuf::from(format!("{prefix}-expected.txt")),
                ),
                (None, _) => bail!("nothing to check: give OUTPUT EXPECTED, a PREFIX, or --all"),
            };
            let cmp = checker::check_files(&output, &expected, &args.mismatches, &mut out)?;
            Ok(if cmp.mismatches.is_empty() && cmp.missing == 0 {
                0
            } else {
                1
            })
        }
    }
}
