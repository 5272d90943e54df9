#[macro_use]
extern crate log;

mod chunker;
mod counter;
mod reducer;
mod report;
mod session;
mod shared_types;
mod source;

use std::error::Error;
use std::io;
use std::num::NonZeroUsize;
use std::process::ExitCode;

use clap::Parser;
use session::{start_count, CountPreferences};
use source::{InputSource, STDIN_ARG};

fn default_jobs() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Number of parallel counting jobs per input
    #[arg(short, long, env = "PARWC_JOBS", default_value_t = default_jobs())]
    jobs: NonZeroUsize,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: simplelog::LevelFilter,

    /// Files to count; `-` or no files reads standard input
    files: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = CliArgs::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let files = if args.files.is_empty() {
        vec![STDIN_ARG.to_owned()]
    } else {
        args.files
    };

    let prefs = CountPreferences {
        inputs: files.iter().map(|f| InputSource::from_arg(f)).collect(),
        jobs: args.jobs,
    };
    let reports = start_count(prefs).await;

    let all_ok = report::write_report(&reports, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
