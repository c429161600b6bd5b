use anyhow::Result;
use clap::Parser;

use livepen::cli::CliArgs;

fn main() -> Result<()> {
    livepen::tracing::init();

    let args = CliArgs::parse();
    tracing::debug!(?args, "Parsed command line");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    args.run(&mut out)
}
