use anyhow::{Context, Result};
use clap::Parser;
use lossmap::{
    report::{write_report, ReportOpts},
    source::{DropLog, SourceOpts},
};
use std::io::Write;

/// Summarize switch packet drops of a simulation trace as bitmap windows.
/// Use `RUST_LOG=debug` to increase logging verbosity.
#[derive(Parser, Debug)]
struct Opts {
    #[command(flatten)]
    source: SourceOpts,

    /// Also print the packed wire words of each bitmap
    #[arg(long)]
    wire: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let Opts { source, wire } = match Opts::try_parse() {
        Ok(opts) => opts,
        // usage errors exit with 1, help and version with 0
        Err(e) if e.use_stderr() => {
            e.print()?;
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let log = DropLog::open(&source.file).with_context(|| format!("reading {}", source.file))?;
    let windows = log.windows(source.width)?;
    log.counts.analyze();
    log::info!("{} windows from {} drops", windows.len(), log.seqs.len());

    let mut stdout = std::io::BufWriter::new(std::io::stdout());
    write_report(
        &mut stdout,
        &source.file,
        &log.counts,
        &windows,
        ReportOpts { wire },
    )?;
    stdout.flush()?;
    Ok(())
}
