// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to its
// use case in Layer 2. Printing to stdout happens only here.
//
//   1. `build`   — manifest → JSONL dataset file
//   2. `preview` — one file → first records on stdout

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use commands::{BuildArgs, Commands, PreviewArgs};

#[derive(Parser, Debug)]
#[command(
    name = "verilog-autocomplete",
    version,
    about = "Turn source files into a sliding-window prompt/completion JSONL dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Build(args)   => run_build(args),
            Commands::Preview(args) => run_preview(args),
        }
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    use crate::application::build_use_case::BuildUseCase;

    tracing::info!("Building dataset from manifest '{}'", args.manifest.display());

    let use_case = BuildUseCase::new(args.into());
    use_case.execute()?;

    println!(
        "Autocomplete dataset saved to {}",
        use_case.config().output.display()
    );
    Ok(())
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    use crate::application::preview_use_case::PreviewUseCase;
    use crate::data::{sampler::WindowSampler, writer::write_records};

    let sampler  = WindowSampler::new(args.window.context_lines, args.window.completion_lines);
    let use_case = PreviewUseCase::new(args.file, sampler, args.limit);
    let records  = use_case.records()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, &records, args.json_style.into())?;
    out.flush()?;
    Ok(())
}
