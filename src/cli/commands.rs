// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `build` and `preview`, and all
// their flags. Defaults reproduce the classic invocation:
//
//   verilog_files.txt ──(20 context / 5 completion lines)──▶
//   verilog_autocomplete.jsonl

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::build_use_case::BuildConfig;
use crate::data::{
    manifest::DEFAULT_MANIFEST,
    sampler::{DEFAULT_COMPLETION_LINES, DEFAULT_CONTEXT_LINES},
    writer::{JsonStyle, DEFAULT_OUTPUT},
};

/// The top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a JSONL dataset from every file in a manifest
    Build(BuildArgs),

    /// Print the first records of a single file
    Preview(PreviewArgs),
}

/// Window lengths shared by both subcommands
#[derive(Args, Debug, Clone, Copy)]
pub struct WindowArgs {
    /// Lines of context given to the model as the prompt
    #[arg(long, default_value_t = DEFAULT_CONTEXT_LINES, value_parser = positive_len)]
    pub context_lines: usize,

    /// Lines the model should produce as the completion
    #[arg(long, default_value_t = DEFAULT_COMPLETION_LINES, value_parser = positive_len)]
    pub completion_lines: usize,
}

/// JSON layout of each output line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyleArg {
    /// `{"messages": [...]}` with spaces, ASCII-only
    Python,
    /// `{"messages":[...]}`, UTF-8
    Compact,
}

impl From<JsonStyleArg> for JsonStyle {
    fn from(a: JsonStyleArg) -> Self {
        match a {
            JsonStyleArg::Python  => JsonStyle::Python,
            JsonStyleArg::Compact => JsonStyle::Compact,
        }
    }
}

/// All arguments for the `build` command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Text file listing one input path per line
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Output JSONL file (overwritten)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    pub window: WindowArgs,

    /// JSON layout of each output line
    #[arg(long, value_enum, default_value_t = JsonStyleArg::Python)]
    pub json_style: JsonStyleArg,

    /// Also write per-file line/window/record counts to this CSV
    #[arg(long)]
    pub metrics_csv: Option<PathBuf>,
}

/// Convert CLI BuildArgs into the application-layer BuildConfig.
/// The application layer never sees clap types.
impl From<BuildArgs> for BuildConfig {
    fn from(a: BuildArgs) -> Self {
        BuildConfig {
            manifest:         a.manifest,
            output:           a.output,
            context_lines:    a.window.context_lines,
            completion_lines: a.window.completion_lines,
            json_style:       a.json_style.into(),
            metrics_csv:      a.metrics_csv,
        }
    }
}

/// All arguments for the `preview` command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// The file to sample
    #[arg(long)]
    pub file: PathBuf,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Maximum number of records to print
    #[arg(long, default_value_t = 3)]
    pub limit: usize,

    /// JSON layout of each printed line
    #[arg(long, value_enum, default_value_t = JsonStyleArg::Compact)]
    pub json_style: JsonStyleArg,
}

/// Window lengths must be at least one line
fn positive_len(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0)  => Err("must be at least 1".to_string()),
        Ok(n)  => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
