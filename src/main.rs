use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use settings_header_gen::{HeaderLayout, generate_with_layout};

const USAGE_NOTICE: &str = "Please provide correct arguments!";

/// Generate the settings X-macro header from a JSON settings document.
#[derive(Parser, Debug)]
#[command(name = "settings-header-gen")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON settings document to read.
    input: Option<PathBuf>,

    /// Header file to create or overwrite.
    output: Option<PathBuf>,

    /// JSON file with `guard`, `group_macro` and `entry_macro` overrides.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Include guard symbol.
    #[arg(long)]
    guard: Option<String>,

    /// Name of the macro listing all settings.
    #[arg(long)]
    group_macro: Option<String>,

    /// Name of the per-setting macro.
    #[arg(long)]
    entry_macro: Option<String>,

    /// Extra positionals after the output path are ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Missing paths are reported but not treated as a failure.
    let (Some(input), Some(output)) = (args.input, args.output) else {
        println!("{USAGE_NOTICE}");
        return Ok(());
    };

    let layout = match &args.layout {
        Some(path) => HeaderLayout::from_file(path)
            .with_context(|| format!("Failed to load layout {}", path.display()))?,
        None => HeaderLayout::default(),
    }
    .with_overrides(args.guard, args.group_macro, args.entry_macro);

    generate_with_layout(&input, &output, &layout).with_context(|| {
        format!(
            "Failed to generate {} from {}",
            output.display(),
            input.display()
        )
    })?;

    Ok(())
}
