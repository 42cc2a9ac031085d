use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use domain_annotations::core::{
    annotate_files_in_place, annotate_inputs, print_error_message, write_document, Input,
};
use domain_annotations::env::{generate_env_docs, EnvConfig, EnvVar, NoColor};
use domain_annotations::error::{AnnotationError, Result};

/// Append the target domain to hyperlinks whose text doesn't mention it
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Write result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Rewrite each input file in place
    #[arg(short, long, action = ArgAction::SetTrue)]
    in_place: bool,

    /// Suppress informational logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    quiet: bool,

    /// Print the environment variables understood by the tool and exit
    #[arg(long = "help-env", action = ArgAction::SetTrue)]
    help_env: bool,

    /// Input HTML files ("-" or nothing reads stdin)
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        print_error_message(&format!("Error: {error}"), NoColor::get_or_default(false));
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.help_env {
        print!("{}", generate_env_docs());
        return Ok(());
    }

    let config = EnvConfig::from_env()?;
    init_logging(&config, cli.quiet);

    let inputs = Input::from_args(&cli.files);

    if cli.in_place {
        if cli.output.is_some() {
            return Err(AnnotationError::InvalidArguments(
                "--in-place cannot be combined with --output".to_string(),
            ));
        }
        if inputs.contains(&Input::Stdin) {
            return Err(AnnotationError::InvalidArguments(
                "--in-place requires file arguments".to_string(),
            ));
        }
        annotate_files_in_place(&cli.files)?;
        return Ok(());
    }

    // Everything is read before anything is written, so an output path that
    // is also an input still sees the original contents
    let html = annotate_inputs(&inputs)?;

    match &cli.output {
        Some(path) => {
            write_document(path, &html)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes()).map_err(|e| AnnotationError::io("stdout", e))?;
            stdout.flush().map_err(|e| AnnotationError::io("stdout", e))?;
        }
    }

    Ok(())
}

fn init_logging(config: &EnvConfig, quiet: bool) {
    let level = if quiet { "warn" } else { config.log_level };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_ansi(!config.no_color)
        .with_target(false)
        .init();
}
