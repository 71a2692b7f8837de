//! pdfmerge - merge all PDF files in a directory into a single PDF file.

use anyhow::Context;
use clap::Parser;
use std::process;

use pdfmerge::cli::Cli;
use pdfmerge::config::Config;
use pdfmerge::error::MergeError;
use pdfmerge::merge::{self, ConsolePrompt, MergeOutcome};
use pdfmerge::output::OutputFormatter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let formatter = OutputFormatter::from_config(&config);

    // The merge may still be blocked on a prompt or a read after an
    // interrupt, so leave with process::exit rather than waiting on it.
    match run(config).await {
        Ok(MergeOutcome::Merged(_)) | Ok(MergeOutcome::DryRun(_)) => {
            formatter.blank_line();
            formatter.success("PDF merge completed successfully!");
            process::exit(0);
        }
        Ok(MergeOutcome::Cancelled { output }) => {
            formatter.error(&format!(
                "PDF merge cancelled; {} was left unchanged",
                output.display()
            ));
            process::exit(1);
        }
        Err(err) => {
            formatter.error(&format!("Error: {err}"));
            formatter.error("PDF merge failed!");
            process::exit(1);
        }
    }
}

/// Run the blocking merge, racing it against Ctrl-C.
async fn run(config: Config) -> anyhow::Result<MergeOutcome> {
    let merge = tokio::task::spawn_blocking(move || {
        let mut prompt = ConsolePrompt::stdio();
        merge::merge_directory(&config, &mut prompt)
    });

    tokio::select! {
        joined = merge => Ok(joined.context("merge task failed")??),
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            Err(MergeError::Interrupted.into())
        }
    }
}
