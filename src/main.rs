//! Command-line viewer for a style catalog file.
//!
//! Opens a JSON catalog, applies the filters given on the command line through
//! the list controller, and prints the filter dropdowns and rendered cards.
//!
//! # Usage
//!
//! ```text
//! style-catalog [CATALOG] [--client ID] [--price low|medium|high]
//!               [--country NAME] [--search TEXT] [--config FILE]
//!               [--trace-level LEVEL] [--placeholder-image REF]
//! ```

use std::process::ExitCode;

use clap::Parser;
use style_catalog::cli::Cli;
use style_catalog::ui::{render, render_filters};
use style_catalog::{initialize, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "style catalog failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;

    let mut controller = initialize(&config)?;
    controller.set_filters(cli.filters())?;

    let dropdowns = controller.load_filter_options()?;
    print!("{}", render_filters(&dropdowns, controller.snapshot()));
    print!("{}", render(controller.snapshot()));
    Ok(())
}
