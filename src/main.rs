use anyhow::Context;
use chrono::Local;
use clap::Parser;
use driver_status::config::{CliConfig, OutputFormat};
use driver_status::{logger, render, summary};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let input = match config.resolve_input() {
        Ok(input) => input,
        Err(e) if e.is_input_error() => {
            tracing::warn!("Insufficient data: {}", e);
            eprintln!("Cannot compute a status yet: {e}");
            eprintln!("Provide both --birth-date and --license-date (yyyy-mm-dd).");
            std::process::exit(2);
        }
        Err(e) => return Err(e).context("Failed to load driver details"),
    };

    // Captured once so every rule sees the same day
    let reference = config.as_of.unwrap_or_else(|| Local::now().date_naive());

    if input.license_date < input.birth_date {
        tracing::warn!(
            "License date {} precedes birth date {}",
            input.license_date,
            input.birth_date
        );
    }
    if input.license_date > reference {
        tracing::warn!(
            "License date {} is after the reference date {}",
            input.license_date,
            reference
        );
    }

    let report = input.status_at(reference);
    tracing::debug!(
        status = report.accompaniment_status.label(),
        new_driver = report.is_new_driver,
        "Status computed"
    );

    if config.share {
        println!("{}", summary::share_message(&report));
        return Ok(());
    }

    match config.format {
        OutputFormat::Text => print!("{}", render::render_text(&input, &report)),
        OutputFormat::Json => {
            let json = render::render_json(&input, &report).context("Failed to encode report")?;
            println!("{json}");
        }
    }

    Ok(())
}
