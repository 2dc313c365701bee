//! Implementation of the `intake slots` command.

use intake_core::application::ports::Scheduler;

use crate::{
    cli::{ListFormat, SlotsArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: SlotsArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let scheduler = config.scheduler().map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: None,
    })?;

    let window = scheduler.date_window()?;
    let slots = scheduler.time_slots()?;

    match args.format {
        ListFormat::Table => {
            output.header("Booking window:")?;
            output.detail("Opens:", &window.opens.format("%A, %B %-d, %Y").to_string())?;
            output.detail("Closes:", &window.closes.format("%A, %B %-d, %Y").to_string())?;
            output.print("")?;
            output.header("Time slots:")?;
            for slot in &slots {
                output.print(&format!("  {}", slot.format("%H:%M")))?;
            }
        }

        ListFormat::List => {
            for slot in &slots {
                println!("{}", slot.format("%H:%M"));
            }
        }

        ListFormat::Json => {
            // Straight to stdout so the JSON stays parseable in pipes.
            let value = serde_json::json!({
                "opens": window.opens.to_string(),
                "closes": window.closes.to_string(),
                "slots": slots.iter().map(|s| s.format("%H:%M").to_string()).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".into()));
        }

        ListFormat::Csv => {
            println!("slot");
            for slot in &slots {
                println!("{}", slot.format("%H:%M"));
            }
        }
    }

    Ok(())
}
