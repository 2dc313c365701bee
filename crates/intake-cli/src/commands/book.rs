//! Implementation of the `intake book` command.
//!
//! Responsibility: translate CLI flags into form field values, call the core
//! booking service, and display results. No validation logic lives here.

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use intake_adapters::{ConsolePresenter, MemoryFormSurface, booking_form, service_directory};
use intake_core::application::{BookingService, SubmitOutcome, ports::FormSurface};

use crate::{
    cli::{BookArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `intake book` command.
///
/// Dispatch sequence:
/// 1. Wire the form surface, presenter, and scheduler
/// 2. Apply CLI flags (and config defaults) as field values
/// 3. Prompt for missing required fields (interactive builds, TTY only)
/// 4. Check the chosen date against the booking window
/// 5. Submit; a rejection becomes a structured [`CliError`]
#[instrument(skip_all)]
pub fn execute(
    args: BookArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let scheduler = config.scheduler().map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: None,
    })?;

    // Keep a handle on the surface; the service owns the boxed clone.
    let surface = MemoryFormSurface::new(booking_form());
    let service = BookingService::new(
        Box::new(surface.clone()),
        Box::new(ConsolePresenter::new(service_directory())),
        Box::new(scheduler),
    );

    apply_flags(&service, &args, &config)?;

    if should_prompt(&args, &global) && has_missing_required(&surface)? {
        prompt_missing(&service, &surface)?;
    }

    check_date_window(&service, &args, &output)?;

    debug!("Submitting booking");
    match service.submit()? {
        SubmitOutcome::Accepted(record) => {
            info!(reference = %record.reference(), "Booking accepted");
            if !global.quiet {
                output.print("")?;
                output.print("Next steps:")?;
                output.print("  Check your inbox for the confirmation email")?;
            }
            Ok(())
        }
        SubmitOutcome::Rejected(report) => Err(CliError::BookingRejected { report }),
    }
}

/// Copy every provided flag onto the form surface.
///
/// The service falls back to `defaults.service` from config when the flag
/// is absent.
fn apply_flags(service: &BookingService, args: &BookArgs, config: &AppConfig) -> CliResult<()> {
    let service_code = args
        .service
        .clone()
        .or_else(|| config.defaults.service.clone());

    let values = [
        ("name", args.name.as_deref()),
        ("email", args.email.as_deref()),
        ("phone", args.phone.as_deref()),
        ("service", service_code.as_deref()),
        ("date", args.date.as_deref()),
        ("time", args.time.as_deref()),
        ("goals", args.goals.as_deref()),
    ];

    for (name, value) in values {
        if let Some(value) = value {
            service.set_field(name, value)?;
        }
    }

    Ok(())
}

fn should_prompt(args: &BookArgs, global: &GlobalArgs) -> bool {
    use std::io::IsTerminal as _;
    !args.no_input && !global.quiet && std::io::stdin().is_terminal()
}

fn has_missing_required(surface: &MemoryFormSurface) -> CliResult<bool> {
    Ok(surface
        .descriptors()?
        .iter()
        .any(|f| f.is_required() && f.raw_value().trim().is_empty()))
}

/// Warn when the chosen date falls outside the booking window; with
/// `--no-input` the warning hardens into an error.
fn check_date_window(
    service: &BookingService,
    args: &BookArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let Some(raw) = args.date.as_deref() else {
        return Ok(());
    };
    // Unparseable dates are left for format-level feedback downstream.
    let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return Ok(());
    };

    if service.is_selectable(date)? {
        return Ok(());
    }

    let window = service.date_window()?;
    if args.no_input {
        return Err(CliError::DateOutsideWindow {
            date: raw.to_string(),
            opens: window.opens.to_string(),
            closes: window.closes.to_string(),
        });
    }

    output.warning(&format!(
        "{raw} is outside the booking window ({} to {}); the studio may reschedule",
        window.opens, window.closes,
    ))?;
    Ok(())
}

// ── Interactive prompting ─────────────────────────────────────────────────────

/// Prompt for each required field that is still empty.
#[cfg(feature = "interactive")]
fn prompt_missing(service: &BookingService, surface: &MemoryFormSurface) -> CliResult<()> {
    use dialoguer::{Input, Select};

    for field in surface.descriptors()? {
        if !field.is_required() || !field.raw_value().trim().is_empty() {
            continue;
        }

        let value = if field.name() == "service" {
            let services = service_directory();
            let entries: Vec<(String, String)> = services
                .entries()
                .map(|(c, l)| (c.to_string(), l.to_string()))
                .collect();
            let labels: Vec<&str> = entries.iter().map(|(_, l)| l.as_str()).collect();
            let choice = Select::new()
                .with_prompt("Service")
                .items(&labels)
                .default(0)
                .interact()
                .map_err(|e| CliError::InvalidInput {
                    message: format!("service selection failed: {e}"),
                    source: None,
                })?;
            entries[choice].0.clone()
        } else {
            Input::<String>::new()
                .with_prompt(field.name().as_str())
                .allow_empty(true)
                .interact_text()
                .map_err(|e| CliError::InvalidInput {
                    message: format!("reading '{}' failed: {e}", field.name()),
                    source: None,
                })?
        };

        service.set_field(field.name().as_str(), &value)?;
    }

    Ok(())
}

#[cfg(not(feature = "interactive"))]
fn prompt_missing(_service: &BookingService, _surface: &MemoryFormSurface) -> CliResult<()> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use intake_adapters::RecordingPresenter;

    fn wired() -> (BookingService, MemoryFormSurface) {
        let surface = MemoryFormSurface::new(booking_form());
        let service = BookingService::new(
            Box::new(surface.clone()),
            Box::new(RecordingPresenter::new()),
            Box::new(AppConfig::default().scheduler().unwrap()),
        );
        (service, surface)
    }

    fn full_args() -> BookArgs {
        BookArgs {
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: None,
            service: Some("fitness".into()),
            date: Some("2026-09-15".into()),
            time: Some("10:00".into()),
            goals: None,
            no_input: true,
        }
    }

    #[test]
    fn flags_land_on_the_surface() {
        let (service, surface) = wired();
        apply_flags(&service, &full_args(), &AppConfig::default()).unwrap();

        assert_eq!(surface.descriptor("name").unwrap().raw_value(), "Jane Doe");
        assert_eq!(surface.descriptor("service").unwrap().raw_value(), "fitness");
        assert_eq!(surface.descriptor("phone").unwrap().raw_value(), "");
    }

    #[test]
    fn config_default_service_fills_missing_flag() {
        let (service, surface) = wired();
        let mut args = full_args();
        args.service = None;
        let mut config = AppConfig::default();
        config.defaults.service = Some("wellness".into());

        apply_flags(&service, &args, &config).unwrap();
        assert_eq!(
            surface.descriptor("service").unwrap().raw_value(),
            "wellness"
        );
    }

    #[test]
    fn explicit_flag_beats_config_default() {
        let (service, surface) = wired();
        let mut config = AppConfig::default();
        config.defaults.service = Some("wellness".into());

        apply_flags(&service, &full_args(), &config).unwrap();
        assert_eq!(
            surface.descriptor("service").unwrap().raw_value(),
            "fitness"
        );
    }

    #[test]
    fn missing_required_detection() {
        let (service, surface) = wired();
        assert!(has_missing_required(&surface).unwrap());

        apply_flags(&service, &full_args(), &AppConfig::default()).unwrap();
        assert!(!has_missing_required(&surface).unwrap());
    }
}
