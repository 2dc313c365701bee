//! Implementation of the `intake services` command.

use intake_adapters::{course_catalog, service_directory};
use intake_core::application::CatalogService;

use crate::{
    cli::{ListFormat, ServicesArgs, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ServicesArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new(course_catalog(), service_directory());
    let services = service.list_services();

    match args.format {
        ListFormat::Table => {
            output.header("Consultation services:")?;
            for (code, label) in &services {
                output.print(&format!("  {code:<10} {label}"))?;
            }
        }

        ListFormat::List => {
            for (code, _) in &services {
                println!("{code}");
            }
        }

        ListFormat::Json => {
            let value: Vec<_> = services
                .iter()
                .map(|(code, label)| serde_json::json!({ "code": code, "label": label }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| "[]".into())
            );
        }

        ListFormat::Csv => {
            println!("code,label");
            for (code, label) in &services {
                println!("{code},{label}");
            }
        }
    }

    Ok(())
}
