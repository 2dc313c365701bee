//! Implementation of the `intake courses` command.

use intake_adapters::{course_catalog, service_directory};
use intake_core::application::{CatalogService, CourseInfo};

use crate::{
    cli::{CoursesArgs, ListFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: CoursesArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new(course_catalog(), service_directory());

    // Detail view short-circuits the listing.
    if let Some(title) = &args.show {
        let course = service.course_details(title).map_err(CliError::Core)?;
        return show_details(&course, &output);
    }

    let courses = service.list_courses(args.category.to_filter());

    match args.format {
        ListFormat::Table => {
            output.header("Courses:")?;
            for course in &courses {
                output.print(&format!(
                    "  {:<34} {:<10} {:>6}  {}",
                    course.title, course.category, course.price, course.duration
                ))?;
            }
            if courses.is_empty() {
                output.info(&format!("No courses in category '{}'", args.category))?;
            }
        }

        ListFormat::List => {
            for course in &courses {
                println!("{}", course.title);
            }
        }

        ListFormat::Json => {
            let value: Vec<_> = courses
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "title": c.title,
                        "category": c.category,
                        "price": c.price,
                        "duration": c.duration,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| "[]".into())
            );
        }

        ListFormat::Csv => {
            println!("title,category,price,duration");
            for c in &courses {
                println!("{},{},{},{}", c.title, c.category, c.price, c.duration);
            }
        }
    }

    Ok(())
}

fn show_details(course: &CourseInfo, output: &OutputManager) -> CliResult<()> {
    output.header(&course.title)?;
    output.detail("Category:", &course.category)?;
    output.detail("Price:", &course.price)?;
    output.detail("Duration:", &course.duration)?;
    output.print("")?;
    output.print(&course.description)?;
    Ok(())
}
