//! Command-line interface implementation for rosgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::DEFAULT_TEMPLATES_DIR;
use crate::processor::TemplateSet;

/// Command-line arguments structure for rosgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "rosgen: ROS 2 application scaffolding", long_about = None)]
pub struct Args {
    /// Path to the application description (JSON or YAML)
    #[arg(value_name = "DESCRIPTION")]
    pub description: PathBuf,

    /// Directory the application directory is created in
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Directory holding the executor, CMakeLists and package templates
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates: PathBuf,

    /// Executor template, overriding the one in the templates directory
    #[arg(long, value_name = "FILE")]
    pub executor_template: Option<PathBuf>,

    /// CMakeLists template, overriding the one in the templates directory
    #[arg(long, value_name = "FILE")]
    pub cmake_template: Option<PathBuf>,

    /// package.xml template, overriding the one in the templates directory
    #[arg(long, value_name = "FILE")]
    pub package_template: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Template set selected by the templates directory and any overrides.
    pub fn template_set(&self) -> TemplateSet {
        let mut templates = TemplateSet::from_dir(&self.templates);
        if let Some(path) = &self.executor_template {
            templates.executor = path.clone();
        }
        if let Some(path) = &self.cmake_template {
            templates.build_descriptor = path.clone();
        }
        if let Some(path) = &self.package_template {
            templates.package_manifest = path.clone();
        }
        templates
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
