//! rosgen scaffolds ROS 2 applications.
//! It reads a description of an application's executors, nodes and methods,
//! lays out a package directory and renders its sources, `CMakeLists.txt` and
//! `package.xml` from templates.

/// Command-line interface module for the rosgen application
pub mod cli;

/// Common constants: file names and defaults
pub mod constants;

/// Error types and handling for rosgen
pub mod error;

/// Renders a single template into a single output file
pub mod generator;

/// Package directory skeleton
pub mod layout;

/// Application description loading (JSON and YAML)
pub mod loader;

/// Logger initialization for the binary
pub mod logger;

/// Application data model
pub mod model;

/// Core generation orchestration
/// Combines all components to generate the final output
pub mod processor;

/// Template rendering functionality
pub mod renderer;
