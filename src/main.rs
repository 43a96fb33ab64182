//! rosgen's main application entry point.
//! Parses arguments, loads the application description and runs generation.

use rosgen::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    loader::load_application,
    logger::init_logger,
    processor::Processor,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the application description
/// 2. Resolves the template set
/// 3. Generates the application under the output directory
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let app = load_application(&args.description)?;
    let templates = args.template_set();

    let processor = Processor::new(&engine, templates);
    let generated = processor.generate(&app, &args.output_dir)?;

    for artifact in &generated.artifacts {
        println!("Generated: '{}'", artifact.display());
    }
    println!(
        "Application '{}' generated successfully in {}.",
        app.name,
        generated.layout.root.display()
    );
    Ok(())
}
