//! Generation pipeline: validate the application, lay out its directories,
//! then render every artifact in a fixed order.
use log::{debug, warn};
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use crate::{
    constants::{
        BUILD_DESCRIPTOR_TEMPLATE, EXECUTOR_TEMPLATE, PACKAGE_MANIFEST_TEMPLATE,
        PACKAGE_NAME_PATTERN,
    },
    error::{Error, Result, Stage},
    generator::ArtifactGenerator,
    layout::Layout,
    model::{Application, Executor},
    renderer::TemplateRenderer,
};

/// Template sources for the three artifact kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Rendered once per executor
    pub executor: PathBuf,
    /// Rendered once into `CMakeLists.txt`
    pub build_descriptor: PathBuf,
    /// Rendered once into `package.xml`
    pub package_manifest: PathBuf,
}

impl TemplateSet {
    /// Resolves the default template file names inside `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            executor: dir.join(EXECUTOR_TEMPLATE),
            build_descriptor: dir.join(BUILD_DESCRIPTOR_TEMPLATE),
            package_manifest: dir.join(PACKAGE_MANIFEST_TEMPLATE),
        }
    }
}

/// Outcome of a successful generation run.
#[derive(Debug)]
pub struct Generated {
    pub layout: Layout,
    /// Every written file, in the order it was rendered
    pub artifacts: Vec<PathBuf>,
}

static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PACKAGE_NAME_PATTERN).expect("package name pattern is valid"));

/// Whether `name` is exactly one plain path component, so that joining it
/// onto a base directory stays inside that directory.
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(first)), None) if first == name
    )
}

/// Checks the application before anything touches the filesystem.
///
/// Only structural presence and the application name are checked. Cross-field
/// rules such as timer periods or priorities are left to whoever builds the
/// model.
pub fn validate(app: &Application) -> Result<&[Executor]> {
    let executors = app
        .executors
        .as_deref()
        .ok_or_else(|| Error::InvalidInput("app.executors is null".to_string()))?;

    if !is_single_component(&app.name) {
        return Err(Error::InvalidInput(format!(
            "application name '{}' must be a single directory name",
            app.name
        )));
    }

    if !PACKAGE_NAME.is_match(&app.name) {
        warn!("Application name '{}' is not a valid ROS 2 package name", app.name);
    }

    Ok(executors)
}

/// Drives one generation run from a fully built [`Application`].
pub struct Processor<'a> {
    generator: ArtifactGenerator<'a>,
    templates: TemplateSet,
}

impl<'a> Processor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, templates: TemplateSet) -> Self {
        Self { generator: ArtifactGenerator::new(engine), templates }
    }

    /// Generates `app` under `base`.
    ///
    /// # Flow
    /// 1. Validates the application
    /// 2. Creates `<base>/<name>` with its `src` and `include` directories
    /// 3. Renders `src/executor_<i>.cpp` for each executor, by position
    /// 4. Renders `CMakeLists.txt`
    /// 5. Renders `package.xml`
    ///
    /// The first failure stops the run and is returned wrapped in
    /// `Error::StageError`. Nothing written before it is removed, and the
    /// target has to be cleared before running again.
    pub fn generate<P: AsRef<Path>>(&self, app: &Application, base: P) -> Result<Generated> {
        let executors = validate(app).map_err(Error::at(Stage::Validate))?;

        let layout = Layout::new(base, &app.name);
        layout.create().map_err(Error::at(Stage::Layout))?;
        debug!("Laid out '{}'", layout.root.display());

        let mut artifacts = Vec::with_capacity(executors.len() + 2);

        for (index, executor) in executors.iter().enumerate() {
            let target = layout.executor_path(index);
            self.generator
                .generate(executor, &self.templates.executor, &target)
                .map_err(Error::at(Stage::Executor(index)))?;
            debug!("Generated executor '{}': '{}'", executor.name, target.display());
            artifacts.push(target);
        }

        let target = layout.build_descriptor_path();
        self.generator
            .generate(app, &self.templates.build_descriptor, &target)
            .map_err(Error::at(Stage::BuildDescriptor))?;
        artifacts.push(target);

        let target = layout.package_manifest_path();
        self.generator
            .generate(app, &self.templates.package_manifest, &target)
            .map_err(Error::at(Stage::PackageManifest))?;
        artifacts.push(target);

        Ok(Generated { layout, artifacts })
    }
}
