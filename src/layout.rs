//! Directory skeleton of a generated application.

use log::debug;
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

use crate::error::{display_path, Error, Result};

/// Paths making up one application's directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub src_dir: PathBuf,
    pub include_dir: PathBuf,
    /// `include/<app-name>`, where the package's public headers live
    pub include_app_dir: PathBuf,
}

/// Strips exactly one trailing separator, unless the path is the root itself.
#[cfg(unix)]
pub fn normalize_base<P: AsRef<Path>>(base: P) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let bytes = base.as_ref().as_os_str().as_bytes();
    match bytes {
        [rest @ .., b'/'] if !rest.is_empty() => PathBuf::from(OsStr::from_bytes(rest)),
        _ => base.as_ref().to_path_buf(),
    }
}

/// Strips exactly one trailing separator, unless the path is the root itself.
#[cfg(not(unix))]
pub fn normalize_base<P: AsRef<Path>>(base: P) -> PathBuf {
    let base = base.as_ref();
    match base.to_str() {
        Some(s) if s.len() > 1 && s.ends_with(std::path::is_separator) => {
            PathBuf::from(&s[..s.len() - 1])
        }
        _ => base.to_path_buf(),
    }
}

impl Layout {
    /// Computes the layout for `app_name` under `base` without touching disk.
    pub fn new<P: AsRef<Path>>(base: P, app_name: &str) -> Self {
        let root = normalize_base(base).join(app_name);
        let src_dir = root.join("src");
        let include_dir = root.join("include");
        let include_app_dir = include_dir.join(app_name);

        Self { root, src_dir, include_dir, include_app_dir }
    }

    /// Creates every directory of the layout, parents first.
    ///
    /// Fails on the first directory that cannot be created, including one
    /// that already exists. Directories created before the failure are left
    /// in place.
    pub fn create(&self) -> Result<()> {
        let dirs = [
            ("root", &self.root),
            ("source", &self.src_dir),
            ("header", &self.include_dir),
            ("header", &self.include_app_dir),
        ];

        for (role, dir) in dirs {
            make_dir(dir).map_err(|source| Error::LayoutError {
                role,
                path: display_path(dir),
                source,
            })?;
            debug!("Created {} directory '{}'", role, dir.display());
        }
        Ok(())
    }

    /// Path of the source file for the executor at `index`.
    pub fn executor_path(&self, index: usize) -> PathBuf {
        self.src_dir.join(format!("executor_{index}.cpp"))
    }

    pub fn build_descriptor_path(&self) -> PathBuf {
        self.root.join(crate::constants::BUILD_DESCRIPTOR_FILE)
    }

    pub fn package_manifest_path(&self) -> PathBuf {
        self.root.join(crate::constants::PACKAGE_MANIFEST_FILE)
    }
}

fn make_dir(path: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(path)
}
