//! Common constants used throughout rosgen.

/// Generated build descriptor, at the application root
pub const BUILD_DESCRIPTOR_FILE: &str = "CMakeLists.txt";

/// Generated package manifest, at the application root
pub const PACKAGE_MANIFEST_FILE: &str = "package.xml";

/// Default template file names looked up inside a templates directory
pub const EXECUTOR_TEMPLATE: &str = "executor.cpp.j2";
pub const BUILD_DESCRIPTOR_TEMPLATE: &str = "CMakeLists.txt.j2";
pub const PACKAGE_MANIFEST_TEMPLATE: &str = "package.xml.j2";

/// Templates directory used when none is given on the command line
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Pattern a ROS 2 package name is expected to follow
pub const PACKAGE_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*$";
