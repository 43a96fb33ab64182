//! In-memory description of a ROS 2 application.
//!
//! The model is a plain ownership tree: an [`Application`] owns its
//! [`Executor`]s, each executor owns its [`Node`]s, and each node owns its
//! [`Method`]s. Templates see these records through their serialized form, so
//! field names here are the names templates use.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Describes a complete generated application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Application name, also the package and root directory name
    pub name: String,
    /// Packages the application depends on, in declaration order
    #[serde(default)]
    pub packages: IndexSet<String>,
    /// Executors in file order. `None` means the description carried no
    /// executor list at all, which generation rejects.
    #[serde(default)]
    pub executors: Option<Vec<Executor>>,
}

/// One generated execution unit, rendered into its own source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Executor {
    pub name: String,
    /// Executor class, e.g. `rclcpp::executors::SingleThreadedExecutor`
    pub kind: String,
    /// Whether priority scheduling semantics apply
    #[serde(default)]
    pub is_prio: bool,
    /// Include directives, rendered in order
    #[serde(default)]
    pub includes: Vec<String>,
    /// Constructor parameters
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// A shared data container (class) hosted by an executor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// A callback within a node.
///
/// `period` only means something for timers and `subs` only for
/// non-timers; neither is checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    /// Message type handed to the template
    pub msg_type: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub is_timer: bool,
    /// Timer period in nanoseconds
    #[serde(default)]
    pub period: i64,
    #[serde(default)]
    pub is_sync: bool,
    /// Subscribed topics
    #[serde(default)]
    pub subs: Vec<String>,
    /// Published topics
    #[serde(default)]
    pub pubs: Vec<String>,
    /// Worst-case execution time in nanoseconds
    #[serde(default)]
    pub wcet: i64,
}

impl Application {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), packages: IndexSet::new(), executors: Some(Vec::new()) }
    }

    /// Executors in file order, empty when the list is absent.
    pub fn executors(&self) -> &[Executor] {
        self.executors.as_deref().unwrap_or_default()
    }
}
