//! Loads an application description file into the data model.
//! Descriptions may be written in JSON or YAML.

use log::debug;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Application;

/// Reads and parses the application description at `path`.
///
/// # Errors
/// * `Error::ConfigError` if the file does not exist or is not a valid
///   description
/// * `Error::InvalidInput` if the document is `null`
pub fn load_application<P: AsRef<Path>>(path: P) -> Result<Application> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid description path: {}",
            path.display()
        )));
    }

    debug!("Loading application description from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse_application(&content)
}

/// Parses description content, trying JSON first and YAML second.
pub fn parse_application(content: &str) -> Result<Application> {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid description format: {e}")))?,
    };

    if value.is_null() {
        return Err(Error::InvalidInput("bad argument: null application".to_string()));
    }

    serde_json::from_value(value)
        .map_err(|e| Error::ConfigError(format!("Invalid application description: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let app = parse_application(
            r#"{
                "name": "automatic",
                "packages": ["std_msgs"],
                "executors": [{"name": "Foo", "kind": "rclcpp::executors::SingleThreadedExecutor"}]
            }"#,
        )
        .unwrap();

        assert_eq!(app.name, "automatic");
        assert_eq!(app.executors().len(), 1);
        assert!(app.executors()[0].nodes.is_empty());
    }

    #[test]
    fn test_parse_yaml() {
        let app = parse_application(
            "name: automatic\n\
             executors:\n\
             \x20 - name: Foo\n\
             \x20   kind: rclcpp::executors::SingleThreadedExecutor\n\
             \x20   nodes:\n\
             \x20     - name: sensor\n\
             \x20       methods:\n\
             \x20         - name: sensor\n\
             \x20           msg_type: std_msgs::msg::Int64\n\
             \x20           is_timer: true\n\
             \x20           period: 1000000000\n",
        )
        .unwrap();

        let method = &app.executors()[0].nodes[0].methods[0];
        assert!(method.is_timer);
        assert_eq!(method.period, 1_000_000_000);
    }

    #[test]
    fn test_null_document_is_invalid_input() {
        assert!(matches!(parse_application("null"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_description() {
        assert!(matches!(parse_application("name: [unclosed"), Err(Error::ConfigError(_))));
        assert!(matches!(
            parse_application(r#"{"executors": []}"#),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_application("does/not/exist.yaml");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
