#![allow(dead_code)]

use rosgen::model::{Application, Executor, Method, Node};
use rosgen::processor::TemplateSet;
use std::path::PathBuf;

pub fn shipped_templates() -> TemplateSet {
    TemplateSet::from_dir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

pub fn demo_description() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join("automatic.yaml")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn executor(name: &str, nodes: Vec<Node>) -> Executor {
    Executor {
        name: name.to_string(),
        kind: "rclcpp::executors::SingleThreadedExecutor".to_string(),
        is_prio: false,
        includes: strings(&["std_msgs/msg/int64.hpp"]),
        params: Vec::new(),
        nodes,
    }
}

/// One executor hosting a timer-driven `sensor` node and a subscribing
/// `controller` node.
pub fn automatic_app() -> Application {
    let node_params = strings(&["rclcpp::NodeOptions().start_parameter_event_publisher(false)"]);

    let sensor = Node {
        name: "sensor".to_string(),
        params: node_params.clone(),
        methods: vec![Method {
            name: "sensor".to_string(),
            msg_type: "std_msgs::msg::Int64".to_string(),
            is_timer: true,
            period: 1_000_000_000,
            pubs: strings(&["topic_sense"]),
            wcet: 1_000,
            ..Method::default()
        }],
    };
    let controller = Node {
        name: "controller".to_string(),
        params: node_params,
        methods: vec![Method {
            name: "on_sensor".to_string(),
            msg_type: "std_msgs::msg::Int64".to_string(),
            params: strings(&["std_msgs::msg::Int64::SharedPtr msg_p"]),
            subs: strings(&["topic_sense"]),
            wcet: 100_000,
            ..Method::default()
        }],
    };

    let mut app = Application::new("automatic");
    app.packages.insert("std_msgs".to_string());
    app.executors = Some(vec![executor("Foo", vec![sensor, controller])]);
    app
}
