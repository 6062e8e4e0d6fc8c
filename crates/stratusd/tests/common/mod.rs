use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use stratus_cloud::{MemoryStore, ProvisioningModel};
use stratusd::{Handler, TemplateWorkflow};

/// The workflow templates shipped with the workspace
#[allow(dead_code)]
pub fn arcs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../arcs")
}

#[allow(dead_code)]
pub fn handler(store: Arc<MemoryStore>) -> Handler {
    Handler::new(
        store,
        Arc::new(TemplateWorkflow::new(arcs_dir())),
        Duration::from_secs(1),
    )
}

pub fn datacenter() -> Value {
    json!({
        "name": "dc",
        "type": "aws",
        "region": "eu-west-1",
        "aws_access_key_id": "key",
        "aws_secret_access_key": "secret"
    })
}

/// A valid service: one public network, two web instances and their
/// security group
pub fn service() -> Value {
    json!({
        "name": "svc",
        "datacenter": "dc",
        "vpc_id": "vpc-1",
        "networks": [
            {"name": "web", "subnet": "10.1.0.0/24", "public": true}
        ],
        "instances": [{
            "name": "web",
            "type": "t2.micro",
            "image": "ami-6666f915",
            "count": 2,
            "network": "web",
            "start_ip": "10.1.0.11",
            "security_groups": ["web-sg"]
        }],
        "security_groups": [{
            "name": "web-sg",
            "ingress": [
                {"ip": "any", "from_port": 80, "to_port": 80, "protocol": "tcp"}
            ],
            "egress": [
                {"ip": "any", "from_port": "any", "to_port": "any", "protocol": "any"}
            ]
        }]
    })
}

pub fn payload(id: &str, previous: Option<&str>, service: Value) -> Vec<u8> {
    let mut payload = json!({
        "id": id,
        "datacenter": datacenter(),
        "service": service,
    });
    if let Some(previous) = previous {
        payload["previous_id"] = json!(previous);
    }
    serde_json::to_vec(&payload).unwrap()
}

#[allow(dead_code)]
pub fn parse_model(reply: &str) -> ProvisioningModel {
    ProvisioningModel::from_json(reply.as_bytes()).unwrap()
}

#[allow(dead_code)]
pub fn error_message(reply: &str) -> Option<String> {
    let value: Value = serde_json::from_str(reply).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}
