mod common;

use common::{error_message, handler, payload, service};
use std::io::Cursor;
use std::sync::Arc;
use stratus_cloud::{MemoryStore, ProvisioningModel};
use stratusd::{LineTransport, serve};

fn request(subject: &str, data: &[u8]) -> String {
    let data: serde_json::Value = serde_json::from_slice(data).unwrap();
    serde_json::json!({ "subject": subject, "data": data }).to_string()
}

#[tokio::test]
async fn test_serve_answers_every_line() {
    let input = [
        request("create", &payload("svc-1", None, service())),
        String::new(),
        "garbage".to_string(),
        r#"{"subject": "update", "data": {}}"#.to_string(),
    ]
    .join("\n");

    let handler = handler(Arc::new(MemoryStore::new()));
    let mut transport = LineTransport::new(Cursor::new(input.into_bytes()), Vec::new());

    let handled = serve(&handler, &mut transport).await.unwrap();
    assert_eq!(handled, 3);

    let output = String::from_utf8(transport.into_writer()).unwrap();
    let replies: Vec<&str> = output.lines().collect();
    assert_eq!(replies.len(), 3);

    let model = ProvisioningModel::from_json(replies[0].as_bytes()).unwrap();
    assert_eq!(model.instances.items.len(), 2);

    assert_eq!(
        error_message(replies[1]).as_deref(),
        Some("Failed to parse request.")
    );
    assert_eq!(
        error_message(replies[2]).as_deref(),
        Some("Failed to parse request.")
    );
}

#[tokio::test]
async fn test_serve_empty_input() {
    let handler = handler(Arc::new(MemoryStore::new()));
    let mut transport = LineTransport::new(Cursor::new(Vec::new()), Vec::new());

    assert_eq!(serve(&handler, &mut transport).await.unwrap(), 0);
    assert!(transport.into_writer().is_empty());
}
