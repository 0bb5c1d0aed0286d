use std::sync::Arc;

use serde_json::json;

use crate::io::InMemoryIo;
use crate::notify::RecordingNotifier;
use crate::provider::{
    DataPayload, DataProvider, ParseOptions, StructuredDataProvider, StructuredKind,
};

fn make_yaml_provider(io: &InMemoryIo) -> (StructuredDataProvider, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let provider = StructuredDataProvider::new(
        StructuredKind::Yaml,
        Arc::new(io.clone()),
        Arc::new(notifier.clone()),
    );
    (provider, notifier)
}

#[tokio::test]
async fn yaml_get_data_decodes_mapping() {
    let io = InMemoryIo::new().with_file("cfg.yml", "name: a\nvalue: 1\n");
    let (provider, notifier) = make_yaml_provider(&io);

    let payload = provider.get_data("cfg.yml", &ParseOptions::new()).await;

    assert_eq!(payload, DataPayload::Structured(json!({"name": "a", "value": 1})));
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn yaml_save_then_load_preserves_value() {
    let io = InMemoryIo::new();
    let (provider, _) = make_yaml_provider(&io);
    let value = json!({"rows": [1, 2, 3]});

    provider
        .save_data("out.yaml", &DataPayload::from(value.clone()), None)
        .await
        .expect("save should succeed");
    let loaded = provider.get_data("out.yaml", &ParseOptions::new()).await;

    assert_eq!(loaded.as_structured(), Some(&value));
}

#[test]
fn yaml_provider_owns_both_extensions() {
    let (provider, _) = make_yaml_provider(&InMemoryIo::new());
    assert_eq!(provider.extensions(), &[".yaml", ".yml"]);
}
