//! One provider instance serving overlapping requests.

use std::sync::{Arc, Mutex};

use crate::io::InMemoryIo;
use crate::notify::RecordingNotifier;
use crate::provider::{DataPayload, DataProvider, ParseOptions, SaveStatus, TextDataProvider};
use crate::registry::ProviderRegistry;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_provider_completes_each_concurrent_request_once() {
    let io = InMemoryIo::new()
        .with_file("a.csv", "a\n1")
        .with_file("b.tsv", "b\t2");
    let notifier = RecordingNotifier::new();
    let provider: Arc<dyn DataProvider> = Arc::new(TextDataProvider::new(
        Arc::new(io.clone()),
        Arc::new(notifier.clone()),
    ));
    let registry = ProviderRegistry::new()
        .with_provider(provider.clone())
        .unwrap();
    let options = ParseOptions::new();
    let payload = DataPayload::from("x,y");

    let (a, b, missing, saved) = tokio::join!(
        registry.get_data("a.csv", &options),
        registry.get_data("b.tsv", &options),
        registry.get_data("missing.txt", &options),
        registry.save_data("out.csv", &payload, None),
    );

    assert_eq!(a.unwrap().as_text(), Some("a\n1"));
    assert_eq!(b.unwrap().as_text(), Some("b\t2"));
    assert_eq!(missing.unwrap().as_text(), Some(""));
    assert_eq!(saved.unwrap(), SaveStatus::Written);

    assert_eq!(io.write_count(), 1);
    assert_eq!(io.contents_string("out.csv").as_deref(), Some("x,y"));
    assert_eq!(notifier.errors().len(), 1);
    assert_eq!(notifier.notifications().len(), 1);
    let resolved = registry.provider_for("b.tsv").unwrap();
    assert!(Arc::ptr_eq(&resolved, &provider));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn callbacks_fire_once_per_spawned_request() {
    let io = InMemoryIo::new().with_file("data.csv", "k,v");
    let registry = Arc::new(
        ProviderRegistry::new()
            .with_provider(Arc::new(TextDataProvider::new(
                Arc::new(io.clone()),
                Arc::new(RecordingNotifier::new()),
            )))
            .unwrap(),
    );
    let loads: Arc<Mutex<Vec<DataPayload>>> = Arc::default();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = registry.clone();
        let sink = loads.clone();
        handles.push(tokio::spawn(async move {
            registry
                .load_with("data.csv", &ParseOptions::new(), move |payload| {
                    sink.lock().unwrap().push(payload)
                })
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let loads = loads.lock().unwrap();
    assert_eq!(loads.len(), 8);
    assert!(loads.iter().all(|p| p.as_text() == Some("k,v")));
}
