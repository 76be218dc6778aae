use async_trait::async_trait;
use rust_decimal::Decimal;
use sgrate_client::schema::StreamSchema;
use sgrate_client::{BroadcastAck, ClientError, StreamClient};
use sgrate_domain::{Child, NormalizedEntry, PrimitiveSourceRecord, StreamInfo};
use sgrate_migration::{MigrationError, MigrationRunner, resolve};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Drop { stream_id: String, sync: bool },
    Deploy { name: String, sync: bool },
}

/// In-memory stand-in for the remote node, recording every call in order.
#[derive(Debug, Default)]
struct FakeClient {
    calls: Mutex<Vec<Call>>,
    fail_on_drop: Option<String>,
    fail_on_deploy: Option<String>,
}

impl FakeClient {
    fn failing_drop(stream_id: &str) -> Self {
        Self { fail_on_drop: Some(stream_id.to_owned()), ..Self::default() }
    }

    fn failing_deploy(stream_id: &str) -> Self {
        Self { fail_on_deploy: Some(stream_id.to_owned()), ..Self::default() }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn rejected(stream_id: &str) -> ClientError {
        ClientError::Rpc { message: format!("node rejected {stream_id}").into(), context: None }
    }
}

#[async_trait]
impl StreamClient for &FakeClient {
    async fn list_streams(&self, _owner: &str) -> Result<Vec<StreamInfo>, ClientError> {
        Ok(Vec::new())
    }

    async fn drop_stream(&self, stream_id: &str, sync: bool) -> Result<BroadcastAck, ClientError> {
        self.calls.lock().unwrap().push(Call::Drop { stream_id: stream_id.to_owned(), sync });
        if self.fail_on_drop.as_deref() == Some(stream_id) {
            return Err(FakeClient::rejected(stream_id));
        }
        Ok(BroadcastAck { tx_hash: format!("drop-{stream_id}") })
    }

    async fn deploy_stream(
        &self,
        schema: &StreamSchema,
        sync: bool,
    ) -> Result<BroadcastAck, ClientError> {
        self.calls.lock().unwrap().push(Call::Deploy { name: schema.name.clone(), sync });
        if self.fail_on_deploy.as_deref() == Some(schema.name.as_str()) {
            return Err(FakeClient::rejected(&schema.name));
        }
        Ok(BroadcastAck { tx_hash: format!("deploy-{}", schema.name) })
    }
}

fn template() -> StreamSchema {
    StreamSchema { name: "template".to_owned(), tables: Vec::new(), procedures: Vec::new() }
}

fn entry(id: &str, children: &[&str]) -> NormalizedEntry {
    NormalizedEntry {
        stream_id: id.to_owned(),
        children: children
            .iter()
            .map(|c| Child { id: (*c).to_owned(), weight: Decimal::ONE })
            .collect(),
    }
}

fn deployed(names: &[&str]) -> Vec<StreamInfo> {
    names.iter().map(|n| StreamInfo { name: (*n).to_owned(), owner: String::new() }).collect()
}

#[tokio::test]
async fn migrates_each_stream_drop_then_deploy_in_order() {
    let client = FakeClient::default();
    let set = resolve(
        vec![entry("p1", &["c1"]), entry("p2", &["c2"])],
        &[],
        &deployed(&["p1", "p2"]),
    )
    .unwrap();

    let report = MigrationRunner::new(&client, template()).run(&set).await.unwrap();

    assert_eq!(
        client.calls(),
        vec![
            Call::Drop { stream_id: "p1".into(), sync: true },
            Call::Deploy { name: "p1".into(), sync: true },
            Call::Drop { stream_id: "p2".into(), sync: true },
            Call::Deploy { name: "p2".into(), sync: true },
        ]
    );
    assert_eq!(report.migrated.len(), 2);
    assert_eq!(report.migrated[0].drop_tx, "drop-p1");
    assert_eq!(report.migrated[1].deploy_tx, "deploy-p2");
}

#[tokio::test]
async fn drop_failure_aborts_before_later_streams_are_touched() {
    let client = FakeClient::failing_drop("p2");
    let set = resolve(
        vec![entry("p1", &[]), entry("p2", &[]), entry("p3", &[])],
        &[],
        &deployed(&["p1", "p2", "p3"]),
    )
    .unwrap();

    let err = MigrationRunner::new(&client, template()).run(&set).await.unwrap_err();

    assert!(matches!(err, MigrationError::Client { .. }));
    // p1 fully migrated, p2 failed at drop, p3 never attempted.
    assert_eq!(
        client.calls(),
        vec![
            Call::Drop { stream_id: "p1".into(), sync: true },
            Call::Deploy { name: "p1".into(), sync: true },
            Call::Drop { stream_id: "p2".into(), sync: true },
        ]
    );
}

#[tokio::test]
async fn deploy_failure_aborts_without_rollback() {
    let client = FakeClient::failing_deploy("p2");
    let set = resolve(
        vec![entry("p1", &[]), entry("p2", &[]), entry("p3", &[])],
        &[],
        &deployed(&["p1", "p2", "p3"]),
    )
    .unwrap();

    let err = MigrationRunner::new(&client, template()).run(&set).await.unwrap_err();

    assert!(err.to_string().contains("p2"));
    let calls = client.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[3], Call::Deploy { name: "p2".into(), sync: true });
}

#[tokio::test]
async fn primitive_records_run_through_the_same_pipeline() {
    let client = FakeClient::default();
    let records = vec![
        PrimitiveSourceRecord {
            stream_id: "stream_a".into(),
            source_type: "api".into(),
            source_id: "src-1".into(),
            update_frequency: 3600,
        },
        PrimitiveSourceRecord {
            stream_id: "stream_b".into(),
            source_type: "api".into(),
            source_id: "src-2".into(),
            update_frequency: 86_400,
        },
    ];
    let set = resolve(records, &["stream_b".to_owned()], &deployed(&["stream_a", "stream_b"]))
        .unwrap();

    let report = MigrationRunner::new(&client, template()).run(&set).await.unwrap();

    assert_eq!(report.migrated.len(), 1);
    assert_eq!(report.migrated[0].stream_id, "stream_b");
    assert_eq!(
        client.calls(),
        vec![
            Call::Drop { stream_id: "stream_b".into(), sync: true },
            Call::Deploy { name: "stream_b".into(), sync: true },
        ]
    );
}
