//! Integration tests for the socket broker

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};

use blockie_broker::{Broker, BrokerError, ACK};

fn socket_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("blockie_talkie_comm")
}

async fn connect_when_ready(path: &Path) -> UnixStream {
    for _ in 0..100 {
        if let Ok(stream) = UnixStream::connect(path).await {
            return stream;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("broker did not come up at {}", path.display());
}

async fn read_ack(stream: &mut UnixStream) -> Vec<u8> {
    let mut ack = vec![0u8; ACK.len()];
    stream.read_exact(&mut ack).await.unwrap();
    ack
}

#[tokio::test]
async fn startup_succeeds_over_stale_socket_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = socket_path(&dir);

    // Leftover from a crashed prior run.
    std::fs::write(&path, b"stale").unwrap();

    let broker = Broker::new(&path);
    let listener = broker.bind().await.expect("stale file should be cleared");
    drop(listener);
}

#[tokio::test]
async fn startup_fails_when_path_is_held_by_a_live_listener() {
    let dir = tempfile::tempdir().unwrap();
    let path = socket_path(&dir);

    let _holder = UnixListener::bind(&path).unwrap();

    let broker = Broker::new(&path);
    match broker.bind().await {
        Err(BrokerError::Bind { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected bind error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn client_gets_one_ack_per_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = socket_path(&dir);
    let broker = Broker::new(&path);
    tokio::spawn(async move { broker.run().await });

    let mut client = connect_when_ready(&path).await;

    client.write_all(b"hello").await.unwrap();
    assert_eq!(read_ack(&mut client).await, ACK);

    client.write_all(b"name=Bob").await.unwrap();
    assert_eq!(read_ack(&mut client).await, ACK);
}

#[tokio::test]
async fn concurrent_clients_each_see_only_their_own_acks() {
    let dir = tempfile::tempdir().unwrap();
    let path = socket_path(&dir);
    let broker = Broker::new(&path);
    tokio::spawn(async move { broker.run().await });

    let mut first = connect_when_ready(&path).await;
    let mut second = connect_when_ready(&path).await;

    // Interleave writes across the two sessions.
    first.write_all(b"from first").await.unwrap();
    second.write_all(b"from second").await.unwrap();
    assert_eq!(read_ack(&mut second).await, ACK);
    assert_eq!(read_ack(&mut first).await, ACK);

    first.write_all(b"again").await.unwrap();
    assert_eq!(read_ack(&mut first).await, ACK);

    // Neither stream carries anything beyond its own acks: a read after
    // closing the write half hits end of stream, not a stray ack.
    second.shutdown().await.unwrap();
    let mut rest = Vec::new();
    second.read_to_end(&mut rest).await.unwrap();
    assert!(rest.is_empty());
}

#[tokio::test]
async fn sessions_survive_a_sibling_disconnect() {
    let dir = tempfile::tempdir().unwrap();
    let path = socket_path(&dir);
    let broker = Broker::new(&path);
    tokio::spawn(async move { broker.run().await });

    let mut stayer = connect_when_ready(&path).await;
    let leaver = connect_when_ready(&path).await;
    drop(leaver);

    stayer.write_all(b"still here").await.unwrap();
    assert_eq!(read_ack(&mut stayer).await, ACK);
}

#[tokio::test]
async fn broker_accepts_sequential_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = socket_path(&dir);
    let broker = Broker::new(&path);
    tokio::spawn(async move { broker.run().await });

    for i in 0..5 {
        let mut client = connect_when_ready(&path).await;
        client
            .write_all(format!("message {i}").as_bytes())
            .await
            .unwrap();
        assert_eq!(read_ack(&mut client).await, ACK);
    }
}
