use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn test_missing_fields_do_not_end_the_session() {
    init_tracing();

    let server = TestServer::spawn().await.expect("Failed to start server");
    let (mut alice, _) = server.join("room", "Alice").await.expect("Alice failed to join");

    alice.send_raw("{}").await.expect("Failed to send frame");
    let msg = alice.recv_relay().await.expect("Empty envelope not broadcast");
    assert_eq!(msg.action, "");
    assert!(msg.payload.is_empty());

    alice
        .send_raw(r#"{"action":"WEBRTC_OFFER","payload":"not an object"}"#)
        .await
        .expect("Failed to send frame");
    alice.expect_silence().await.expect("Offer without target was delivered");

    assert_eq!(server.service.registry().member_count(&"room".into()), 1);
    alice
        .send_action("USER_STOPPED_SPEAKING", json!({}))
        .await
        .expect("Failed to send frame");
    assert_eq!(
        alice.recv_relay().await.expect("Session died").action,
        "USER_STOPPED_SPEAKING"
    );
}

#[tokio::test]
async fn test_undecodable_frame_ends_the_session() {
    init_tracing();

    let server = TestServer::spawn().await.expect("Failed to start server");
    let (mut alice, alice_id) = server.join("room", "Alice").await.expect("Alice failed to join");
    let (mut bob, _) = server.join("room", "Bob").await.expect("Bob failed to join");
    alice.recv_joined().await.expect("Alice missed Bob");

    alice.send_raw("this is not json").await.expect("Failed to send frame");

    let left = bob.recv_left().await.expect("Bob never saw Alice leave");
    assert_eq!(left.socket_id, alice_id);
    assert_eq!(left.clients.len(), 1);
    server
        .wait_for_members("room", 1)
        .await
        .expect("Alice was not removed");
}
