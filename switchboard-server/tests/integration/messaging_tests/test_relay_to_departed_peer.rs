use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn test_relay_to_departed_peer() {
    init_tracing();

    let server = TestServer::spawn().await.expect("Failed to start server");
    let (mut alice, _) = server.join("call", "Alice").await.expect("Alice failed to join");
    let (bob, bob_id) = server.join("call", "Bob").await.expect("Bob failed to join");
    alice.recv_joined().await.expect("Alice missed Bob");

    bob.close().await.expect("Failed to close Bob");
    alice.recv_left().await.expect("Alice missed Bob leaving");

    alice
        .send_action("WEBRTC_OFFER", json!({ "socketId": bob_id.to_string(), "sdp": "v=0" }))
        .await
        .expect("Failed to send offer");
    alice
        .send_action("WEBRTC_OFFER", json!({ "socketId": "no-such-peer" }))
        .await
        .expect("Failed to send offer");

    // No error comes back, and the session stays usable.
    alice.expect_silence().await.expect("Alice got a reply to a dropped offer");
    alice
        .send_action("USER_SPEAKING", json!({}))
        .await
        .expect("Failed to send presence");
    let echo = alice.recv_relay().await.expect("Alice's session died");
    assert_eq!(echo.action, "USER_SPEAKING");
}
