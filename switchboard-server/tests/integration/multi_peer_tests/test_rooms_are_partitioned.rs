use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn test_rooms_are_partitioned() {
    init_tracing();

    let server = TestServer::spawn().await.expect("Failed to start server");
    let (mut red, _) = server.join("red", "Alice").await.expect("Alice failed to join");
    let (mut blue, blue_id) = server.join("blue", "Bob").await.expect("Bob failed to join");

    // Joining blue is invisible from red.
    red.expect_silence().await.expect("Red saw a blue join");

    // Room ids are case-sensitive.
    let (mut upper_red, _) = server.join("RED", "Carol").await.expect("Carol failed to join");
    red.expect_silence().await.expect("'red' saw a 'RED' join");

    // Broadcasts stay in their room.
    red.send_action("CODE_CHANGE", json!({ "code": "red" }))
        .await
        .expect("Failed to broadcast");
    assert_eq!(red.recv_relay().await.expect("No echo").payload_str("code"), "red");
    blue.expect_silence().await.expect("Blue saw a red broadcast");
    upper_red.expect_silence().await.expect("RED saw a red broadcast");

    // Targeted messages cannot cross rooms, even with a valid socketId.
    red.send_action("WEBRTC_OFFER", json!({ "socketId": blue_id.to_string() }))
        .await
        .expect("Failed to send offer");
    blue.expect_silence().await.expect("Offer crossed rooms");

    // Leaving is invisible across rooms too.
    upper_red.close().await.expect("Failed to close Carol");
    red.expect_silence().await.expect("'red' saw a 'RED' leave");

    server.wait_for_members("red", 1).await.expect("red changed");
    server.wait_for_members("blue", 1).await.expect("blue changed");
    server.wait_for_members("RED", 0).await.expect("RED not emptied");
}
