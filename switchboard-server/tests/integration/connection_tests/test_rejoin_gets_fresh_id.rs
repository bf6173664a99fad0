use crate::integration::init_tracing;
use crate::utils::TestServer;
use std::collections::HashSet;

#[tokio::test]
async fn test_rejoin_gets_fresh_id() {
    init_tracing();

    let server = TestServer::spawn().await.expect("Failed to start server");
    let mut seen = HashSet::new();

    for _ in 0..5 {
        let (client, socket_id) = server.join("room", "Alice").await.expect("Join failed");
        assert!(seen.insert(socket_id), "socketId {socket_id} was reused");

        client.close().await.expect("Failed to close client");
        server
            .wait_for_members("room", 0)
            .await
            .expect("Leave was not processed");
    }
}
