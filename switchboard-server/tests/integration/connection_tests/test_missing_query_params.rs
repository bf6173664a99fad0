use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer};

#[tokio::test]
async fn test_missing_query_params() {
    init_tracing();

    let server = TestServer::spawn().await.expect("Failed to start server");
    let url = format!("ws://{}/ws", server.addr);

    let mut first = TestClient::connect_url(&url, "first")
        .await
        .expect("Failed to connect without parameters");
    let first_id = first.recv_welcome().await.expect("No WELCOME");
    let joined = first.recv_joined().await.expect("No USER_JOINED");
    assert_eq!(joined.username, "");

    // Both land in the room named "".
    let mut second = TestClient::connect_url(&url, "second")
        .await
        .expect("Failed to connect without parameters");
    second.recv_welcome().await.expect("No WELCOME");
    let joined = second.recv_joined().await.expect("No USER_JOINED");
    assert_eq!(joined.clients.len(), 2);

    let announced = first.recv_joined().await.expect("First never saw second join");
    assert!(announced.clients.iter().any(|c| c.socket_id == first_id));
    server
        .wait_for_members("", 2)
        .await
        .expect("Empty room id was not used");
}

#[tokio::test]
async fn test_repeated_query_params_use_first_value() {
    init_tracing();

    let server = TestServer::spawn().await.expect("Failed to start server");
    let url = format!("ws://{}/ws?roomId=a&roomId=b&username=x&username=y", server.addr);

    let mut client = TestClient::connect_url(&url, "x")
        .await
        .expect("Repeated parameters were rejected");
    let socket_id = client.recv_welcome().await.expect("No WELCOME");
    let joined = client.recv_joined().await.expect("No USER_JOINED");

    assert_eq!(joined.socket_id, socket_id);
    assert_eq!(joined.username, "x");
    server
        .wait_for_members("a", 1)
        .await
        .expect("Client did not land in the first room");
    assert_eq!(server.service.registry().member_count(&"b".into()), 0);
}
