use crate::common;
use httpmock::Method::GET;

#[tokio::test]
async fn clients_with_different_tokens_keep_separate_sessions() {
    let server = common::setup_server();
    let auth_a = common::mock_auth(&server, "token-a", "jwt-a");
    let auth_b = common::mock_auth(&server, "token-b", "jwt-b");

    let accounts_a = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/account")
            .header("authorization", common::bearer("jwt-a"));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"accounts":[{"id":"a-only"}],"transactionCount":1}"#);
    });
    let accounts_b = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/account")
            .header("authorization", common::bearer("jwt-b"));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"accounts":[{"id":"b-only"}],"transactionCount":7}"#);
    });

    let a = common::client_for(&server, "token-a");
    let b = common::client_for(&server, "token-b");

    let first_a = a.accounts().await.unwrap();
    let first_b = b.accounts().await.unwrap();
    let second_a = a.accounts().await.unwrap();

    assert_eq!(first_a.accounts[0].id, "a-only");
    assert_eq!(first_b.accounts[0].id, "b-only");
    assert_eq!(first_b.transaction_count, Some(7));
    assert_eq!(second_a, first_a);

    assert_eq!(auth_a.hits(), 1);
    assert_eq!(auth_b.hits(), 1);
    assert_eq!(accounts_a.hits(), 2);
    assert_eq!(accounts_b.hits(), 1);
}

#[tokio::test]
async fn clients_on_different_hosts_do_not_interfere() {
    let server_a = common::setup_server();
    let server_b = common::setup_server();
    let auth_a = common::mock_auth(&server_a, common::TOKEN, "jwt-a");
    let auth_b = common::mock_auth(&server_b, common::TOKEN, "jwt-b");
    for (server, jwt) in [(&server_a, "jwt-a"), (&server_b, "jwt-b")] {
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/portfolio/details")
                .header("authorization", common::bearer(jwt));
            then.status(200)
                .header("content-type", "application/json")
                .body(common::fixture("details"));
        });
    }

    let a = common::client_for(&server_a, common::TOKEN);
    let b = common::client_for(&server_b, common::TOKEN);
    a.details().await.unwrap();
    b.details().await.unwrap();

    assert_eq!(auth_a.hits(), 1);
    assert_eq!(auth_b.hits(), 1);
}
