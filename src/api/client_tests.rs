//! Tests for `ZeroTierClient`.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use super::{ApiError, ApiToken, ZeroTierClient};
use crate::model::Network;
use crate::transport::mock::MockClient;

const NET_A: &str = "8056c2e21c000001";
const NET_B: &str = "8056c2e21c000002";

fn client(mock: MockClient) -> (ZeroTierClient<Arc<MockClient>>, Arc<MockClient>) {
    let mock = mock.shared();
    let client = ZeroTierClient::new(
        Arc::clone(&mock),
        Url::parse("https://api.test/api").unwrap(),
        ApiToken::new("test-token").unwrap(),
    );
    (client, mock)
}

fn network_json(id: &str, name: &str) -> serde_json::Value {
    json!({"id": id, "description": format!("{name} network"), "config": {"name": name, "private": true}})
}

fn member_json(node_id: &str, name: &str, online: bool) -> serde_json::Value {
    json!({
        "networkId": NET_A,
        "nodeId": node_id,
        "name": name,
        "online": online,
        "config": {"authorized": true, "ipAssignments": ["10.0.0.1"]}
    })
}

fn member_path(node_id: &str) -> String {
    format!("/api/network/{NET_A}/member/{node_id}")
}

/// Mock serving NET_A with members listed in the given order.
fn members_mock(members: &[(&str, &str, bool)]) -> MockClient {
    let collection: Vec<_> = members
        .iter()
        .map(|(id, _, _)| json!({"nodeId": id, "config": {"address": id}}))
        .collect();
    let mut mock = MockClient::new().with_json(
        &format!("/api/network/{NET_A}/member"),
        &serde_json::Value::Array(collection),
    );
    for (id, name, online) in members {
        mock = mock.with_json(&member_path(id), &member_json(id, name, *online));
    }
    mock
}

mod get_json {
    use super::*;

    #[tokio::test]
    async fn sends_accept_and_bearer_headers() {
        let (client, mock) = client(MockClient::new().with_json("/api/network", &json!([])));

        client.list_networks().await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.method, http::Method::GET);
        assert_eq!(req.url.as_str(), "https://api.test/api/network");
        assert_eq!(req.headers.get(http::header::ACCEPT).unwrap(), "application/json");
        assert_eq!(
            req.headers.get(http::header::AUTHORIZATION).unwrap(),
            "Bearer test-token"
        );
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_error() {
        let (client, _) = client(MockClient::new().with_connection_failure("/api/network"));

        let err = client.list_networks().await.unwrap_err();

        assert!(matches!(err, ApiError::Request { .. }));
        assert!(err.is_request_error());
        assert_eq!(err.endpoint(), "/network");
    }

    #[tokio::test]
    async fn non_200_with_valid_body_is_a_server_error() {
        let (client, _) = client(MockClient::new().with_response(
            &format!("/api/network/{NET_A}"),
            http::StatusCode::FORBIDDEN,
            network_json(NET_A, "home").to_string(),
        ));

        let err = client.get_network_details(NET_A).await.unwrap_err();

        assert_eq!(err.status(), Some(http::StatusCode::FORBIDDEN));
        assert!(!err.is_request_error());
        assert_eq!(err.to_string(), "Request returned error 403 Forbidden");
    }

    #[tokio::test]
    async fn non_200_with_garbage_body_is_still_a_server_error() {
        let (client, _) = client(MockClient::new().with_response(
            "/api/network",
            http::StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>",
        ));

        let err = client.list_networks().await.unwrap_err();

        assert_eq!(err.status(), Some(http::StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn other_2xx_statuses_are_server_errors() {
        let (client, _) = client(MockClient::new().with_response(
            "/api/network",
            http::StatusCode::ACCEPTED,
            "[]",
        ));

        let err = client.list_networks().await.unwrap_err();

        assert_eq!(err.status(), Some(http::StatusCode::ACCEPTED));
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let (client, _) = client(MockClient::new().with_response(
            "/api/network",
            http::StatusCode::OK,
            "[{\"id\": ",
        ));

        let err = client.list_networks().await.unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.is_request_error());
    }

    #[tokio::test]
    async fn empty_body_is_an_empty_body_error() {
        let (client, _) = client(MockClient::new().with_response(
            &format!("/api/network/{NET_A}"),
            http::StatusCode::OK,
            "  \n",
        ));

        let err = client.get_network_details(NET_A).await.unwrap_err();

        assert!(matches!(err, ApiError::EmptyBody { .. }));
    }

    #[tokio::test]
    async fn concatenated_values_decode_until_end_of_input() {
        let body = format!(
            "{}\n{}",
            network_json(NET_A, "first"),
            network_json(NET_A, "second")
        );
        let (client, _) = client(MockClient::new().with_response(
            &format!("/api/network/{NET_A}"),
            http::StatusCode::OK,
            body,
        ));

        let network = client.get_network_details(NET_A).await.unwrap();

        assert_eq!(network.name(), "second");
    }
}

mod list_networks {
    use super::*;

    #[tokio::test]
    async fn indexes_networks_by_id_and_name() {
        let (client, _) = client(MockClient::new().with_json(
            "/api/network",
            &json!([network_json(NET_A, "home"), network_json(NET_B, "office")]),
        ));

        let list = client.list_networks().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.ids(), vec![NET_A, NET_B]);
        assert_eq!(list.by_name("office").unwrap().id, NET_B);
        assert_eq!(list.by_id(NET_A).unwrap().description, "home network");
    }

    #[tokio::test]
    async fn unauthorized_token_is_a_server_error() {
        let (client, _) = client(MockClient::new().with_response(
            "/api/network",
            http::StatusCode::UNAUTHORIZED,
            r#"{"type":"error","message":"unauthorized"}"#,
        ));

        let err = client.list_networks().await.unwrap_err();

        assert_eq!(err.status(), Some(http::StatusCode::UNAUTHORIZED));
    }
}

mod single_entities {
    use super::*;

    #[tokio::test]
    async fn get_network_details_fetches_every_time() {
        let (client, mock) = client(
            MockClient::new().with_json(&format!("/api/network/{NET_A}"), &network_json(NET_A, "home")),
        );

        let first = client.get_network_details(NET_A).await.unwrap();
        let second = client.get_network_details(NET_A).await.unwrap();

        assert_eq!(first, second);
        assert!(first.config.private);
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn unknown_network_is_a_not_found_server_error() {
        let (client, _) = client(MockClient::new());

        let err = client.get_network_details("ffffffffffffffff").await.unwrap_err();

        assert_eq!(err.status(), Some(http::StatusCode::NOT_FOUND));
        assert_eq!(err.endpoint(), "/network/ffffffffffffffff");
    }

    #[tokio::test]
    async fn get_network_members_returns_raw_entries() {
        let (client, _) = client(members_mock(&[("a1", "alpha", true), ("b2", "bravo", false)]));

        let entries = client.get_network_members(NET_A).await.unwrap();

        let addresses: Vec<_> = entries.iter().map(|e| e.address().unwrap()).collect();
        assert_eq!(addresses, vec!["a1", "b2"]);
    }

    #[tokio::test]
    async fn get_member_detail_decodes_member() {
        let (client, mock) = client(members_mock(&[("a1", "alpha", true)]));

        let member = client.get_member_detail(NET_A, "a1").await.unwrap();

        assert_eq!(member.name, "alpha");
        assert_eq!(member.network_id, NET_A);
        assert_eq!(mock.paths(), vec![member_path("a1")]);
    }
}

mod member_details {
    use super::*;

    fn network() -> Network {
        Network::new(NET_A, "home", "")
    }

    fn names(members: &[crate::model::NetworkMember]) -> Vec<&str> {
        members.iter().map(|m| m.name.as_str()).collect()
    }

    #[tokio::test]
    async fn resolves_and_sorts_by_name() {
        let (client, _) = client(members_mock(&[
            ("c3", "charlie", true),
            ("a1", "alpha", false),
            ("b2", "bravo", true),
        ]));

        let members = client.get_network_member_details(&network(), false).await;

        assert_eq!(names(&members), vec!["alpha", "bravo", "charlie"]);
    }

    #[tokio::test]
    async fn equal_names_keep_fetch_order() {
        let (client, _) = client(members_mock(&[
            ("n2", "dup", true),
            ("n1", "dup", true),
            ("n0", "aaa", true),
        ]));

        let members = client.get_network_member_details(&network(), false).await;

        let ids: Vec<_> = members.iter().map(|m| m.node_id.as_str()).collect();
        assert_eq!(ids, vec!["n0", "n2", "n1"]);
    }

    #[tokio::test]
    async fn online_only_excludes_exactly_the_offline_members() {
        let (client, _) = client(members_mock(&[
            ("a1", "alpha", true),
            ("b2", "bravo", false),
            ("c3", "charlie", true),
            ("d4", "delta", false),
        ]));

        let online = client.get_network_member_details(&network(), true).await;
        let all = client.get_network_member_details(&network(), false).await;

        assert_eq!(names(&online), vec!["alpha", "charlie"]);
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn collection_failure_yields_empty_list() {
        let (client, _) = client(MockClient::new());

        let members = client.get_network_member_details(&network(), false).await;

        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn failed_member_is_skipped() {
        let mock = members_mock(&[("a1", "alpha", true), ("b2", "bravo", true)]).with_response(
            &member_path("b2"),
            http::StatusCode::INTERNAL_SERVER_ERROR,
            "{}",
        );
        let (client, _) = client(mock);

        let members = client.get_network_member_details(&network(), false).await;

        assert_eq!(names(&members), vec!["alpha"]);
    }

    #[tokio::test]
    async fn failed_member_is_skipped_when_online_only() {
        let mock = members_mock(&[("a1", "alpha", true), ("b2", "bravo", true)])
            .with_connection_failure(&member_path("a1"));
        let (client, _) = client(mock);

        let members = client.get_network_member_details(&network(), true).await;

        assert_eq!(names(&members), vec!["bravo"]);
    }

    #[tokio::test]
    async fn malformed_entry_is_skipped() {
        let mock = MockClient::new()
            .with_json(
                &format!("/api/network/{NET_A}/member"),
                &json!([{"nodeId": "x"}, {"config": {"address": "a1"}}]),
            )
            .with_json(&member_path("a1"), &member_json("a1", "alpha", true));
        let (client, mock) = client(mock);

        let members = client.get_network_member_details(&network(), false).await;

        assert_eq!(names(&members), vec!["alpha"]);
        assert_eq!(mock.requests().len(), 2);
    }
}
