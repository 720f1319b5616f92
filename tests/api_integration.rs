//! Integration tests against a mock ECSM API server.
//!
//! Exercises the full stack — high-level client, request builder, envelope
//! decoding, pagination traversal — over real HTTP using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ecsm_client::prelude::*;

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "status": 200, "message": "success", "data": data })
}

async fn test_client(server: &MockServer) -> EcsmClient {
    EcsmClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client build")
}

fn summary_page(ids: &[&str], total: u64, page_num: u32, page_size: u32) -> serde_json::Value {
    let rows: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "name": format!("svc-{id}"),
                "status": "running",
                "createdTime": "2024-01-01T00:00:00Z",
                "updatedTime": "2024-01-02T00:00:00Z",
            })
        })
        .collect();
    envelope(json!({
        "total": total,
        "pageNum": page_num,
        "pageSize": page_size,
        "list": rows,
    }))
}

#[tokio::test]
async fn list_all_walks_every_page_exactly_once() {
    let server = MockServer::start().await;

    // 5 services at page size 2: exactly three requests, pages 1..=3.
    Mock::given(method("GET"))
        .and(path("/service"))
        .and(query_param("pageNum", "1"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_page(&["a", "b"], 5, 1, 2)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/service"))
        .and(query_param("pageNum", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_page(&["c", "d"], 5, 2, 2)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/service"))
        .and(query_param("pageNum", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_page(&["e"], 5, 3, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let opts = ListServicesOptions {
        page: PageQuery::new(1, 2),
        ..Default::default()
    };
    let all = client.services().list_all(opts).await.expect("list_all");

    let ids: Vec<_> = all.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);

    server.verify().await;
}

#[tokio::test]
async fn list_all_ignores_caller_page_number_and_starts_at_one() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service"))
        .and(query_param("pageNum", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_page(&["a"], 1, 1, 10)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let opts = ListServicesOptions {
        page: PageQuery::new(7, 10),
        ..Default::default()
    };
    let all = client.services().list_all(opts).await.expect("list_all");
    assert_eq!(all.len(), 1);

    server.verify().await;
}

#[tokio::test]
async fn config_list_all_stops_on_a_short_page() {
    let server = MockServer::start().await;

    // The configmap listing returns a bare array, no total. Three items at
    // page size 2: a full page then a short one, two requests in all.
    let item = |id: &str| json!({ "id": id, "key": format!("k-{id}"), "type": "string", "value": "v" });

    Mock::given(method("GET"))
        .and(path("/configmap"))
        .and(query_param("pageNum", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([item("1"), item("2")]))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/configmap"))
        .and(query_param("pageNum", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([item("3")]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let opts = ListConfigsOptions {
        page: PageQuery::new(1, 2),
        key: None,
    };
    let all = client.configs().list_all(opts).await.expect("list_all");

    assert_eq!(all.len(), 3);
    assert_eq!(all[2].key, "k-3");

    server.verify().await;
}

#[tokio::test]
async fn get_decodes_the_service_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/svc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": "svc-1",
            "name": "edge-gateway",
            "status": "running",
            "policy": "dynamic",
            "factor": 3,
            "createdTime": "2024-01-01T00:00:00Z",
            "updatedTime": "2024-01-02T00:00:00Z",
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let service = client.services().get("svc-1").await.expect("get");

    assert_eq!(service.name, "edge-gateway");
    assert_eq!(service.factor, Some(3));

    server.verify().await;
}

#[tokio::test]
async fn envelope_domain_error_surfaces_as_remote() {
    let server = MockServer::start().await;

    // HTTP 200, but the envelope reports a domain failure.
    Mock::given(method("GET"))
        .and(path("/service/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 1404,
            "message": "service not found",
        })))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let err = client.services().get("missing").await.unwrap_err();

    match err {
        EcsmError::Remote { code, message } => {
            assert_eq!(code, 1404);
            assert_eq!(message, "service not found");
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn http_404_surfaces_as_remote_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "message": "not found",
        })))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let err = client.services().get("gone").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn validation_failure_issues_no_request() {
    let server = MockServer::start().await;

    // Catch-all mock: any request reaching the server fails the test.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server).await;

    let err = client
        .configs()
        .create(&CreateConfigRequest {
            key: "max-retries".to_string(),
            kind: ConfigKind::Number,
            value: json!("not a number"),
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client
        .services()
        .control_by_id(&["svc-1".to_string()], "explode")
        .await
        .unwrap_err();
    assert!(err.is_validation());

    server.verify().await;
}

#[tokio::test]
async fn config_create_sends_the_declared_kind_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/configmap"))
        .and(body_json(json!({
            "key": "feature-flags",
            "type": "json",
            "value": { "beta": true },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    client
        .configs()
        .create(&CreateConfigRequest {
            key: "feature-flags".to_string(),
            kind: ConfigKind::Json,
            value: json!({ "beta": true }),
        })
        .await
        .expect("create");

    server.verify().await;
}

#[tokio::test]
async fn redeploy_accepts_a_payload_free_success() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/service/deployment/restart"))
        .and(body_json(json!({ "id": "svc-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "success",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    client.services().redeploy("svc-1").await.expect("redeploy");

    server.verify().await;
}

#[tokio::test]
async fn consistent_master_slave_update_reaches_the_wire() {
    let server = MockServer::start().await;

    // masterSlave with a detail entry is the one accepted combination; the
    // request must actually go out.
    Mock::given(method("PUT"))
        .and(path("/micro-service"))
        .and(body_json(json!({
            "id": "ms-1",
            "loadBalance": "masterSlave",
            "loadBalanceDetail": [{ "master": "node-a", "id": "task-1" }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "success",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    client
        .micro_services()
        .update(&UpdateMicroServiceRequest {
            id: "ms-1".to_string(),
            load_balance: "masterSlave".to_string(),
            load_balance_detail: vec![LoadBalanceDetail {
                master: "node-a".to_string(),
                task_id: "task-1".to_string(),
            }],
        })
        .await
        .expect("update");

    server.verify().await;
}

#[tokio::test]
async fn raw_rest_requests_expose_the_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!({ "version": "1.4.2" }))),
        )
        .mount(&server)
        .await;

    // Endpoints outside the typed surface go through the escape hatch.
    let client = test_client(&server).await;
    let resp = client
        .rest()
        .get()
        .resource("version")
        .send()
        .await
        .expect("send");

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.decode().expect("decode");
    assert_eq!(body["version"], "1.4.2");
}

#[tokio::test]
async fn validate_name_inverts_server_side_existence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/name/check"))
        .and(query_param("name", "taken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(true))))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let outcome = client
        .services()
        .validate_name(&ValidateNameOptions {
            name: "taken".to_string(),
            id: None,
        })
        .await
        .expect("validate_name");

    assert!(!outcome.is_valid);
    assert!(outcome.message.unwrap().contains("taken"));
}

#[tokio::test]
async fn list_filters_are_sent_only_when_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service"))
        .and(query_param("nodeId", "node-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_page(&["a"], 1, 1, 10)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let page = client
        .services()
        .list(ListServicesOptions {
            page: PageQuery::new(1, 10),
            node_id: Some("node-9".to_string()),
            ..Default::default()
        })
        .await
        .expect("list");

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, "a");

    server.verify().await;
}
