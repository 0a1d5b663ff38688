//! Integration tests for paginated label listings.
//!
//! These tests verify the cursor's laziness (no request before the first
//! advancement), the page-size hint on the first request, the Link-header
//! walk across pages, termination after the final page, and per-item decode
//! failure isolation.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tracker_api::{Credentials, Milestone, ResourceError, Session};

const MILESTONE_PATH: &str = "/repos/octocat/hello-world/milestones/1";
const LABELS_PATH: &str = "/repos/octocat/hello-world/milestones/1/labels";

fn milestone_json(base_uri: &str) -> Value {
    json!({
        "url": format!("{base_uri}{MILESTONE_PATH}"),
        "id": 1_002_604,
        "number": 1,
        "state": "open",
        "title": "v1.0",
        "description": null,
        "creator": null,
        "due_on": null
    })
}

fn milestone_for(server: &MockServer) -> Milestone {
    let session = Session::authenticated(Credentials::token("test-token"));
    Milestone::from_json(session, milestone_json(&server.uri())).unwrap()
}

fn label(name: &str) -> Value {
    json!({"name": name, "color": "f29513", "default": false})
}

#[tokio::test]
async fn first_advancement_issues_one_get_with_per_page_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LABELS_PATH))
        .and(query_param("per_page", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([label("bug"), label("enhancement")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let milestone = milestone_for(&server);
    let mut labels = milestone.labels();

    let first = labels.try_next().await.unwrap().unwrap();
    assert_eq!(first.name, "bug");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn no_request_is_issued_until_the_cursor_advances() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LABELS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([label("bug")])))
        .mount(&server)
        .await;

    let milestone = milestone_for(&server);
    let mut labels = milestone.labels();

    assert!(server.received_requests().await.unwrap().is_empty());

    labels.try_next().await.unwrap();
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn exhausting_the_final_page_issues_no_further_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LABELS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([label("bug")])))
        .expect(1)
        .mount(&server)
        .await;

    let milestone = milestone_for(&server);
    let mut labels = milestone.labels();

    assert!(labels.try_next().await.unwrap().is_some());
    assert!(labels.try_next().await.unwrap().is_none());
    assert!(labels.try_next().await.unwrap().is_none());

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn cursor_follows_the_link_header_across_pages() {
    let server = MockServer::start().await;
    let next_url = format!("{}{LABELS_PATH}?page=2", server.uri());

    Mock::given(method("GET"))
        .and(path(LABELS_PATH))
        .and(query_param("per_page", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([label("bug")]))
                .insert_header("link", format!(r#"<{next_url}>; rel="next""#).as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(LABELS_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([label("wontfix")])))
        .expect(1)
        .mount(&server)
        .await;

    let milestone = milestone_for(&server);
    let mut labels = milestone.labels();

    assert_eq!(labels.try_next().await.unwrap().unwrap().name, "bug");
    // Page two is fetched only when the first page is exhausted.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    assert_eq!(labels.try_next().await.unwrap().unwrap().name, "wontfix");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);

    assert!(labels.try_next().await.unwrap().is_none());
}

#[tokio::test]
async fn calling_labels_again_starts_an_independent_sequence() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LABELS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([label("bug")])))
        .expect(2)
        .mount(&server)
        .await;

    let milestone = milestone_for(&server);

    let mut first = milestone.labels();
    assert_eq!(first.collect_remaining().await.unwrap().len(), 1);

    let mut second = milestone.labels();
    assert_eq!(second.collect_remaining().await.unwrap().len(), 1);

    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn explicit_per_page_hint_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LABELS_PATH))
        .and(query_param("per_page", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let milestone = milestone_for(&server);
    let mut labels = milestone.labels_with_per_page(30);

    assert!(labels.try_next().await.unwrap().is_none());
}

#[tokio::test]
async fn malformed_item_fails_only_that_advancement() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LABELS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            label("bug"),
            {"color": "f29513"},
            label("wontfix")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let milestone = milestone_for(&server);
    let mut labels = milestone.labels();

    assert_eq!(labels.try_next().await.unwrap().unwrap().name, "bug");

    // The nameless item fails this advancement only.
    assert!(matches!(
        labels.try_next().await,
        Err(ResourceError::MalformedResponse { .. })
    ));

    assert_eq!(labels.try_next().await.unwrap().unwrap().name, "wontfix");
    assert!(labels.try_next().await.unwrap().is_none());
}

#[tokio::test]
async fn page_fetch_failure_surfaces_at_the_advancement() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LABELS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let milestone = milestone_for(&server);
    let mut labels = milestone.labels();

    assert!(matches!(
        labels.try_next().await,
        Err(ResourceError::Response { status: 500, .. })
    ));
}
