use std::sync::Once;

use harvest_core::{ContentType, Site};
use harvest_engine::{harvest, FetchSettings, ReqwestFetcher};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(harvest_logging::initialize_for_tests);
}

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(FetchSettings::default()).unwrap()
}

fn site(server: &MockServer) -> Site {
    Site {
        id: 5,
        base_url: server.uri(),
    }
}

fn pages_type() -> ContentType {
    ContentType {
        name: "Pages".to_string(),
        slug: "pages".to_string(),
        rest_base: "pages".to_string(),
    }
}

async fn mount_page(server: &MockServer, page: &str, template: ResponseTemplate, expect: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v2/pages"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page))
        .respond_with(template)
        .expect(expect)
        .mount(server)
        .await;
}

fn items(ids: &[u64]) -> Value {
    Value::Array(ids.iter().map(|id| json!({ "id": id })).collect())
}

#[tokio::test]
async fn declared_page_count_drives_exactly_that_many_fetches() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        ResponseTemplate::new(200)
            .insert_header("X-Total-Pages", "3")
            .set_body_json(items(&[1, 2])),
        1,
    )
    .await;
    mount_page(&server, "2", ResponseTemplate::new(200).set_body_json(items(&[3])), 1).await;
    mount_page(&server, "3", ResponseTemplate::new(200).set_body_json(items(&[4])), 1).await;

    let harvested = harvest(&fetcher(), &site(&server), &pages_type()).await;
    let ids: Vec<u64> = harvested.iter().map(|item| item.id).collect();
    // Concatenation order equals server page order.
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn absent_header_means_exactly_one_page() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        ResponseTemplate::new(200).set_body_json(items(&[1, 2])),
        1,
    )
    .await;
    mount_page(&server, "2", ResponseTemplate::new(200).set_body_json(items(&[3])), 0).await;

    let harvested = harvest(&fetcher(), &site(&server), &pages_type()).await;
    assert_eq!(harvested.len(), 2);
}

#[tokio::test]
async fn unparsable_header_means_exactly_one_page() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        ResponseTemplate::new(200)
            .insert_header("X-Total-Pages", "many")
            .set_body_json(items(&[1])),
        1,
    )
    .await;
    mount_page(&server, "2", ResponseTemplate::new(200).set_body_json(items(&[2])), 0).await;

    let harvested = harvest(&fetcher(), &site(&server), &pages_type()).await;
    assert_eq!(harvested.len(), 1);
}

#[tokio::test]
async fn failed_page_keeps_items_fetched_so_far() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        ResponseTemplate::new(200)
            .insert_header("X-Total-Pages", "3")
            .set_body_json(items(&[1, 2])),
        1,
    )
    .await;
    mount_page(&server, "2", ResponseTemplate::new(500), 1).await;
    mount_page(&server, "3", ResponseTemplate::new(200).set_body_json(items(&[4])), 0).await;

    let harvested = harvest(&fetcher(), &site(&server), &pages_type()).await;
    let ids: Vec<u64> = harvested.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn empty_body_ends_the_collection() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(&server, "1", ResponseTemplate::new(200).set_body_string(""), 1).await;

    let harvested = harvest(&fetcher(), &site(&server), &pages_type()).await;
    assert!(harvested.is_empty());
}

#[tokio::test]
async fn empty_list_mid_pagination_stops_early() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        ResponseTemplate::new(200)
            .insert_header("X-Total-Pages", "3")
            .set_body_json(items(&[1])),
        1,
    )
    .await;
    mount_page(&server, "2", ResponseTemplate::new(200).set_body_json(json!([])), 1).await;
    mount_page(&server, "3", ResponseTemplate::new(200).set_body_json(items(&[9])), 0).await;

    let harvested = harvest(&fetcher(), &site(&server), &pages_type()).await;
    assert_eq!(harvested.len(), 1);
}
