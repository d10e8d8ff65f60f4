use std::collections::BTreeMap;
use storygraph_reader::config::{AuthConfig, Config, SiteConfig};
use storygraph_reader::output::render_outcome;
use storygraph_reader::{FaultKind, StoryGraphClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOOK_PAGE: &str = include_str!("fixtures/book.html");
const REVIEWS_PAGE: &str = include_str!("fixtures/community_reviews.html");
const WARNINGS_PAGE: &str = include_str!("fixtures/content_warnings.html");
const SEARCH_PAGE: &str = include_str!("fixtures/search.html");
const PROGRESS_PAGE: &str = include_str!("fixtures/progress.html");

const BOOK_ID: &str = "0b4cbd04-dune";
const TEST_AGENT: &str = "TestAgent/1.0";

/// Creates a client pointed at the mock server
fn create_client(base_url: &str, cookies: BTreeMap<String, String>) -> StoryGraphClient {
    let config = Config {
        site: SiteConfig {
            base_url: base_url.to_string(),
            user_agent: TEST_AGENT.to_string(),
            timeout_secs: Some(10),
        },
        auth: AuthConfig { cookies },
    };
    StoryGraphClient::new(&config).expect("Failed to build client")
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(body))
        .mount(server)
        .await;
}

async fn mount_book(server: &MockServer, book_page: &str) {
    mount_page(server, &format!("/books/{}", BOOK_ID), book_page).await;
    mount_page(
        server,
        &format!("/books/{}/community_reviews", BOOK_ID),
        REVIEWS_PAGE,
    )
    .await;
    mount_page(
        server,
        &format!("/books/{}/content_warnings", BOOK_ID),
        WARNINGS_PAGE,
    )
    .await;
}

#[tokio::test]
async fn test_book_info_full_record() {
    let server = MockServer::start().await;
    mount_book(&server, BOOK_PAGE).await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let book = client.book_info(BOOK_ID).await.expect("book_info failed");

    assert_eq!(book.title, "Dune");
    assert_eq!(book.authors, vec!["Frank Herbert"]);
    assert_eq!(book.pages, "412");
    assert_eq!(book.first_pub, "1965");
    assert_eq!(book.tags, vec!["fiction", "science fiction", "adventurous"]);
    assert_eq!(book.average_rating, "4.25");
    assert_eq!(
        book.description,
        "Set on the desert planet Arrakis, <b>Dune</b> is the story of Paul Atreides."
    );
    assert_eq!(book.warnings.graphic, vec!["Violence", "Death"]);
    assert_eq!(book.warnings.moderate, vec!["Drug use"]);
    assert_eq!(book.warnings.minor, vec!["Language"]);
}

#[tokio::test]
async fn test_book_info_is_repeatable() {
    let server = MockServer::start().await;
    mount_book(&server, BOOK_PAGE).await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let first = client.book_info(BOOK_ID).await.expect("first call failed");
    let second = client.book_info(BOOK_ID).await.expect("second call failed");

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_book_info_without_title_is_parsing_fault() {
    let server = MockServer::start().await;
    mount_book(&server, "<html><body><h1>Page not found</h1></body></html>").await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let fault = client.book_info(BOOK_ID).await.unwrap_err();

    assert_eq!(fault.kind, FaultKind::Parsing);
    assert_eq!(fault.operation, "book_info");
    assert_eq!(fault.message, "main title header not found");
}

#[tokio::test]
async fn test_book_info_missing_page_is_request_fault() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/books/{}", BOOK_ID)))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    // Nothing after the failed fetch should be requested
    Mock::given(method("GET"))
        .and(path(format!("/books/{}/community_reviews", BOOK_ID)))
        .respond_with(html(REVIEWS_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let fault = client.book_info(BOOK_ID).await.unwrap_err();

    assert_eq!(fault.kind, FaultKind::Request);
    assert!(fault.message.starts_with("book_info request failed: "));
    assert!(fault.message.contains("404"));
}

#[tokio::test]
async fn test_book_info_failing_reviews_page_fails_the_call() {
    let server = MockServer::start().await;
    mount_page(&server, &format!("/books/{}", BOOK_ID), BOOK_PAGE).await;

    Mock::given(method("GET"))
        .and(path(format!("/books/{}/community_reviews", BOOK_ID)))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let fault = client.book_info(BOOK_ID).await.unwrap_err();

    assert_eq!(fault.kind, FaultKind::Request);
    assert!(fault.message.contains("503"));
}

#[tokio::test]
async fn test_content_warnings() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        &format!("/books/{}/content_warnings", BOOK_ID),
        WARNINGS_PAGE,
    )
    .await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let warnings = client.content_warnings(BOOK_ID).await.unwrap();

    assert_eq!(warnings.graphic, vec!["Violence", "Death"]);
    assert_eq!(warnings.moderate, vec!["Drug use"]);
    assert_eq!(warnings.minor, vec!["Language"]);
}

#[tokio::test]
async fn test_content_warnings_without_reader_pane() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        &format!("/books/{}/content_warnings", BOOK_ID),
        r#"<div class="standard-pane"><p>No warnings yet</p></div>"#,
    )
    .await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let warnings = client.content_warnings(BOOK_ID).await.unwrap();

    assert!(warnings.is_empty());
}

#[tokio::test]
async fn test_search_preserves_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/browse"))
        .and(query_param("search_term", "frank herbert dune"))
        .respond_with(html(SEARCH_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let results = client.search("frank herbert dune").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Dune");
    assert_eq!(results[0].book_id, "0b4cbd04-dune");
    assert_eq!(results[0].author, "Frank Herbert");
    assert_eq!(results[1].title, "Dune Messiah");
    assert_eq!(results[1].book_id, "5fc1e0a1-dune-messiah");
}

#[tokio::test]
async fn test_search_without_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/browse"))
        .respond_with(html("<html><body><p>No books found</p></body></html>"))
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let results = client.search("zzzz").await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_reading_progress_sends_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/books/{}", BOOK_ID)))
        .and(header("cookie", "remember_user_token=secret"))
        .and(header("user-agent", TEST_AGENT))
        .respond_with(html(PROGRESS_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let mut cookies = BTreeMap::new();
    cookies.insert("remember_user_token".to_string(), "secret".to_string());

    let progress = client.reading_progress(BOOK_ID, &cookies).await.unwrap();
    assert_eq!(progress.progress, "37%");
}

#[tokio::test]
async fn test_reading_progress_falls_back_to_configured_cookies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/books/{}", BOOK_ID)))
        .and(header("cookie", "remember_user_token=configured"))
        .respond_with(html(
            r#"<div class="progress-bar"><div style="width: 0%"></div></div>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut configured = BTreeMap::new();
    configured.insert("remember_user_token".to_string(), "configured".to_string());
    let client = create_client(&server.uri(), configured);

    let progress = client
        .reading_progress(BOOK_ID, &BTreeMap::new())
        .await
        .unwrap();
    assert_eq!(progress.progress, "0%");
}

#[tokio::test]
async fn test_reading_progress_not_currently_reading() {
    let server = MockServer::start().await;
    mount_page(&server, &format!("/books/{}", BOOK_ID), BOOK_PAGE).await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let fault = client
        .reading_progress(BOOK_ID, &BTreeMap::new())
        .await
        .unwrap_err();

    assert_eq!(fault.kind, FaultKind::Parsing);
    assert_eq!(fault.message, "progress bar not found");

    let rendered = render_outcome(&Err::<(), _>(fault)).unwrap();
    assert!(rendered.contains("\"kind\": \"parsing\""));
}

#[tokio::test]
async fn test_unreachable_server_is_request_fault() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = create_client(&uri, BTreeMap::new());
    let fault = client.search("dune").await.unwrap_err();

    assert_eq!(fault.kind, FaultKind::Request);
    assert!(fault.message.starts_with("search request failed: "));
}

#[tokio::test]
async fn test_fetch_document_returns_body() {
    let server = MockServer::start().await;
    mount_page(&server, "/about", "<p>about</p>").await;

    let client = create_client(&server.uri(), BTreeMap::new());
    let body = client
        .fetch_document(&format!("{}/about", server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "<p>about</p>");

    let fault = client
        .fetch_document(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(fault.kind, FaultKind::Request);
    assert_eq!(fault.operation, "fetch_document");
}
