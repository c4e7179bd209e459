use storefront_api::{Client, DataFetchError, USER_AGENT};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn fetch_listing_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("page.json");

    Mock::given(method("GET"))
        .and(path("/page.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.fetch_listing().await;
    assert!(result.is_ok());

    let page = result.unwrap();
    assert_eq!(page.horizontal_product_list.len(), 3);
    assert_eq!(page.product_list.len(), 2);
    assert_eq!(page.product_list[0].code, 101);
    assert_eq!(page.cursor(), Some("https://mock.akakce.dev/page2.json"));
}

#[tokio::test]
async fn fetch_page_follows_cursor_url() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("page2.json");

    Mock::given(method("GET"))
        .and(path("/page2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let cursor = format!("{}/page2.json", mock_server.uri());
    let page = client.fetch_page(&cursor).await.unwrap();
    assert_eq!(page.product_list.len(), 1);
    assert!(page.is_last());
}

#[tokio::test]
async fn fetch_product_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("product.json");

    Mock::given(method("GET"))
        .and(path("/product1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let detail = client.fetch_product(1).await.unwrap();
    assert_eq!(detail.mk_name, "Apple");
    assert_eq!(detail.storage_options, vec![128, 256, 512]);
}

#[tokio::test]
async fn fetch_product_not_found_keeps_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product999.json"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such product"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.fetch_product(999).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_retryable());
    match err {
        DataFetchError::Http { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such product");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_listing_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.fetch_listing().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn fetch_listing_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.fetch_listing().await.unwrap_err();
    assert!(matches!(err, DataFetchError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let client = Client::with_base_url("http://127.0.0.1:1");
    let err = client.fetch_listing().await.unwrap_err();
    assert!(matches!(err, DataFetchError::Transport { .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn invalid_cursor_is_rejected_before_sending() {
    let client = Client::new();
    let err = client.fetch_page("page2.json").await.unwrap_err();
    assert!(matches!(err, DataFetchError::InvalidUrl { .. }));
}

#[tokio::test]
async fn requests_carry_fixed_user_agent() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("page2.json");

    Mock::given(method("GET"))
        .and(path("/page2.json"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let url = format!("{}/page2.json", mock_server.uri());
    client.fetch_page(&url).await.unwrap();
    client.fetch_page(&url).await.unwrap();
    assert!(USER_AGENT.starts_with("storefront/"));
}
