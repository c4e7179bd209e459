use serde_json::{json, Value};
use storefront_lib::{
    load_product, Client, HomePage, LoadOutcome, ScrollMetrics, StorefrontConfig,
    StorefrontError,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn item(code: i64) -> Value {
    json!({
        "code": code,
        "name": format!("Product {code}"),
        "imageUrl": format!("https://cdn.example/{code}.jpg"),
        "dropRatio": 10,
        "price": 1500,
        "countOfPrices": 4,
        "followCount": 90,
        "url": format!("https://mock.example/product{code}.json")
    })
}

async fn mount_page(server: &MockServer, route: &str, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> StorefrontConfig {
    StorefrontConfig {
        base_url: server.uri(),
        ..StorefrontConfig::default()
    }
}

#[tokio::test]
async fn home_page_pages_through_listing_until_exhausted() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_page(
        &server,
        "/page.json",
        json!({
            "horizontalProductList": [item(1), item(2)],
            "productList": [item(10), item(11)],
            "nextUrl": format!("{base}/page2.json")
        }),
        1,
    )
    .await;
    mount_page(
        &server,
        "/page2.json",
        json!({
            "productList": [item(12)],
            "nextUrl": format!("{base}/page3.json")
        }),
        1,
    )
    .await;
    mount_page(
        &server,
        "/page3.json",
        json!({ "productList": [item(13)], "nextUrl": null }),
        1,
    )
    .await;

    let config = config_for(&server);
    let home = HomePage::load(Client::with_base_url(&config.base_url), &config)
        .await
        .unwrap();
    assert_eq!(home.featured.len(), 2);
    assert_eq!(home.carousel.indicator(), "● ○");

    let bottom = ScrollMetrics::new(600.0, 800.0, 1800.0);
    for _ in 0..4 {
        home.listing.on_scroll(bottom).await.unwrap();
    }

    let codes: Vec<i64> = home.listing.items().iter().map(|i| i.code).collect();
    assert_eq!(codes, vec![10, 11, 12, 13]);
    assert!(home.listing.is_exhausted());
    assert_eq!(
        home.listing.load_more().await.unwrap(),
        LoadOutcome::Exhausted
    );
}

#[tokio::test]
async fn failed_page_is_retried_with_same_cursor() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_page(
        &server,
        "/page.json",
        json!({ "productList": [item(10)], "nextUrl": format!("{base}/page2.json") }),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/page2.json"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/page2.json",
        json!({ "productList": [item(11)], "nextUrl": null }),
        1,
    )
    .await;

    let config = config_for(&server);
    let home = HomePage::load(Client::with_base_url(&config.base_url), &config)
        .await
        .unwrap();

    let err = home.listing.load_more().await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(home.listing.len(), 1);
    assert_eq!(
        home.listing.cursor(),
        Some(format!("{base}/page2.json"))
    );

    let outcome = home.listing.load_more().await.unwrap();
    assert_eq!(outcome, LoadOutcome::Appended { count: 1 });
    assert_eq!(home.listing.len(), 2);
}

#[tokio::test]
async fn product_detail_derives_options() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/product5.json",
        json!({
            "code": 5,
            "mkName": "Apple",
            "productName": "iPhone 13",
            "badge": "En Çok Satan",
            "rating": 4,
            "imageUrl": "https://cdn.example/5.jpg",
            "storageOptions": [128, 256, 512],
            "price": 20000,
            "freeShipping": true,
            "lastUpdate": "17.10.2026"
        }),
        1,
    )
    .await;

    let client = Client::with_base_url(&server.uri());
    let mut view = load_product(&client, 5).await.unwrap();

    let prices: Vec<(u32, f64)> = view.options().iter().map(|o| (o.capacity, o.price)).collect();
    assert_eq!(prices, vec![(128, 20000.0), (256, 22000.0), (512, 24000.0)]);
    assert_eq!(view.displayed_price(), 20000.0);
    view.select_capacity(256).unwrap();
    assert_eq!(view.displayed_price(), 22000.0);
}

#[tokio::test]
async fn detail_without_code_uses_requested_code() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/product9.json",
        json!({
            "mkName": "Apple",
            "productName": "iPhone 13",
            "rating": 4,
            "imageUrl": "https://cdn.example/9.jpg",
            "storageOptions": [128, 256],
            "price": 20000,
            "freeShipping": true,
            "lastUpdate": "17.10.2026"
        }),
        1,
    )
    .await;

    let client = Client::with_base_url(&server.uri());
    let view = load_product(&client, 9).await.unwrap();

    assert_eq!(view.code(), 9);
    assert!(view.detail().code.is_none());
    assert_eq!(view.route().path(), "/product/9");
    assert_eq!(view.options().len(), 2);
}

#[tokio::test]
async fn missing_product_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product404.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri());
    let err = load_product(&client, 404).await.unwrap_err();
    match err {
        StorefrontError::Fetch(e) => assert!(e.is_not_found()),
        other => panic!("unexpected error: {other:?}"),
    }
}
