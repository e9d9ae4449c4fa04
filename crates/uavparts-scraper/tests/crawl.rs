//! Integration tests for `Crawler::run` against a local mock server.
//!
//! Uses `wiremock` so no real network traffic is made. Fixtures reproduce
//! the WooCommerce (aeromotus) and CS-Cart (mydrone) markup the adapters
//! read. All crawls run with a zero politeness delay.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use uavparts_core::{ComponentKind, ComponentRecord};
use uavparts_scraper::sites::{Aeromotus, MyDrone};
use uavparts_scraper::{Crawler, DelayRange, PageClient, ScrapeError};

fn test_client() -> PageClient {
    PageClient::new(5, "uavparts-test/0.1", DelayRange::none())
        .expect("failed to build test PageClient")
}

fn aeromotus_crawler(server: &MockServer) -> Crawler {
    Crawler::new(
        test_client(),
        Box::new(Aeromotus::with_base_url(server.uri())),
    )
}

fn mydrone_crawler(server: &MockServer) -> Crawler {
    Crawler::new(
        test_client(),
        Box::new(MyDrone::with_base_url(server.uri())),
    )
}

/// WooCommerce listing with two cards; only the first title matches the
/// battery keywords. No pagination nav: the degenerate single-page case.
fn aeromotus_listing(server_uri: &str) -> String {
    format!(
        r#"<html><body><ul class="products">
        <li class="product">
          <a class="woocommerce-LoopProduct-link" href="{server_uri}/product/lipo-4s/">
            <h2 class="woocommerce-loop-product__title">Аккумулятор LiPo 4S</h2>
          </a>
        </li>
        <li class="product">
          <a class="woocommerce-LoopProduct-link" href="{server_uri}/product/motor/">
            <h2 class="woocommerce-loop-product__title">Моторчик для квадрокоптера</h2>
          </a>
        </li>
        </ul></body></html>"#
    )
}

fn aeromotus_card(name: &str, description: &str) -> String {
    format!(
        r#"<html><body>
        <img class="wp-post-image" src="https://cdn.example/img.jpg">
        <p class="price">5 990 руб.</p>
        <h1 class="product_title">{name}</h1>
        <div id="tab-description">{description}</div>
        </body></html>"#
    )
}

// ---------------------------------------------------------------------------
// Scenario 1 – end-to-end battery crawl with keyword filtering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn battery_crawl_selects_matching_card_and_extracts_attributes() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "аккумулятор"))
        .and(query_param("post_type", "product"))
        .respond_with(ResponseTemplate::new(200).set_body_string(aeromotus_listing(&uri)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/lipo-4s/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(aeromotus_card(
            "Аккумулятор LiPo 4S",
            "Емкость: 5200 mAh, Напряжение: 14.8V",
        )))
        .mount(&server)
        .await;

    let result = aeromotus_crawler(&server)
        .run(ComponentKind::Battery)
        .await
        .expect("crawl must succeed");

    assert_eq!(result.len(), 1, "only the battery card may be selected");
    let card_url = format!("{uri}/product/lipo-4s/");
    let record = result.get(&card_url).expect("battery record present");
    let ComponentRecord::Battery(battery) = record else {
        panic!("expected a battery record, got: {record:?}");
    };
    assert_eq!(battery.common.name, "Аккумулятор LiPo 4S");
    assert_eq!(battery.common.price.as_deref(), Some("5 990 руб."));
    assert_eq!(battery.capacity_mah, Some(5200));
    assert_eq!(battery.voltage_v, Some(14.8));
    assert_eq!(battery.discharge_c, None, "discharge must stay unknown");
    assert_eq!(battery.cell_shape, None, "shape must stay unknown");
}

// ---------------------------------------------------------------------------
// Scenario 2 – degenerate pagination still processes page 1
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_without_pagination_nav_still_yields_its_cards() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(aeromotus_listing(&uri)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/lipo-4s/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(aeromotus_card(
            "Аккумулятор LiPo 4S",
            "Без характеристик",
        )))
        .mount(&server)
        .await;

    let result = aeromotus_crawler(&server)
        .run(ComponentKind::Battery)
        .await
        .expect("crawl must succeed");

    assert_eq!(result.len(), 1);
    // Only the listing and the one selected card were fetched: no /page/N/.
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 2);
}

// ---------------------------------------------------------------------------
// Scenario 3 – multi-page listing walks pages 2..N
// ---------------------------------------------------------------------------

#[tokio::test]
async fn paginated_listing_collects_cards_from_every_page() {
    let server = MockServer::start().await;
    let uri = server.uri();

    let page1 = format!(
        r#"<html><body>
        <nav class="electro-advanced-pagination">Страница 1 из 2→</nav>
        <ul class="products"><li class="product">
          <a class="woocommerce-LoopProduct-link" href="{uri}/product/akb-one/">
            <h2 class="woocommerce-loop-product__title">Батарея 3S</h2>
          </a>
        </li></ul></body></html>"#
    );
    let page2 = format!(
        r#"<html><body>
        <ul class="products"><li class="product">
          <a class="woocommerce-LoopProduct-link" href="{uri}/product/akb-two/">
            <h2 class="woocommerce-loop-product__title">Батарея 6S</h2>
          </a>
        </li></ul></body></html>"#
    );

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .and(query_param("s", "аккумулятор"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page2))
        .mount(&server)
        .await;
    for slug in ["akb-one", "akb-two"] {
        Mock::given(method("GET"))
            .and(path(format!("/product/{slug}/")))
            .respond_with(ResponseTemplate::new(200).set_body_string(aeromotus_card(
                "Батарея",
                "Емкость: 1300 mAh",
            )))
            .mount(&server)
            .await;
    }

    let result = aeromotus_crawler(&server)
        .run(ComponentKind::Battery)
        .await
        .expect("crawl must succeed");

    assert_eq!(result.len(), 2);
    let urls: Vec<&str> = result.urls().collect();
    assert_eq!(
        urls,
        vec![
            format!("{uri}/product/akb-one/").as_str(),
            format!("{uri}/product/akb-two/").as_str(),
        ]
    );
}

// ---------------------------------------------------------------------------
// Scenario 4 – absent category: no fetch, empty result
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unsupported_kind_returns_empty_result_without_fetching() {
    let server = MockServer::start().await;

    let result = aeromotus_crawler(&server)
        .run(ComponentKind::Lidar)
        .await
        .expect("must succeed without a request mapping");

    assert!(result.is_empty());
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "no network fetch may happen");
}

// ---------------------------------------------------------------------------
// Scenario 5 – fetch failures are fatal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_listing_status_fails_the_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = aeromotus_crawler(&server).run(ComponentKind::Battery).await;
    assert!(
        matches!(result, Err(ScrapeError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn failed_card_fetch_discards_the_whole_run() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(aeromotus_listing(&uri)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/lipo-4s/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = aeromotus_crawler(&server).run(ComponentKind::Battery).await;
    assert!(
        matches!(result, Err(ScrapeError::UnexpectedStatus { status: 404, .. })),
        "expected UnexpectedStatus(404), got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// Scenario 6 – a card failing validation is skipped, not fatal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn card_without_a_name_is_skipped_and_crawl_continues() {
    let server = MockServer::start().await;
    let uri = server.uri();

    let listing = format!(
        r#"<html><body><ul class="products">
        <li class="product">
          <a class="woocommerce-LoopProduct-link" href="{uri}/product/broken/">
            <h2 class="woocommerce-loop-product__title">Аккумулятор без названия</h2>
          </a>
        </li>
        <li class="product">
          <a class="woocommerce-LoopProduct-link" href="{uri}/product/good/">
            <h2 class="woocommerce-loop-product__title">Аккумулятор годный</h2>
          </a>
        </li>
        </ul></body></html>"#
    );

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing))
        .mount(&server)
        .await;
    // Card page with no product title: name validation fails.
    Mock::given(method("GET"))
        .and(path("/product/broken/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/good/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(aeromotus_card(
            "Аккумулятор годный",
            "Емкость: 2200 mAh",
        )))
        .mount(&server)
        .await;

    let result = aeromotus_crawler(&server)
        .run(ComponentKind::Battery)
        .await
        .expect("one bad card must not abort the crawl");

    assert_eq!(result.len(), 1);
    assert!(result.get(&format!("{uri}/product/good/")).is_some());
}

// ---------------------------------------------------------------------------
// Scenario 7 – idempotence over fixed fixtures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn two_runs_over_identical_fixtures_are_byte_identical() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(aeromotus_listing(&uri)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/lipo-4s/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(aeromotus_card(
            "Аккумулятор LiPo 4S",
            "LiPo 4S 5200 mAh 50C 14.8V",
        )))
        .mount(&server)
        .await;

    let crawler = aeromotus_crawler(&server);
    let first = crawler.run(ComponentKind::Battery).await.expect("first run");
    let second = crawler.run(ComponentKind::Battery).await.expect("second run");

    let first_json = serde_json::to_string(&first).expect("serialization failed");
    let second_json = serde_json::to_string(&second).expect("serialization failed");
    assert_eq!(first_json, second_json);
}

// ---------------------------------------------------------------------------
// Scenario 8 – mydrone single-page category crawl
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mydrone_category_crawl_takes_every_card() {
    let server = MockServer::start().await;
    let uri = server.uri();

    let listing = format!(
        r#"<html><body>
        <a class="product-title" href="{uri}/kupit/akb-mavic/">Аккумулятор DJI Mavic 3</a>
        <a class="product-title" href="{uri}/kupit/akb-mini/">Аккумулятор DJI Mini 4 Pro</a>
        </body></html>"#
    );
    let card = r#"<html><body>
        <img src="https://cdn.example/akb.jpg">
        <span class="ty-price-num">12&#160;490</span>
        <h1 class="ut2-pb__title">Аккумулятор DJI</h1>
        <div id="tabs_content">Емкость аккумулятора 5000 мАч, напряжение 15.4 В</div>
        </body></html>"#;

    Mock::given(method("GET"))
        .and(path("/kupit/dji/akkumulyatory/"))
        .and(query_param("items_per_page", "96"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing))
        .mount(&server)
        .await;
    for slug in ["akb-mavic", "akb-mini"] {
        Mock::given(method("GET"))
            .and(path(format!("/kupit/{slug}/")))
            .respond_with(ResponseTemplate::new(200).set_body_string(card))
            .mount(&server)
            .await;
    }

    let result = mydrone_crawler(&server)
        .run(ComponentKind::Battery)
        .await
        .expect("crawl must succeed");

    assert_eq!(result.len(), 2);
    let record = result
        .get(&format!("{uri}/kupit/akb-mavic/"))
        .expect("record present");
    let ComponentRecord::Battery(battery) = record else {
        panic!("expected a battery record, got: {record:?}");
    };
    assert_eq!(battery.capacity_mah, Some(5000));
    assert_eq!(battery.voltage_v, Some(15.4));
    assert_eq!(battery.common.price.as_deref(), Some("12 490"));
}
