//! Season table extraction against a mocked site

use std::time::Duration;

use bbref_stats::{
    bbref::seasons::parse_per_game_page, BbrError, FetchSettings, PlayerLocator,
    SeasonStatsExtractor, SiteClient,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const PER_GAME_TRADED: &str = include_str!("fixtures/per_game_traded.html");

fn extractor(server: &MockServer) -> SeasonStatsExtractor {
    SeasonStatsExtractor::new(
        SiteClient::new(FetchSettings {
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
            retries: 0,
            retry_delay: Duration::from_millis(1),
        })
        .unwrap(),
    )
}

async fn mount_player(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/players/l/lawsoty01.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_extract_traded_player() {
    let server = MockServer::start().await;
    mount_player(&server, PER_GAME_TRADED).await;

    let locator: PlayerLocator = "lawsoty01".parse().unwrap();
    let table = extractor(&server).extract_seasons(&locator).await.unwrap();

    assert_eq!(
        table.columns,
        vec!["Age", "Tm", "Lg", "Pos", "G", "MP", "AST", "PTS"]
    );
    assert_eq!(
        table.seasons(),
        vec!["2009-10", "2010-11", "2015-16", "2016-17", "Career"]
    );
    // The combined row is kept for the traded season
    assert_eq!(table.get(2, "Tm"), Some("TOT"));
    assert_eq!(table.get(2, "G"), Some("66"));
    assert_eq!(table.career().unwrap().cells[4], "280");
}

#[tokio::test]
async fn test_extract_with_absolute_locator() {
    let server = MockServer::start().await;
    mount_player(&server, PER_GAME_TRADED).await;

    let url = format!("{}/players/l/lawsoty01.html", server.uri());
    let locator: PlayerLocator = url.parse().unwrap();
    let table = extractor(&server).extract_seasons(&locator).await.unwrap();

    assert_eq!(table.len(), 5);
}

#[tokio::test]
async fn test_extract_is_idempotent() {
    let server = MockServer::start().await;
    mount_player(&server, PER_GAME_TRADED).await;

    let locator: PlayerLocator = "/players/l/lawsoty01.html".parse().unwrap();
    let extractor = extractor(&server);
    let first = extractor.extract_seasons(&locator).await.unwrap();
    let second = extractor.extract_seasons(&locator).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_page_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let locator: PlayerLocator = "nobodyxx01".parse().unwrap();
    match extractor(&server).extract_seasons(&locator).await {
        Err(BbrError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[test]
fn test_row_count_never_exceeds_raw_rows() {
    let table = parse_per_game_page(PER_GAME_TRADED).unwrap();
    // 7 body data rows plus 3 footer rows on the page
    assert!(table.len() <= 10);
    assert_eq!(table.rows.last().unwrap().season, "Career");
}
