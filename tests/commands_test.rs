//! Integration tests for command handlers

use std::time::Duration;

use bbref_stats::{
    commands::{
        players::{handle_players, PlayersParams},
        seasons::{handle_seasons, SeasonsParams},
    },
    FetchSettings, IndexLetter, OutputFormat, PlayerRecord, PlayerSeasonTable,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn settings(server: &MockServer) -> FetchSettings {
    FetchSettings {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        retries: 0,
        retry_delay: Duration::from_millis(1),
    }
}

#[tokio::test]
async fn test_handle_players_writes_csv() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/j/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("fixtures/players_j.html")),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("roster.csv");

    handle_players(PlayersParams {
        letters: Some(vec![IndexLetter::new('j').unwrap()]),
        concurrency: 1,
        format: OutputFormat::Csv,
        output: Some(out.clone()),
        fetch: settings(&server),
    })
    .await
    .unwrap();

    let mut reader = csv::Reader::from_path(&out).unwrap();
    let records: Vec<PlayerRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[1].name, "LeBron-James");
    assert_eq!(
        records[1].url,
        format!("{}/players/j/jamesle01.html", server.uri())
    );
}

#[tokio::test]
async fn test_handle_seasons_writes_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/l/lawsoty01.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("fixtures/per_game_traded.html")),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("lawson.json");

    handle_seasons(SeasonsParams {
        locator: "lawsoty01".parse().unwrap(),
        format: OutputFormat::Json,
        output: Some(out.clone()),
        fetch: settings(&server),
    })
    .await
    .unwrap();

    let table: PlayerSeasonTable =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(table.len(), 5);
    assert!(table.career().is_some());
}

#[tokio::test]
async fn test_handle_seasons_failure_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.csv");

    let result = handle_seasons(SeasonsParams {
        locator: "lawsoty01".parse().unwrap(),
        format: OutputFormat::Csv,
        output: Some(out.clone()),
        fetch: settings(&server),
    })
    .await;

    assert!(result.is_err());
    assert!(!out.exists());
}
