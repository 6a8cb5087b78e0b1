use league_table::{
    Config, FavoriteStore, LeagueState, NewMatch,
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE_JSON: &str = r#"{
    "teams": [
        {"id": 1, "name": "Ajax", "coach": "Coach One", "stadium": "Arena One"},
        {"id": 2, "name": "Breda", "coach": "Coach Two", "stadium": "Arena Two"},
        {"id": 3, "name": "Cambuur", "coach": "Coach Three", "stadium": "Arena Three"},
        {"id": 4, "name": "Dordrecht", "coach": "Coach Four", "stadium": "Arena Four"}
    ],
    "matches": [
        {"id": 1, "homeTeamId": 1, "awayTeamId": 2, "homeScore": 3, "awayScore": 0, "date": "2025-07-01"},
        {"id": 2, "homeTeamId": 3, "awayTeamId": 4, "homeScore": 1, "awayScore": 0, "date": "2025-07-02"},
        {"id": 3, "homeTeamId": 2, "awayTeamId": 3, "homeScore": 2, "awayScore": 2, "date": "2025-07-08"},
        {"id": 4, "homeTeamId": 4, "awayTeamId": 1, "homeScore": 1, "awayScore": 1, "date": "2025-07-09"}
    ]
}"#;

fn test_config(domain: &str) -> Config {
    Config {
        api_domain: domain.to_string(),
        log_file_path: None,
        http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
    }
}

async fn serve_fixture() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/teams.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE_JSON))
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_bootstrap_computes_ranked_standings() {
    let mock_server = serve_fixture().await;
    let store_dir = tempdir().unwrap();
    let store = FavoriteStore::with_path(store_dir.path().join("favorite_team"));

    let mut state =
        LeagueState::with_favorite_store(test_config(&mock_server.uri()), store).unwrap();
    state.bootstrap().await;

    assert!(!state.is_loading());
    assert_eq!(state.teams().len(), 4);
    assert_eq!(state.matches().len(), 4);

    // Ajax: W + D = 4 pts, GD +3. Cambuur: W + D = 4 pts, GD +1.
    // The full comparator ranks them by goal difference already on the
    // initial load.
    let names: Vec<&str> = state.teams().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Ajax", "Cambuur", "Dordrecht", "Breda"]);

    for (index, team) in state.teams().iter().enumerate() {
        assert_eq!(team.position, index + 1);
        assert_eq!(team.points, team.wins * 3 + team.draws);
    }
}

#[tokio::test]
async fn test_bootstrap_restores_persisted_favorite() {
    let mock_server = serve_fixture().await;
    let store_dir = tempdir().unwrap();
    let store_path = store_dir.path().join("favorite_team");

    // A previous session stored team 3 as the favorite.
    FavoriteStore::with_path(&store_path).save(3).await.unwrap();

    let store = FavoriteStore::with_path(&store_path);
    let mut state =
        LeagueState::with_favorite_store(test_config(&mock_server.uri()), store).unwrap();
    state.bootstrap().await;

    assert_eq!(state.favorite_team_id(), Some(3));
    assert_eq!(state.favorite_team().unwrap().name, "Cambuur");
}

#[tokio::test]
async fn test_bootstrap_tolerates_stale_favorite() {
    let mock_server = serve_fixture().await;
    let store_dir = tempdir().unwrap();
    let store_path = store_dir.path().join("favorite_team");

    // Persisted id no longer matches any roster entry.
    FavoriteStore::with_path(&store_path).save(99).await.unwrap();

    let store = FavoriteStore::with_path(&store_path);
    let mut state =
        LeagueState::with_favorite_store(test_config(&mock_server.uri()), store).unwrap();
    state.bootstrap().await;

    assert_eq!(state.favorite_team_id(), Some(99));
    assert!(state.favorite_team().is_none());
}

#[tokio::test]
async fn test_load_failure_resets_to_empty_state() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/teams.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let store_dir = tempdir().unwrap();
    let store = FavoriteStore::with_path(store_dir.path().join("favorite_team"));
    let mut state =
        LeagueState::with_favorite_store(test_config(&mock_server.uri()), store).unwrap();
    state.bootstrap().await;

    assert!(state.teams().is_empty());
    assert!(state.matches().is_empty());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_mutations_after_load_keep_table_consistent() {
    let mock_server = serve_fixture().await;
    let store_dir = tempdir().unwrap();
    let store = FavoriteStore::with_path(store_dir.path().join("favorite_team"));
    let mut state =
        LeagueState::with_favorite_store(test_config(&mock_server.uri()), store).unwrap();
    state.bootstrap().await;

    // Dordrecht beats Ajax away; ids continue from the fixture's log.
    let new_id = state.record_match(NewMatch {
        home_team_id: 1,
        away_team_id: 4,
        home_score: 0,
        away_score: 2,
        date: "2025-07-15".to_string(),
    });
    assert_eq!(new_id, 5);

    // Then the opening thrashing is corrected to a narrow win.
    assert!(state.correct_match_result(1, 1, 0));

    // An out-of-range correction attempt changes nothing.
    let before: Vec<(i32, u32, usize)> = state
        .teams()
        .iter()
        .map(|t| (t.id, t.points, t.position))
        .collect();
    assert!(!state.correct_match_result(1, 9, 0));
    let after: Vec<(i32, u32, usize)> = state
        .teams()
        .iter()
        .map(|t| (t.id, t.points, t.position))
        .collect();
    assert_eq!(before, after);

    // Invariants hold over the whole table after the edits.
    let mut positions: Vec<usize> = state.teams().iter().map(|t| t.position).collect();
    positions.sort_unstable();
    assert_eq!(positions, (1..=4).collect::<Vec<_>>());
    for team in state.teams() {
        assert_eq!(team.points, team.wins * 3 + team.draws);
        assert!(team.recent_form.len() <= 5);
    }

    // History reflects the newly recorded match, most recent first.
    let history = state.team_history(4, None);
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].id, new_id);
    assert!(!history[0].is_home);
}

#[tokio::test]
async fn test_favorite_survives_across_sessions() {
    let mock_server = serve_fixture().await;
    let store_dir = tempdir().unwrap();
    let store_path = store_dir.path().join("favorite_team");

    {
        let store = FavoriteStore::with_path(&store_path);
        let mut state =
            LeagueState::with_favorite_store(test_config(&mock_server.uri()), store).unwrap();
        state.bootstrap().await;
        state.set_favorite_team(Some(2)).await;
    }

    // A fresh controller restores the selection from disk.
    let store = FavoriteStore::with_path(&store_path);
    let mut state =
        LeagueState::with_favorite_store(test_config(&mock_server.uri()), store).unwrap();
    state.bootstrap().await;
    assert_eq!(state.favorite_team().unwrap().name, "Breda");

    // Toggling the same team off also clears the stored value.
    state.set_favorite_team(Some(2)).await;
    assert_eq!(state.favorite_team_id(), None);
    assert_eq!(FavoriteStore::with_path(&store_path).load().await, None);
}
