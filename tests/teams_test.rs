mod common;

use axum::http::{header, Method, Request, StatusCode};
use axum::body::Body;
use serde_json::json;
use tower::ServiceExt;

use common::{create, delete, get, names, patch, post, put, test_app};

#[tokio::test]
async fn roster_lifecycle_scenario() {
    let app = test_app().await;

    let (status, json) = post(&app, "/api/teams", json!({ "name": "A" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["name"], "A");
    assert_eq!(json["data"]["players"], json!([]));
    let team_id = json["data"]["_id"].as_str().unwrap().to_string();

    let (status, json) = post(
        &app,
        &format!("/api/teams/{team_id}/players"),
        json!({ "name": "P1", "number": 7 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let players = json["data"]["players"].as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["name"], "P1");
    assert_eq!(players[0]["number"], 7);
    let player_id = players[0]["_id"].as_str().unwrap().to_string();

    let (status, json) = delete(&app, &format!("/api/teams/{team_id}/players/{player_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["players"], json!([]));
}

#[tokio::test]
async fn list_is_sorted_by_name_in_one_page() {
    let app = test_app().await;

    for name in ["Charlie", "Alpha", "Bravo"] {
        create(&app, "/api/teams", json!({ "name": name })).await;
    }

    let (status, json) = get(&app, "/api/teams").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&json), vec!["Alpha", "Bravo", "Charlie"]);
    assert_eq!(json["total"], 3);
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 3);
    assert_eq!(json["totalPages"], 1);
}

#[tokio::test]
async fn empty_list_has_zero_total() {
    let app = test_app().await;

    let (status, json) = get(&app, "/api/teams").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!([]));
    assert_eq!(json["total"], 0);
    assert_eq!(json["totalPages"], 1);
}

#[tokio::test]
async fn get_by_id() {
    let app = test_app().await;
    let id = create(&app, "/api/teams", json!({ "name": "Lions" })).await;

    let (status, json) = get(&app, &format!("/api/teams/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["_id"], id.as_str());
    assert_eq!(json["data"]["name"], "Lions");
    assert!(json["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn missing_team_is_404() {
    let app = test_app().await;

    let (status, json) = get(&app, "/api/teams/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "message": "Team not found." }));
}

#[tokio::test]
async fn create_without_name_is_400_with_generic_message() {
    let app = test_app().await;

    let (status, json) = post(&app, "/api/teams", json!({ "players": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "message": "Error creating team." }));

    let (status, _) = post(&app, "/api/teams", json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/teams")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_initial_roster_assigns_player_ids() {
    let app = test_app().await;

    let (status, json) = post(
        &app,
        "/api/teams",
        json!({ "name": "Eagles", "players": [{ "name": "Keeper", "number": 1 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(json["data"]["players"][0]["_id"].is_string());
}

#[tokio::test]
async fn update_only_changes_present_fields() {
    let app = test_app().await;
    let id = create(
        &app,
        "/api/teams",
        json!({ "name": "Old", "players": [{ "name": "Keeper", "number": 1 }] }),
    )
    .await;

    let (status, json) = patch(&app, &format!("/api/teams/{id}"), json!({ "name": "New" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "New");
    assert_eq!(json["data"]["players"][0]["name"], "Keeper");

    let (status, json) = put(&app, &format!("/api/teams/{id}"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "New");
}

#[tokio::test]
async fn update_missing_team_is_404_and_bad_body_is_400() {
    let app = test_app().await;

    let (status, json) = put(&app, "/api/teams/nope", json!({ "name": "X" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Team not found.");

    let id = create(&app, "/api/teams", json!({ "name": "Y" })).await;
    let (status, json) = put(&app, &format!("/api/teams/{id}"), json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Error updating team.");
}

#[tokio::test]
async fn delete_twice_returns_404_the_second_time() {
    let app = test_app().await;
    let id = create(&app, "/api/teams", json!({ "name": "Gone" })).await;

    let (status, json) = delete(&app, &format!("/api/teams/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "message": "Team deleted successfully." }));

    let (status, json) = delete(&app, &format!("/api/teams/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Team not found.");
}

#[tokio::test]
async fn added_players_are_appended_in_order() {
    let app = test_app().await;
    let id = create(&app, "/api/teams", json!({ "name": "A" })).await;

    for (name, number) in [("Zed", 9), ("Adam", 4), ("Mo", 11)] {
        let (status, _) = post(
            &app,
            &format!("/api/teams/{id}/players"),
            json!({ "name": name, "number": number }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, json) = get(&app, &format!("/api/teams/{id}")).await;
    let roster: Vec<&str> = json["data"]["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(roster, vec!["Zed", "Adam", "Mo"]);
}

#[tokio::test]
async fn duplicate_players_are_not_rejected() {
    let app = test_app().await;
    let id = create(&app, "/api/teams", json!({ "name": "A" })).await;

    let player = json!({ "name": "Twin", "number": 8 });
    post(&app, &format!("/api/teams/{id}/players"), player.clone()).await;
    let (status, json) = post(&app, &format!("/api/teams/{id}/players"), player).await;

    assert_eq!(status, StatusCode::OK);
    let roster = json["data"]["players"].as_array().unwrap();
    assert_eq!(roster.len(), 2);
    assert_ne!(roster[0]["_id"], roster[1]["_id"]);
}

#[tokio::test]
async fn add_player_errors() {
    let app = test_app().await;

    let (status, json) = post(
        &app,
        "/api/teams/missing/players",
        json!({ "name": "P", "number": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Team not found.");

    let id = create(&app, "/api/teams", json!({ "name": "A" })).await;
    let (status, json) = post(&app, &format!("/api/teams/{id}/players"), json!({ "name": "P" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Error adding player.");
}

#[tokio::test]
async fn add_player_to_missing_team_is_404_even_with_bad_body() {
    let app = test_app().await;

    let (status, json) = post(&app, "/api/teams/missing/players", json!({ "name": "P" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "message": "Team not found." }));
}

#[tokio::test]
async fn writing_a_fetched_roster_back_keeps_player_ids() {
    let app = test_app().await;
    let id = create(
        &app,
        "/api/teams",
        json!({ "name": "A", "players": [
            { "name": "One", "number": 1 },
            { "name": "Two", "number": 2 }
        ] }),
    )
    .await;

    let (_, before) = get(&app, &format!("/api/teams/{id}")).await;
    let roster = before["data"]["players"].clone();

    let (status, after) = put(&app, &format!("/api/teams/{id}"), json!({ "players": roster })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["data"]["players"], before["data"]["players"]);

    // Ids from the original read still address the roster
    let two = before["data"]["players"][1]["_id"].as_str().unwrap();
    let (status, json) = patch(
        &app,
        &format!("/api/teams/{id}/players/{two}"),
        json!({ "name": "Two", "number": 22 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["players"][1]["number"], 22);
}

#[tokio::test]
async fn roster_replacement_assigns_ids_only_where_missing() {
    let app = test_app().await;
    let id = create(
        &app,
        "/api/teams",
        json!({ "name": "A", "players": [{ "name": "Kept", "number": 1 }] }),
    )
    .await;

    let (_, json) = get(&app, &format!("/api/teams/{id}")).await;
    let kept = json["data"]["players"][0].clone();

    let (status, json) = put(
        &app,
        &format!("/api/teams/{id}"),
        json!({ "players": [kept.clone(), { "name": "New", "number": 9 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let roster = json["data"]["players"].as_array().unwrap();
    assert_eq!(roster[0]["_id"], kept["_id"]);
    assert!(roster[1]["_id"].is_string());
    assert_ne!(roster[1]["_id"], kept["_id"]);
}

#[tokio::test]
async fn update_embedded_player_in_place() {
    let app = test_app().await;
    let id = create(
        &app,
        "/api/teams",
        json!({ "name": "A", "players": [
            { "name": "First", "number": 1 },
            { "name": "Second", "number": 2 },
            { "name": "Third", "number": 3 }
        ] }),
    )
    .await;

    let (_, json) = get(&app, &format!("/api/teams/{id}")).await;
    let second_id = json["data"]["players"][1]["_id"].as_str().unwrap().to_string();

    let (status, json) = put(
        &app,
        &format!("/api/teams/{id}/players/{second_id}"),
        json!({ "name": "Replaced", "number": 22 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let roster = json["data"]["players"].as_array().unwrap();
    assert_eq!(roster.len(), 3);
    assert_eq!(roster[0]["name"], "First");
    assert_eq!(roster[1]["_id"], second_id.as_str());
    assert_eq!(roster[1]["name"], "Replaced");
    assert_eq!(roster[1]["number"], 22);
    assert_eq!(roster[2]["name"], "Third");
}

#[tokio::test]
async fn update_embedded_player_with_wrong_player_id_is_404() {
    let app = test_app().await;
    let id = create(
        &app,
        "/api/teams",
        json!({ "name": "A", "players": [{ "name": "Only", "number": 1 }] }),
    )
    .await;

    let (status, json) = patch(
        &app,
        &format!("/api/teams/{id}/players/not-a-player"),
        json!({ "name": "X", "number": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "message": "Team or player not found." }));

    let (status, json) = put(
        &app,
        "/api/teams/not-a-team/players/not-a-player",
        json!({ "name": "X", "number": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Team or player not found.");

    // roster untouched
    let (_, json) = get(&app, &format!("/api/teams/{id}")).await;
    assert_eq!(json["data"]["players"][0]["name"], "Only");
}

#[tokio::test]
async fn remove_unknown_player_leaves_roster_and_succeeds() {
    let app = test_app().await;
    let id = create(
        &app,
        "/api/teams",
        json!({ "name": "A", "players": [{ "name": "Stay", "number": 1 }] }),
    )
    .await;

    let (status, json) = delete(&app, &format!("/api/teams/{id}/players/unknown")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["players"].as_array().unwrap().len(), 1);

    let (status, json) = delete(&app, "/api/teams/unknown/players/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Team not found.");
}

#[tokio::test]
async fn remove_player_keeps_order_of_the_rest() {
    let app = test_app().await;
    let id = create(
        &app,
        "/api/teams",
        json!({ "name": "A", "players": [
            { "name": "One", "number": 1 },
            { "name": "Two", "number": 2 },
            { "name": "Three", "number": 3 }
        ] }),
    )
    .await;

    let (_, json) = get(&app, &format!("/api/teams/{id}")).await;
    let two = json["data"]["players"][1]["_id"].as_str().unwrap().to_string();

    let (status, json) = delete(&app, &format!("/api/teams/{id}/players/{two}")).await;
    assert_eq!(status, StatusCode::OK);
    let roster: Vec<&str> = json["data"]["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(roster, vec!["One", "Three"]);
}
