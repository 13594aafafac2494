use serde_json::json;

mod common;

/// Swipes "alice" and "bob" onto a fresh listing and returns the id of
/// the match that forms.
async fn form_match(app: &common::TestApp, title: &str) -> i32 {
    let project_id = app.create_project("owner", title).await;
    app.swipe("alice", project_id, true).await;
    let body = app.swipe("bob", project_id, true).await;
    body["item"]["matchId"].as_i64().expect("no match formed") as i32
}

async fn patch_match(
    app: &common::TestApp,
    token: &str,
    match_id: i32,
    body: serde_json::Value,
) -> reqwest::Response {
    app.client()
        .patch(format!("{}/matches/{}", app.address, match_id))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn each_participant_sees_the_other_ones_card() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    form_match(&app, "Collaborative playlist").await;

    let body: serde_json::Value = app
        .client()
        .get(format!("{}/matches", app.address))
        .bearer_auth("alice")
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("match list is not json");

    let list = body["list"].as_array().expect("expected a list");
    assert_eq!(1, list.len());
    assert_eq!("bob", list[0]["otherUserName"]);
    assert_eq!("bob@example.com", list[0]["otherUserEmail"]);
    assert_eq!("pending", list[0]["status"]);

    let body: serde_json::Value = app
        .client()
        .get(format!("{}/matches", app.address))
        .bearer_auth("bob")
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("match list is not json");

    assert_eq!("alice", body["list"][0]["otherUserName"]);
}

#[tokio::test]
async fn matches_are_invisible_to_non_participants() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let match_id = form_match(&app, "Language exchange app").await;

    let response = app
        .client()
        .get(format!("{}/matches/{}", app.address, match_id))
        .bearer_auth("carol")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());

    let response = patch_match(&app, "carol", match_id, json!({ "status": "active" })).await;
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn the_status_lifecycle_only_moves_forward() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let match_id = form_match(&app, "Peer review queue").await;

    // pending may not jump straight to completed
    let response = patch_match(&app, "alice", match_id, json!({ "status": "completed" })).await;
    assert_eq!(400, response.status().as_u16());

    let response = patch_match(&app, "alice", match_id, json!({ "status": "active" })).await;
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("not json");
    assert_eq!("active", body["item"]["status"]);

    // active may not be cancelled
    let response = patch_match(&app, "bob", match_id, json!({ "status": "cancelled" })).await;
    assert_eq!(400, response.status().as_u16());

    let response = patch_match(&app, "bob", match_id, json!({ "status": "completed" })).await;
    assert!(response.status().is_success());

    // completed is terminal
    let response = patch_match(&app, "alice", match_id, json!({ "status": "active" })).await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn resending_the_current_status_is_a_noop() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let match_id = form_match(&app, "Carpool coordinator").await;

    let response = patch_match(&app, "alice", match_id, json!({ "status": "pending" })).await;
    assert!(response.status().is_success());
}

#[tokio::test]
async fn conversation_started_is_one_way() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let match_id = form_match(&app, "Study group finder").await;

    let response =
        patch_match(&app, "alice", match_id, json!({ "conversationStarted": true })).await;
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("not json");
    assert_eq!(true, body["item"]["conversationStarted"]);

    let response =
        patch_match(&app, "bob", match_id, json!({ "conversationStarted": false })).await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn notes_are_capped_at_500_characters() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let match_id = form_match(&app, "Meetup scheduler").await;

    let response =
        patch_match(&app, "alice", match_id, json!({ "notes": "a".repeat(501) })).await;
    assert_eq!(400, response.status().as_u16());

    let response =
        patch_match(&app, "alice", match_id, json!({ "notes": "kickoff call on friday" })).await;
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("not json");
    assert_eq!("kickoff call on friday", body["item"]["notes"]);
}

#[tokio::test]
async fn match_stats_count_by_status() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let first = form_match(&app, "Open source triage").await;
    form_match(&app, "Podcast transcriber").await;

    let response = patch_match(&app, "alice", first, json!({ "status": "active" })).await;
    assert!(response.status().is_success());

    let body: serde_json::Value = app
        .client()
        .get(format!("{}/matches/stats", app.address))
        .bearer_auth("alice")
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("stats response is not json");

    assert_eq!(2, body["item"]["total"]);
    assert_eq!(1, body["item"]["pending"]);
    assert_eq!(1, body["item"]["active"]);
    assert_eq!(0, body["item"]["completed"]);
}
