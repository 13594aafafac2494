use serde_json::json;

mod common;

fn project_ids(body: &serde_json::Value) -> Vec<i64> {
    body["list"]
        .as_array()
        .expect("expected a list")
        .iter()
        .map(|project| project["id"].as_i64().expect("missing id"))
        .collect()
}

#[tokio::test]
async fn the_feed_excludes_own_and_already_swiped_listings() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let first = app.create_project("owner", "Realtime whiteboard").await;
    let second = app.create_project("owner", "Plant care reminder").await;
    let own = app.create_project("alice", "Markdown wiki").await;

    let body: serde_json::Value = app
        .client()
        .get(format!("{}/projects/for-user", app.address))
        .bearer_auth("alice")
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("feed response is not json");

    let ids = project_ids(&body);
    assert!(ids.contains(&(first as i64)));
    assert!(ids.contains(&(second as i64)));
    assert!(!ids.contains(&(own as i64)));

    // any recorded decision removes the listing, left swipes included
    app.swipe("alice", first, false).await;

    let body: serde_json::Value = app
        .client()
        .get(format!("{}/projects/for-user", app.address))
        .bearer_auth("alice")
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("feed response is not json");

    let ids = project_ids(&body);
    assert!(!ids.contains(&(first as i64)));
    assert!(ids.contains(&(second as i64)));
}

#[tokio::test]
async fn the_active_project_cap_is_enforced() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    for n in 0..5 {
        app.create_project("owner", &format!("Listing number {n}"))
            .await;
    }

    let response = app
        .client()
        .post(format!("{}/projects", app.address))
        .bearer_auth("owner")
        .json(&json!({
            "title": "One listing too many",
            "description": "This sixth concurrent listing should be rejected because the \
                            creator already has five active ones.",
            "techStack": ["rust"],
            "category": "backend",
            "difficulty": "beginner",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn viewing_someone_elses_listing_counts_a_view() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let project_id = app.create_project("owner", "Pixel art editor").await;

    let response = app
        .client()
        .get(format!("{}/projects/{}", app.address, project_id))
        .bearer_auth("alice")
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    // the owner's own reads never move the counter
    let body: serde_json::Value = app
        .client()
        .get(format!("{}/projects/{}", app.address, project_id))
        .bearer_auth("owner")
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("project response is not json");

    assert_eq!(1, body["item"]["viewCount"]);
}

#[tokio::test]
async fn only_the_owner_may_update_or_delete_a_listing() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let project_id = app.create_project("owner", "Static site generator").await;

    let response = app
        .client()
        .patch(format!("{}/projects/{}", app.address, project_id))
        .bearer_auth("alice")
        .json(&json!({ "title": "Hijacked title" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(403, response.status().as_u16());

    let response = app
        .client()
        .delete(format!("{}/projects/{}", app.address, project_id))
        .bearer_auth("alice")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(403, response.status().as_u16());
}

#[tokio::test]
async fn deleting_a_listing_hides_it_without_dropping_the_row() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let project_id = app.create_project("owner", "Ephemeral pastebin").await;

    let response = app
        .client()
        .delete(format!("{}/projects/{}", app.address, project_id))
        .bearer_auth("owner")
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    // hidden from everyone else
    let response = app
        .client()
        .get(format!("{}/projects/{}", app.address, project_id))
        .bearer_auth("alice")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());

    // the row itself survives as history
    let is_active =
        sqlx::query_scalar::<_, bool>("SELECT is_active FROM project WHERE id = $1")
            .bind(project_id)
            .fetch_one(&app.db_pool)
            .await
            .expect("Failed to read the project row");
    assert!(!is_active);
}

#[tokio::test]
async fn owners_can_update_their_listing() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let project_id = app.create_project("owner", "Inventory tracker").await;

    let body: serde_json::Value = app
        .client()
        .patch(format!("{}/projects/{}", app.address, project_id))
        .bearer_auth("owner")
        .json(&json!({ "title": "Warehouse tracker", "status": "in-progress" }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("update response is not json");

    assert_eq!("Warehouse tracker", body["item"]["title"]);
    assert_eq!("in-progress", body["item"]["status"]);
}

#[tokio::test]
async fn owner_stats_aggregate_across_listings() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let first = app.create_project("owner", "Event ticketing").await;
    app.create_project("owner", "Expense splitter").await;

    app.swipe("alice", first, true).await;

    let body: serde_json::Value = app
        .client()
        .get(format!("{}/projects/stats", app.address))
        .bearer_auth("owner")
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("stats response is not json");

    assert_eq!(2, body["item"]["totalProjects"]);
    assert_eq!(2, body["item"]["activeProjects"]);
    assert_eq!(1, body["item"]["totalInterests"]);
    assert_eq!(0, body["item"]["totalMatches"]);
}

#[tokio::test]
async fn create_rejects_a_too_short_description() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .client()
        .post(format!("{}/projects", app.address))
        .bearer_auth("owner")
        .json(&json!({
            "title": "Valid title",
            "description": "too short",
            "techStack": ["rust"],
            "category": "backend",
            "difficulty": "beginner",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}
