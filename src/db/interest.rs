use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

/// Records a swipe decision. The unique index on (user_id, project_id)
/// makes this an atomic upsert: the first swipe inserts, every re-swipe
/// overwrites `interested` in place. Last writer wins, which is correct
/// for a user's own sequential decisions.
pub async fn upsert(
    pool: &PgPool,
    user_id: Uuid,
    project_id: i32,
    interested: bool,
) -> Result<models::Interest, String> {
    let query_span = tracing::info_span!("Upsert swipe decision.");
    sqlx::query_as::<_, models::Interest>(
        r#"
        INSERT INTO project_interest (user_id, project_id, interested, created_at, updated_at)
        VALUES ($1, $2, $3, now(), now())
        ON CONFLICT (user_id, project_id)
        DO UPDATE SET interested = EXCLUDED.interested, updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(project_id)
    .bind(interested)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to upsert interest, error: {:?}", err);
        "Failed to record interest".to_string()
    })
}

/// Candidate set for the match deriver: everyone else currently
/// interested in the project, first-recorded-interest-first.
pub async fn fetch_interested_others(
    pool: &PgPool,
    project_id: i32,
    user_id: Uuid,
) -> Result<Vec<models::Interest>, String> {
    let query_span = tracing::info_span!("Fetch other interested users.");
    sqlx::query_as::<_, models::Interest>(
        r#"
        SELECT * FROM project_interest
        WHERE project_id = $1 AND user_id <> $2 AND interested = TRUE
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch interested users, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn count_by_user(pool: &PgPool, user_id: Uuid) -> Result<i64, String> {
    let query_span = tracing::info_span!("Count swipes by user.");
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM project_interest WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count swipes, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn count_interested_by_user(pool: &PgPool, user_id: Uuid) -> Result<i64, String> {
    let query_span = tracing::info_span!("Count right-swipes by user.");
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM project_interest WHERE user_id = $1 AND interested = TRUE",
    )
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to count right-swipes, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}
