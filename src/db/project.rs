use crate::models;
use crate::views;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Project>, String> {
    let query_span = tracing::info_span!("Fetch project by id.");
    sqlx::query_as::<_, models::Project>("SELECT * FROM project WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch project, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_by_owner(pool: &PgPool, user_id: Uuid) -> Result<Vec<models::Project>, String> {
    let query_span = tracing::info_span!("Fetch projects by owner.");
    sqlx::query_as::<_, models::Project>(
        "SELECT * FROM project WHERE created_by = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch projects, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn count_active_by_owner(pool: &PgPool, user_id: Uuid) -> Result<i64, String> {
    let query_span = tracing::info_span!("Count owner's active projects.");
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM project WHERE created_by = $1 AND is_active = TRUE",
    )
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to count projects, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// Recommendation feed: active listings the user neither owns nor has
/// swiped on, newest first. A pure read; no counters move here.
pub async fn feed(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<models::Project>, String> {
    let query_span = tracing::info_span!("Fetch recommendation feed.");
    sqlx::query_as::<_, models::Project>(
        r#"
        SELECT * FROM project
        WHERE is_active = TRUE
          AND created_by <> $1
          AND id NOT IN (SELECT project_id FROM project_interest WHERE user_id = $1)
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch feed, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, project: models::Project) -> Result<models::Project, String> {
    let query_span = tracing::info_span!("Saving new project into the database.");
    sqlx::query_as::<_, models::Project>(
        r#"
        INSERT INTO project
            (title, description, tech_stack, category, difficulty,
             estimated_duration, created_by, is_active, is_predefined, status,
             view_count, interest_count, match_count, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.tech_stack)
    .bind(project.category)
    .bind(project.difficulty)
    .bind(&project.estimated_duration)
    .bind(project.created_by)
    .bind(project.is_active)
    .bind(project.is_predefined)
    .bind(project.status)
    .bind(project.view_count)
    .bind(project.interest_count)
    .bind(project.match_count)
    .bind(project.created_at)
    .bind(project.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, project: models::Project) -> Result<models::Project, String> {
    let query_span = tracing::info_span!("Updating project.");
    sqlx::query_as::<_, models::Project>(
        r#"
        UPDATE project
        SET
            title = $2,
            description = $3,
            tech_stack = $4,
            category = $5,
            difficulty = $6,
            estimated_duration = $7,
            status = $8,
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(project.id)
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.tech_stack)
    .bind(project.category)
    .bind(project.difficulty)
    .bind(&project.estimated_duration)
    .bind(project.status)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

#[tracing::instrument(name = "Soft-delete project.", skip(pool))]
pub async fn soft_delete(pool: &PgPool, id: i32) -> Result<(), String> {
    sqlx::query("UPDATE project SET is_active = FALSE, updated_at = now() WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to soft-delete project, error: {:?}", err);
            "Failed to delete".to_string()
        })
}

// Denormalized statistics. Single-field atomic increments only; never
// read-modify-write from application memory.

pub async fn increment_view_count(pool: &PgPool, id: i32) -> Result<(), String> {
    increment(pool, "view_count", id).await
}

pub async fn increment_interest_count(pool: &PgPool, id: i32) -> Result<(), String> {
    increment(pool, "interest_count", id).await
}

pub async fn increment_match_count(pool: &PgPool, id: i32) -> Result<(), String> {
    increment(pool, "match_count", id).await
}

async fn increment(pool: &PgPool, column: &'static str, id: i32) -> Result<(), String> {
    let query_span = tracing::info_span!("Increment project counter.", column);
    sqlx::query(&format!(
        "UPDATE project SET {column} = {column} + 1 WHERE id = $1"
    ))
    .bind(id)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to increment {}, error: {:?}", column, err);
        "Failed to update counter".to_string()
    })
}

/// Dashboard aggregation over the caller's own listings.
pub async fn owner_stats(pool: &PgPool, user_id: Uuid) -> Result<views::ProjectStats, String> {
    let query_span = tracing::info_span!("Aggregate owner project stats.");
    sqlx::query_as::<_, views::ProjectStats>(
        r#"
        SELECT
            COUNT(*)                                           AS total_projects,
            COUNT(*) FILTER (WHERE status = 'draft')           AS draft_projects,
            COUNT(*) FILTER (WHERE status = 'active')          AS active_projects,
            COUNT(*) FILTER (WHERE status = 'in-progress')     AS in_progress_projects,
            COUNT(*) FILTER (WHERE status = 'completed')       AS completed_projects,
            COUNT(*) FILTER (WHERE status = 'archived')        AS archived_projects,
            COALESCE(SUM(view_count), 0)::BIGINT               AS total_views,
            COALESCE(SUM(interest_count), 0)::BIGINT           AS total_interests,
            COALESCE(SUM(match_count), 0)::BIGINT              AS total_matches
        FROM project
        WHERE created_by = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to aggregate project stats, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}
