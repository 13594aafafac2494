use crate::models;
use crate::views;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

/// Creates a match for the pair unless one already exists. The pair is
/// normalized before the insert, so the unique index on
/// (project_id, user1_id, user2_id) holds for both orientations and a
/// losing concurrent insert simply yields `None` instead of an error.
pub async fn insert_if_absent(
    pool: &PgPool,
    project_id: i32,
    a: Uuid,
    b: Uuid,
) -> Result<Option<models::Match>, String> {
    let (user1_id, user2_id) = models::normalize_pair(a, b);
    let query_span = tracing::info_span!("Saving new match into the database.");
    sqlx::query_as::<_, models::Match>(
        r#"
        INSERT INTO project_match
            (project_id, user1_id, user2_id, status, matched_at,
             conversation_started, notes, created_at, updated_at)
        VALUES ($1, $2, $3, $4, now(), FALSE, NULL, now(), now())
        ON CONFLICT (project_id, user1_id, user2_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(project_id)
    .bind(user1_id)
    .bind(user2_id)
    .bind(models::MatchStatus::Pending)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert match, error: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Match>, String> {
    let query_span = tracing::info_span!("Fetch match by id.");
    sqlx::query_as::<_, models::Match>("SELECT * FROM project_match WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch match, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn update(pool: &PgPool, m: models::Match) -> Result<models::Match, String> {
    let query_span = tracing::info_span!("Updating match.");
    sqlx::query_as::<_, models::Match>(
        r#"
        UPDATE project_match
        SET
            status = $2,
            conversation_started = $3,
            notes = $4,
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(m.id)
    .bind(m.status)
    .bind(m.conversation_started)
    .bind(&m.notes)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update match, error: {:?}", err);
        "Failed to update".to_string()
    })
}

/// Caller's matches joined with the project title and the other
/// participant's contact card, newest first.
pub async fn fetch_cards_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<views::MatchCard>, String> {
    let query_span = tracing::info_span!("Fetch match cards by user.");
    sqlx::query_as::<_, views::MatchCard>(
        r#"
        SELECT
            m.id,
            m.project_id,
            p.title            AS project_title,
            p.tech_stack,
            m.status,
            m.matched_at,
            m.conversation_started,
            m.notes,
            u.name             AS other_user_name,
            u.contact_email    AS other_user_email,
            u.contact_whatsapp AS other_user_whatsapp,
            u.contact_telegram AS other_user_telegram
        FROM project_match m
        JOIN project p ON p.id = m.project_id
        JOIN users u
          ON u.id = CASE WHEN m.user1_id = $1 THEN m.user2_id ELSE m.user1_id END
        WHERE m.user1_id = $1 OR m.user2_id = $1
        ORDER BY m.matched_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch match cards, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn stats_by_user(pool: &PgPool, user_id: Uuid) -> Result<views::MatchStats, String> {
    let query_span = tracing::info_span!("Aggregate match stats by user.");
    sqlx::query_as::<_, views::MatchStats>(
        r#"
        SELECT
            COUNT(*)                                       AS total,
            COUNT(*) FILTER (WHERE status = 'pending')     AS pending,
            COUNT(*) FILTER (WHERE status = 'active')      AS active,
            COUNT(*) FILTER (WHERE status = 'completed')   AS completed,
            COUNT(*) FILTER (WHERE status = 'cancelled')   AS cancelled
        FROM project_match
        WHERE user1_id = $1 OR user2_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to aggregate match stats, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}
