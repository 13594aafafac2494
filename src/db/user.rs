use crate::forms;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

/// Fetches the profile row for an authenticated identity, creating it on
/// the first sign-in. The email column is unique; a concurrent first
/// request for the same identity resolves to the same row.
pub async fn ensure(
    pool: &PgPool,
    identity: &forms::IdentityForm,
) -> Result<models::User, String> {
    let query_span = tracing::info_span!("Ensure user row for identity.");
    let user = models::User::new(
        identity.email.to_lowercase(),
        identity.name.clone(),
        identity.image.clone(),
    );

    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users
            (id, email, name, image, bio, skills, location,
             contact_email, contact_whatsapp, contact_telegram,
             github_profile, portfolio_url, experience, interests,
             profile_completed, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
        ON CONFLICT (email) DO UPDATE SET updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.image)
    .bind(&user.bio)
    .bind(&user.skills)
    .bind(&user.location)
    .bind(&user.contact_email)
    .bind(&user.contact_whatsapp)
    .bind(&user.contact_telegram)
    .bind(&user.github_profile)
    .bind(&user.portfolio_url)
    .bind(user.experience)
    .bind(&user.interests)
    .bind(user.profile_completed)
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to ensure user row, error: {:?}", err);
        "Could not resolve user".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by id.");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch user, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn update(pool: &PgPool, user: models::User) -> Result<models::User, String> {
    let query_span = tracing::info_span!("Updating user profile.");
    sqlx::query_as::<_, models::User>(
        r#"
        UPDATE users
        SET
            name = $2,
            image = $3,
            bio = $4,
            skills = $5,
            location = $6,
            contact_email = $7,
            contact_whatsapp = $8,
            contact_telegram = $9,
            github_profile = $10,
            portfolio_url = $11,
            experience = $12,
            interests = $13,
            profile_completed = $14,
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.image)
    .bind(&user.bio)
    .bind(&user.skills)
    .bind(&user.location)
    .bind(&user.contact_email)
    .bind(&user.contact_whatsapp)
    .bind(&user.contact_telegram)
    .bind(&user.github_profile)
    .bind(&user.portfolio_url)
    .bind(user.experience)
    .bind(&user.interests)
    .bind(user.profile_completed)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update user, error: {:?}", err);
        "Failed to update".to_string()
    })
}
