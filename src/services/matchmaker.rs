use crate::db;
use crate::models;
use crate::views;
use sqlx::PgPool;
use uuid::Uuid;

/// Match derivation. Runs after a right-swipe has been recorded in the
/// ledger: scans the other interested users on the project in
/// first-recorded-interest-first order and pairs the swiper with the
/// first candidate they are not already matched with. At most one match
/// is created per swipe event.
///
/// Uniqueness is enforced by the storage layer, not by a check here:
/// `insert_if_absent` races are resolved by the unique index, and a
/// candidate that loses the race is skipped like any already-matched one.
#[tracing::instrument(name = "Derive match.", skip(pool, project), fields(project_id = project.id))]
pub async fn derive(
    pool: &PgPool,
    project: &models::Project,
    swiper_id: Uuid,
) -> Result<Option<views::MatchPush>, String> {
    let candidates = db::interest::fetch_interested_others(pool, project.id, swiper_id).await?;

    for candidate in candidates {
        let created =
            db::project_match::insert_if_absent(pool, project.id, swiper_id, candidate.user_id)
                .await?;

        let record = match created {
            Some(record) => record,
            // already matched with this candidate, keep scanning
            None => continue,
        };

        tracing::info!(
            match_id = record.id,
            other_user = %candidate.user_id,
            "New match derived"
        );

        db::project::increment_match_count(pool, project.id).await?;

        let other_user = db::user::fetch(pool, candidate.user_id).await?;
        if other_user.is_none() {
            tracing::warn!(other_user = %candidate.user_id, "Matched user row is missing");
        }

        return Ok(Some(views::MatchPush::new(
            &record,
            project,
            other_user.as_ref(),
        )));
    }

    Ok(None)
}
