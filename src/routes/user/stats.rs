use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Live aggregation over the ledger and the match store, scoped to the
/// caller. Unlike the project counters these are exact.
#[tracing::instrument(name = "Get user stats.", skip_all)]
#[get("/stats")]
pub async fn handler(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let total_projects = db::interest::count_by_user(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<views::UserStats>::build().internal_server_error(err))?;

    let interested_count = db::interest::count_interested_by_user(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<views::UserStats>::build().internal_server_error(err))?;

    let match_stats = db::project_match::stats_by_user(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<views::UserStats>::build().internal_server_error(err))?;

    let stats = views::UserStats {
        total_projects,
        interested_count,
        matches_count: match_stats.total,
        pending_matches: match_stats.pending,
        active_matches: match_stats.active,
        profile_completed: user.profile_completed,
    };

    Ok(JsonResponse::build().set_item(stats).ok("OK"))
}
