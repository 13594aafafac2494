use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Owner dashboard over the caller's listings. Sums the denormalized
/// counters; approximate by design.
#[tracing::instrument(name = "Get project stats.", skip_all)]
#[get("/stats")]
pub async fn handler(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::project::owner_stats(pg_pool.get_ref(), user.id)
        .await
        .map(|stats| JsonResponse::build().set_item(stats).ok("OK"))
        .map_err(|err| JsonResponse::<views::ProjectStats>::build().internal_server_error(err))
}
