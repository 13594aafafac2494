use crate::configuration::Settings;
use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// The recommendation feed: the caller's next batch of unseen, active,
/// not-own projects. A pure read; view counters move on single-project
/// fetch, not here.
#[tracing::instrument(name = "Get projects for user.", skip_all)]
#[get("/for-user")]
pub async fn handler(
    user: web::ReqData<Arc<models::User>>,
    settings: web::Data<Settings>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::project::feed(pg_pool.get_ref(), user.id, settings.feed_limit)
        .await
        .map(|projects| JsonResponse::build().set_list(projects).ok("OK"))
        .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))
}
