use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Get match stats.", skip_all)]
#[get("/stats")]
pub async fn handler(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::project_match::stats_by_user(pg_pool.get_ref(), user.id)
        .await
        .map(|stats| JsonResponse::build().set_item(stats).ok("OK"))
        .map_err(|err| JsonResponse::<views::MatchStats>::build().internal_server_error(err))
}
