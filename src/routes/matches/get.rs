use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Get own matches.", skip_all)]
#[get("")]
pub async fn list(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::project_match::fetch_cards_by_user(pg_pool.get_ref(), user.id)
        .await
        .map(|cards| JsonResponse::build().set_list(cards).ok("OK"))
        .map_err(|err| JsonResponse::<views::MatchCard>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Get match.", skip_all)]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let match_id = path.0;
    let record = db::project_match::fetch(pg_pool.get_ref(), match_id)
        .await
        .map_err(|err| JsonResponse::<views::MatchItem>::build().internal_server_error(err))
        .and_then(|record| match record {
            // a match is visible to its participants only
            Some(record) if record.involves(user.id) => Ok(record),
            _ => Err(JsonResponse::<views::MatchItem>::build().not_found("Match not found")),
        })?;

    let item = views::MatchItem::for_participant(&record, user.id);
    Ok(JsonResponse::build().set_item(item).ok("OK"))
}
