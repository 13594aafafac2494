use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::matchmaker;
use crate::views;
use actix_web::{post, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// The swipe orchestrator: ledger upsert, then match derivation when the
/// decision is "interested". Every outcome is a definite response within
/// this request; retrying the whole call is safe because the ledger
/// upsert is idempotent.
#[tracing::instrument(name = "Swipe.", skip_all, fields(project_id = form.project_id, interested = form.interested))]
#[post("")]
pub async fn handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::SwipeForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form = form.into_inner();

    let project = db::project::fetch(pg_pool.get_ref(), form.project_id)
        .await
        .map_err(|err| JsonResponse::<views::MatchPush>::build().internal_server_error(err))
        .and_then(|project| match project {
            Some(project) if project.is_active => Ok(project),
            _ => Err(JsonResponse::<views::MatchPush>::build().not_found("Project not found")),
        })?;

    db::interest::upsert(pg_pool.get_ref(), user.id, project.id, form.interested)
        .await
        .map_err(|err| JsonResponse::<views::MatchPush>::build().internal_server_error(err))?;

    if !form.interested {
        return Ok(JsonResponse::<views::MatchPush>::build().ok("Marked as not interested"));
    }

    // display statistic only: re-swipes inflate it and revokes never
    // decrement it
    db::project::increment_interest_count(pg_pool.get_ref(), project.id)
        .await
        .map_err(|err| JsonResponse::<views::MatchPush>::build().internal_server_error(err))?;

    matchmaker::derive(pg_pool.get_ref(), &project, user.id)
        .await
        .map(|push| match push {
            Some(push) => JsonResponse::build().set_item(push).ok("It's a match!"),
            None => JsonResponse::<views::MatchPush>::build().ok("Interest recorded!"),
        })
        .map_err(|err| JsonResponse::<views::MatchPush>::build().internal_server_error(err))
}
