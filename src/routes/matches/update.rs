use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{patch, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

/// Either participant may drive the lifecycle; the design does not
/// require both parties to agree before a transition.
#[tracing::instrument(name = "Update match.", skip_all)]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::MatchUpdateForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::MatchItem>::build().form_error(errors.to_string()));
    }

    let match_id = path.0;
    let mut record = db::project_match::fetch(pg_pool.get_ref(), match_id)
        .await
        .map_err(|err| JsonResponse::<views::MatchItem>::build().internal_server_error(err))
        .and_then(|record| match record {
            Some(record) if record.involves(user.id) => Ok(record),
            _ => Err(JsonResponse::<views::MatchItem>::build().not_found("Match not found")),
        })?;

    if let Some(next) = form.status {
        // re-sending the current status is a no-op, not an error
        if next != record.status {
            if !record.status.can_transition_to(next) {
                return Err(JsonResponse::<views::MatchItem>::build().bad_request(format!(
                    "Invalid status transition {:?} -> {:?}",
                    record.status, next
                )));
            }
            record.status = next;
        }
    }

    if let Some(flag) = form.conversation_started {
        if !flag {
            return Err(JsonResponse::<views::MatchItem>::build()
                .bad_request("conversationStarted cannot be unset"));
        }
        record.conversation_started = true;
    }

    if let Some(notes) = form.notes {
        record.notes = Some(notes);
    }

    db::project_match::update(pg_pool.get_ref(), record)
        .await
        .map(|record| {
            let item = views::MatchItem::for_participant(&record, user.id);
            JsonResponse::build().set_item(item).ok("Match updated")
        })
        .map_err(|err| JsonResponse::<views::MatchItem>::build().internal_server_error(err))
}
