use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

/// Profile setup. Saving the form marks the profile complete; the token
/// cache may serve the previous row for up to its TTL.
#[tracing::instrument(name = "Update profile.", skip_all)]
#[put("/profile")]
pub async fn handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::ProfileForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::User>::build().form_error(errors.to_string()));
    }

    let mut updated = (**user).clone();
    form.apply_to(&mut updated);

    db::user::update(pg_pool.get_ref(), updated)
        .await
        .map(|user| JsonResponse::build().set_item(user).ok("Profile updated"))
        .map_err(|err| JsonResponse::<models::User>::build().internal_server_error(err))
}
