use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{patch, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Update project.", skip_all)]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::ProjectUpdateForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Project>::build().form_error(errors.to_string()));
    }

    let project_id = path.0;
    let mut project = db::project::fetch(pg_pool.get_ref(), project_id)
        .await
        .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))
        .and_then(|project| match project {
            Some(project) => Ok(project),
            None => Err(JsonResponse::<models::Project>::build().not_found("Project not found")),
        })?;

    if !project.is_owned_by(user.id) {
        return Err(JsonResponse::<models::Project>::build()
            .forbidden("Not authorized to update this project"));
    }

    form.apply_to(&mut project);

    db::project::update(pg_pool.get_ref(), project)
        .await
        .map(|project| {
            JsonResponse::build()
                .set_item(project)
                .ok("Project updated successfully")
        })
        .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))
}
