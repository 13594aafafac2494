use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Soft delete: the listing drops out of the feed and the swipe flow but
/// existing interest and match rows stay behind.
#[tracing::instrument(name = "Delete project.", skip_all)]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let project_id = path.0;
    let project = db::project::fetch(pg_pool.get_ref(), project_id)
        .await
        .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))
        .and_then(|project| match project {
            Some(project) => Ok(project),
            None => Err(JsonResponse::<models::Project>::build().not_found("Project not found")),
        })?;

    if !project.is_owned_by(user.id) {
        return Err(JsonResponse::<models::Project>::build()
            .forbidden("Not authorized to delete this project"));
    }

    db::project::soft_delete(pg_pool.get_ref(), project.id)
        .await
        .map(|_| {
            JsonResponse::<models::Project>::build()
                .set_id(project.id)
                .ok("Project deleted successfully")
        })
        .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))
}
