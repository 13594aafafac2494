use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Get own projects.", skip_all)]
#[get("")]
pub async fn list(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::project::fetch_by_owner(pg_pool.get_ref(), user.id)
        .await
        .map(|projects| JsonResponse::build().set_list(projects).ok("OK"))
        .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Get project.", skip_all)]
#[get("/{id}")]
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
            Some(project) if project.is_active || project.is_owned_by(user.id) => Ok(project),
            _ => Err(JsonResponse::<models::Project>::build().not_found("Project not found")),
        })?;

    // owners browsing their own listing don't move the statistic
    if !project.is_owned_by(user.id) {
        db::project::increment_view_count(pg_pool.get_ref(), project.id)
            .await
            .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))?;
    }

    Ok(JsonResponse::build().set_item(project).ok("OK"))
}
