use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::Error;
use actix_web::{
    post, web,
    web::{Bytes, Data},
    Responder, Result,
};
use serde_valid::Validate;
use sqlx::PgPool;
use std::str;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Add project.", skip_all)]
#[post("")]
pub async fn item(
    body: Bytes,
    user: web::ReqData<Arc<models::User>>,
    settings: Data<Settings>,
    pg_pool: Data<PgPool>,
) -> Result<impl Responder> {
    let form = body_into_form(body).await?;

    under_active_cap(pg_pool.get_ref(), user.id, settings.max_active_projects).await?;

    let project = form.into_model(user.id);
    db::project::insert(pg_pool.get_ref(), project)
        .await
        .map(|project| {
            JsonResponse::build()
                .set_id(project.id)
                .set_item(project)
                .created("Project created successfully")
        })
        .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))
}

async fn under_active_cap(pool: &PgPool, user_id: Uuid, cap: i64) -> Result<(), Error> {
    let active = db::project::count_active_by_owner(pool, user_id)
        .await
        .map_err(|err| JsonResponse::<models::Project>::build().internal_server_error(err))?;

    if active >= cap {
        return Err(JsonResponse::<models::Project>::build().bad_request(format!(
            "You have reached the maximum limit of {cap} active projects"
        )));
    }

    Ok(())
}

async fn body_into_form(body: Bytes) -> Result<forms::ProjectForm, Error> {
    let body_str = str::from_utf8(&body).map_err(|err| {
        JsonResponse::<forms::ProjectForm>::build().internal_server_error(err.to_string())
    })?;
    let deserializer = &mut serde_json::Deserializer::from_str(body_str);
    serde_path_to_error::deserialize(deserializer)
        .map_err(|err| {
            let msg = format!("{}:{:?}", err.path(), err);
            JsonResponse::<forms::ProjectForm>::build().bad_request(msg)
        })
        .and_then(|form: forms::ProjectForm| {
            if let Err(errors) = form.validate() {
                let errors = errors.to_string();
                tracing::debug!("Invalid data received {:?}", &errors);

                return Err(JsonResponse::<forms::ProjectForm>::build().form_error(errors));
            }

            Ok(form)
        })
}
