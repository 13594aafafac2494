use actix_web::{get, HttpResponse, Responder, Result};

#[tracing::instrument(name = "Health check.")]
#[get("")]
pub async fn health_check() -> Result<impl Responder> {
    Ok(HttpResponse::Ok().finish())
}
