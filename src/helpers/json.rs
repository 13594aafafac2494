use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

#[derive(Default)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub(crate) fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn to_json_response(self, code: StatusCode, msg: String) -> JsonResponse<T> {
        let status = if code.is_success() { "OK" } else { "Error" };

        JsonResponse {
            status: status.to_string(),
            message: msg,
            code: code.as_u16().into(),
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub(crate) fn ok(self, msg: impl ToString) -> HttpResponse {
        let response = self.to_json_response(StatusCode::OK, msg.to_string());
        HttpResponse::Ok().json(response)
    }

    pub(crate) fn created(self, msg: impl ToString) -> HttpResponse {
        let response = self.to_json_response(StatusCode::CREATED, msg.to_string());
        HttpResponse::Created().json(response)
    }

    fn to_error(self, code: StatusCode, msg: String) -> Error {
        let response = self.to_json_response(code, msg.clone());
        let http_response = HttpResponse::build(code).json(response);

        InternalError::from_response(msg, http_response).into()
    }

    pub(crate) fn bad_request(self, msg: impl ToString) -> Error {
        self.to_error(StatusCode::BAD_REQUEST, msg.to_string())
    }

    /// Validation failures carry the field detail produced by serde_valid.
    pub(crate) fn form_error(self, msg: impl ToString) -> Error {
        self.to_error(StatusCode::BAD_REQUEST, msg.to_string())
    }

    pub(crate) fn unauthorized(self, msg: impl ToString) -> Error {
        self.to_error(StatusCode::UNAUTHORIZED, msg.to_string())
    }

    pub(crate) fn forbidden(self, msg: impl ToString) -> Error {
        self.to_error(StatusCode::FORBIDDEN, msg.to_string())
    }

    pub(crate) fn not_found(self, msg: impl ToString) -> Error {
        self.to_error(StatusCode::NOT_FOUND, msg.to_string())
    }

    pub(crate) fn conflict(self, msg: impl ToString) -> Error {
        self.to_error(StatusCode::CONFLICT, msg.to_string())
    }

    pub(crate) fn internal_server_error(self, msg: impl ToString) -> Error {
        let msg = msg.to_string();
        let msg = if msg.trim().is_empty() {
            "Internal Server Error".to_string()
        } else {
            msg
        };
        self.to_error(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}
