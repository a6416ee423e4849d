use actix_web::{
    http::{header, StatusCode},
    HttpResponse, HttpResponseBuilder,
};
use apm_error::Error;

use crate::view;

pub mod todo;

/// HTML counterpart of the REST envelope: pages, redirects and error pages.
pub struct Response;

impl Response {
    pub fn page(body: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type(mime_html())
            .body(body)
    }

    /// `303 See Other`, so the browser follows up with a `GET`.
    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    pub fn error(err: &Error) -> HttpResponse {
        let status_code = match err {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Io(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if err.is_internal() {
            apm_log::error(None, format!("[ApiWebServer] {err:#}"));
        }

        Self::error_raw(&status_code, &err.public_message())
    }

    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        if status_code.is_client_error() {
            apm_log::warn(None, message);
        }

        HttpResponseBuilder::new(*status_code)
            .content_type(mime_html())
            .body(view::error(status_code, message))
    }
}

fn mime_html() -> &'static str {
    "text/html; charset=utf-8"
}
