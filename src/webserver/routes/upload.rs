/// Statement upload endpoint
///
/// `POST /upload` accepts a multipart form and acknowledges the first part
/// named `file` with its filename and byte size. The contents are read and
/// discarded; parsing uploaded statements is a client-side concern.
use axum::{
    extract::Multipart,
    http::StatusCode,
    response::Response,
    routing::post,
    Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    logger::{self, LogTag},
    webserver::{
        state::AppState,
        utils::{error_response, json_response},
    },
};

#[derive(Debug, Serialize)]
struct UploadResponse {
    message: &'static str,
    filename: String,
    size: usize,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/upload", post(upload_file))
}

/// POST /upload
async fn upload_file(mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                logger::warning(
                    LogTag::Webserver,
                    &format!("malformed multipart body: {}", err),
                );
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let size = match field.bytes().await {
            Ok(bytes) => bytes.len(),
            Err(err) => {
                logger::warning(
                    LogTag::Webserver,
                    &format!("failed reading upload body: {}", err),
                );
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
        };

        logger::info(
            LogTag::Webserver,
            &format!("received upload: {} ({} bytes)", filename, size),
        );

        return json_response(UploadResponse {
            message: "File uploaded successfully",
            filename,
            size,
        });
    }

    error_response(StatusCode::BAD_REQUEST, "No file uploaded")
}
