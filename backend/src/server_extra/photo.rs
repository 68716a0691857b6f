//! Axum route streaming report photos from object storage.

use anyhow::Context;
use axum::body::Body;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use minio::s3::types::S3Api;
use tracing::info;

use crate::media::{get_s3_client, photo_content_type, PHOTO_BUCKET};

async fn _serve_photo(object_path: String) -> anyhow::Result<impl IntoResponse> {
    info!("Serving photo: {}", object_path);

    let client = get_s3_client()?;
    let object = client
        .get_object(PHOTO_BUCKET, object_path.clone())
        .send()
        .await
        .context("Failed to get object")?;
    let (stream, _size) = object
        .content
        .to_stream()
        .await
        .context("Failed to get object stream")?;

    let headers: [(String, String); 2] = [
        (
            "Content-Type".to_string(),
            photo_content_type(&object_path).to_string(),
        ),
        ("Cache-Control".to_string(), "max-age=86400".to_string()),
    ];
    let body = Body::from_stream(stream);
    Ok((headers, body).into_response())
}

pub async fn serve_photo(Path(object_path): Path<String>) -> Response {
    match _serve_photo(object_path).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("serve_photo: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}
