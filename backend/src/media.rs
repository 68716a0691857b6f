//! Object storage access for already-uploaded report photos.

use anyhow::Context;
use minio::s3::creds::StaticProvider;
use minio::s3::http::BaseUrl;
use minio::s3::Client;

pub const PHOTO_BUCKET: &str = "fieldtrack-photos";

/// App-served URL for a photo object referenced by a report row.
pub fn photo_public_path(object_path: &str) -> String {
    format!(
        "{}/{object_path}",
        common::report_const::MEDIA_ROUTE_PREFIX
    )
}

/// Rough content type from the object extension; uploads are constrained
/// to these formats by the (out of scope) capture flow.
pub fn photo_content_type(object_path: &str) -> &'static str {
    match object_path.rsplit('.').next() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

pub fn get_s3_client() -> anyhow::Result<Client> {
    let s3_endpoint = std::env::var("S3_ENDPOINT").context("S3_ENDPOINT is not set")?;
    let base_url = s3_endpoint
        .parse::<BaseUrl>()
        .context("Failed to parse s3 endpoint")?;
    let static_provider = StaticProvider::new("fieldtrack", "fieldtrack-secret", None);
    Client::new(base_url, Some(Box::new(static_provider)), None, None)
        .context("Failed to create s3 client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_path_is_served_under_media() {
        assert_eq!(
            photo_public_path("placements/2024/07/123.jpg"),
            "/_media/placements/2024/07/123.jpg"
        );
    }

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(photo_content_type("a/b.png"), "image/png");
        assert_eq!(photo_content_type("a/b.webp"), "image/webp");
        assert_eq!(photo_content_type("a/b.jpg"), "image/jpeg");
        assert_eq!(photo_content_type("no_extension"), "image/jpeg");
    }
}
