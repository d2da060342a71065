use std::fs;

use covercli::image::{FetchError, download_image};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IMAGE_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];

#[tokio::test]
async fn test_probe_content_type_drives_extension() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/art/dynamic"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/jpeg"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/art/dynamic"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(IMAGE_BYTES),
        )
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let base = dir.path().join("cover");
    let url = format!("{}/art/dynamic", server.uri());

    let saved = download_image(&url, &base).await.unwrap();

    assert_eq!(saved, dir.path().join("cover.jpg"));
    assert_eq!(fs::read(&saved).unwrap(), IMAGE_BYTES);
}

#[tokio::test]
async fn test_failed_probe_falls_back_to_url_extension() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/art/image.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(IMAGE_BYTES))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let base = dir.path().join("cover");
    let url = format!("{}/art/image.png", server.uri());

    let saved = download_image(&url, &base).await.unwrap();

    assert_eq!(saved, dir.path().join("cover.png"));
    assert_eq!(fs::read(&saved).unwrap(), IMAGE_BYTES);
}

#[tokio::test]
async fn test_failed_probe_without_url_extension_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/art/dynamic"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(IMAGE_BYTES))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let base = dir.path().join("cover");
    let url = format!("{}/art/dynamic", server.uri());

    let saved = download_image(&url, &base).await.unwrap();
    assert_eq!(saved, dir.path().join("cover.jpg"));
}

#[tokio::test]
async fn test_content_fetch_error_writes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/png"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let base = dir.path().join("cover");
    let url = format!("{}/art/gone", server.uri());

    let result = download_image(&url, &base).await;

    assert!(matches!(result, Err(FetchError::Request(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_creates_destination_directory() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/gif"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(IMAGE_BYTES))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let base = dir.path().join("New Album").join("cover");
    let url = format!("{}/art/dynamic", server.uri());

    let saved = download_image(&url, &base).await.unwrap();

    assert_eq!(saved, dir.path().join("New Album").join("cover.gif"));
    assert_eq!(fs::read(&saved).unwrap(), IMAGE_BYTES);
}

#[tokio::test]
async fn test_overwrites_existing_file() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/jpeg"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(IMAGE_BYTES))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cover.jpg"), b"stale").unwrap();
    let url = format!("{}/art/dynamic", server.uri());

    let saved = download_image(&url, &dir.path().join("cover")).await.unwrap();
    assert_eq!(fs::read(&saved).unwrap(), IMAGE_BYTES);
}
