//! End-to-end tests: HTTP contexts and the list consumer against a real
//! server bound to an ephemeral port.

use std::sync::Arc;

use assert_matches::assert_matches;
use brandkit_api::config::{ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
use brandkit_api::router::build_app_router;
use brandkit_api::state::AppState;
use brandkit_client::context::{BrandKit, HttpAssets, HttpColors, HttpTypography};
use brandkit_client::upload::{HttpUploader, UploadFile, Uploader};
use brandkit_client::{ClientConfig, ClientError, ListConsumer, LoadOutcome, ResourceContext};
use brandkit_core::error::CoreError;
use brandkit_core::pagination::PageRequest;
use brandkit_core::models::asset::CreateAsset;
use brandkit_core::models::color::CreateColor;
use brandkit_core::models::typography::CreateTypography;

struct TestServer {
    kit: BrandKit<HttpColors, HttpTypography, HttpAssets>,
    config: ClientConfig,
    upload_dir: tempfile::TempDir,
}

async fn spawn_server() -> TestServer {
    let upload_dir = tempfile::tempdir().unwrap();

    let pool = brandkit_db::create_pool("sqlite::memory:").await.unwrap();
    brandkit_db::run_migrations(&pool).await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server_config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: addr.port(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        upload_dir: upload_dir.path().to_path_buf(),
        public_base_url: format!("http://{addr}"),
        max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
    };
    let state = AppState {
        pool,
        config: Arc::new(server_config.clone()),
    };
    let app = build_app_router(state, &server_config);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{addr}/api/v1"));
    TestServer {
        kit: BrandKit::http(&config),
        config,
        upload_dir,
    }
}

fn new_color(name: &str, hex: &str) -> CreateColor {
    CreateColor {
        name: name.to_string(),
        hex: hex.to_string(),
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let server = spawn_server().await;
    let colors = &server.kit.colors;

    let created = colors.create(&new_color("Ocean", "0077BE")).await.unwrap();
    assert!(created.id > 0);

    let fetched = colors.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));

    assert_eq!(colors.get_by_id(999_999).await.unwrap(), None);
}

#[tokio::test]
async fn page_below_one_fails_locally() {
    let server = spawn_server().await;

    let result = server.kit.colors.list(&PageRequest::new(0, 10)).await;
    assert_matches!(result, Err(ClientError::Core(CoreError::Validation(_))));
}

#[tokio::test]
async fn query_filters_server_side() {
    let server = spawn_server().await;
    let colors = &server.kit.colors;
    colors.create(&new_color("Red A", "FF0000")).await.unwrap();
    colors.create(&new_color("Blue", "0000FF")).await.unwrap();

    let page = colors
        .list(&PageRequest::new(1, 10).with_query("red"))
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Red A");
    assert!(!page.has_more());
}

#[tokio::test]
async fn list_consumer_walks_all_pages_over_http() {
    let server = spawn_server().await;
    for i in 0..25 {
        server
            .kit
            .colors
            .create(&new_color(&format!("Shade {i}"), "112233"))
            .await
            .unwrap();
    }

    let list = ListConsumer::new(Arc::clone(&server.kit.colors), 10);
    list.load_more().await.unwrap();
    list.load_more().await.unwrap();
    list.load_more().await.unwrap();

    assert_eq!(list.items().await.len(), 25);
    assert!(list.is_reaching_end().await);
    assert_eq!(list.load_more().await.unwrap(), LoadOutcome::Skipped);
}

#[tokio::test]
async fn update_and_delete_surface_not_found() {
    let server = spawn_server().await;
    let typography = &server.kit.typography;

    let draft = CreateTypography {
        name: "Heading".to_string(),
        font_family: "Roboto".to_string(),
        font_size: 32.0,
        line_height: 1.2,
        bold: true,
        italic: false,
        underline: true,
        strikethrough: false,
    };
    let created = typography.create(&draft).await.unwrap();
    assert!(created.bold && created.underline);

    let changed = CreateTypography {
        italic: true,
        ..draft.clone()
    };
    let updated = typography.update(created.id, &changed).await.unwrap();
    assert!(updated.italic);
    assert_eq!(updated.created_at, created.created_at);

    let missing = typography.update(999_999, &draft).await.unwrap_err();
    assert!(missing.is_not_found());

    typography.delete(created.id).await.unwrap();
    let again = typography.delete(created.id).await.unwrap_err();
    assert!(again.is_not_found());
}

#[tokio::test]
async fn server_validation_errors_keep_their_code() {
    let server = spawn_server().await;

    let err = server
        .kit
        .colors
        .create(&new_color("Bad", "nothex"))
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Api { status: 400, ref code, .. } if code == "VALIDATION_ERROR");
}

#[tokio::test]
async fn uploaded_file_backs_a_new_asset() {
    let server = spawn_server().await;
    let uploader = HttpUploader::new(&server.config.base_url);

    let file = UploadFile::new("logo.png", "image/png", vec![0x89, b'P', b'N', b'G']);
    let url = uploader.upload(&file).await.unwrap();
    assert!(url.ends_with(".png"));
    assert_eq!(std::fs::read_dir(server.upload_dir.path()).unwrap().count(), 1);

    let asset = server
        .kit
        .assets
        .create(&CreateAsset {
            name: file.stem().to_string(),
            url: url.clone(),
        })
        .await
        .unwrap();
    assert_eq!(asset.url, url);

    let served = reqwest::get(&url).await.unwrap();
    assert!(served.status().is_success());
    assert_eq!(served.bytes().await.unwrap().as_ref(), &[0x89, b'P', b'N', b'G']);
}
