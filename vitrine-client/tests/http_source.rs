use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::json;
use tokio::net::TcpListener;
use vitrine_client::{CatalogSource, FetchError, HttpCatalogSource};
use vitrine_model::MediaCategory;

async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn decodes_catalog_listing() {
    let origin = spawn_stub(Router::new().route(
        "/api/media",
        get(|| async {
            Json(json!({
                "files": [
                    { "name": "a b.png", "url": "/Media/a%20b.png", "type": "image" },
                    { "name": "notes.txt", "url": "/Media/notes.txt", "type": "doc" },
                ]
            }))
        }),
    ))
    .await;

    let source = HttpCatalogSource::new(origin).unwrap();
    let catalog = source.fetch_catalog().await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "a b.png");
    assert_eq!(catalog[1].category, MediaCategory::Document);
}

#[tokio::test]
async fn server_error_is_status_failure() {
    let origin = spawn_stub(Router::new().route(
        "/api/media",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Unable to fetch media files." })),
            )
        }),
    ))
    .await;

    let err = HttpCatalogSource::new(origin)
        .unwrap()
        .fetch_catalog()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500 }));
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let origin = spawn_stub(
        Router::new().route("/api/media", get(|| async { "not json" })),
    )
    .await;

    let err = HttpCatalogSource::new(origin)
        .unwrap()
        .fetch_catalog()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpCatalogSource::new(format!("http://{addr}"))
        .unwrap()
        .fetch_catalog()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
