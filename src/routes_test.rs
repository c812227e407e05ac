use std::net::SocketAddr;

use super::*;

fn site_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("swiftkes-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).expect("create pkg dir");
    std::fs::write(root.join("pkg").join("swiftkes.css"), "body { margin: 0; }\n".repeat(64)).expect("write css");
    root
}

fn options(root: &std::path::Path) -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("swiftkes")
        .site_root(root.to_string_lossy().into_owned())
        .build()
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test router");
    });
    addr
}

// =============================================================
// Health
// =============================================================

#[tokio::test]
async fn healthz_returns_ok_with_empty_body() {
    let addr = serve(api_routes()).await;
    let resp = reqwest::get(format!("http://{addr}/healthz")).await.expect("request healthz");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.text().await.expect("body").is_empty());
}

// =============================================================
// Static assets
// =============================================================

#[tokio::test]
async fn pkg_assets_are_served_from_site_root() {
    let root = site_root("assets");
    let addr = serve(app(options(&root))).await;

    let resp = reqwest::get(format!("http://{addr}/pkg/swiftkes.css")).await.expect("request css");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.text().await.expect("body").starts_with("body { margin: 0; }"));
}

#[tokio::test]
async fn missing_pkg_asset_is_not_found() {
    let root = site_root("missing");
    let addr = serve(app(options(&root))).await;

    let resp = reqwest::get(format!("http://{addr}/pkg/nope.wasm")).await.expect("request wasm");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_are_gzip_compressed_when_accepted() {
    let root = site_root("gzip");
    let addr = serve(app(options(&root))).await;

    let resp = reqwest::Client::new()
        .get(format!("http://{addr}/pkg/swiftkes.css"))
        .header("accept-encoding", "gzip")
        .send()
        .await
        .expect("request css");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-encoding").and_then(|v| v.to_str().ok()),
        Some("gzip")
    );
}
