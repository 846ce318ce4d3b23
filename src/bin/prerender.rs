//! Static pre-render step for the marketing site build.
//!
//! Serves the built site from `dist/`, fetches every known static route
//! from that local server, extracts the rendered root element and splices
//! it into a copy of the base template, writing one `index.html` per
//! route so crawlers see content without executing client-side code.
//!
//! Routes are processed sequentially with a fixed per-request timeout and
//! a fixed settle delay. A failed route is logged and skipped; the
//! process always exits 0 so a broken pre-render never fails the build.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Static routes of the public site
const ROUTES: &[&str] = &[
    "/",
    "/about",
    "/team",
    "/blog",
    "/careers",
    "/contact",
    "/demo",
    "/partners",
    "/videos",
    "/privacy",
    "/terms",
];

/// Per-route fetch timeout
const NAV_TIMEOUT: Duration = Duration::from_secs(30);

/// Settle delay after each fetch before extraction
const SETTLE_DELAY: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let dist_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    // The whole run is best effort: log and exit 0 either way so the
    // surrounding build pipeline keeps going.
    if let Err(e) = prerender(&dist_dir).await {
        tracing::error!(error = %e, "Pre-render failed, build output left as-is");
    }
}

async fn prerender(dist_dir: &Path) -> Result<(), String> {
    let template_path = dist_dir.join("index.html");
    let template = std::fs::read_to_string(&template_path)
        .map_err(|e| format!("Cannot read {}: {}", template_path.display(), e))?;

    // Serve the build output locally; unknown paths fall back to the
    // template the same way the production host serves the SPA.
    let serve = ServeDir::new(dist_dir).fallback(ServeFile::new(&template_path));
    let app = Router::new().fallback_service(serve);

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .map_err(|e| format!("Cannot bind local server: {}", e))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Cannot resolve local address: {}", e))?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    tracing::info!(addr = %addr, routes = ROUTES.len(), "Pre-rendering routes");

    let client = reqwest::Client::builder()
        .timeout(NAV_TIMEOUT)
        .build()
        .map_err(|e| format!("Cannot build HTTP client: {}", e))?;

    let mut rendered = 0usize;
    for route in ROUTES {
        match prerender_route(&client, addr, route, &template).await {
            Ok(html) => {
                let output = output_path(dist_dir, route);
                if let Err(e) = write_output(&output, &html) {
                    tracing::warn!(route = route, error = %e, "Skipping route, write failed");
                    continue;
                }
                tracing::info!(route = route, output = %output.display(), "Route pre-rendered");
                rendered += 1;
            }
            Err(e) => {
                tracing::warn!(route = route, error = %e, "Skipping route");
            }
        }
    }

    tracing::info!(rendered, total = ROUTES.len(), "Pre-render finished");
    Ok(())
}

/// Fetches one route and splices its rendered root into the template
async fn prerender_route(
    client: &reqwest::Client,
    addr: SocketAddr,
    route: &str,
    template: &str,
) -> Result<String, String> {
    let url = format!("http://{}{}", addr, route);
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Fetch failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("Unexpected status: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Body read failed: {}", e))?;

    // Give the server a beat between routes, mirroring the old
    // settle-after-navigation behavior.
    tokio::time::sleep(SETTLE_DELAY).await;

    let root = extract_root(&body).ok_or("No root element in response")?;
    splice_root(template, &root).ok_or_else(|| "No root element in template".to_string())
}

/// Extracts the `<div id="root">...</div>` element, tags included
fn extract_root(html: &str) -> Option<&str> {
    let start = html.find("<div id=\"root\"")?;
    let end = find_matching_close(html, start)?;
    Some(&html[start..end])
}

/// Replaces the template's root element with the rendered one
fn splice_root(template: &str, rendered_root: &str) -> Option<String> {
    let start = template.find("<div id=\"root\"")?;
    let end = find_matching_close(template, start)?;

    let mut out = String::with_capacity(template.len() + rendered_root.len());
    out.push_str(&template[..start]);
    out.push_str(rendered_root);
    out.push_str(&template[end..]);
    Some(out)
}

/// Finds the byte index just past the `</div>` matching the div opened
/// at `start`, tracking nested divs
fn find_matching_close(html: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = start;

    loop {
        let rest = &html[pos..];
        let open = rest.find("<div");
        let close = rest.find("</div>");

        match (open, close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos += o + 4;
            }
            (_, Some(c)) => {
                depth -= 1;
                pos += c + 6;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => return None,
        }
    }
}

/// Maps a route to its output file under the dist directory
fn output_path(dist_dir: &Path, route: &str) -> PathBuf {
    if route == "/" {
        dist_dir.join("index.html")
    } else {
        dist_dir.join(route.trim_start_matches('/')).join("index.html")
    }
}

fn write_output(path: &Path, html: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    std::fs::write(path, html).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"<html><head><title>Halcyon</title></head>
<body><div id="root"></div><script src="/app.js"></script></body></html>"#;

    #[test]
    fn extract_root_simple() {
        let html = r#"<body><div id="root"><p>hi</p></div></body>"#;
        assert_eq!(extract_root(html), Some(r#"<div id="root"><p>hi</p></div>"#));
    }

    #[test]
    fn extract_root_nested_divs() {
        let html = r#"<div id="root"><div class="a"><div>x</div></div></div><div>after</div>"#;
        assert_eq!(
            extract_root(html),
            Some(r#"<div id="root"><div class="a"><div>x</div></div></div>"#)
        );
    }

    #[test]
    fn extract_root_missing() {
        assert_eq!(extract_root("<body><main>no root</main></body>"), None);
    }

    #[test]
    fn extract_root_unclosed() {
        assert_eq!(extract_root(r#"<div id="root"><div>"#), None);
    }

    #[test]
    fn splice_replaces_root_and_keeps_rest() {
        let rendered = r#"<div id="root"><h1>Rendered</h1></div>"#;
        let out = splice_root(TEMPLATE, rendered).unwrap();
        assert!(out.contains("<h1>Rendered</h1>"));
        assert!(out.contains("<title>Halcyon</title>"));
        assert!(out.contains(r#"<script src="/app.js"></script>"#));
        assert!(!out.contains(r#"<div id="root"></div>"#));
    }

    #[test]
    fn splice_without_root_fails() {
        assert_eq!(splice_root("<html><body></body></html>", "<div></div>"), None);
    }

    #[test]
    fn output_path_for_root_route() {
        assert_eq!(
            output_path(Path::new("dist"), "/"),
            PathBuf::from("dist/index.html")
        );
    }

    #[test]
    fn output_path_for_nested_route() {
        assert_eq!(
            output_path(Path::new("dist"), "/careers"),
            PathBuf::from("dist/careers/index.html")
        );
    }

    #[test]
    fn write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("about").join("index.html");
        write_output(&path, "<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }
}
