use gloo_net::http::Request;
use inkflow_shared::Post;

/// The whole site is backed by one static JSON document, fetched relative
/// to the page so the site works from any mount point.
pub const POSTS_URL: &str = "/posts.json";

/// Fetch and parse the posts document.
pub async fn fetch_posts() -> Result<Vec<Post>, String> {
    let response = Request::get(POSTS_URL)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Post>>()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))
}
