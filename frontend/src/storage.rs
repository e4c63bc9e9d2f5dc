//! Draft persistence for the admin editor, backed by localStorage.

use inkflow_shared::Post;
use web_sys::window;

/// Single namespaced key holding the in-progress edit session.
pub const DRAFT_KEY: &str = "inkflow_admin_draft_v1";

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Load the saved draft. Missing storage, a missing key or a corrupt
/// snapshot all read as "no draft".
pub fn load_draft() -> Option<Vec<Post>> {
    let raw = local_storage()?.get_item(DRAFT_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn save_draft(posts: &[Post]) -> bool {
    let Some(storage) = local_storage() else {
        return false;
    };
    let Ok(raw) = serde_json::to_string_pretty(posts) else {
        return false;
    };
    storage.set_item(DRAFT_KEY, &raw).is_ok()
}

pub fn clear_draft() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(DRAFT_KEY);
    }
}
