//! Browser glue shared by the pages: date formatting, clipboard, share
//! links and the file import/export mechanics.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a `YYYY-MM-DD` date as `Mon D, YYYY`. Anything that does not
/// parse comes back verbatim rather than failing the page.
pub fn format_date(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date.to_string();
    };
    let Some(month_name) = month
        .parse::<usize>()
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|i| MONTHS.get(i))
    else {
        return date.to_string();
    };
    let day = day.trim_start_matches('0');
    let day = if day.is_empty() { "0" } else { day };
    format!("{} {}, {}", month_name, day, year)
}

/// Today as `YYYY-MM-DD` in local time, for new posts.
pub fn now_ymd() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn current_url() -> String {
    window()
        .and_then(|win| win.location().href().ok())
        .unwrap_or_default()
}

pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|win| win.document()) {
        document.set_title(title);
    }
}

/// Third-party share intent with the title and page URL percent-encoded.
pub fn tweet_intent_url(title: &str, url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(title),
        urlencoding::encode(url)
    )
}

pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Write to the async clipboard API, reflected through `js_sys` so pages
/// keep working on browsers that do not expose it.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let navigator = win.navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    let Ok(write_text) = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText")) else {
        return false;
    };
    let Some(write_fn) = write_text.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    let Ok(promise_value) = write_fn.call1(&clipboard, &JsValue::from_str(text)) else {
        return false;
    };
    let Ok(promise) = promise_value.dyn_into::<js_sys::Promise>() else {
        return false;
    };
    wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
}

/// Trigger a client-side download of `json` under `filename` via a blob
/// object URL and a synthetic anchor click.
pub fn download_json(filename: &str, json: &str) -> bool {
    let Some(document) = window().and_then(|win| win.document()) else {
        return false;
    };

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return false;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return false;
    };

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
    let ok = match anchor {
        Some(anchor) => {
            anchor.set_href(&url);
            anchor.set_download(filename);
            let appended = document
                .body()
                .map(|body| body.append_child(&anchor).is_ok())
                .unwrap_or(false);
            if appended {
                anchor.click();
                anchor.remove();
            }
            appended
        },
        None => false,
    };

    let _ = web_sys::Url::revoke_object_url(&url);
    ok
}

/// Read an imported file as text. `None` covers both read failures and
/// non-text payloads.
pub async fn read_file_text(file: &web_sys::File) -> Option<String> {
    let value = wasm_bindgen_futures::JsFuture::from(file.text()).await.ok()?;
    value.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_renders_short_month_names() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2023-12-31"), "Dec 31, 2023");
        assert_eq!(format_date("2023-10-10"), "Oct 10, 2023");
    }

    #[test]
    fn format_date_falls_back_to_raw_input() {
        assert_eq!(format_date("not a date"), "not a date");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn tweet_intent_encodes_title_and_url() {
        let url = tweet_intent_url("Hello & Welcome", "https://example.com/post?slug=a");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=Hello%20%26%20Welcome&url=https%3A%2F%2Fexample.com%2Fpost%3Fslug%3Da"
        );
    }
}
