//! Browser session glue: the token cookie and hard navigation.
//!
//! The bearer token lives in a cookie named [`TOKEN_COOKIE`] with path `/`.
//! Reads and writes go through `document.cookie`; the parsing is plain
//! string work so it stays testable off-wasm. Native builds (unit tests,
//! tooling) see an always-anonymous session and inert navigation.

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Look up a cookie by name in a `document.cookie`-shaped string.
///
/// Entries are `;`-separated `name=value` pairs with incidental whitespace;
/// the match is on the exact name, so `tokenish=x` never answers for
/// `token`.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|entry| {
        entry.trim().strip_prefix(name)?.strip_prefix('=')
    })
}

/// Read the session token from the browser cookie store.
#[cfg(target_arch = "wasm32")]
pub fn read_token() -> Option<String> {
    let cookies = raw_cookies()?;
    cookie_value(&cookies, TOKEN_COOKIE)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Persist the session token as `token=<value>; path=/`.
#[cfg(target_arch = "wasm32")]
pub fn store_token(token: &str) {
    set_raw_cookie(&format!("{TOKEN_COOKIE}={token}; path=/"));
}

/// Drop the session cookie by overwriting it with a past expiry.
#[cfg(target_arch = "wasm32")]
pub fn clear_token() {
    set_raw_cookie(&format!(
        "{TOKEN_COOKIE}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT"
    ));
}

/// Hard-navigate the browser to `path`. Used where a full page transition
/// is the intended behavior: after login, after logout.
#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            tracing::error!("redirect to {path} failed: {err:?}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn raw_cookies() -> Option<String> {
    html_document()?.cookie().ok()
}

#[cfg(target_arch = "wasm32")]
fn set_raw_cookie(cookie: &str) {
    if let Some(document) = html_document() {
        if let Err(err) = document.set_cookie(cookie) {
            tracing::error!("failed to write session cookie: {err:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_token() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_token(_token: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_token() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(_path: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let written = format!("{TOKEN_COOKIE}=abc.def.ghi");
        assert_eq!(cookie_value(&written, TOKEN_COOKIE), Some("abc.def.ghi"));
    }

    #[test]
    fn test_finds_token_among_other_cookies() {
        let cookies = "theme=dark; token=tok-123 ;  lang=en";
        assert_eq!(cookie_value(cookies, "token"), Some("tok-123"));
        assert_eq!(cookie_value(cookies, "lang"), Some("en"));
    }

    #[test]
    fn test_exact_name_match_only() {
        let cookies = "tokenish=nope; mytoken=also-nope";
        assert_eq!(cookie_value(cookies, "token"), None);
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(cookie_value("", "token"), None);
        assert_eq!(cookie_value("theme=dark", "token"), None);
        assert_eq!(cookie_value("token=", "token"), Some(""));
    }
}
