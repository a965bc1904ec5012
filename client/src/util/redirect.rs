//! Route paths and the `next` round-trip through the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A protected action started while anonymous sends the user to
//! `/login?next=<target>`; after login the page returns to `<target>`. The
//! `next` value comes from the URL, so it is only honoured when it is a
//! same-origin absolute path.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";

/// Query parameter carrying the post-login destination.
pub const NEXT_PARAM: &str = "next";

pub fn equipment_path(id: &str) -> String {
    format!("/equipment/{}", urlencoding::encode(id))
}

/// `/login` carrying `target` as the post-login destination.
pub fn login_path_with_next(target: &str) -> String {
    with_next(LOGIN_PATH, target)
}

/// `/signup` carrying `target`, used by the login page's signup link.
pub fn signup_path_with_next(target: &str) -> String {
    with_next(SIGNUP_PATH, target)
}

fn with_next(page: &str, target: &str) -> String {
    if target == LANDING_PATH {
        return page.to_owned();
    }
    // `/` stays readable; everything that could end the parameter is escaped.
    let encoded = urlencoding::encode(target).replace("%2F", "/");
    format!("{page}?{NEXT_PARAM}={encoded}")
}

/// Destination to use after authentication, given the raw `next` parameter.
///
/// Anything that is not a same-origin absolute path (`https://...`,
/// `//host`, `/\host`, relative paths) falls back to the landing page.
pub fn resolve_next(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => LANDING_PATH.to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") && !path.contains(char::is_control)
}
