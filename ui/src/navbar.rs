//! Top navigation bar with the login/logout affordance.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::LogoutButton;

/// Application header.
///
/// Shows a "Login" link while anonymous and a logout button once a session
/// token is present. While the cookie is still being read, neither renders,
/// so the wrong affordance never flashes.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        header {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "StaySpot" }
            {children}
            if state.loading {
                span { class: "navbar-auth" }
            } else if state.is_authenticated() {
                LogoutButton { class: "navbar-auth logout-button" }
            } else {
                a { class: "navbar-auth login-link", href: "/login", "Login" }
            }
        }
    }
}
