//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

use crate::session;

/// Session state for the application.
///
/// `token` mirrors the `token` cookie; `user_id` is decoded from the token
/// payload and never stored anywhere else. `loading` covers the first
/// render, before the cookie has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user_id: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Whether a session token is present. A token that decodes to no user
    /// id still counts; the server is the authority on token validity.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Build the settled state for a token (or its absence).
    pub fn from_token(token: Option<String>) -> Self {
        let user_id = token.as_deref().and_then(api::user_id_from_token);
        Self {
            token,
            user_id,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Read the cookie once on mount; login and logout update the signal
    // directly afterwards.
    use_effect(move || {
        auth_state.set(AuthState::from_token(session::read_token()));
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that ends the session: clears the cookie and returns home.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        session::clear_token();
        auth_state.set(AuthState::from_token(None));
        session::redirect("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    #[test]
    fn test_from_token_decodes_user_id() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"user_id": "u-1"}"#);
        let state = AuthState::from_token(Some(format!("h.{payload}.s")));
        assert!(state.is_authenticated());
        assert!(!state.loading);
        assert_eq!(state.user_id, Some("u-1".to_string()));
    }

    #[test]
    fn test_from_token_with_garbage_token_is_authenticated_but_anonymous() {
        let state = AuthState::from_token(Some("garbage".to_string()));
        assert!(state.is_authenticated());
        assert_eq!(state.user_id, None);
    }

    #[test]
    fn test_from_no_token_is_anonymous() {
        let state = AuthState::from_token(None);
        assert!(!state.is_authenticated());
        assert_eq!(state.user_id, None);
    }
}
