//! Login page: email/password form with post-login redirect.

use dioxus::prelude::*;

use api::ApiClient;
use ui::{session, use_auth, AuthState, Navbar};

/// Login form view.
///
/// `next` comes from the query string and names the path to return to
/// after a successful login; home when empty.
#[component]
pub fn Login(next: String) -> Element {
    let mut auth = use_auth();
    let client = use_context::<ApiClient>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: nothing to do here.
    if !auth().loading && auth().is_authenticated() {
        session::redirect("/");
    }

    let target = if next.is_empty() { "/".to_string() } else { next.clone() };

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let target = target.clone();
        spawn(async move {
            error.set(None);

            let entered_email = email().trim().to_string();
            let entered_password = password();
            if entered_email.is_empty() || entered_password.is_empty() {
                error.set(Some("Please enter your email and password.".to_string()));
                return;
            }

            loading.set(true);
            match client.login(&entered_email, &entered_password).await {
                Ok(token) => {
                    session::store_token(&token);
                    auth.set(AuthState::from_token(Some(token)));
                    session::redirect(&target);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(format!("Login failed: {err}")));
                }
            }
        });
    };

    rsx! {
        Navbar {}

        main {
            class: "login-page",

            h1 { "Log in" }
            p { class: "login-hint", "Sign in to book places and leave reviews." }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(message) = error() {
                    div { class: "form-notice form-error", "{message}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }
        }
    }
}
