//! Review submission form with pre-flight validation.

use dioxus::prelude::*;

use api::{validate_review, ApiClient, ApiError};

use crate::auth::use_auth;
use crate::star_rating::StarRating;

/// Review form for one place. Render it only for authenticated visitors;
/// [`ReviewLoginPrompt`] is the anonymous counterpart.
///
/// Validation runs before any network call and stops at the first problem.
/// On success the text and stars reset and `on_submitted` fires so the
/// listing can refresh.
#[component]
pub fn ReviewForm(place_id: String, on_submitted: EventHandler<()>) -> Element {
    let auth = use_auth();
    let client = use_context::<ApiClient>();
    let mut text = use_signal(String::new);
    let mut rating = use_signal(|| 0u8);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let place_id = place_id.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let state = auth();
            let review = match validate_review(
                &place_id,
                &text(),
                rating(),
                state.user_id.as_deref(),
            ) {
                Ok(review) => review,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            // The form only renders with a session, but the cookie can
            // disappear underneath us (expired mid-visit, cleared in
            // another tab).
            let Some(token) = state.token else {
                error.set(Some("You must be logged in to submit a review.".to_string()));
                return;
            };

            submitting.set(true);
            match client.submit_review(&token, &review).await {
                Ok(_) => {
                    text.set(String::new());
                    rating.set(0);
                    success.set(Some("Review submitted!".to_string()));
                    on_submitted.call(());
                }
                Err(err) => {
                    let message = match &err {
                        ApiError::Network(_) => {
                            tracing::error!("review submission failed: {err}");
                            "Network error, please try again.".to_string()
                        }
                        // Server verdicts ("You have already reviewed this
                        // place", "You cannot evaluate your own location.")
                        // come through verbatim.
                        ApiError::Api { .. } => err.to_string(),
                    };
                    error.set(Some(message));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "review-form",
            onsubmit: handle_submit,

            h3 { "Add a review" }

            if let Some(message) = error() {
                p { class: "form-notice form-error", "{message}" }
            }
            if let Some(message) = success() {
                p { class: "form-notice form-success", "{message}" }
            }

            StarRating { rating }

            textarea {
                class: "review-input",
                placeholder: "Share your stay...",
                value: text(),
                oninput: move |evt: FormEvent| text.set(evt.value()),
            }

            button {
                class: "review-submit",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Submitting..." } else { "Submit review" }
            }
        }
    }
}

/// Shown in place of the form when nobody is logged in. Links to the login
/// view with `next` pointing back at this place.
#[component]
pub fn ReviewLoginPrompt(place_id: String) -> Element {
    rsx! {
        p {
            class: "review-login-prompt",
            a {
                href: "/login?next=/place?place_id={place_id}",
                "Log in to add a review"
            }
        }
    }
}
