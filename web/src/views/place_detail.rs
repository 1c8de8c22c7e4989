use dioxus::prelude::*;

use api::{host_name, ApiClient, Place};
use ui::{use_auth, Navbar, ReviewForm, ReviewLoginPrompt, StarRow};

/// Outcome of the place fetch for the current route parameters.
#[derive(Clone, Debug, PartialEq)]
enum DetailState {
    /// The route carried no `place_id`; nothing was fetched.
    NoPlace,
    /// The session cookie is still being read.
    Pending,
    Loaded(Place),
    Failed(String),
}

/// Flattened review data for one card in the listing.
struct ReviewRow {
    key: String,
    author: String,
    rating: u8,
    text: String,
}

#[component]
pub fn PlaceDetail(place_id: String) -> Element {
    // Track the route param in a signal so the resources re-run when the
    // user navigates between places.
    let mut id_signal = use_signal(|| place_id.clone());
    if *id_signal.peek() != place_id {
        id_signal.set(place_id.clone());
    }

    let client = use_context::<ApiClient>();
    let reviews_client = client.clone();
    let auth = use_auth();

    let detail = use_resource(move || {
        let client = client.clone();
        async move {
            let id = id_signal();
            if id.is_empty() {
                return DetailState::NoPlace;
            }
            let state = auth();
            if state.loading {
                return DetailState::Pending;
            }
            match client.get_place(state.token.as_deref(), &id).await {
                Ok(place) => DetailState::Loaded(place),
                Err(err) => {
                    tracing::error!("failed to load place {id}: {err}");
                    DetailState::Failed(err.to_string())
                }
            }
        }
    });

    // Reviews load independently of authentication.
    let mut reviews = use_resource(move || {
        let client = reviews_client.clone();
        async move {
            let id = id_signal();
            if id.is_empty() {
                return Vec::new();
            }
            match client.list_reviews(&id).await {
                Ok(reviews) => reviews,
                Err(err) => {
                    tracing::error!("failed to load reviews for place {id}: {err}");
                    Vec::new()
                }
            }
        }
    });

    let body = match detail() {
        None | Some(DetailState::Pending) => rsx! {
            p { class: "place-loading", "Loading place..." }
        },
        Some(DetailState::NoPlace) => rsx! {
            p { class: "place-error", "No place specified." }
        },
        Some(DetailState::Failed(message)) => rsx! {
            p { class: "place-error", "Could not load this place: {message}" }
        },
        Some(DetailState::Loaded(place)) => {
            let host = host_name(place.owner.as_ref());
            let price_line = place.price_line();
            let description = place.description_text().to_string();
            rsx! {
                article {
                    class: "place-details",
                    h1 { "{place.title}" }
                    p { class: "place-host", "Hosted by {host}" }
                    p { class: "place-price", "{price_line}" }
                    p { class: "place-description", "{description}" }

                    h2 { "Amenities" }
                    ul {
                        class: "place-amenities",
                        if place.amenities.is_empty() {
                            li { "No amenities listed" }
                        } else {
                            for amenity in place.amenities.iter() {
                                li { key: "{amenity.name}", "{amenity.name}" }
                            }
                        }
                    }
                }
            }
        }
    };

    // Reviews lack a stable id in some API responses; fall back to the
    // list position for the render key.
    let review_rows: Vec<ReviewRow> = reviews()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, review)| ReviewRow {
            key: review.id.clone().unwrap_or_else(|| index.to_string()),
            author: review.author().to_string(),
            rating: review.rating,
            text: review.text,
        })
        .collect();

    let has_place = !id_signal().is_empty();
    let state = auth();

    rsx! {
        Navbar {}

        main {
            class: "place-page",
            {body}

            section {
                class: "reviews",
                h2 { "Reviews" }

                if review_rows.is_empty() {
                    p { class: "reviews-empty", "No reviews yet." }
                } else {
                    ul {
                        class: "review-list",
                        for row in review_rows.iter() {
                            li {
                                key: "{row.key}",
                                class: "review-card",
                                p { class: "review-author", "{row.author}" }
                                StarRow { rating: row.rating }
                                p { class: "review-text", "{row.text}" }
                            }
                        }
                    }
                }

                if has_place && !state.loading {
                    if state.is_authenticated() {
                        ReviewForm {
                            place_id: id_signal(),
                            on_submitted: move |_| reviews.restart(),
                        }
                    } else {
                        ReviewLoginPrompt { place_id: id_signal() }
                    }
                }
            }
        }
    }
}
