//! Star rating input and display.

use dioxus::prelude::*;

/// Number of stars in the widget.
pub const MAX_STARS: u8 = 5;

/// Clickable five-star input.
///
/// The pending rating lives in a signal owned by the enclosing form; the
/// widget holds no state of its own, so resetting the form resets the
/// stars too. Clicking star *k* selects rating *k*, and stars up to the
/// selection render filled.
#[component]
pub fn StarRating(mut rating: Signal<u8>) -> Element {
    rsx! {
        div {
            class: "star-rating",
            for star in 1..=MAX_STARS {
                span {
                    key: "{star}",
                    class: if star <= rating() { "star star-filled" } else { "star" },
                    onclick: move |_| rating.set(star),
                    "★"
                }
            }
        }
    }
}

/// Read-only star row for an existing review's rating.
#[component]
pub fn StarRow(rating: u8) -> Element {
    rsx! {
        div {
            class: "star-row",
            for star in 1..=MAX_STARS {
                span {
                    key: "{star}",
                    class: if star <= rating { "star star-filled" } else { "star" },
                    "★"
                }
            }
        }
    }
}
