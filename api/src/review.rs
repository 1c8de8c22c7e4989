//! Review submission payload and pre-flight validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body for `POST /reviews`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub place_id: String,
    pub text: String,
    /// 1–5 stars.
    pub rating: u8,
    pub user_id: String,
}

/// A reason a review cannot be submitted yet.
///
/// The `Display` strings are the user-facing messages. Checks run in a
/// fixed order and stop at the first failure, so the user sees one problem
/// at a time; none of them involve the network.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("No place selected.")]
    MissingPlace,
    #[error("Please write a review before submitting.")]
    EmptyText,
    #[error("Please select a rating.")]
    MissingRating,
    #[error("You must be logged in to submit a review.")]
    MissingUser,
}

/// Validate a pending review and build the payload to post.
///
/// Order: place id, then text, then rating, then author. `user_id` is the
/// id decoded from the session token, so `None` means the visitor has no
/// usable session.
pub fn validate_review(
    place_id: &str,
    text: &str,
    rating: u8,
    user_id: Option<&str>,
) -> Result<NewReview, ReviewError> {
    let place_id = place_id.trim();
    if place_id.is_empty() {
        return Err(ReviewError::MissingPlace);
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(ReviewError::EmptyText);
    }

    if rating == 0 {
        return Err(ReviewError::MissingRating);
    }

    let user_id = match user_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ReviewError::MissingUser),
    };

    Ok(NewReview {
        place_id: place_id.to_string(),
        text: text.to_string(),
        rating,
        user_id: user_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_place_checked_first() {
        // Everything is wrong; the place id failure wins.
        assert_eq!(
            validate_review("", "", 0, None),
            Err(ReviewError::MissingPlace)
        );
    }

    #[test]
    fn test_blank_text_rejected() {
        assert_eq!(
            validate_review("p-1", "   \n", 0, None),
            Err(ReviewError::EmptyText)
        );
    }

    #[test]
    fn test_zero_rating_rejected() {
        assert_eq!(
            validate_review("p-1", "Lovely place", 0, None),
            Err(ReviewError::MissingRating)
        );
    }

    #[test]
    fn test_unresolvable_user_rejected_last() {
        assert_eq!(
            validate_review("p-1", "Lovely place", 4, None),
            Err(ReviewError::MissingUser)
        );
        assert_eq!(
            validate_review("p-1", "Lovely place", 4, Some("")),
            Err(ReviewError::MissingUser)
        );
    }

    #[test]
    fn test_valid_review_builds_trimmed_payload() {
        let review = validate_review("p-1", "  Lovely place  ", 4, Some("u-1")).unwrap();
        assert_eq!(
            review,
            NewReview {
                place_id: "p-1".to_string(),
                text: "Lovely place".to_string(),
                rating: 4,
                user_id: "u-1".to_string(),
            }
        );
    }
}
