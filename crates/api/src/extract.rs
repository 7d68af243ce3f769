//! Request body extraction with validation.
//!
//! Handlers take [`ValidJson<T>`] instead of `axum::Json<T>` so every body
//! goes through the same three gates: content type must be JSON (415),
//! the body must deserialize into the endpoint's typed DTO (400), and the
//! DTO's `validator` rules must hold (400 with field paths).

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use planner_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON extractor that also runs the DTO's validation rules.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => AppError::UnsupportedMediaType,
                other => AppError::BadRequest(other.body_text()),
            })?;

        value
            .validate()
            .map_err(|errors| CoreError::Validation(describe_violations(&errors)))?;

        Ok(Self(value))
    }
}

/// Flatten validation errors into a deterministic `field: rule` listing.
fn describe_violations(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |violation| {
                match &violation.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: {}", violation.code),
                }
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, serde::Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, max = 4))]
        name: String,
        #[validate(range(min = 0))]
        reps: Option<i32>,
    }

    #[test]
    fn violations_list_field_paths() {
        let probe = Probe {
            name: "too long".to_string(),
            reps: Some(-1),
        };
        let errors = probe.validate().unwrap_err();
        let described = describe_violations(&errors);
        assert!(described.contains("name:"), "got: {described}");
        assert!(described.contains("reps:"), "got: {described}");
    }

    #[test]
    fn valid_probe_passes() {
        let probe = Probe {
            name: "ok".to_string(),
            reps: None,
        };
        assert!(probe.validate().is_ok());
    }
}
