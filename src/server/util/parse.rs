use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::AppError;

/// Parses a numeric id path segment.
///
/// # Returns
/// - `Ok(i32)` - The id
/// - `Err(AppError::Validation)` - Segment is not a numeric id, reported on field `id`
pub fn parse_path_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::validation("id", raw))
}

/// Unwraps a JSON body extracted as `Result`, so handlers can authorize before the body
/// is judged.
///
/// # Arguments
/// - `field` - Body field the handler requires, reported on failure
/// - `payload` - Outcome of the `Json` extractor
///
/// # Returns
/// - `Ok(T)` - The deserialized body
/// - `Err(AppError::MalformedBody)` - Missing content type, invalid JSON or wrong shape
pub fn parse_json_body<T>(
    field: &str,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(AppError::MalformedBody {
            field: field.to_string(),
            detail: rejection.body_text(),
        }),
    }
}

/// Parses an optional id filter from a query string value.
///
/// Absent, blank and `all` values disable the filter.
///
/// # Arguments
/// - `field` - Name of the query field, reported on validation failure
/// - `value` - Raw query value
///
/// # Returns
/// - `Ok(Some(i32))` - Filter on the given id
/// - `Ok(None)` - No filtering
/// - `Err(AppError::Validation)` - Value is neither `all` nor a numeric id
pub fn parse_id_filter(field: &str, value: Option<&str>) -> Result<Option<i32>, AppError> {
    match value.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(raw) => raw
            .parse::<i32>()
            .map(Some)
            .map_err(|_| AppError::validation(field, raw)),
    }
}
