use crate::server::error::AppError;

/// Parses a resource identifier taken from a request path.
///
/// Identifiers must be positive integers. Anything else cannot name a stored
/// resource, so it is reported as not found rather than as a bad request.
///
/// # Arguments
/// - `resource` - Name of the resource the identifier refers to, used for logging
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed positive identifier
/// - `Err(AppError::NotFound)` - The segment is not a positive `i32`
pub fn parse_resource_id(resource: &str, value: &str) -> Result<i32, AppError> {
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::NotFound(format!(
            "Invalid {} identifier '{}'",
            resource, value
        ))),
    }
}
