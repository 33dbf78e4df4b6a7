use bson::oid::ObjectId;

use crate::error::AppError;

/// Parses a document id from its hex string representation.
///
/// Path parameters arrive as strings; anything that is not a well-formed
/// ObjectId is rejected here so malformed ids never reach the store.
///
/// # Arguments
/// - `value` - The raw path parameter
/// - `resource` - Resource name used in the error message
///
/// # Returns
/// - `Ok(ObjectId)` - Successfully parsed id
/// - `Err(AppError::Validation)` - The value is not a valid ObjectId
pub fn parse_object_id(value: &str, resource: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value)
        .map_err(|_| AppError::Validation(format!("Invalid {} id: {}", resource, value)))
}
