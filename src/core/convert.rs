use crate::domain::model::Vacation;
use crate::utils::error::{FerienError, Result};
use serde_json::Value;

/// Unwraps the top-level JSON array of a holidays response.
pub fn response_items(response: Value) -> Result<Vec<Value>> {
    match response {
        Value::Array(items) => Ok(items),
        other => Err(FerienError::malformed(format!(
            "expected a JSON array of vacations, got '{}'",
            other
        ))),
    }
}

/// Converts a whole response. The first bad item aborts the conversion.
pub fn convert_response(response: Value) -> Result<Vec<Vacation>> {
    response_items(response)?
        .iter()
        .map(Vacation::from_payload)
        .collect()
}

/// Same as [`convert_response`] but hands control back to the scheduler
/// after every record.
pub async fn convert_response_async(response: Value) -> Result<Vec<Vacation>> {
    let items = response_items(response)?;
    let mut vacations = Vec::with_capacity(items.len());
    for item in &items {
        vacations.push(Vacation::from_payload(item)?);
        tokio::task::yield_now().await;
    }
    tracing::trace!("Converted {} vacation records", vacations.len());
    Ok(vacations)
}
