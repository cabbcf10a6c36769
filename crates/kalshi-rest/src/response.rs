//! Response classification

use serde_json::Value;

use crate::error::{RestError, RestResult};
use crate::transport::RawResponse;

/// Reason used when the status code has no known reason phrase
const UNKNOWN_REASON: &str = "Unknown HTTP status";

/// Turn a raw response into the decoded body or an [`RestError::Http`]
///
/// Statuses in `200..299` are successes and the JSON body is returned
/// without any schema validation; an empty body decodes to `Value::Null`.
/// Every other status, 429 included, becomes `Http { status, reason }`.
pub fn classify(response: RawResponse) -> RestResult<Value> {
    if !(200..299).contains(&response.status) {
        return Err(RestError::Http {
            status: response.status,
            reason: response
                .reason
                .unwrap_or_else(|| UNKNOWN_REASON.to_string()),
        });
    }

    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&response.body).map_err(RestError::Decode)
}
