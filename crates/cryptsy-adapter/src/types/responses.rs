/*
[INPUT]:  Raw JSON values returned by private endpoints
[OUTPUT]: Optional success/return/error view over the conventional envelope
[POS]:    Data layer - caller-side response inspection
[UPDATE]: When the exchange changes its response envelope
*/

use serde_json::Value;

/// Borrowed view of a private response envelope.
///
/// Private calls conventionally answer `{"success":"1","return":...}` or
/// `{"success":"0","error":"..."}`. The client never applies this itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiEnvelope<'a> {
    pub success: bool,
    pub payload: Option<&'a Value>,
    pub error: Option<&'a str>,
}

impl<'a> ApiEnvelope<'a> {
    /// Read the envelope fields; `None` if `value` is not an object with `success`
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let object = value.as_object()?;
        let success = match object.get("success")? {
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_i64() == Some(1),
            Value::String(text) => text == "1",
            _ => false,
        };

        Some(Self {
            success,
            payload: object.get("return"),
            error: object.get("error").and_then(Value::as_str),
        })
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}
