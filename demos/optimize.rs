use serde_json::{Value, json};

pub const OPTIMIZE_ROUTE: &str = "/optimizer/api/optimize-resume/";

/// Outcome of the resume optimization endpoint, independent of the host framework.
pub struct OptimizeOutcome {
    pub status: u16,
    pub body: Value,
}

pub fn optimize_resume(payload: &[u8]) -> OptimizeOutcome {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return no_data();
    }

    let data: Value = match serde_json::from_slice(payload) {
        Ok(data) => data,
        Err(err) => {
            tracing::debug!(error = %err, "rejecting malformed optimize payload");
            return OptimizeOutcome {
                status: 400,
                body: json!({ "success": false, "message": err.to_string() }),
            };
        }
    };

    if is_blank(&data) {
        return no_data();
    }

    OptimizeOutcome {
        status: 200,
        body: json!({
            "success": true,
            "message": "Resume optimization successful",
            "data": {},
        }),
    }
}

fn no_data() -> OptimizeOutcome {
    OptimizeOutcome {
        status: 400,
        body: json!({ "success": false, "message": "No data provided" }),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
    }
}

#[cfg(test)]
#[path = "optimize_test.rs"]
mod optimize_test;
