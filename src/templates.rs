use std::collections::HashMap;

use tera::Tera;

use crate::error::AppError;
use crate::validation::NAME_MIN_LENGTH;

/// Templates compiled into the binary, keyed by the name used in `render`.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("example.html", include_str!("../templates/example.html")),
];

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;

    // Add custom filters
    tera.register_filter("field_error", field_error_filter);

    Ok(tera)
}

/// Turn a validation error code into a message for display next to the field
fn field_error_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let code = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("field_error filter expects a string"))?;

    let message = match code {
        "required" => "This field is required".to_string(),
        "min_length" => format!("Must be at least {} characters", NAME_MIN_LENGTH),
        "invalid" => "Enter a valid email address".to_string(),
        // Unknown codes pass through unchanged
        other => other.to_string(),
    };

    Ok(tera::Value::String(message))
}
