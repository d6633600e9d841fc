//! Demo page with a client-side counter and a validated form.
//!
//! The counter lives entirely in the browser (see `static/js/counter.js`).
//! The form posts back to the same path and is re-rendered with either a
//! success message or per-field error codes.

use axum::{
    extract::State,
    http::{header::CACHE_CONTROL, HeaderValue},
    response::{Html, IntoResponse},
    Form,
};
use tracing::instrument;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::{ExampleForm, FieldErrors};

/// Title used when no deployment mode is configured
const SITE_NAME: &str = "heartbeat";

fn render(
    state: &AppState,
    form: &ExampleForm,
    errors: Option<&FieldErrors>,
    submitted_name: Option<&str>,
) -> Result<Html<String>, AppError> {
    let error_code = |field: &str| errors.and_then(|e| e.get(field)).map(|e| e.code());

    let mut context = tera::Context::new();
    context.insert("site_name", SITE_NAME);
    context.insert("form", form);
    context.insert(
        "errors",
        &serde_json::json!({
            "name": error_code("name"),
            "email": error_code("email"),
        }),
    );
    context.insert("submitted_name", &submitted_name);

    let html = state.tera.render("example.html", &context)?;
    Ok(Html(html))
}

/// Example page handler.
#[instrument(name = "example::page", skip(state))]
pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, &ExampleForm::default(), None, None)
}

/// Example form submission handler.
#[instrument(name = "example::submit", skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ExampleForm>,
) -> Result<impl IntoResponse, AppError> {
    let html = match form.validate() {
        Ok(()) => {
            tracing::info!("Example form accepted");
            render(&state, &ExampleForm::default(), None, Some(&form.name))?
        }
        Err(errors) => {
            tracing::debug!(?errors, "Example form rejected");
            render(&state, &form, Some(&errors), None)?
        }
    };

    Ok((
        [(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_NO_STORE))],
        html,
    ))
}
