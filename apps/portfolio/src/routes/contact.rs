use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tracing::{info, warn};

use crate::contact::{build_mailto, ContactForm};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /contact
///
/// Turns the form into a `mailto:` link and redirects the browser to it, so
/// the visitor's mail client does the sending. Bad input is not an error page:
/// it is logged and the visitor lands back on the contact section.
pub async fn handle_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let info = state.store.personal_info().await?;

    let link = match build_mailto(&info.email, &form) {
        Ok(link) => link,
        Err(e) => {
            warn!("Contact handoff aborted: {e}");
            return Ok(Redirect::to("/#contact").into_response());
        }
    };

    // The recipient comes straight from personal.json and is not encoded.
    let location = HeaderValue::from_str(&link)
        .context("mailto link is not a valid Location header")?;

    info!("Handing contact form off to mail client");
    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}
