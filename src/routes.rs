use axum::extract::rejection::FormRejection;
use axum::extract::{Extension, Form};
use axum::headers::Cookie;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::TypedHeader;

use crate::flash::{self, Flash};
use crate::models::MarkSubmission;
use crate::{pages, submission, AppState};

pub async fn index() -> &'static str {
    pages::WELCOME
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn pending_flashes(state: &AppState, cookie: &Option<TypedHeader<Cookie>>) -> Option<Vec<Flash>> {
    let TypedHeader(cookie) = cookie.as_ref()?;
    let value = cookie.get(flash::COOKIE_NAME)?;
    Some(flash::open(&state.config.secret_key, value))
}

pub async fn marks_form(
    Extension(state): Extension<AppState>,
    cookie: Option<TypedHeader<Cookie>>,
) -> Response {
    match pending_flashes(&state, &cookie) {
        Some(flashes) => (
            [(header::SET_COOKIE, flash::clear_cookie())],
            Html(pages::marks_page(&flashes)),
        )
            .into_response(),
        None => Html(pages::marks_page(&[])).into_response(),
    }
}

pub async fn submit_marks(
    Extension(state): Extension<AppState>,
    cookie: Option<TypedHeader<Cookie>>,
    form: Result<Form<MarkSubmission>, FormRejection>,
) -> Response {
    // An unreadable body is treated as an empty form and reported on the page.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            log::warn!("Unreadable marks form: {}", rejection);
            MarkSubmission::default()
        }
    };
    // Messages not yet shown stay queued ahead of the new ones.
    let mut flashes = pending_flashes(&state, &cookie).unwrap_or_default();
    flashes.extend(
        submission::submit(
            form,
            state.directory.as_ref(),
            state.ledger.as_ref(),
            state.gateway.as_ref(),
        )
        .await,
    );
    flash::keep_latest(&mut flashes);

    (
        [(
            header::SET_COOKIE,
            flash::set_cookie(&state.config.secret_key, &flashes),
        )],
        Redirect::to("/marks"),
    )
        .into_response()
}
