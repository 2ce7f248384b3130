//! Handlers for the admin panel.
//!
//! Every action follows POST-redirect-GET: the handler records the outcome
//! as a one-shot status message on the session and redirects to `/admin`,
//! which renders the panel from the session's local item list.
//!
//! Backend changes run on their own task, which records the outcome and
//! releases `Submitting` even if the request is dropped mid-flight.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use malar_core::admin::{CreateItemForm, ImageSource, StatusMessage, UploadMode, ValidatedItem};
use malar_core::error::CoreError;
use malar_core::portfolio::{NewPortfolioItem, PortfolioItem};
use malar_core::types::RecordId;
use malar_core::upload::ImageUpload;
use malar_db::repositories::{ImageStorage, PortfolioRepo};
use serde::Deserialize;
use tokio::task::JoinHandle;
use tower_cookies::Cookies;

use crate::auth::session::{removal_cookie, session_cookie};
use crate::error::{AppError, AppResult};
use crate::middleware::admin::AdminUser;
use crate::state::AppState;
use crate::views::admin::{confirm_delete_page, login_page, panel_page, LoginView, PanelView};

const ADMIN_PATH: &str = "/admin";

const WRONG_PASSWORD: &str = "Wrong password!";

fn session_gone() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Your admin session has ended. Please log in again.".into(),
    ))
}

fn login_view(state: &AppState, error: Option<&str>) -> String {
    login_page(LoginView {
        backend_configured: state.backend.is_configured(),
        gate_configured: state.gate.is_configured(),
        error,
    })
    .into_string()
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// GET /admin
///
/// The panel for an open session, otherwise the login form.
pub async fn admin_page(
    admin: Option<AdminUser>,
    State(state): State<AppState>,
) -> AppResult<Html<String>> {
    let Some(admin) = admin else {
        return Ok(Html(login_view(&state, None)));
    };

    let (items, status, submit) = state
        .sessions
        .update(admin.session_id, |s| {
            (s.items().to_vec(), s.take_status(), s.submit_state())
        })
        .await
        .ok_or_else(session_gone)?;

    let page = panel_page(PanelView {
        items: &items,
        status: status.as_ref(),
        submit,
        backend_status: state.backend.status(),
    });
    Ok(Html(page.into_string()))
}

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub password: String,
}

/// POST /admin/login
///
/// Opens a session seeded with the current item list. Refused outright
/// while the backend or the admin secret is missing.
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(input): Form<LoginInput>,
) -> Response {
    if !state.backend.is_configured() || !state.gate.is_configured() {
        tracing::warn!(
            backend = state.backend.is_configured(),
            gate = state.gate.is_configured(),
            "Admin login attempted while not configured",
        );
        return (StatusCode::SERVICE_UNAVAILABLE, Html(login_view(&state, None))).into_response();
    }

    if !state.gate.check(&input.password) {
        tracing::info!("Admin login rejected");
        return (
            StatusCode::UNAUTHORIZED,
            Html(login_view(&state, Some(WRONG_PASSWORD))),
        )
            .into_response();
    }

    let items = PortfolioRepo::list(&state.backend).await;
    let session_id = state.sessions.open(items).await;
    cookies.add(session_cookie(session_id));

    Redirect::to(ADMIN_PATH).into_response()
}

/// POST /admin/logout
pub async fn logout(
    admin: Option<AdminUser>,
    State(state): State<AppState>,
    cookies: Cookies,
) -> Redirect {
    if let Some(admin) = admin {
        state.sessions.close(admin.session_id).await;
    }
    cookies.remove(removal_cookie());
    Redirect::to(ADMIN_PATH)
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(e.body_text())
}

/// Collect the multipart create form. An untouched file input arrives as an
/// empty part and counts as no file.
async fn read_create_form(mut multipart: Multipart) -> AppResult<CreateItemForm> {
    let mut form = CreateItemForm::default();
    let mut mode = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "mode" => mode = Some(field.text().await.map_err(bad_multipart)?),
            "image_url" => form.image_url = field.text().await.map_err(bad_multipart)?,
            "name" => form.name = field.text().await.map_err(bad_multipart)?,
            "description" => form.description = field.text().await.map_err(bad_multipart)?,
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                if !file_name.is_empty() || !bytes.is_empty() {
                    form.file = Some(ImageUpload::new(
                        file_name,
                        content_type.as_deref(),
                        bytes.to_vec(),
                    ));
                }
            }
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    form.mode = UploadMode::from_param(mode.as_deref());
    Ok(form)
}

/// Resolve the image URL, then insert the item.
async fn save_item(state: &AppState, item: ValidatedItem) -> Result<PortfolioItem, String> {
    let image_url = match item.source {
        ImageSource::Url(url) => url,
        ImageSource::File(upload) => ImageStorage::upload(&state.backend, &upload)
            .await
            .map_err(|e| format!("Error uploading image: {e}"))?,
    };

    let new_item = NewPortfolioItem::new(image_url, item.name, item.description);
    PortfolioRepo::create(&state.backend, &new_item)
        .await
        .ok_or_else(|| "Failed to add portfolio item!".to_string())
}

/// Record `status` on the session and send the browser back to the panel.
async fn back_to_panel(state: &AppState, admin: AdminUser, status: StatusMessage) -> AppResult<Redirect> {
    state
        .sessions
        .update(admin.session_id, |s| s.set_status(status))
        .await
        .ok_or_else(session_gone)?;
    Ok(Redirect::to(ADMIN_PATH))
}

/// Move the session to `Submitting`. `Ok(Some(msg))` means another action
/// is in flight and `msg` should be shown instead.
async fn begin_submit(state: &AppState, admin: AdminUser) -> AppResult<Option<String>> {
    let started = state
        .sessions
        .update(admin.session_id, |s| s.begin_submit())
        .await
        .ok_or_else(session_gone)?;
    Ok(started.err().map(|e| match e {
        CoreError::Validation(msg) => msg,
        other => other.to_string(),
    }))
}

/// Wait for a change task. The task reports whether the session was still
/// there to record its outcome.
async fn await_change(state: &AppState, admin: AdminUser, task: JoinHandle<bool>) -> AppResult<Redirect> {
    match task.await {
        Ok(true) => Ok(Redirect::to(ADMIN_PATH)),
        Ok(false) => Err(session_gone()),
        Err(e) => {
            state
                .sessions
                .update(admin.session_id, |s| {
                    s.set_status(StatusMessage::error("The change could not be saved. Please try again."));
                    s.finish_submit();
                })
                .await;
            Err(AppError::InternalError(format!("admin change task failed: {e}")))
        }
    }
}

/// POST /admin/items
///
/// Multipart create form. In file mode the image is uploaded first and the
/// item is inserted only once a public URL exists.
pub async fn create_item(
    admin: AdminUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Redirect> {
    let form = read_create_form(multipart).await?;

    let validated = match form.validate() {
        Ok(validated) => validated,
        Err(CoreError::Validation(msg)) => {
            return back_to_panel(&state, admin, StatusMessage::error(msg)).await;
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(busy) = begin_submit(&state, admin).await? {
        return back_to_panel(&state, admin, StatusMessage::error(busy)).await;
    }

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let result = save_item(&task_state, validated).await;
        task_state
            .sessions
            .update(admin.session_id, |s| {
                match result {
                    Ok(item) => {
                        s.record_created(item);
                        s.set_status(StatusMessage::success("Portfolio item added successfully!"));
                    }
                    Err(msg) => s.set_status(StatusMessage::error(msg)),
                }
                s.finish_submit();
            })
            .await
            .is_some()
    });

    await_change(&state, admin, task).await
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET /admin/items/{id}/delete
///
/// Confirmation page for an item in the session's list.
pub async fn confirm_delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = RecordId::new(id);
    let item = state
        .sessions
        .update(admin.session_id, |s| s.find(&id).cloned())
        .await
        .ok_or_else(session_gone)?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Portfolio item",
            id: id.to_string(),
        })?;

    Ok(Html(confirm_delete_page(&item).into_string()))
}

#[derive(Debug, Deserialize)]
pub struct DeleteInput {
    pub confirm: Option<String>,
}

/// POST /admin/items/{id}/delete
///
/// Deletes only when `confirm=yes`; anything else is a cancel.
pub async fn delete_item(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<DeleteInput>,
) -> AppResult<Redirect> {
    let id = RecordId::new(id);
    if input.confirm.as_deref() != Some("yes") {
        return Ok(Redirect::to(ADMIN_PATH));
    }

    if let Some(busy) = begin_submit(&state, admin).await? {
        return back_to_panel(&state, admin, StatusMessage::error(busy)).await;
    }

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let deleted = PortfolioRepo::delete(&task_state.backend, &id).await;
        task_state
            .sessions
            .update(admin.session_id, |s| {
                if deleted {
                    s.record_deleted(&id);
                    s.set_status(StatusMessage::success("Portfolio item deleted successfully!"));
                } else {
                    s.set_status(StatusMessage::error("Error deleting portfolio item!"));
                }
                s.finish_submit();
            })
            .await
            .is_some()
    });

    await_change(&state, admin, task).await
}
