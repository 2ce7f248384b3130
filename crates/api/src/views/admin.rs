//! Admin login, panel and delete confirmation pages.

use malar_core::admin::{StatusKind, StatusMessage, SubmitState, UploadMode};
use malar_core::portfolio::{ImageRef, PortfolioItem};
use malar_core::upload::MAX_UPLOAD_BYTES;
use maud::{html, Markup};

use super::layout::{page_title, site_page, Page};

/// Everything the login page needs to know.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginView<'a> {
    pub backend_configured: bool,
    pub gate_configured: bool,
    pub error: Option<&'a str>,
}

pub fn login_page(view: LoginView<'_>) -> Markup {
    let disabled = !view.backend_configured || !view.gate_configured;
    site_page(
        &page_title("Admin Panel"),
        Page::Admin,
        html! {
            section.admin-login {
                @if !view.backend_configured {
                    div.notice.notice-error role="alert" {
                        p.title { "Backend Not Configured" }
                        p { "Set SUPABASE_URL and SUPABASE_ANON_KEY in the server environment." }
                    }
                }
                @if !view.gate_configured {
                    div.notice.notice-error role="alert" {
                        p.title { "Admin Access Not Configured" }
                        p { "Set ADMIN_PASSWORD in the server environment." }
                    }
                }
                div.card {
                    h1 { "Admin Panel" }
                    p.muted { "Enter admin password to continue" }
                    @if let Some(error) = view.error {
                        p.form-alert role="alert" { (error) }
                    }
                    form method="post" action="/admin/login" {
                        input type="password" name="password" placeholder="Enter admin password"
                            autocomplete="current-password" disabled[disabled];
                        button.btn-primary type="submit" disabled[disabled] { "Login" }
                    }
                }
            }
        },
    )
}

/// Everything the panel needs to render one session.
#[derive(Debug, Clone, Copy)]
pub struct PanelView<'a> {
    pub items: &'a [PortfolioItem],
    pub status: Option<&'a StatusMessage>,
    pub submit: SubmitState,
    pub backend_status: &'a str,
}

fn status_banner(status: &StatusMessage) -> Markup {
    let class = match status.kind {
        StatusKind::Success => "notice notice-success",
        StatusKind::Error => "notice notice-error",
    };
    html! {
        div class=(class) role="status" { p { (status.text) } }
    }
}

fn create_form(submit: SubmitState) -> Markup {
    let busy = submit == SubmitState::Submitting;
    html! {
        div.card {
            h2 { "Add New Portfolio Item" }
            form.admin-create method="post" action="/admin/items" enctype="multipart/form-data" data-admin-create {
                fieldset.mode-toggle {
                    legend { "Image source" }
                    @for (mode, label) in [(UploadMode::Url, "Paste URL (External)"), (UploadMode::File, "Upload Photo (Recommended)")] {
                        label.mode-option {
                            input type="radio" name="mode" value=(mode.as_str())
                                checked[mode == UploadMode::default()];
                            " " (label)
                        }
                    }
                }
                div.mode-url data-mode-panel="url" {
                    label for="image-url" { "Image URL" }
                    input #image-url type="url" name="image_url"
                        placeholder="https://imgur.com/xxx.jpg or paste any image URL";
                }
                div.mode-file data-mode-panel="file" {
                    label for="image-file" { "Select Image from Gallery" }
                    input #image-file type="file" name="file" accept="image/*"
                        data-max-bytes=(MAX_UPLOAD_BYTES);
                    p.hint { "Max 5MB • JPG, PNG, etc." }
                }
                div.image-preview hidden data-image-preview {
                    p.hint { "Preview:" }
                    img alt="Preview";
                }
                label for="item-name" { "Name" }
                input #item-name type="text" name="name" placeholder="Bouquet name (e.g., Red Roses)" required;
                label for="item-description" { "Description" }
                textarea #item-description name="description" rows="4"
                    placeholder="Describe this bouquet arrangement..." required {}
                button.btn-primary type="submit" disabled[busy] data-submit-label="Adding..." {
                    @if busy { "Adding..." } @else { "Add Portfolio Item" }
                }
            }
        }
    }
}

fn debug_panel(items: &[PortfolioItem], backend_status: &str) -> Markup {
    html! {
        div.card.debug-panel {
            h3 { "Database Debug Info" }
            p { strong { "Backend Status: " } (backend_status) }
            p { strong { "Portfolio Items in DB: " } (items.len()) }
            @if items.is_empty() {
                p.notice.notice-warning { "Database is empty! Add items above." }
            } @else {
                ol.debug-items {
                    @for item in items {
                        @let valid = ImageRef::classify(&item.image_url).is_renderable();
                        li class=(if valid { "debug-item valid" } else { "debug-item invalid" }) {
                            p { (item.name) (if valid { " ✓" } else { " ✗" }) }
                            p.mono {
                                @if item.image_url.is_empty() { "(EMPTY!)" } @else { (item.image_url) }
                            }
                            @if !valid {
                                p.warning { "Invalid or missing URL!" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn item_list(items: &[PortfolioItem]) -> Markup {
    html! {
        div.card {
            h2 { "Portfolio Items (" (items.len()) ")" }
            @if items.is_empty() {
                p.muted { "No portfolio items yet. Add one above!" }
            } @else {
                div.admin-grid {
                    @for item in items {
                        article.admin-item data-item-id=(item.id) {
                            div.image-frame data-image-state="pending" {
                                img src=(item.image_url) alt=(item.name) loading="lazy" data-image;
                                div.image-fallback { p { "Image Not Found" } }
                            }
                            h3 { (item.name) }
                            p.muted { (item.description) }
                            a.btn-danger href=(format!("/admin/items/{}/delete", item.id)) { "Delete" }
                        }
                    }
                }
            }
        }
    }
}

pub fn panel_page(view: PanelView<'_>) -> Markup {
    site_page(
        &page_title("Admin Panel"),
        Page::Admin,
        html! {
            section.admin-panel {
                header.admin-header {
                    div {
                        h1 { "Admin Panel" }
                        p.muted { "Manage your portfolio and content" }
                    }
                    form method="post" action="/admin/logout" {
                        button.btn-outline type="submit" { "Logout" }
                    }
                }
                @if let Some(status) = view.status {
                    (status_banner(status))
                }
                (create_form(view.submit))
                (debug_panel(view.items, view.backend_status))
                (item_list(view.items))
            }
        },
    )
}

pub fn confirm_delete_page(item: &PortfolioItem) -> Markup {
    let action = format!("/admin/items/{}/delete", item.id);
    site_page(
        &page_title("Delete Item"),
        Page::Admin,
        html! {
            section.admin-confirm {
                div.card {
                    h1 { "Are you sure you want to delete this item?" }
                    p { strong { (item.name) } }
                    p.muted { (item.description) }
                    form method="post" action=(action) {
                        input type="hidden" name="confirm" value="yes";
                        button.btn-danger type="submit" { "Delete" }
                        " "
                        a.btn-outline href="/admin" { "Cancel" }
                    }
                }
            }
        },
    )
}
