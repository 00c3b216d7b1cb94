//! Bucket route handlers.
//!
//! Quantity changes are plain form posts that redirect back to the bucket
//! page. Removal is two-step: a GET renders the confirmation page, and only
//! the confirmed POST mutates; cancelling is a plain link back. Checkout is
//! a stub boundary that never creates an order.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use soundstage_core::LineItemId;

use crate::filters;
use crate::state::AppState;
use crate::store::LineItem;

/// Line item display data for templates.
#[derive(Clone)]
pub struct LineItemView {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub line_total: String,
    pub image_url: String,
    pub quantity: u32,
}

impl From<&LineItem> for LineItemView {
    fn from(line: &LineItem) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            brand: line.brand.clone(),
            price: line.price.display(),
            line_total: line.line_total().display(),
            image_url: line.image_url.clone(),
            quantity: line.quantity,
        }
    }
}

/// Bucket page template.
#[derive(Template, WebTemplate)]
#[template(path = "bucket/show.html")]
pub struct BucketShowTemplate {
    pub lines: Vec<LineItemView>,
    pub item_count: usize,
    pub total: String,
}

/// Removal confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "bucket/confirm_remove.html")]
pub struct ConfirmRemoveTemplate {
    pub line: LineItemView,
}

/// Checkout confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirm.html")]
pub struct CheckoutConfirmTemplate {
    pub item_count: usize,
    pub total: String,
}

/// Checkout acknowledgment page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/acknowledged.html")]
pub struct CheckoutAcknowledgedTemplate {
    pub total: String,
}

/// Display the bucket page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let bucket = state.bucket();
    BucketShowTemplate {
        lines: bucket.lines().iter().map(LineItemView::from).collect(),
        item_count: bucket.len(),
        total: bucket.total().display(),
    }
}

/// Quantity adjustment form data.
///
/// The steppers post `delta` of +1 or -1, but any integer is accepted; the
/// store clamps the result to a minimum of one.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub line_id: String,
    pub delta: i64,
}

/// Adjust a line quantity (form post).
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateForm>) -> Redirect {
    let line_id = LineItemId::new(form.line_id.as_str());
    if !state.bucket().update_quantity(&line_id, form.delta) {
        tracing::debug!(%line_id, "quantity update on unknown line ignored");
    }
    Redirect::to("/bucket")
}

/// Display the removal confirmation page (step one).
///
/// If the line is already gone there is nothing to confirm; redirect back.
#[instrument(skip(state))]
pub async fn confirm_remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let line_id = LineItemId::new(id.as_str());
    state.bucket().line(&line_id).map_or_else(
        || Redirect::to("/bucket").into_response(),
        |line| {
            ConfirmRemoveTemplate {
                line: LineItemView::from(&line),
            }
            .into_response()
        },
    )
}

/// Remove a line after confirmation (step two).
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let line_id = LineItemId::new(id.as_str());
    match state.bucket().remove(&line_id) {
        Some(line) => {
            tracing::info!(%line_id, name = %line.name, "removed line from bucket");
        }
        None => {
            tracing::debug!(%line_id, "removal of unknown line ignored");
        }
    }
    Redirect::to("/bucket")
}

/// Display the checkout confirmation prompt.
///
/// Stub boundary: there is nothing to check out into, so an empty bucket
/// just bounces back.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Response {
    let bucket = state.bucket();
    if bucket.is_empty() {
        return Redirect::to("/bucket").into_response();
    }

    CheckoutConfirmTemplate {
        item_count: bucket.len(),
        total: bucket.total().display(),
    }
    .into_response()
}

/// Acknowledge a confirmed checkout.
///
/// No order is created and no state mutates; the page says so.
#[instrument(skip(state))]
pub async fn place_order(State(state): State<AppState>) -> impl IntoResponse {
    CheckoutAcknowledgedTemplate {
        total: state.bucket().total().display(),
    }
}
