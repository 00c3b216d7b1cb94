//! Profile route handlers.
//!
//! The account card and order history are fixtures; only the two preference
//! switches mutate, via form posts that redirect back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;
use crate::store::{Order, Preferences};

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub id: String,
    pub placed_on: String,
    pub total: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub item_count: u32,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            placed_on: order.placed_on.format("%Y-%m-%d").to_string(),
            total: order.total.display(),
            status_label: order.status.label(),
            status_class: order.status.css_class(),
            item_count: order.item_count,
        }
    }
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile/index.html")]
pub struct ProfileTemplate {
    pub display_name: String,
    pub email: String,
    pub avatar_url: String,
    pub preferences: Preferences,
    pub orders: Vec<OrderView>,
}

/// Display the profile page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let profile = state.profile();
    let account = profile.account();

    ProfileTemplate {
        display_name: account.display_name,
        email: account.email,
        avatar_url: account.avatar_url,
        preferences: profile.preferences(),
        orders: profile.orders().iter().map(OrderView::from).collect(),
    }
}

/// Preference toggle form data.
#[derive(Debug, Deserialize)]
pub struct PreferenceForm {
    pub setting: String,
}

/// Toggle a preference switch (form post).
#[instrument(skip(state))]
pub async fn toggle_preference(
    State(state): State<AppState>,
    Form(form): Form<PreferenceForm>,
) -> Result<Redirect, AppError> {
    match form.setting.as_str() {
        "notifications" => {
            state.profile().toggle_notifications();
        }
        "dark-mode" => {
            state.profile().toggle_dark_mode();
        }
        other => {
            return Err(AppError::BadRequest(format!("unknown setting: {other}")));
        }
    }
    Ok(Redirect::to("/profile"))
}
