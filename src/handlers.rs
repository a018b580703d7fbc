use crate::calendar::parse_date_key;
use crate::errors::AppError;
use crate::models::{Category, ToggleRequest};
use crate::state::AppState;
use crate::summary::DaySummary;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let summary = state.today_summary().await;
    Html(render_index(&summary))
}

pub async fn get_today(State(state): State<AppState>) -> Json<DaySummary> {
    Json(state.today_summary().await)
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DaySummary>, AppError> {
    let date = parse_date_key(date.trim())
        .ok_or_else(|| AppError::bad_request("date must be a YYYY-MM-DD calendar date"))?;
    Ok(Json(state.summary_for(date).await))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Json<DaySummary> {
    Json(state.toggle_today(payload.category, &payload.item_id).await)
}

pub async fn toggle_form(
    State(state): State<AppState>,
    Path((category, item_id)): Path<(Category, String)>,
) -> Redirect {
    state.toggle_today(category, &item_id).await;
    Redirect::to(&format!("/#{}", category.tab()))
}
