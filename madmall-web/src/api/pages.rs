use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use kurbo::Rect;
use madmall_core::canvas::PlanSession;
use madmall_core::manifest::CurriculumManifest;
use madmall_core::view::{self, html};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    /// `list` renders the list view, anything else the canvas.
    view: Option<String>,
    /// Board to open in the detail panel.
    board: Option<String>,
    /// Viewport size; when both are given the camera is fitted to the boards.
    width: Option<f64>,
    height: Option<f64>,
}

/// GET /plan -- render the plan page for a fresh canvas.
pub async fn plan_page(
    State(state): State<AppState>,
    params: Result<Query<PlanQuery>, QueryRejection>,
) -> Html<String> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            log::debug!(target: "madmall.api.pages", "Ignoring plan query: {}", e);
            PlanQuery::default()
        }
    };
    let mut session = PlanSession::new(state.store.clone());
    session.load().await;

    if let (Some(width), Some(height)) = (params.width, params.height) {
        let canvas = session.canvas_mut();
        canvas.set_viewport(Some(Rect::new(0.0, 0.0, width, height)));
        canvas.reset_view();
    }
    if params.view.as_deref() == Some("list") {
        session.canvas_mut().toggle_list_view();
    }
    if let Some(board_id) = params.board.as_deref() {
        if !session.select_by_id(board_id).await {
            log::debug!(target: "madmall.api.pages", "Unknown board {}", board_id);
        }
    }

    Html(html::render_plan_page(&view::render_plan(session.canvas())))
}

/// GET /agents -- curriculum inventory from the manifest file.
pub async fn agents_page(State(state): State<AppState>) -> Html<String> {
    let manifest = CurriculumManifest::load(&state.manifest_path);
    Html(html::render_manifest_page(&manifest))
}
