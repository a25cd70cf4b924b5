//! Presentation layer: a pure projection of [`PlanCanvas`] state into a
//! view tree. [`html`] turns that tree into markup.

pub mod html;

use crate::canvas::PlanCanvas;
use crate::types::{Board, BoardTone};

/// Label shown in place of document text while a fetch is outstanding.
pub const LOADING_LABEL: &str = "Loading…";

#[derive(Debug, Clone, PartialEq)]
pub struct PlanView {
    pub error: Option<String>,
    /// Label of the button that switches between list and canvas modes.
    pub toggle_label: &'static str,
    pub body: PlanBody,
    pub detail: Option<DetailPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanBody {
    List(Vec<ListItem>),
    Canvas(CanvasLayer),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub doc: String,
}

/// The transformed layer holding every poster.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLayer {
    pub transform: String,
    pub posters: Vec<Poster>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Poster {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub tone_class: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub title: String,
    pub subtitle: String,
    pub doc: String,
    pub body: DetailBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Loading,
    Text(String),
}

/// CSS class for a board tone; `None` has no extra styling.
pub fn tone_class(tone: BoardTone) -> &'static str {
    match tone {
        BoardTone::Caution => "madmall-caution",
        BoardTone::Grid => "madmall-grid",
        BoardTone::None => "",
    }
}

pub fn render_plan(canvas: &PlanCanvas) -> PlanView {
    let boards = canvas.boards();
    let body = if canvas.is_list_view() {
        PlanBody::List(boards.iter().map(list_item).collect())
    } else {
        let selected_id = canvas.selected().map(|b| b.id.as_str());
        PlanBody::Canvas(CanvasLayer {
            transform: canvas.camera().css_transform(),
            posters: boards
                .iter()
                .map(|b| poster(b, selected_id == Some(b.id.as_str())))
                .collect(),
        })
    };

    let detail = canvas.selected().map(|b| DetailPanel {
        title: b.title.clone(),
        subtitle: b.subtitle.clone(),
        doc: b.doc.clone(),
        body: if canvas.is_doc_loading() && canvas.selected_doc_text().is_empty() {
            DetailBody::Loading
        } else {
            DetailBody::Text(canvas.selected_doc_text().to_string())
        },
    });

    PlanView {
        error: canvas.load_error().map(str::to_string),
        toggle_label: if canvas.is_list_view() {
            "Canvas view"
        } else {
            "List view"
        },
        body,
        detail,
    }
}

fn list_item(b: &Board) -> ListItem {
    ListItem {
        id: b.id.clone(),
        title: b.title.clone(),
        subtitle: b.subtitle.clone(),
        doc: b.doc.clone(),
    }
}

fn poster(b: &Board, selected: bool) -> Poster {
    Poster {
        id: b.id.clone(),
        title: b.title.clone(),
        subtitle: b.subtitle.clone(),
        left: b.x,
        top: b.y,
        width: b.w,
        height: b.h,
        tone_class: tone_class(b.tone),
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FetchError;

    const BOARDS: &str = r#"{
        "schema": "v1",
        "canvas": { "initial": { "x": 0, "y": 0, "scale": 1 } },
        "boards": [
            { "id": "a", "title": "Alpha", "subtitle": "first", "doc": "plan/a.md",
              "x": 10, "y": 20, "w": 300, "h": 200, "tone": "caution" },
            { "id": "b", "title": "Beta", "subtitle": "second", "doc": "plan/b.md",
              "x": 400, "y": 20, "w": 300, "h": 200 }
        ]
    }"#;

    fn canvas() -> PlanCanvas {
        let mut canvas = PlanCanvas::new();
        canvas.finish_load(Ok(Some(BOARDS.to_string())));
        canvas
    }

    #[test]
    fn test_tone_classes() {
        assert_eq!(tone_class(BoardTone::Caution), "madmall-caution");
        assert_eq!(tone_class(BoardTone::Grid), "madmall-grid");
        assert_eq!(tone_class(BoardTone::None), "");
    }

    #[test]
    fn test_canvas_mode_positions_posters() {
        let view = render_plan(&canvas());
        let PlanBody::Canvas(layer) = view.body else {
            panic!("expected canvas body");
        };
        assert_eq!(layer.transform, "translate(0px, 0px) scale(1)");
        assert_eq!(layer.posters.len(), 2);
        assert_eq!(
            (layer.posters[0].left, layer.posters[0].top, layer.posters[0].width),
            (10.0, 20.0, 300.0)
        );
        assert_eq!(layer.posters[0].tone_class, "madmall-caution");
        assert!(!layer.posters[0].selected);
        assert_eq!(view.toggle_label, "List view");
        assert!(view.detail.is_none());
    }

    #[test]
    fn test_list_mode_keeps_order() {
        let mut canvas = canvas();
        canvas.toggle_list_view();
        let view = render_plan(&canvas);
        let PlanBody::List(items) = view.body else {
            panic!("expected list body");
        };
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(view.toggle_label, "Canvas view");
    }

    #[test]
    fn test_detail_panel_loading_then_text() {
        let mut canvas = canvas();
        let req = canvas.select_board_by_id("b").unwrap();
        let view = render_plan(&canvas);
        let detail = view.detail.unwrap();
        assert_eq!(detail.title, "Beta");
        assert_eq!(detail.doc, "plan/b.md");
        assert_eq!(detail.body, DetailBody::Loading);

        let PlanBody::Canvas(layer) = view.body else {
            panic!("expected canvas body");
        };
        assert!(layer.posters[1].selected);
        assert!(!layer.posters[0].selected);

        canvas.finish_doc_request(req.token, Err(FetchError::Status(404)));
        let detail = render_plan(&canvas).detail.unwrap();
        assert_eq!(detail.body, DetailBody::Text("Doc not found.".into()));
    }

    #[test]
    fn test_empty_document_is_not_loading() {
        let mut canvas = canvas();
        let req = canvas.select_board_by_id("a").unwrap();
        canvas.finish_doc_request(req.token, Ok(Some(String::new())));
        let detail = render_plan(&canvas).detail.unwrap();
        assert_eq!(detail.body, DetailBody::Text(String::new()));
    }

    #[test]
    fn test_error_banner() {
        let mut canvas = PlanCanvas::new();
        canvas.finish_load(Err(FetchError::Status(500)));
        let view = render_plan(&canvas);
        assert_eq!(view.error.as_deref(), Some("Failed to load boards config"));
        assert_eq!(view.body, PlanBody::Canvas(CanvasLayer {
            transform: "translate(0px, 0px) scale(1)".into(),
            posters: vec![],
        }));
    }
}
