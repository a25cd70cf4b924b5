use kurbo::{Point, Rect, Vec2};

use super::camera::{board_bounds, Camera, FIT_PADDING};
use super::input::{PanAnchor, PointerButton, PointerDown, PointerId, PointerTarget, WheelInput};
use super::session::FetchError;
use crate::types::{Board, BoardsFile, BOARDS_DOC, DOC_NOT_FOUND};

/// Monotonic tag identifying one document fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// A document fetch the host must perform for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRequest {
    pub token: RequestToken,
    pub doc: String,
}

/// View state of one plan canvas: boards, camera, pan gesture, selection.
///
/// Every instance owns its state, so several canvases never interfere.
#[derive(Debug, Clone, Default)]
pub struct PlanCanvas {
    boards_file: BoardsFile,
    load_error: Option<String>,
    selected: Option<Board>,
    selected_doc_text: String,
    pending_doc: Option<RequestToken>,
    next_token: u64,
    camera: Camera,
    is_panning: bool,
    pan_anchor: Option<PanAnchor>,
    list_view: bool,
    /// Canvas viewport in client coordinates, once laid out.
    viewport: Option<Rect>,
}

impl PlanCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Loading ─────────────────────────────────────────────────────────

    /// Logical path the host fetches once on mount.
    pub fn boards_doc(&self) -> &'static str {
        BOARDS_DOC
    }

    /// Apply the outcome of fetching the boards file.
    ///
    /// On success the boards replace the current set and the camera is
    /// seeded from `canvas.initial`. On failure the board set stays empty,
    /// the camera is untouched and `load_error` carries a readable message.
    pub fn finish_load(&mut self, outcome: Result<Option<String>, FetchError>) {
        let parsed = match outcome {
            Ok(Some(raw)) if !raw.is_empty() => {
                BoardsFile::from_json(&raw).map_err(|e| e.to_string())
            }
            Ok(_) => Err("Missing boards config".to_string()),
            Err(FetchError::Status(_)) => Err("Failed to load boards config".to_string()),
            Err(e) => Err(e.to_string()),
        };
        match parsed {
            Ok(file) => {
                self.camera = Camera::from_initial(file.initial_camera());
                self.boards_file = file;
                self.load_error = None;
            }
            Err(message) => {
                log::warn!(target: "madmall.canvas", "Boards load failed: {}", message);
                self.boards_file = BoardsFile::default();
                self.load_error = Some(message);
            }
        }
    }

    // ── Selection ───────────────────────────────────────────────────────

    /// Select a board (or clear the selection with `None`).
    ///
    /// The previous document text is cleared right away. For `Some`, the
    /// returned request must be fetched and handed back to
    /// [`finish_doc_request`](Self::finish_doc_request); any earlier
    /// request is superseded.
    pub fn select_board(&mut self, board: Option<Board>) -> Option<DocRequest> {
        self.selected_doc_text.clear();
        let Some(board) = board else {
            self.selected = None;
            self.pending_doc = None;
            return None;
        };
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        let doc = board.doc.clone();
        self.selected = Some(board);
        self.pending_doc = Some(token);
        Some(DocRequest { token, doc })
    }

    /// Select the board with `id`. Unknown ids leave the state unchanged.
    pub fn select_board_by_id(&mut self, id: &str) -> Option<DocRequest> {
        let board = self.boards_file.find(id)?.clone();
        self.select_board(Some(board))
    }

    /// Apply a finished document fetch. Returns false (and changes nothing)
    /// when `token` no longer belongs to the current selection.
    pub fn finish_doc_request(
        &mut self,
        token: RequestToken,
        outcome: Result<Option<String>, FetchError>,
    ) -> bool {
        if self.pending_doc != Some(token) {
            log::debug!(target: "madmall.canvas", "Dropping stale doc response {:?}", token);
            return false;
        }
        self.pending_doc = None;
        self.selected_doc_text = match outcome {
            Ok(Some(content)) => content,
            Ok(None) => DOC_NOT_FOUND.to_string(),
            Err(e) => {
                log::debug!(target: "madmall.canvas", "Doc fetch failed: {}", e);
                DOC_NOT_FOUND.to_string()
            }
        };
        true
    }

    // ── Pan ─────────────────────────────────────────────────────────────

    /// Start a pan gesture. Returns the pointer to capture, or `None` when
    /// the press is ignored (non-primary button, press on a control, or the
    /// canvas is not shown).
    pub fn pointer_down(&mut self, event: PointerDown) -> Option<PointerId> {
        if self.list_view || event.button != PointerButton::Primary {
            return None;
        }
        if event.target == PointerTarget::Control {
            return None;
        }
        self.is_panning = true;
        self.pan_anchor = Some(PanAnchor {
            pointer: event.position,
            offset: self.camera.offset,
        });
        Some(event.pointer_id)
    }

    /// Follow the pointer during a pan. Returns whether the offset changed.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        if !self.is_panning {
            return false;
        }
        let Some(anchor) = self.pan_anchor else {
            return false;
        };
        self.camera.offset = anchor.offset_at(position);
        true
    }

    pub fn pointer_up(&mut self) {
        self.is_panning = false;
        self.pan_anchor = None;
    }

    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    // ── Zoom ────────────────────────────────────────────────────────────

    /// Zoom one fixed step around the cursor. Returns whether the host must
    /// suppress native scrolling for this event.
    pub fn wheel(&mut self, event: WheelInput) -> bool {
        if self.list_view {
            return false;
        }
        let origin = self.viewport.map(|r| r.origin()).unwrap_or(Point::ORIGIN);
        let anchor = (event.position - origin).to_point();
        self.camera
            .zoom_about(anchor, Camera::wheel_factor(event.delta_y));
        true
    }

    // ── View ────────────────────────────────────────────────────────────

    /// Fit every board into the viewport, or fall back to the identity
    /// camera when there is nothing to fit or no usable layout.
    pub fn reset_view(&mut self) {
        let fitted = match (board_bounds(&self.boards_file.boards), self.measured_viewport()) {
            (Some(bounds), Some(viewport)) => Some(Camera::fit(bounds, viewport.size())),
            _ => None,
        };
        self.camera = fitted.unwrap_or_default();
    }

    /// Viewport usable for fitting: canvas mounted and larger than the padding.
    fn measured_viewport(&self) -> Option<Rect> {
        if self.list_view {
            return None;
        }
        self.viewport
            .filter(|r| r.width() > FIT_PADDING && r.height() > FIT_PADDING)
    }

    pub fn toggle_list_view(&mut self) {
        self.list_view = !self.list_view;
        // A gesture cannot survive the canvas being unmounted.
        self.pointer_up();
    }

    /// Record the canvas viewport after layout (`None` when unmounted).
    /// A rectangle with non-finite coordinates counts as unmeasured.
    pub fn set_viewport(&mut self, viewport: Option<Rect>) {
        self.viewport = viewport.filter(|r| r.is_finite());
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn boards(&self) -> &[Board] {
        &self.boards_file.boards
    }

    pub fn boards_file(&self) -> &BoardsFile {
        &self.boards_file
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn selected(&self) -> Option<&Board> {
        self.selected.as_ref()
    }

    pub fn selected_doc_text(&self) -> &str {
        &self.selected_doc_text
    }

    /// True while the current selection's document fetch is outstanding.
    pub fn is_doc_loading(&self) -> bool {
        self.pending_doc.is_some()
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn offset(&self) -> Vec2 {
        self.camera.offset
    }

    pub fn scale(&self) -> f64 {
        self.camera.scale
    }

    pub fn is_panning(&self) -> bool {
        self.is_panning
    }

    pub fn pan_anchor(&self) -> Option<PanAnchor> {
        self.pan_anchor
    }

    pub fn is_list_view(&self) -> bool {
        self.list_view
    }
}
