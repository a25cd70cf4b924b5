use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Logical document path of the boards file inside the content root.
pub const BOARDS_DOC: &str = "plan/boards.json";

/// Placeholder shown in the detail panel when a document cannot be fetched.
pub const DOC_NOT_FOUND: &str = "Doc not found.";

/// Camera seed used when the boards file carries no `canvas.initial` values.
pub const DEFAULT_INITIAL_X: f64 = -200.0;
pub const DEFAULT_INITIAL_Y: f64 = -150.0;
pub const DEFAULT_INITIAL_SCALE: f64 = 1.0;

/// Cosmetic category of a poster. Absent on the wire means `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardTone {
    Grid,
    Caution,
    #[default]
    None,
}

/// A single poster on the plan canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Logical document-store path, fetched when the board is selected.
    pub doc: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub tone: BoardTone,
}

impl Board {
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialCamera {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<InitialCamera>,
}

/// The boards file: every poster plus the initial camera.
///
/// `schema` is carried through untouched so newer files round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardsFile {
    #[serde(default)]
    pub schema: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasSettings>,
    #[serde(default)]
    pub boards: Vec<Board>,
}

#[derive(Debug, thiserror::Error)]
pub enum BoardsError {
    #[error("Malformed boards config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid board {id}: width and height must be positive")]
    InvalidGeometry { id: String },

    #[error("Duplicate board id: {0}")]
    DuplicateId(String),
}

impl BoardsFile {
    /// Parse a boards file and check per-board invariants.
    pub fn from_json(raw: &str) -> Result<Self, BoardsError> {
        let file: BoardsFile = serde_json::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    pub fn validate(&self) -> Result<(), BoardsError> {
        let mut seen = HashSet::new();
        for board in &self.boards {
            // NaN fails both comparisons, so it is rejected too.
            if !(board.w > 0.0 && board.h > 0.0) {
                return Err(BoardsError::InvalidGeometry {
                    id: board.id.clone(),
                });
            }
            if !seen.insert(board.id.as_str()) {
                return Err(BoardsError::DuplicateId(board.id.clone()));
            }
        }
        Ok(())
    }

    pub fn initial_camera(&self) -> Option<&InitialCamera> {
        self.canvas.as_ref().and_then(|c| c.initial.as_ref())
    }

    pub fn find(&self, id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }
}

/// Success body of `GET /api/content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentResponse {
    pub doc: String,
    pub content: String,
}
