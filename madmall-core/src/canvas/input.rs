//! Pointer and wheel input delivered to the canvas controller.
//!
//! Positions are client coordinates (page pixels). The controller makes
//! wheel positions relative to the measured viewport itself.

use kurbo::{Point, Vec2};

/// Identifier used for pointer capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// Map a DOM `PointerEvent.button` value.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other.unsigned_abs()),
        }
    }
}

/// What the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas surface (or non-interactive decoration).
    Surface,
    /// A button or other interactive control nested in the canvas,
    /// such as a poster.
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub pointer_id: PointerId,
    pub button: PointerButton,
    pub position: Point,
    pub target: PointerTarget,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub delta_y: f64,
    pub position: Point,
}

/// Pointer position and camera offset captured when a pan gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanAnchor {
    pub pointer: Point,
    pub offset: Vec2,
}

impl PanAnchor {
    /// Offset for the current pointer position, measured from the gesture
    /// start rather than accumulated per move event.
    pub fn offset_at(&self, pointer: Point) -> Vec2 {
        self.offset + (pointer - self.pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_mapping() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Other(4));
    }

    #[test]
    fn test_anchor_offset_is_absolute_delta() {
        let anchor = PanAnchor {
            pointer: Point::new(0.0, 0.0),
            offset: Vec2::new(10.0, 20.0),
        };
        assert_eq!(anchor.offset_at(Point::new(30.0, 5.0)), Vec2::new(40.0, 25.0));
        assert_eq!(anchor.offset_at(Point::new(0.0, 0.0)), Vec2::new(10.0, 20.0));
    }
}
