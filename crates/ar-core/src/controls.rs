use crate::error::Error;
use crate::pose::{Axis, Direction, PoseMachine, ZoomDirection};
use std::str::FromStr;

/// On-screen control panel buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlButton {
    Up,
    Down,
    Left,
    Right,
    ZoomIn,
    ZoomOut,
    Reset,
}

impl ControlButton {
    pub const ALL: [ControlButton; 7] = [
        ControlButton::Up,
        ControlButton::Down,
        ControlButton::Left,
        ControlButton::Right,
        ControlButton::ZoomIn,
        ControlButton::ZoomOut,
        ControlButton::Reset,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ControlButton::Up => "up",
            ControlButton::Down => "down",
            ControlButton::Left => "left",
            ControlButton::Right => "right",
            ControlButton::ZoomIn => "zoom-in",
            ControlButton::ZoomOut => "zoom-out",
            ControlButton::Reset => "reset",
        }
    }

    /// Element id of the button in the page.
    pub fn element_id(self) -> String {
        format!("btn-{}", self.id())
    }

    /// Up/down push the model away from or toward the viewer along Z.
    pub fn apply(self, pose: &mut PoseMachine) {
        match self {
            ControlButton::Up => pose.translate(Axis::Z, Direction::Negative),
            ControlButton::Down => pose.translate(Axis::Z, Direction::Positive),
            ControlButton::Left => pose.translate(Axis::X, Direction::Negative),
            ControlButton::Right => pose.translate(Axis::X, Direction::Positive),
            ControlButton::ZoomIn => pose.zoom(ZoomDirection::In),
            ControlButton::ZoomOut => pose.zoom(ZoomDirection::Out),
            ControlButton::Reset => pose.reset(),
        }
    }
}

impl FromStr for ControlButton {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix("btn-").unwrap_or(s);
        ControlButton::ALL
            .into_iter()
            .find(|b| b.id() == id)
            .ok_or_else(|| Error::UnknownButton(s.to_string()))
    }
}
