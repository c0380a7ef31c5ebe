//! Drag gesture routing.
//!
//! Mouse and touch share one path: a mouse event is a single contact, a touch
//! event carries every concurrent touch. Anything other than exactly one
//! contact is ignored outright, so multi-touch never rotates the model.

use crate::marker::MarkerVisibility;
use crate::pose::PoseMachine;
use glam::Vec2;
use smallvec::SmallVec;

/// Contact points of one pointer event, in client pixels.
pub type Contacts = SmallVec<[Vec2; 2]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging,
}

/// Alive only between a qualifying press and the next release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSession {
    pub last: Vec2,
}

/// Result of feeding a move event to the router.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No session, or not exactly one contact.
    Ignored,
    /// Session tracked the pointer but the marker is hidden.
    Tracked,
    /// Pose was rotated by this pixel delta.
    Rotated(Vec2),
}

pub struct InputRouter<T: ?Sized> {
    is_interactive: Box<dyn Fn(&T) -> bool>,
    session: Option<InputSession>,
}

impl<T: ?Sized> InputRouter<T> {
    /// `is_interactive` reports whether a press target belongs to a UI surface
    /// (control panel, popup, back button) that must not start a drag.
    pub fn new(is_interactive: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            is_interactive: Box::new(is_interactive),
            session: None,
        }
    }

    #[inline]
    pub fn state(&self) -> GestureState {
        if self.session.is_some() {
            GestureState::Dragging
        } else {
            GestureState::Idle
        }
    }

    #[inline]
    pub fn session(&self) -> Option<&InputSession> {
        self.session.as_ref()
    }

    /// Start a drag session. Returns whether one was started.
    pub fn press(&mut self, target: &T, contacts: &[Vec2]) -> bool {
        if (self.is_interactive)(target) {
            log::trace!("[drag] press on interactive ui, ignored");
            return false;
        }
        let Some(at) = single_contact(contacts) else {
            log::trace!("[drag] press with {} contacts, ignored", contacts.len());
            return false;
        };
        self.session = Some(InputSession { last: at });
        log::debug!("[drag] begin at ({:.1},{:.1})", at.x, at.y);
        true
    }

    /// Advance the active session. The last position is always updated so a
    /// marker reacquired mid-drag does not make the model jump.
    pub fn pointer_move(
        &mut self,
        contacts: &[Vec2],
        visibility: &MarkerVisibility,
        pose: &mut PoseMachine,
    ) -> MoveOutcome {
        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::Ignored;
        };
        let Some(at) = single_contact(contacts) else {
            return MoveOutcome::Ignored;
        };
        let delta = at - session.last;
        session.last = at;
        if !visibility.is_visible() {
            return MoveOutcome::Tracked;
        }
        pose.rotate_by(delta);
        MoveOutcome::Rotated(delta)
    }

    /// End the session regardless of marker state or where the release lands.
    pub fn release(&mut self) {
        if self.session.take().is_some() {
            log::debug!("[drag] end");
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for InputRouter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputRouter")
            .field("session", &self.session)
            .finish()
    }
}

#[inline]
fn single_contact(contacts: &[Vec2]) -> Option<Vec2> {
    match contacts {
        [only] => Some(*only),
        _ => None,
    }
}
