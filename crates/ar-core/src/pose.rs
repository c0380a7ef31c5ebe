//! Pose of the overlaid model and the only surface allowed to mutate it.
//!
//! Every mutating call ends by notifying the registered [`PoseObserver`], which
//! is how the renderer binding learns about changes. None of the operations can
//! fail: inputs are plain deltas or members of closed enums, and scale is
//! saturated rather than rejected.

use crate::config::ViewerConfig;
use crate::constants::DEFAULT_SCALE;
use glam::Vec2;

/// Rotation (degrees), planar offset and uniform scale of the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub position_x: f32,
    pub position_z: f32,
    pub scale: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            position_x: 0.0,
            position_z: 0.0,
            scale: DEFAULT_SCALE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Negative => -1.0,
            Direction::Positive => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Receives the pose after each mutation ("apply" to the scene).
pub trait PoseObserver {
    fn on_pose_changed(&mut self, pose: &Pose);
}

impl<F: FnMut(&Pose)> PoseObserver for F {
    fn on_pose_changed(&mut self, pose: &Pose) {
        self(pose)
    }
}

/// Step sizes and scale bounds the machine was built with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseLimits {
    pub sensitivity: f32,
    pub position_step: f32,
    pub zoom_step: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl From<&ViewerConfig> for PoseLimits {
    fn from(c: &ViewerConfig) -> Self {
        Self {
            sensitivity: c.rotate_sensitivity,
            position_step: c.position_step,
            zoom_step: c.zoom_step,
            min_scale: c.min_scale,
            max_scale: c.max_scale,
        }
    }
}

impl Default for PoseLimits {
    fn default() -> Self {
        Self::from(&ViewerConfig::default())
    }
}

pub struct PoseMachine {
    pose: Pose,
    limits: PoseLimits,
    observer: Option<Box<dyn PoseObserver>>,
}

impl PoseMachine {
    pub fn new(limits: PoseLimits) -> Self {
        Self {
            pose: rest_pose(&limits),
            limits,
            observer: None,
        }
    }

    /// Register the apply callback, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl PoseObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    #[inline]
    pub fn current(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn limits(&self) -> &PoseLimits {
        &self.limits
    }

    /// Accumulate a pointer delta in pixels. Horizontal motion spins about Y,
    /// vertical motion tilts about X.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let s = self.limits.sensitivity;
        self.pose.rotation_y += dx * s;
        self.pose.rotation_x += dy * s;
        self.notify();
    }

    #[inline]
    pub fn rotate_by(&mut self, delta: Vec2) {
        self.rotate(delta.x, delta.y);
    }

    pub fn translate(&mut self, axis: Axis, direction: Direction) {
        let step = self.limits.position_step * direction.sign();
        match axis {
            Axis::X => self.pose.position_x += step,
            Axis::Z => self.pose.position_z += step,
        }
        self.notify();
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        let PoseLimits {
            zoom_step,
            min_scale,
            max_scale,
            ..
        } = self.limits;
        let target = match direction {
            ZoomDirection::In => self.pose.scale + zoom_step,
            ZoomDirection::Out => self.pose.scale - zoom_step,
        };
        self.pose.scale = target.max(min_scale).min(max_scale);
        if self.pose.scale != target {
            log::trace!("[pose] zoom saturated at {:.2}", self.pose.scale);
        }
        self.notify();
    }

    pub fn reset(&mut self) {
        self.pose = rest_pose(&self.limits);
        log::debug!("[pose] reset");
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_pose_changed(&self.pose);
        }
    }
}

// Default pose, with scale pulled inside bounds that exclude 1.0.
fn rest_pose(limits: &PoseLimits) -> Pose {
    let mut pose = Pose::default();
    pose.scale = pose.scale.max(limits.min_scale).min(limits.max_scale);
    pose
}

impl Default for PoseMachine {
    fn default() -> Self {
        Self::new(PoseLimits::default())
    }
}

impl std::fmt::Debug for PoseMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoseMachine")
            .field("pose", &self.pose)
            .field("limits", &self.limits)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
