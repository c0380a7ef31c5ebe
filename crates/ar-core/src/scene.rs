//! Mapping from [`Pose`] to what the scene graph consumes.
//!
//! The container node takes position and rotation, the model node takes a
//! uniform scale. Rotation gets a fixed base tilt on X so the model lies flat
//! on the marker at rest.

use crate::pose::Pose;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl SceneTransform {
    pub fn from_pose(pose: &Pose, base_tilt_deg: f32) -> Self {
        Self {
            position: Vec3::new(pose.position_x, 0.0, pose.position_z),
            rotation: Vec3::new(base_tilt_deg + pose.rotation_x, pose.rotation_y, 0.0),
            scale: Vec3::splat(pose.scale),
        }
    }

    pub fn position_attr(&self) -> String {
        vec3_attr(self.position)
    }

    pub fn rotation_attr(&self) -> String {
        vec3_attr(self.rotation)
    }

    pub fn scale_attr(&self) -> String {
        vec3_attr(self.scale)
    }
}

// Space-separated triple, the component attribute syntax of the scene graph.
#[inline]
fn vec3_attr(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}
