//! Scan plane: the reference frame the radar projects onto.
//!
//! The plane's local x/y axes span the radar display; local z is the
//! out-of-plane axis that projection flattens away.

use glam::{Affine3A, Quat, Vec3};

use radarscope_core::error::ConfigError;

use crate::interfaces::SpatialTransform;

/// Placement of the scan plane in the world, stored as its inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanPlane {
    world_to_local: Affine3A,
}

impl Default for ScanPlane {
    fn default() -> Self {
        Self::identity()
    }
}

impl ScanPlane {
    /// Plane whose local frame coincides with the world frame.
    pub fn identity() -> Self {
        Self {
            world_to_local: Affine3A::IDENTITY,
        }
    }

    /// Build from the plane's local-to-world transform.
    pub fn from_transform(local_to_world: Affine3A) -> Result<Self, ConfigError> {
        let det = local_to_world.matrix3.determinant();
        if !det.is_finite() || det.abs() <= f32::EPSILON || !local_to_world.translation.is_finite()
        {
            return Err(ConfigError::DegenerateScanPlane);
        }
        Ok(Self {
            world_to_local: local_to_world.inverse(),
        })
    }

    pub fn from_scale_rotation_translation(
        scale: Vec3,
        rotation: Quat,
        translation: Vec3,
    ) -> Result<Self, ConfigError> {
        Self::from_transform(Affine3A::from_scale_rotation_translation(
            scale,
            rotation,
            translation,
        ))
    }

    /// Horizontal plane for a Y-up world, centered on `origin` and turned by
    /// `yaw` radians about the world Y axis.
    ///
    /// Local x follows world x and local y follows world z at zero yaw, so
    /// altitude is what projection discards. A non-finite `origin` or `yaw`
    /// is rejected like any other degenerate placement.
    pub fn horizontal(origin: Vec3, yaw: f32) -> Result<Self, ConfigError> {
        let rotation = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
        Self::from_transform(Affine3A::from_rotation_translation(rotation, origin))
    }

    pub fn world_to_local(&self, world: Vec3) -> Vec3 {
        self.world_to_local.transform_point3(world)
    }
}

impl SpatialTransform for ScanPlane {
    fn world_to_local(&self, world: Vec3) -> Vec3 {
        ScanPlane::world_to_local(self, world)
    }
}
