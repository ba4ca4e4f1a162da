//! Camera, ray and surface types shared with the web frontend.
//!
//! Nothing here references platform APIs; the frontend only feeds in the
//! surface rectangle and reads matrices back out for rendering.

use crate::constants::{
    camera_eye_vec3, camera_target_vec3, CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Bounding rectangle of the drawing surface in client (CSS pixel) space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    /// Client coordinates → normalized device coordinates of this surface.
    ///
    /// Relative to the surface, not the window, so a canvas that does not fill
    /// the viewport still maps correctly. `None` for a zero-sized surface, a
    /// non-finite input or a point outside the surface.
    pub fn client_to_ndc(&self, client: Vec2) -> Option<Vec2> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let u = (client.x - self.left) / self.width;
        let v = (client.y - self.top) / self.height;
        let ndc = Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0);
        (ndc.is_finite() && ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0).then_some(ndc)
    }
}

/// Half-line in world space. `dir` is unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: camera_target_vec3(),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Re-derive the aspect ratio after the surface was resized.
    ///
    /// Zero-sized surfaces (not yet laid out) leave the camera untouched.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.aspect = width / height;
        }
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates (x right, y up, both in \[-1, 1\]).
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Option<Ray> {
        if !ndc.is_finite() {
            return None;
        }
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        if p_far.w.abs() <= f32::EPSILON {
            return None;
        }
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let dir = (p1 - self.eye).try_normalize()?;
        Some(Ray {
            origin: self.eye,
            dir,
        })
    }

    /// Inverse of [`Camera::ray_through_ndc`]: where a world point lands in NDC.
    pub fn project_to_ndc(&self, world: Vec3) -> Vec2 {
        let clip = self.view_projection() * world.extend(1.0);
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }
}
