//! Movement input for the walking agent
//!
//! Turns discrete move commands and mouse deltas into a world-space velocity
//! impulse. Movement is relative to the current view: forward follows the
//! look direction (pitch included), strafing follows the view's right vector.

use crate::core::config::MovementConfig;
use crate::foundation::math::{utils, Vec3, Vec3Ext};

/// Default yaw in degrees, looking down -Z
pub const DEFAULT_YAW: f32 = -90.0;

/// Default pitch in degrees
pub const DEFAULT_PITCH: f32 = 0.0;

/// Pitch limit in degrees when the pitch is constrained
pub const PITCH_LIMIT: f32 = 89.0;

/// Discrete movement commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the view direction
    Forward,
    /// Against the view direction
    Backward,
    /// Against the view's right vector
    Left,
    /// Along the view's right vector
    Right,
}

/// Orientation derived from yaw and pitch Euler angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
}

impl ViewBasis {
    /// Creates a basis from yaw and pitch in degrees, with +Y as world up
    pub fn new(yaw: f32, pitch: f32) -> Self {
        let mut basis = Self {
            yaw,
            pitch,
            front: Vec3::new(0.0, 0.0, -1.0),
            right: Vec3::x(),
            up: Vec3::y(),
            world_up: Vec3::y(),
        };
        basis.update_vectors();
        basis
    }

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit look direction
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit vector to the right of the look direction
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector of the view
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Adds yaw and pitch offsets (degrees), optionally clamping pitch
    pub fn rotate(&mut self, yaw_offset: f32, pitch_offset: f32, constrain_pitch: bool) {
        self.yaw += yaw_offset;
        self.pitch += pitch_offset;

        if constrain_pitch {
            self.pitch = utils::clamp(self.pitch, -PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (utils::deg_to_rad(self.yaw), utils::deg_to_rad(self.pitch));
        let front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());

        self.front = front.normalize_or_zero();
        self.right = self.front.cross(&self.world_up).normalize_or_zero();
        self.up = self.right.cross(&self.front).normalize_or_zero();
    }
}

impl Default for ViewBasis {
    fn default() -> Self {
        Self::new(DEFAULT_YAW, DEFAULT_PITCH)
    }
}

/// Accumulates movement commands into a velocity impulse
#[derive(Debug, Clone, PartialEq)]
pub struct MovementInput {
    view: ViewBasis,
    speed: f32,
    sensitivity: f32,
    impulse: Vec3,
}

impl MovementInput {
    /// Creates input with the given speed (units per second) and mouse sensitivity
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            view: ViewBasis::default(),
            speed,
            sensitivity,
            impulse: Vec3::zeros(),
        }
    }

    /// Creates input using the speed and sensitivity from configuration
    pub fn from_config(config: &MovementConfig) -> Self {
        Self::new(config.movement_speed, config.mouse_sensitivity)
    }

    /// Current view orientation
    pub fn view(&self) -> &ViewBasis {
        &self.view
    }

    /// Mutable view orientation
    pub fn view_mut(&mut self) -> &mut ViewBasis {
        &mut self.view
    }

    /// Impulse accumulated since the last [`take_impulse`](Self::take_impulse)
    pub fn pending_impulse(&self) -> Vec3 {
        self.impulse
    }

    /// Records a move command held for `delta_time` seconds
    pub fn push(&mut self, direction: MoveDirection, delta_time: f32) {
        let step = self.speed * delta_time;
        let delta = match direction {
            MoveDirection::Forward => self.view.front * step,
            MoveDirection::Backward => -self.view.front * step,
            MoveDirection::Left => -self.view.right * step,
            MoveDirection::Right => self.view.right * step,
        };
        self.impulse += delta;
    }

    /// Rotates the view by a mouse delta, scaled by sensitivity, with pitch clamped
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.view.rotate(dx * self.sensitivity, dy * self.sensitivity, true);
    }

    /// Returns and clears the accumulated impulse
    pub fn take_impulse(&mut self) -> Vec3 {
        std::mem::replace(&mut self.impulse, Vec3::zeros())
    }
}

impl Default for MovementInput {
    fn default() -> Self {
        Self::from_config(&MovementConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_basis_looks_down_negative_z() {
        let view = ViewBasis::default();
        assert_relative_eq!(view.front(), Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
        assert_relative_eq!(view.right(), Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(view.up(), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut view = ViewBasis::default();
        view.rotate(0.0, 120.0, true);
        assert_relative_eq!(view.pitch(), 89.0);

        view.rotate(0.0, -300.0, true);
        assert_relative_eq!(view.pitch(), -89.0);

        view.rotate(0.0, -10.0, false);
        assert_relative_eq!(view.pitch(), -99.0);
    }

    #[test]
    fn test_yaw_turns_front() {
        let mut view = ViewBasis::default();
        view.rotate(90.0, 0.0, true);
        assert_relative_eq!(view.front(), Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(view.right(), Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_push_accumulates_impulse() {
        let mut input = MovementInput::new(2.0, 0.1);
        input.push(MoveDirection::Forward, 0.5);
        input.push(MoveDirection::Right, 0.25);

        assert_relative_eq!(input.pending_impulse(), Vec3::new(0.5, 0.0, -1.0), epsilon = 1e-6);

        let impulse = input.take_impulse();
        assert_relative_eq!(impulse, Vec3::new(0.5, 0.0, -1.0), epsilon = 1e-6);
        assert_eq!(input.take_impulse(), Vec3::zeros());
    }

    #[test]
    fn test_opposite_commands_cancel() {
        let mut input = MovementInput::default();
        input.push(MoveDirection::Left, 1.0 / 60.0);
        input.push(MoveDirection::Right, 1.0 / 60.0);
        input.push(MoveDirection::Forward, 1.0 / 60.0);
        input.push(MoveDirection::Backward, 1.0 / 60.0);
        assert_relative_eq!(input.take_impulse(), Vec3::zeros(), epsilon = 1e-6);
    }

    #[test]
    fn test_look_scales_by_sensitivity() {
        let mut input = MovementInput::new(2.5, 0.1);
        input.look(100.0, 50.0);
        assert_relative_eq!(input.view().yaw(), -80.0, epsilon = 1e-4);
        assert_relative_eq!(input.view().pitch(), 5.0, epsilon = 1e-4);

        input.look(0.0, 10_000.0);
        assert_relative_eq!(input.view().pitch(), PITCH_LIMIT);
    }
}
