//! Player car kinematics
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::types::{Rect, CAR_HEIGHT, CAR_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Speed gained per frame of acceleration (and lost per frame of braking)
pub const ACCELERATION: f32 = 0.2;

/// Maximum forward speed; reverse tops out at half of this
pub const MAX_SPEED: f32 = 3.0;

/// Heading change in degrees per frame of turning
pub const TURN_SPEED: f32 = 2.0;

/// Per-frame speed multiplier; coasting decays toward a stop
pub const FRICTION: f32 = 0.95;

/// Heading must be within this many degrees of straight up to park
pub const PARK_ANGLE_TOLERANCE: f32 = 10.0;

/// The car the player drives
///
/// Position is the center of the car. Heading is in degrees with 0 pointing
/// up the screen, and wraps via a sign-preserving `% 360` so a heading of
/// -1 stays -1 rather than becoming 359.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCar {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl PlayerCar {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            angle: 0.0,
            speed: 0.0,
            width: CAR_WIDTH,
            height: CAR_HEIGHT,
        }
    }

    /// Turn by one frame's worth of steering; direction is -1 (left) or +1 (right)
    pub fn rotate(&mut self, direction: f32) {
        self.angle += direction * TURN_SPEED;
        self.angle %= 360.0;
    }

    pub fn accelerate(&mut self) {
        self.speed = (self.speed + ACCELERATION).min(MAX_SPEED);
    }

    /// Slow down, or reverse once speed drops below zero
    pub fn brake(&mut self) {
        self.speed = (self.speed - ACCELERATION).max(-MAX_SPEED / 2.0);
    }

    /// Integrate one frame of motion.
    ///
    /// Velocity is decomposed from the pre-friction speed, then friction is
    /// applied for the next frame. The position is clamped so the car's full
    /// extent stays on screen.
    pub fn advance(&mut self) {
        let rad = self.angle.to_radians();

        self.x += rad.sin() * self.speed;
        self.y += -rad.cos() * self.speed;

        self.speed *= FRICTION;

        self.x = self
            .x
            .clamp(self.width / 2.0, WINDOW_WIDTH - self.width / 2.0);
        self.y = self
            .y
            .clamp(self.height / 2.0, WINDOW_HEIGHT - self.height / 2.0);
    }

    /// Collision rectangle centered on the car, ignoring heading.
    ///
    /// Rotation is cosmetic only: collision always uses the unrotated box.
    /// A deliberate simplification to keep overlap checks cheap.
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.x - self.width / 2.0,
            self.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }

    /// Whether the heading is straight enough to count as parked.
    ///
    /// Checks proximity to 0 and to 360 exactly; nothing else is accepted.
    pub fn is_aligned_for_parking(&self) -> bool {
        self.angle.abs() < PARK_ANGLE_TOLERANCE
            || (self.angle - 360.0).abs() < PARK_ANGLE_TOLERANCE
    }
}
