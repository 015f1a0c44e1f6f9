//! Obstacle car movement logic
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::types::{ObstacleColor, Rect, CAR_HEIGHT, CAR_WIDTH, TRAVEL_BAND_MARGIN, WINDOW_WIDTH};

/// Lower bound of the randomized obstacle speed
pub const OBSTACLE_MIN_SPEED: f32 = 2.0;

/// Upper bound of the randomized obstacle speed
pub const OBSTACLE_MAX_SPEED: f32 = 4.0;

/// A traffic car patrolling horizontally across the lot
///
/// Position is the top-left corner. Dimensions are the player's swapped,
/// so the car sits sideways on screen. Speed is fixed at creation;
/// direction is +1 (right) or -1 (left) and flips at the travel band edges.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleCar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: ObstacleColor,
    pub speed: f32,
    pub direction: f32,
}

impl ObstacleCar {
    pub fn new(x: f32, y: f32, color: ObstacleColor, speed: f32) -> Self {
        Self {
            x,
            y,
            width: CAR_HEIGHT,
            height: CAR_WIDTH,
            color,
            speed,
            direction: 1.0,
        }
    }

    /// Advance one frame of horizontal patrol.
    ///
    /// Reaching either end of the travel band flips the direction and clamps
    /// the position back onto the band, so the car never leaves it.
    pub fn advance(&mut self) {
        self.x += self.speed * self.direction;

        let band_start = TRAVEL_BAND_MARGIN;
        let band_end = WINDOW_WIDTH - self.width - TRAVEL_BAND_MARGIN;
        if self.x <= band_start || self.x >= band_end {
            self.direction = -self.direction;
            self.x = self.x.clamp(band_start, band_end);
        }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
