//! Core types for the parking simulation
//!
//! These are standalone types that don't depend on Bevy. Positions use
//! screen coordinates: origin at the top-left, y grows downward.

/// Screen width in pixels
pub const WINDOW_WIDTH: f32 = 800.0;

/// Screen height in pixels
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Player car width (the short side)
pub const CAR_WIDTH: f32 = 40.0;

/// Player car height (the long side)
pub const CAR_HEIGHT: f32 = 80.0;

/// Parking spot width
pub const PARKING_WIDTH: f32 = 60.0;

/// Parking spot height
pub const PARKING_HEIGHT: f32 = 100.0;

/// Distance of the parking spot from the top of the screen
pub const PARKING_TOP_MARGIN: f32 = 50.0;

/// Margin from each screen edge bounding the obstacle travel band
pub const TRAVEL_BAND_MARGIN: f32 = 50.0;

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// AABB overlap test with strict inequalities.
    ///
    /// Rectangles that share only a boundary edge do not overlap. This is
    /// the single proximity primitive in the simulation: obstacle placement,
    /// crash detection, and parking detection all go through it.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Paint colors available to obstacle cars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleColor {
    Brown,
    Yellow,
    Green,
    Purple,
}

/// The fixed palette obstacles are drawn from
pub const OBSTACLE_COLORS: [ObstacleColor; 4] = [
    ObstacleColor::Brown,
    ObstacleColor::Yellow,
    ObstacleColor::Green,
    ObstacleColor::Purple,
];

/// The marked parking spot the player must reach
///
/// Centered horizontally near the top of the screen. Immutable within a
/// round and recomputed to the same rectangle on every reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkingSpot {
    pub rect: Rect,
}

impl ParkingSpot {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                WINDOW_WIDTH / 2.0 - PARKING_WIDTH / 2.0,
                PARKING_TOP_MARGIN,
                PARKING_WIDTH,
                PARKING_HEIGHT,
            ),
        }
    }
}

impl Default for ParkingSpot {
    fn default() -> Self {
        Self::new()
    }
}
