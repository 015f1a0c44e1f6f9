//! Standalone parking game simulation module
//!
//! This module contains all the core game logic and can run independently
//! of the Bevy game engine. It can be exercised from the console or from
//! tests without booting up the full game.

mod game_state;
mod obstacle;
mod player;
mod types;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use game_state::{GamePhase, GameState};
#[allow(unused_imports)]
pub use obstacle::{ObstacleCar, OBSTACLE_MAX_SPEED, OBSTACLE_MIN_SPEED};
#[allow(unused_imports)]
pub use player::{
    PlayerCar, ACCELERATION, FRICTION, MAX_SPEED, PARK_ANGLE_TOLERANCE, TURN_SPEED,
};
#[allow(unused_imports)]
pub use types::{
    ObstacleColor, ParkingSpot, Rect, CAR_HEIGHT, CAR_WIDTH, OBSTACLE_COLORS, PARKING_HEIGHT,
    PARKING_TOP_MARGIN, PARKING_WIDTH, TRAVEL_BAND_MARGIN, WINDOW_HEIGHT, WINDOW_WIDTH,
};
pub use world::{
    FrameInput, SimWorld, MAX_OBSTACLES, MIN_OBSTACLES, PLACEMENT_ATTEMPTS,
    PLAYER_START_BOTTOM_MARGIN,
};
