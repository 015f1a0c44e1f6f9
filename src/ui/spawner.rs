//! Functions for spawning car visuals from simulation state
//!
//! Cars are built from plain colored rectangles (body, roof, windows,
//! headlights, wheels, rims) parented to a root entity, so the whole car
//! moves and rotates as one transform.

use bevy::prelude::*;

use super::components::{ObstacleLink, PlayerCarVisual, SimWorldResource, SpawnedRound};
use crate::simulation::{ObstacleCar, ObstacleColor, CAR_HEIGHT, CAR_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Z layer of obstacle cars
pub const Z_OBSTACLE: f32 = 1.0;

/// Z layer of the player car, above obstacles
pub const Z_PLAYER: f32 = 2.0;

pub const COLOR_BODY_BLUE: Color = Color::srgb(0.0, 0.0, 1.0);
pub const COLOR_GLASS_GRAY: Color = Color::srgb(0.5, 0.5, 0.5);
pub const COLOR_HEADLIGHT_YELLOW: Color = Color::srgb(1.0, 1.0, 0.0);
pub const COLOR_TIRE_BLACK: Color = Color::BLACK;

/// Convert simulation screen coordinates (origin top-left, y down) to Bevy
/// world coordinates (origin center, y up)
pub fn sim_to_world(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x - WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 - y, z)
}

/// Map a simulation paint color to a render color
pub fn obstacle_body_color(color: ObstacleColor) -> Color {
    match color {
        ObstacleColor::Brown => Color::srgb_u8(139, 69, 19),
        ObstacleColor::Yellow => Color::srgb_u8(255, 255, 0),
        ObstacleColor::Green => Color::srgb_u8(0, 255, 0),
        ObstacleColor::Purple => Color::srgb_u8(128, 0, 128),
    }
}

/// System to spawn the visuals present at startup
pub fn spawn_initial_visuals(
    mut commands: Commands,
    sim_world: Res<SimWorldResource>,
    mut spawned: ResMut<SpawnedRound>,
) {
    let world = &sim_world.0;

    spawn_player_visual(&mut commands, world.player.x, world.player.y);
    for (index, obstacle) in world.obstacles.iter().enumerate() {
        spawn_obstacle_visual(&mut commands, index, obstacle);
    }
    spawned.0 = Some(world.game_state.round);
}

/// Spawn the player car: an upright 40x80 body with detail sprites
pub fn spawn_player_visual(commands: &mut Commands, x: f32, y: f32) {
    commands
        .spawn((
            PlayerCarVisual,
            Sprite::from_color(COLOR_BODY_BLUE, Vec2::new(CAR_WIDTH, CAR_HEIGHT)),
            Transform::from_translation(sim_to_world(x, y, Z_PLAYER)),
        ))
        .with_children(|parent| {
            // Roof
            parent.spawn((
                Sprite::from_color(COLOR_BODY_BLUE, Vec2::new(32.0, 32.0)),
                Transform::from_xyz(0.0, 16.0, 0.05),
            ));
            // Windshield
            parent.spawn((
                Sprite::from_color(COLOR_GLASS_GRAY, Vec2::new(24.0, 20.0)),
                Transform::from_xyz(0.0, 18.0, 0.1),
            ));
            // Headlights at the front corners
            for side in [-1.0, 1.0] {
                parent.spawn((
                    Sprite::from_color(COLOR_HEADLIGHT_YELLOW, Vec2::new(6.0, 8.0)),
                    Transform::from_xyz(side * 17.0, 36.0, 0.1),
                ));
            }
            // Wheels with rims at each corner
            for side_x in [-1.0, 1.0] {
                for side_y in [-1.0, 1.0] {
                    parent.spawn((
                        Sprite::from_color(COLOR_TIRE_BLACK, Vec2::new(10.0, 16.0)),
                        Transform::from_xyz(side_x * 15.0, side_y * 32.0, 0.1),
                    ));
                    parent.spawn((
                        Sprite::from_color(COLOR_GLASS_GRAY, Vec2::new(6.0, 9.6)),
                        Transform::from_xyz(side_x * 15.0, side_y * 32.0, 0.2),
                    ));
                }
            }
        });
}

/// Spawn an obstacle car: a sideways 80x40 body with detail sprites
pub fn spawn_obstacle_visual(commands: &mut Commands, index: usize, obstacle: &ObstacleCar) {
    let body = obstacle_body_color(obstacle.color);
    let center_x = obstacle.x + obstacle.width / 2.0;
    let center_y = obstacle.y + obstacle.height / 2.0;

    commands
        .spawn((
            ObstacleLink(index),
            Sprite::from_color(body, Vec2::new(CAR_HEIGHT, CAR_WIDTH)),
            Transform::from_translation(sim_to_world(center_x, center_y, Z_OBSTACLE)),
        ))
        .with_children(|parent| {
            // Roof
            parent.spawn((
                Sprite::from_color(body, Vec2::new(32.0, 32.0)),
                Transform::from_xyz(-16.0, 0.0, 0.05),
            ));
            // Side window
            parent.spawn((
                Sprite::from_color(COLOR_GLASS_GRAY, Vec2::new(20.0, 24.0)),
                Transform::from_xyz(-18.0, 0.0, 0.1),
            ));
            // Headlights at both ends
            for side in [-1.0, 1.0] {
                parent.spawn((
                    Sprite::from_color(COLOR_HEADLIGHT_YELLOW, Vec2::new(6.0, 4.0)),
                    Transform::from_xyz(side * 37.0, 0.0, 0.1),
                ));
            }
            // Wheels with rims at each corner
            for side_x in [-1.0, 1.0] {
                for side_y in [-1.0, 1.0] {
                    parent.spawn((
                        Sprite::from_color(COLOR_TIRE_BLACK, Vec2::new(10.0, 8.0)),
                        Transform::from_xyz(side_x * 35.0, side_y * 16.0, 0.1),
                    ));
                    parent.spawn((
                        Sprite::from_color(COLOR_GLASS_GRAY, Vec2::new(6.0, 4.8)),
                        Transform::from_xyz(side_x * 35.0, side_y * 16.0, 0.2),
                    ));
                }
            }
        });
}
