//! World setup systems for the camera, road backdrop, parking spot, and HUD

use bevy::prelude::*;

use super::components::{GameOverBanner, MainCamera, ScoreText};
use super::spawner::sim_to_world;
use crate::simulation::{ParkingSpot, WINDOW_HEIGHT, WINDOW_WIDTH};

const COLOR_ROAD: Color = Color::srgb(0.157, 0.157, 0.157);
const COLOR_LINE: Color = Color::WHITE;
const COLOR_SPOT: Color = Color::srgb(0.0, 1.0, 0.0);
const COLOR_GAME_OVER: Color = Color::srgb(1.0, 0.0, 0.0);

/// Z layer of road markings, above the backdrop
const Z_MARKINGS: f32 = 0.5;

/// Z layer of the parking spot outline
const Z_SPOT: f32 = 0.6;

/// System to set up the static scene and the HUD
pub fn setup_world(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));

    // Road backdrop
    commands.spawn((
        Sprite::from_color(COLOR_ROAD, Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Dashed center line across the middle of the screen
    let dash_length = 30.0;
    let dash_space = 40.0;
    let mut x = 0.0;
    while x < WINDOW_WIDTH {
        let width = dash_length.min(WINDOW_WIDTH - x);
        commands.spawn((
            Sprite::from_color(COLOR_LINE, Vec2::new(width, 3.0)),
            Transform::from_translation(sim_to_world(
                x + width / 2.0,
                WINDOW_HEIGHT / 2.0,
                Z_MARKINGS,
            )),
        ));
        x += dash_length + dash_space;
    }

    // Side lines along both screen edges
    for edge_x in [0.0, WINDOW_WIDTH] {
        commands.spawn((
            Sprite::from_color(COLOR_LINE, Vec2::new(5.0, WINDOW_HEIGHT)),
            Transform::from_translation(sim_to_world(edge_x, WINDOW_HEIGHT / 2.0, Z_MARKINGS)),
        ));
    }

    spawn_parking_spot_visual(&mut commands);

    // Score readout toolbar at the top-left
    commands
        .spawn((
            Node {
                width: Val::Auto,
                height: Val::Auto,
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                ScoreText,
            ));
        });

    // Game-over banner, hidden until a crash
    commands
        .spawn((
            GameOverBanner,
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                top: Val::Percent(45.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Game Over! Press R to restart"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(COLOR_GAME_OVER),
            ));
        });
}

/// Draw the parking spot as a green outline with a dashed entry edge
fn spawn_parking_spot_visual(commands: &mut Commands) {
    let rect = ParkingSpot::new().rect;

    // Left and right edges
    for edge_x in [rect.x, rect.x + rect.width] {
        commands.spawn((
            Sprite::from_color(COLOR_SPOT, Vec2::new(2.0, rect.height)),
            Transform::from_translation(sim_to_world(edge_x, rect.y + rect.height / 2.0, Z_SPOT)),
        ));
    }

    // Top and bottom edges
    for edge_y in [rect.y, rect.y + rect.height] {
        commands.spawn((
            Sprite::from_color(COLOR_SPOT, Vec2::new(rect.width, 2.0)),
            Transform::from_translation(sim_to_world(rect.x + rect.width / 2.0, edge_y, Z_SPOT)),
        ));
    }

    // Dashed marking along the entry edge
    let dash_length = 10.0;
    let dash_space = 5.0;
    let mut x = 0.0;
    while x < rect.width {
        let width = dash_length.min(rect.width - x);
        commands.spawn((
            Sprite::from_color(COLOR_SPOT, Vec2::new(width, 2.0)),
            Transform::from_translation(sim_to_world(
                rect.x + x + width / 2.0,
                rect.y,
                Z_SPOT + 0.05,
            )),
        ));
        x += dash_length + dash_space;
    }
}
