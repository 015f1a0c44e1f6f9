//! Input handling systems

use bevy::prelude::*;

use super::components::PlayerInputState;
use crate::simulation::FrameInput;

/// Sample the keyboard into the simulation's input snapshot.
///
/// Arrow keys and WASD both steer; movement keys are level-triggered while
/// restart is edge-triggered, matching a key-down event.
pub fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<PlayerInputState>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    input.0 = FrameInput {
        turn_left: keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA),
        turn_right: keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD),
        accelerate: keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW),
        brake: keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS),
        restart: keyboard.just_pressed(KeyCode::KeyR),
    };
}
