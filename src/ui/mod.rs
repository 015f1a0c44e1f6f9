//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization and input capture - all game
//! logic is in the `simulation` module. The UI samples the keyboard, feeds
//! the simulation one frame, and renders the result.

mod components;
mod input;
pub mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{PlayerInputState, SimWorldResource};

use components::SpawnedRound;
use input::sample_input;
use spawner::spawn_initial_visuals;
use sync::{sync_obstacles, sync_player, tick_simulation, update_hud};
use world::setup_world;

/// Plugin to register all UI systems
pub struct ParkingSimUIPlugin;

impl Plugin for ParkingSimUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimWorldResource>()
            .init_resource::<PlayerInputState>()
            .init_resource::<SpawnedRound>()
            .add_systems(
                Startup,
                (setup_world, spawn_initial_visuals.after(setup_world)),
            )
            .add_systems(
                Update,
                (
                    sample_input,
                    tick_simulation,
                    sync_player,
                    sync_obstacles,
                    update_hud,
                )
                    .chain(),
            );
    }
}
