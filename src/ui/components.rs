//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{FrameInput, SimWorld};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

impl Default for SimWorldResource {
    fn default() -> Self {
        Self(SimWorld::new())
    }
}

/// Pressed-key snapshot fed to the simulation each frame
#[derive(Resource, Default)]
pub struct PlayerInputState(pub FrameInput);

/// Round whose obstacle visuals are currently spawned
///
/// Round resets regenerate the obstacle layout, so visuals are torn down
/// and respawned whenever this falls behind the simulation's round counter.
#[derive(Resource, Default)]
pub struct SpawnedRound(pub Option<u32>);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for the player car's visual root
#[derive(Component)]
pub struct PlayerCarVisual;

/// Links a Bevy entity to an obstacle by index into the simulation's list
#[derive(Component)]
pub struct ObstacleLink(pub usize);

/// Marker for the HUD score readout
#[derive(Component)]
pub struct ScoreText;

/// Marker for the game-over banner
#[derive(Component)]
pub struct GameOverBanner;
