//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{
    GameOverBanner, ObstacleLink, PlayerCarVisual, PlayerInputState, ScoreText, SimWorldResource,
    SpawnedRound,
};
use super::spawner::{sim_to_world, spawn_obstacle_visual, Z_OBSTACLE, Z_PLAYER};

/// System to run one simulation frame with the sampled input.
///
/// Runs in the Update schedule: one display frame is one physics frame,
/// the same frame-coupled cadence as the original game.
pub fn tick_simulation(input: Res<PlayerInputState>, mut sim_world: ResMut<SimWorldResource>) {
    sim_world.0.tick(&input.0);
}

/// System to sync the player car visual from simulation state
pub fn sync_player(
    sim_world: Res<SimWorldResource>,
    mut player_query: Query<&mut Transform, With<PlayerCarVisual>>,
) {
    let player = &sim_world.0.player;

    for mut transform in player_query.iter_mut() {
        transform.translation = sim_to_world(player.x, player.y, Z_PLAYER);
        // Heading is clockwise on screen; Bevy's z rotation is counter-clockwise
        transform.rotation = Quat::from_rotation_z(-player.angle.to_radians());
    }
}

/// System to sync obstacle visuals from simulation state.
///
/// While a round is live, obstacles only translate. When the round counter
/// advances the layout has been regenerated, so every obstacle visual is
/// torn down and respawned against the new list.
pub fn sync_obstacles(
    mut commands: Commands,
    sim_world: Res<SimWorldResource>,
    mut spawned: ResMut<SpawnedRound>,
    mut obstacle_query: Query<(Entity, &ObstacleLink, &mut Transform)>,
) {
    let world = &sim_world.0;

    if spawned.0 != Some(world.game_state.round) {
        for (entity, _, _) in obstacle_query.iter() {
            commands.entity(entity).despawn();
        }
        for (index, obstacle) in world.obstacles.iter().enumerate() {
            spawn_obstacle_visual(&mut commands, index, obstacle);
        }
        spawned.0 = Some(world.game_state.round);
        return;
    }

    for (_, link, mut transform) in obstacle_query.iter_mut() {
        if let Some(obstacle) = world.obstacles.get(link.0) {
            transform.translation = sim_to_world(
                obstacle.x + obstacle.width / 2.0,
                obstacle.y + obstacle.height / 2.0,
                Z_OBSTACLE,
            );
        }
    }
}

/// System to update the score readout and the game-over banner
pub fn update_hud(
    sim_world: Res<SimWorldResource>,
    mut score_query: Query<&mut Text, With<ScoreText>>,
    mut banner_query: Query<&mut Visibility, With<GameOverBanner>>,
) {
    let game_state = &sim_world.0.game_state;

    for mut text in score_query.iter_mut() {
        **text = format!("Score: {}", game_state.score);
    }

    for mut visibility in banner_query.iter_mut() {
        *visibility = if game_state.is_game_over() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
