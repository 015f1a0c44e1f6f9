//! Main simulation world that ties everything together
//!
//! This is the entry point for running the parking simulation without any
//! Bevy dependencies. One call to [`SimWorld::tick`] is one frame.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::game_state::GameState;
use super::obstacle::{ObstacleCar, OBSTACLE_MAX_SPEED, OBSTACLE_MIN_SPEED};
use super::player::PlayerCar;
use super::types::{
    ParkingSpot, CAR_HEIGHT, OBSTACLE_COLORS, WINDOW_HEIGHT, WINDOW_WIDTH,
};

/// Fewest obstacles generated per round
pub const MIN_OBSTACLES: usize = 3;

/// Most obstacles generated per round
pub const MAX_OBSTACLES: usize = 4;

/// Rejection-sampling attempts before an obstacle is skipped
pub const PLACEMENT_ATTEMPTS: u32 = 100;

/// Distance of the player's starting position from the bottom of the screen
pub const PLAYER_START_BOTTOM_MARGIN: f32 = 100.0;

/// Horizontal margin of the obstacle spawn region
const SPAWN_MARGIN_X: f32 = 100.0;

/// Top of the obstacle spawn region, below the parking spot
const SPAWN_MIN_Y: f32 = 150.0;

/// Bottom margin of the obstacle spawn region
const SPAWN_MARGIN_BOTTOM: f32 = 100.0;

/// Pressed-key state sampled once per frame
///
/// Movement keys are non-exclusive: several may act in the same frame.
/// Restart is only honored while the game is over.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub accelerate: bool,
    pub brake: bool,
    pub restart: bool,
}

/// The main simulation world
pub struct SimWorld {
    /// The car the player drives
    pub player: PlayerCar,

    /// Patrolling traffic for the current round
    pub obstacles: Vec<ObstacleCar>,

    /// Target rectangle for a successful park
    pub parking_spot: ParkingSpot,

    /// Score and phase tracking
    pub game_state: GameState,

    /// Optional seeded RNG for reproducible rounds
    rng: Option<StdRng>,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld {
    fn new_internal(rng: Option<StdRng>) -> Self {
        let mut world = Self {
            player: Self::starting_player(),
            obstacles: Vec::new(),
            parking_spot: ParkingSpot::new(),
            game_state: GameState::new(),
            rng,
        };
        world.reset_round();
        world
    }

    pub fn new() -> Self {
        Self::new_internal(None)
    }

    /// Create a new SimWorld with a seeded RNG for reproducible rounds
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(Some(StdRng::seed_from_u64(seed)))
    }

    fn starting_player() -> PlayerCar {
        PlayerCar::new(
            WINDOW_WIDTH / 2.0,
            WINDOW_HEIGHT - PLAYER_START_BOTTOM_MARGIN,
        )
    }

    /// Get a random value in the given range, using seeded RNG if available
    fn random_range(&mut self, range: std::ops::Range<f32>) -> f32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Get a random index in the given range, using seeded RNG if available
    fn random_index(&mut self, range: std::ops::Range<usize>) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Start a fresh round: new player, new spot, new obstacle layout.
    ///
    /// The score is untouched; callers decide whether to wipe it first.
    pub fn reset_round(&mut self) {
        self.player = Self::starting_player();
        self.parking_spot = ParkingSpot::new();
        self.generate_obstacles();
        self.game_state.begin_round();
        debug!(
            "round {} started with {} obstacles",
            self.game_state.round,
            self.obstacles.len()
        );
    }

    /// Populate the lot with 3-4 patrolling obstacles.
    ///
    /// Each obstacle is rejection-sampled: a candidate is accepted only if
    /// it overlaps neither the parking spot, the player, nor any obstacle
    /// already placed this round. An obstacle that exhausts its attempt cap
    /// is skipped, so a round may end up sparser than requested.
    fn generate_obstacles(&mut self) {
        self.obstacles.clear();
        let count = self.random_index(MIN_OBSTACLES..MAX_OBSTACLES + 1);

        for _ in 0..count {
            let mut attempts = 0;
            while attempts < PLACEMENT_ATTEMPTS {
                let x = self.random_range(SPAWN_MARGIN_X..WINDOW_WIDTH - CAR_HEIGHT - SPAWN_MARGIN_X);
                let y = self.random_range(SPAWN_MIN_Y..WINDOW_HEIGHT - SPAWN_MARGIN_BOTTOM);
                let color = OBSTACLE_COLORS[self.random_index(0..OBSTACLE_COLORS.len())];
                let speed = self.random_range(OBSTACLE_MIN_SPEED..OBSTACLE_MAX_SPEED);
                let candidate = ObstacleCar::new(x, y, color, speed);

                let candidate_box = candidate.bounding_box();
                let clear = !candidate_box.overlaps(&self.parking_spot.rect)
                    && !candidate_box.overlaps(&self.player.bounding_box())
                    && self
                        .obstacles
                        .iter()
                        .all(|existing| !candidate_box.overlaps(&existing.bounding_box()));

                if clear {
                    self.obstacles.push(candidate);
                    break;
                }
                attempts += 1;
            }
        }
    }

    /// Advance the world by one frame.
    ///
    /// While playing: apply input, move the player and every obstacle, then
    /// check crashes before parking. A crash freezes the world until the
    /// restart key starts a new run with the score wiped; a successful park
    /// keeps the score and rolls straight into the next round.
    pub fn tick(&mut self, input: &FrameInput) {
        self.game_state.frames += 1;

        if self.game_state.is_game_over() {
            if input.restart {
                info!("restarting after crash, score wiped");
                self.game_state.restart();
                self.reset_round();
            }
            return;
        }

        if input.turn_left {
            self.player.rotate(-1.0);
        }
        if input.turn_right {
            self.player.rotate(1.0);
        }
        if input.accelerate {
            self.player.accelerate();
        }
        if input.brake {
            self.player.brake();
        }

        self.player.advance();
        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }

        let player_box = self.player.bounding_box();

        if self
            .obstacles
            .iter()
            .any(|obstacle| player_box.overlaps(&obstacle.bounding_box()))
        {
            info!(
                "crashed in round {} at ({:.1}, {:.1})",
                self.game_state.round, self.player.x, self.player.y
            );
            self.game_state.record_crash();
            return;
        }

        if player_box.overlaps(&self.parking_spot.rect) && self.player.is_aligned_for_parking() {
            self.game_state.record_park();
            info!(
                "parked! score is now {}",
                self.game_state.score
            );
            self.reset_round();
        }
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Parking Simulation Summary ===");
        println!("{}", self.game_state.summary());
        println!(
            "Player: pos=({:.1}, {:.1}), angle={:.1}, speed={:.2}",
            self.player.x, self.player.y, self.player.angle, self.player.speed
        );
        for obstacle in &self.obstacles {
            println!(
                "  Obstacle {:?}: pos=({:.1}, {:.1}), speed={:.1}, heading {}",
                obstacle.color,
                obstacle.x,
                obstacle.y,
                obstacle.speed,
                if obstacle.direction > 0.0 {
                    "right"
                } else {
                    "left"
                }
            );
        }
    }

    /// Draw a visual map of the lot in the terminal
    pub fn draw_map(&self) {
        const MAP_WIDTH: usize = 80;
        const MAP_HEIGHT: usize = 24;

        let scale_x = MAP_WIDTH as f32 / WINDOW_WIDTH;
        let scale_y = MAP_HEIGHT as f32 / WINDOW_HEIGHT;

        let mut grid = vec![vec![' '; MAP_WIDTH]; MAP_HEIGHT];

        let fill = |rect: &super::types::Rect, symbol: char, grid: &mut [Vec<char>]| {
            let col_start = (rect.x * scale_x) as usize;
            let col_end = (((rect.x + rect.width) * scale_x) as usize).min(MAP_WIDTH - 1);
            let row_start = (rect.y * scale_y) as usize;
            let row_end = (((rect.y + rect.height) * scale_y) as usize).min(MAP_HEIGHT - 1);
            for row in grid.iter_mut().take(row_end + 1).skip(row_start) {
                for cell in row.iter_mut().take(col_end + 1).skip(col_start) {
                    *cell = symbol;
                }
            }
        };

        fill(&self.parking_spot.rect, 'P', &mut grid);
        for obstacle in &self.obstacles {
            fill(&obstacle.bounding_box(), 'O', &mut grid);
        }
        fill(&self.player.bounding_box(), 'C', &mut grid);

        println!("=== Lot Map ===");
        println!("Legend: P=Parking spot, O=Obstacle, C=Player");
        for row in &grid {
            let line: String = row.iter().collect();
            println!("|{}|", line);
        }
        println!();
    }
}
