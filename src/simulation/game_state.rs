//! Round and scoring state for the parking game
//!
//! Tracks the player's score and the playing/game-over phase across rounds.

/// Phase of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Simulation is live: input moves the car, obstacles patrol
    #[default]
    Playing,
    /// Player crashed; everything is frozen until a restart
    GameOver,
}

/// Score and phase tracking across rounds
///
/// The score persists through successful-park resets and is zeroed only by
/// an explicit restart after a crash.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Successful parks since the last restart
    pub score: u32,

    /// Current phase
    pub phase: GamePhase,

    /// Round counter; increments every time the lot is regenerated
    pub round: u32,

    /// Frames ticked since the world was created
    pub frames: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            phase: GamePhase::Playing,
            round: 0,
            frames: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Record a successful park
    pub fn record_park(&mut self) {
        self.score += 1;
    }

    /// Record a crash into an obstacle
    pub fn record_crash(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    /// Wipe the score for a restart after a loss
    pub fn restart(&mut self) {
        self.score = 0;
    }

    /// Enter a fresh round
    pub fn begin_round(&mut self) {
        self.round += 1;
        self.phase = GamePhase::Playing;
    }

    /// One-line status for display
    pub fn summary(&self) -> String {
        format!(
            "Score: {} | Round: {} | Phase: {:?} | Frames: {}",
            self.score, self.round, self.phase, self.frames
        )
    }
}
