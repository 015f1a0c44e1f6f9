//! Simulation behavior tests
//!
//! Exercises the headless simulation end to end: geometry, kinematics,
//! obstacle placement, and the per-frame win/lose transitions.

use parking_sim::simulation::{
    FrameInput, ObstacleCar, ObstacleColor, PlayerCar, Rect, SimWorld, CAR_HEIGHT,
    MAX_OBSTACLES, MIN_OBSTACLES, OBSTACLE_MAX_SPEED, OBSTACLE_MIN_SPEED,
    PLAYER_START_BOTTOM_MARGIN, TRAVEL_BAND_MARGIN, TURN_SPEED, WINDOW_HEIGHT, WINDOW_WIDTH,
};

#[test]
fn test_rect_overlap_is_symmetric() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 50.0, 100.0, 100.0);
    let c = Rect::new(500.0, 500.0, 10.0, 10.0);

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c));
    assert!(!c.overlaps(&a));
}

#[test]
fn test_rect_overlaps_itself() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert!(rect.overlaps(&rect));
}

#[test]
fn test_edge_touching_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    let right_neighbor = Rect::new(50.0, 0.0, 50.0, 50.0);
    let below_neighbor = Rect::new(0.0, 50.0, 50.0, 50.0);
    let corner_neighbor = Rect::new(50.0, 50.0, 50.0, 50.0);

    assert!(!a.overlaps(&right_neighbor));
    assert!(!a.overlaps(&below_neighbor));
    assert!(!a.overlaps(&corner_neighbor));
}

#[test]
fn test_player_stays_on_screen() {
    // Drive flat out in each cardinal direction; the car must never poke
    // past the screen in any frame
    for angle in [0.0, 90.0, 180.0, 270.0] {
        let mut player = PlayerCar::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0);
        player.angle = angle;

        for _ in 0..400 {
            player.accelerate();
            player.advance();

            assert!(player.x >= player.width / 2.0);
            assert!(player.x <= WINDOW_WIDTH - player.width / 2.0);
            assert!(player.y >= player.height / 2.0);
            assert!(player.y <= WINDOW_HEIGHT - player.height / 2.0);
        }
    }
}

#[test]
fn test_player_speed_stays_bounded() {
    let mut player = PlayerCar::new(400.0, 300.0);

    for _ in 0..100 {
        player.accelerate();
        assert!(player.speed <= 3.0);
    }
    assert_eq!(player.speed, 3.0);

    for _ in 0..200 {
        player.brake();
        assert!(player.speed >= -1.5);
    }
    assert_eq!(player.speed, -1.5);
}

#[test]
fn test_heading_accumulates_per_turn_step() {
    let mut player = PlayerCar::new(400.0, 300.0);

    for _ in 0..7 {
        player.rotate(1.0);
    }
    for _ in 0..3 {
        player.rotate(-1.0);
    }

    assert_eq!(player.angle, 4.0 * TURN_SPEED);
}

#[test]
fn test_heading_wraps_with_sign_preserved() {
    let mut player = PlayerCar::new(400.0, 300.0);

    // A full lap plus one step to the right wraps back through zero
    for _ in 0..181 {
        player.rotate(1.0);
    }
    assert_eq!(player.angle, TURN_SPEED);

    // Turning left from zero goes negative and stays negative
    let mut player = PlayerCar::new(400.0, 300.0);
    for _ in 0..10 {
        player.rotate(-1.0);
    }
    assert_eq!(player.angle, -10.0 * TURN_SPEED);
}

#[test]
fn test_parking_alignment_window() {
    let mut player = PlayerCar::new(400.0, 300.0);
    assert!(player.is_aligned_for_parking());

    player.angle = 90.0;
    assert!(!player.is_aligned_for_parking());

    player.angle = 355.0;
    assert!(player.is_aligned_for_parking());

    player.angle = -5.0;
    assert!(player.is_aligned_for_parking());

    // Near 360 from below but outside the window
    player.angle = 345.0;
    assert!(!player.is_aligned_for_parking());
}

#[test]
fn test_generated_obstacles_are_disjoint() {
    for seed in 0..25 {
        let world = SimWorld::new_with_seed(seed);
        let spot = world.parking_spot.rect;
        let player_box = world.player.bounding_box();

        assert!(world.obstacles.len() >= MIN_OBSTACLES);
        assert!(world.obstacles.len() <= MAX_OBSTACLES);

        for (i, obstacle) in world.obstacles.iter().enumerate() {
            let obstacle_box = obstacle.bounding_box();
            assert!(
                !obstacle_box.overlaps(&spot),
                "seed {seed}: obstacle {i} overlaps the parking spot"
            );
            assert!(
                !obstacle_box.overlaps(&player_box),
                "seed {seed}: obstacle {i} overlaps the player"
            );
            for (j, other) in world.obstacles.iter().enumerate().skip(i + 1) {
                assert!(
                    !obstacle_box.overlaps(&other.bounding_box()),
                    "seed {seed}: obstacles {i} and {j} overlap"
                );
            }

            assert!(obstacle.speed >= OBSTACLE_MIN_SPEED);
            assert!(obstacle.speed < OBSTACLE_MAX_SPEED);
        }
    }
}

#[test]
fn test_tick_applies_movement_input() {
    let mut world = SimWorld::new_with_seed(1);
    world.obstacles.clear();
    let start_y = world.player.y;

    world.tick(&FrameInput {
        accelerate: true,
        ..FrameInput::default()
    });

    assert!(world.player.y < start_y, "accelerating should move the car up");
    assert!(world.player.speed > 0.0);

    world.tick(&FrameInput {
        turn_left: true,
        ..FrameInput::default()
    });
    assert_eq!(world.player.angle, -TURN_SPEED);
}

#[test]
fn test_parking_aligned_scores_and_starts_new_round() {
    let mut world = SimWorld::new_with_seed(7);
    let spot = world.parking_spot.rect;
    let round_before = world.game_state.round;

    world.player.x = spot.x + spot.width / 2.0;
    world.player.y = spot.y + spot.height / 2.0;
    world.player.angle = 0.0;
    world.player.speed = 0.0;

    world.tick(&FrameInput::default());

    assert_eq!(world.game_state.score, 1);
    assert_eq!(world.game_state.round, round_before + 1);
    assert!(world.game_state.is_playing());

    // Fresh round: player is back at the starting position
    assert_eq!(world.player.x, WINDOW_WIDTH / 2.0);
    assert_eq!(world.player.y, WINDOW_HEIGHT - PLAYER_START_BOTTOM_MARGIN);
}

#[test]
fn test_parking_misaligned_is_ignored() {
    let mut world = SimWorld::new_with_seed(7);
    let spot = world.parking_spot.rect;
    let round_before = world.game_state.round;

    world.player.x = spot.x + spot.width / 2.0;
    world.player.y = spot.y + spot.height / 2.0;
    world.player.angle = 90.0;
    world.player.speed = 0.0;

    world.tick(&FrameInput::default());

    assert_eq!(world.game_state.score, 0);
    assert_eq!(world.game_state.round, round_before);
    assert!(world.game_state.is_playing());
}

#[test]
fn test_crash_freezes_world_until_restart() {
    let mut world = SimWorld::new_with_seed(3);

    // Drop an obstacle directly on top of the player
    let blocker = ObstacleCar::new(
        world.player.x - 40.0,
        world.player.y - 20.0,
        ObstacleColor::Green,
        2.5,
    );
    world.obstacles.push(blocker);

    world.tick(&FrameInput::default());
    assert!(world.game_state.is_game_over());

    let frozen_player = world.player.clone();
    let frozen_obstacle_x = world.obstacles[0].x;

    // Movement input is ignored while the game is over
    let driving = FrameInput {
        accelerate: true,
        turn_left: true,
        ..FrameInput::default()
    };
    for _ in 0..10 {
        world.tick(&driving);
    }

    assert!(world.game_state.is_game_over());
    assert_eq!(world.player, frozen_player);
    assert_eq!(world.obstacles[0].x, frozen_obstacle_x);
    assert_eq!(world.game_state.score, 0);
}

#[test]
fn test_restart_is_ignored_while_playing() {
    let mut world = SimWorld::new_with_seed(11);
    world.obstacles.clear();
    world.game_state.score = 3;
    let round_before = world.game_state.round;

    world.tick(&FrameInput {
        restart: true,
        ..FrameInput::default()
    });

    assert_eq!(world.game_state.score, 3);
    assert_eq!(world.game_state.round, round_before);
    assert!(world.game_state.is_playing());
}

#[test]
fn test_restart_after_crash_wipes_score_and_resumes() {
    let mut world = SimWorld::new_with_seed(5);
    world.game_state.score = 4;

    world.obstacles.push(ObstacleCar::new(
        world.player.x - 40.0,
        world.player.y - 20.0,
        ObstacleColor::Purple,
        3.0,
    ));
    world.tick(&FrameInput::default());
    assert!(world.game_state.is_game_over());

    let round_before = world.game_state.round;
    world.tick(&FrameInput {
        restart: true,
        ..FrameInput::default()
    });

    assert!(world.game_state.is_playing());
    assert_eq!(world.game_state.score, 0);
    assert_eq!(world.game_state.round, round_before + 1);
    assert_eq!(world.player.x, WINDOW_WIDTH / 2.0);
    assert_eq!(world.player.y, WINDOW_HEIGHT - PLAYER_START_BOTTOM_MARGIN);
}

#[test]
fn test_obstacle_reverses_at_band_edges() {
    let band_start = TRAVEL_BAND_MARGIN;
    let band_end = WINDOW_WIDTH - CAR_HEIGHT - TRAVEL_BAND_MARGIN;

    // Approaching the right edge
    let mut car = ObstacleCar::new(band_end - 1.0, 300.0, ObstacleColor::Brown, 3.0);
    car.advance();
    assert_eq!(car.direction, -1.0);
    assert!(car.x <= band_end);

    car.advance();
    assert!(car.x >= band_start && car.x <= band_end);

    // Approaching the left edge
    let mut car = ObstacleCar::new(band_start + 1.0, 300.0, ObstacleColor::Yellow, 3.0);
    car.direction = -1.0;
    car.advance();
    assert_eq!(car.direction, 1.0);
    assert!(car.x >= band_start);

    car.advance();
    assert!(car.x >= band_start && car.x <= band_end);
}

#[test]
fn test_scripted_run_keeps_ticking() {
    // A throttle-to-the-floor soak: whatever happens (parks, crashes,
    // restarts), the world must keep accepting frames
    let mut world = SimWorld::new_with_seed(42);

    for _ in 0..600 {
        let input = FrameInput {
            accelerate: true,
            restart: world.game_state.is_game_over(),
            ..FrameInput::default()
        };
        world.tick(&input);
    }

    assert_eq!(world.game_state.frames, 600);
}
