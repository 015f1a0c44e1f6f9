mod simulation;

#[cfg(feature = "ui")]
mod ui;

use anyhow::ensure;
use clap::Parser;

use simulation::{FrameInput, SimWorld};

/// Nominal frames per simulated second in headless mode
const FRAMES_PER_SECOND: u32 = 60;

#[derive(Parser)]
#[command(name = "parking_sim")]
#[command(about = "Arcade parking game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation frames to run in headless mode
    #[arg(long, default_value = "1800")]
    ticks: u32,

    /// Seed for reproducible obstacle layouts
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui();
            return Ok(());
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    }

    run_headless(cli.ticks, cli.seed)
}

/// Run the simulation in headless mode (no graphics)
///
/// Drives a scripted player that holds the accelerator, so runs head
/// straight at the parking spot from the starting position: rounds end in
/// a park or a crash depending on the obstacle layout, and crashes are
/// followed by an automatic restart.
fn run_headless(ticks: u32, seed: Option<u64>) -> anyhow::Result<()> {
    env_logger::init();

    ensure!(ticks > 0, "--ticks must be greater than zero");

    println!("Running parking simulation in headless mode...");
    println!(
        "Ticks: {} ({:.1}s at {} fps)",
        ticks,
        ticks as f32 / FRAMES_PER_SECOND as f32,
        FRAMES_PER_SECOND
    );
    println!();

    let mut world = match seed {
        Some(seed) => SimWorld::new_with_seed(seed),
        None => SimWorld::new(),
    };

    println!("Initial state:");
    world.print_summary();
    world.draw_map();
    println!();

    let mut tick = 0;
    while tick < ticks {
        let ticks_to_run = FRAMES_PER_SECOND.min(ticks - tick);

        for _ in 0..ticks_to_run {
            tick += 1;
            let input = FrameInput {
                accelerate: true,
                restart: world.game_state.is_game_over(),
                ..FrameInput::default()
            };
            world.tick(&input);
        }

        println!(
            "--- After tick {} ({:.1}s simulated time) ---",
            tick,
            tick as f32 / FRAMES_PER_SECOND as f32
        );
        world.print_summary();
        world.draw_map();
        println!();

        if tick < ticks {
            std::thread::sleep(std::time::Duration::from_millis(500));
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map();

    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui() {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    use crate::simulation::{WINDOW_HEIGHT, WINDOW_WIDTH};

    println!("Starting Parking Sim UI...");
    println!();
    println!("Controls:");
    println!("  Up/W        - Accelerate");
    println!("  Down/S      - Brake / reverse");
    println!("  Left/A      - Steer left");
    println!("  Right/D     - Steer right");
    println!("  R           - Restart after a crash");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,parking_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Parking Sim".into(),
                        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(ui::ParkingSimUIPlugin)
        .run();
}
