//! Headless playthrough of the opening quest chain.
//!
//! Drives the game controller the way the UI would: walk, talk, fight,
//! level. Useful for balance checks and for exercising the core without
//! a renderer.
//!
//! Usage:
//!   cargo run --bin simulate -- [--seed N] [--name NAME] [-v]

use aldenhaven::core::constants::{FIXED_TIMESTEP_SECONDS, INTERACT_RANGE};
use aldenhaven::core::controller::{Direction, GameController};
use aldenhaven::core::events::GameEvent;
use aldenhaven::quests::tracker::QuestState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (seed, name, verbose) = parse_args(&args);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = GameController::new(name.clone());

    println!("── Aldenhaven simulation (seed {seed}) ──");

    // Meet Elder Marcus and take the tutorial chain.
    walk_to(&mut game, 300.0, &mut rng, verbose);
    game.accept_quest("welcome-to-town").expect("quest available");
    report(game.interact(&mut rng), verbose);
    game.accept_quest("first-steps").expect("chain unlocked");

    // East to the plains; thin out the wolf pack.
    walk_to_zone(&mut game, 1, &mut rng, verbose);
    while game.quests().state("first-steps") == Some(QuestState::Active) {
        let Some(wolf) = game
            .zones()
            .enemy_roster(game.state().current_zone)
            .into_iter()
            .find(|t| t.name == "Wolf" && !game.state().defeated_spawns.contains(&t.spawn_id))
        else {
            // Pack cleared out from under us; re-enter to roll respawns.
            walk_to_zone(&mut game, 0, &mut rng, verbose);
            walk_to_zone(&mut game, 1, &mut rng, verbose);
            continue;
        };

        walk_to(&mut game, wolf.x, &mut rng, verbose);
        report(game.interact(&mut rng), verbose);

        let mut rounds = 0;
        while game.in_battle() && rounds < 200 {
            let _ = game.attack(&mut rng).map(|ev| report(ev, verbose));
            for _ in 0..60 {
                report(game.update(FIXED_TIMESTEP_SECONDS, &mut rng), verbose);
            }
            rounds += 1;
        }
        flush_notifications(&mut game, verbose);
    }

    let hud = game.hud();
    println!();
    println!("Run complete:");
    println!("  Level:    {} ({} / {} XP)", hud.level, hud.experience, hud.experience_to_next);
    println!("  HP:       {}/{}", hud.hp, hud.max_hp);
    println!("  Gold:     {}", hud.gold);
    println!("  Kills:    {}", game.character().combat_record.kills);
    println!("  Deaths:   {}", game.character().combat_record.deaths);
    for entry in game.quest_log() {
        println!("  Active:   {}", entry.title);
    }
    println!(
        "  first-steps: {:?}",
        game.quests().state("first-steps").expect("catalog quest")
    );
}

/// Walks the player toward an x position in the current zone.
fn walk_to(game: &mut GameController, target_x: f64, rng: &mut ChaCha8Rng, verbose: bool) {
    let mut guard = 0;
    while (game.state().player_x - target_x).abs() >= INTERACT_RANGE / 2.0 && guard < 10_000 {
        let direction = if game.state().player_x < target_x {
            Direction::Right
        } else {
            Direction::Left
        };
        report(game.move_player(direction, FIXED_TIMESTEP_SECONDS, rng), verbose);
        report(game.update(FIXED_TIMESTEP_SECONDS, rng), verbose);
        // An ambush interrupts the walk; fight it out.
        while game.in_battle() {
            let _ = game.attack(rng).map(|ev| report(ev, verbose));
            for _ in 0..60 {
                report(game.update(FIXED_TIMESTEP_SECONDS, rng), verbose);
            }
        }
        guard += 1;
    }
}

/// Walks east or west until the player crosses into the target zone.
fn walk_to_zone(game: &mut GameController, zone_id: u32, rng: &mut ChaCha8Rng, verbose: bool) {
    let mut guard = 0;
    while game.state().current_zone != zone_id && guard < 100_000 {
        let direction = if game.state().current_zone < zone_id {
            Direction::Right
        } else {
            Direction::Left
        };
        report(game.move_player(direction, FIXED_TIMESTEP_SECONDS, rng), verbose);
        report(game.update(FIXED_TIMESTEP_SECONDS, rng), verbose);
        while game.in_battle() {
            let _ = game.attack(rng).map(|ev| report(ev, verbose));
            for _ in 0..60 {
                report(game.update(FIXED_TIMESTEP_SECONDS, rng), verbose);
            }
        }
        guard += 1;
    }
    flush_notifications(game, verbose);
}

fn report(events: Vec<GameEvent>, verbose: bool) {
    if !verbose {
        return;
    }
    for event in events {
        println!("  event: {event:?}");
    }
}

fn flush_notifications(game: &mut GameController, verbose: bool) {
    for note in game.drain_notifications() {
        if verbose {
            println!("[{:?}] {}", note.severity, note.message);
        }
    }
}

fn parse_args(args: &[String]) -> (u64, String, bool) {
    let mut seed = 42;
    let mut name = "Artemis".to_string();
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().unwrap_or(42);
                    i += 1;
                }
            }
            "--name" | "-n" => {
                if i + 1 < args.len() {
                    name = args[i + 1].clone();
                    i += 1;
                }
            }
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                println!("Usage: simulate [--seed N] [--name NAME] [-v]");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }
    (seed, name, verbose)
}
