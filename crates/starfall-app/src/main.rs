//! Headless STARFALL skirmish: one player ship, one hostile agent, a few rocks.
//!
//! Usage: `starfall [config.json]`. Set `RUST_LOG` to change verbosity.

use std::ops::ControlFlow;

use anyhow::{Context, Result};
use glam::DVec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use starfall_app::game_loop;
use starfall_core::commands::PlayerInput;
use starfall_core::components::WeaponMount;
use starfall_core::config::SimConfig;
use starfall_core::constants::FRAME_RATE;
use starfall_core::events::CombatEvent;
use starfall_core::types::Transform;
use starfall_sim::SimulationEngine;

/// Two simulated minutes.
const MAX_FRAMES: u32 = FRAME_RATE * 120;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            SimConfig::from_json_str(&json).with_context(|| format!("loading config {path}"))?
        }
        None => SimConfig::default(),
    };

    let mut engine = SimulationEngine::new(config);
    let player = engine.spawn_player(Transform::default());
    let agent_start = DVec3::new(120.0, 40.0, 900.0);
    let agent = engine.spawn_agent(
        Transform::looking_along(agent_start, -agent_start),
        Some(WeaponMount {
            local: Transform::from_position(DVec3::new(0.0, -1.0, 3.0)),
        }),
        Some(player),
    );
    for z in [150.0, 300.0, 450.0] {
        engine.spawn_body(DVec3::new(-20.0, 0.0, z), 6.0, 500.0);
    }
    info!(?player, ?agent, "skirmish started");

    let frame_dt = 1.0 / FRAME_RATE as f64;
    let last = game_loop::run_frames(&mut engine, MAX_FRAMES, frame_dt, |engine, snapshot| {
        for event in &snapshot.events {
            if let CombatEvent::Destroyed { entity, player } = event {
                info!(?entity, player, t = snapshot.time.elapsed_secs, "ship lost");
                return ControlFlow::Break(());
            }
        }

        // Track the first agent with both triggers held.
        let aim = snapshot
            .player
            .as_ref()
            .zip(snapshot.agents.first())
            .and_then(|(p, a)| (a.position - p.position).try_normalize());
        engine.set_player_input(PlayerInput {
            fire_held: aim.is_some(),
            fire_alt_held: aim.is_some(),
            aim,
        });
        ControlFlow::Continue(())
    });

    let snapshot = last.context("no frames were simulated")?;
    info!(
        t = snapshot.time.elapsed_secs,
        player_hull = ?snapshot.player.as_ref().map(|p| p.hull.hull),
        agents_left = snapshot.agents.len(),
        "skirmish finished"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
