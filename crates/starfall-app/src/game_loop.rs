//! Simulation loop: fixed-step physics under a variable frame rate.
//!
//! Each frame runs as many fixed physics steps as the accumulated frame time
//! covers, then one variable-rate tick that produces the frame's snapshot.
//! [`run_frames`] drives the engine headless and as fast as possible;
//! [`spawn_game_loop`] paces it in real time on its own thread.

use std::io;
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use starfall_core::constants::{FIXED_DT, FRAME_RATE};
use starfall_core::state::CombatSnapshot;
use starfall_sim::SimulationEngine;

use crate::state::{LoopCommand, SharedSnapshot};

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Upper bound on physics steps per frame, so a stalled frame cannot spiral.
const MAX_FIXED_STEPS_PER_FRAME: u32 = 8;

/// Splits frame time into whole fixed steps, carrying the remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStepper {
    accumulator: f64,
}

impl FixedStepper {
    /// Add `frame_dt` and return the number of fixed steps due.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= FIXED_DT && steps < MAX_FIXED_STEPS_PER_FRAME {
            self.accumulator -= FIXED_DT;
            steps += 1;
        }
        if steps == MAX_FIXED_STEPS_PER_FRAME && self.accumulator >= FIXED_DT {
            debug!(dropped = self.accumulator, "fixed-step backlog dropped");
            self.accumulator = 0.0;
        }
        steps
    }
}

/// Run one frame: due physics steps, then the variable tick.
pub fn run_frame(
    engine: &mut SimulationEngine,
    stepper: &mut FixedStepper,
    frame_dt: f64,
) -> CombatSnapshot {
    for _ in 0..stepper.advance(frame_dt) {
        engine.tick_fixed(FIXED_DT);
    }
    engine.tick_variable(frame_dt)
}

/// Run up to `frames` frames of `frame_dt` seconds without pacing.
///
/// `on_frame` sees every snapshot and may stop the loop early. Returns the
/// last snapshot produced.
pub fn run_frames<F>(
    engine: &mut SimulationEngine,
    frames: u32,
    frame_dt: f64,
    mut on_frame: F,
) -> Option<CombatSnapshot>
where
    F: FnMut(&mut SimulationEngine, &CombatSnapshot) -> ControlFlow<()>,
{
    let mut stepper = FixedStepper::default();
    let mut last = None;
    for _ in 0..frames {
        let snapshot = run_frame(engine, &mut stepper, frame_dt);
        let flow = on_frame(engine, &snapshot);
        last = Some(snapshot);
        if flow.is_break() {
            break;
        }
    }
    last
}

/// Spawn the real-time loop on its own thread.
///
/// Returns the command sender and the thread handle. The loop runs until it
/// receives `Shutdown` or the sender is dropped.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("starfall-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut stepper = FixedStepper::default();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame + FRAME_DURATION;

    loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Input(input)) => engine.set_player_input(input),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        let now = Instant::now();
        let frame_dt = (now - last_frame).as_secs_f64();
        last_frame = now;

        let snapshot = run_frame(&mut engine, &mut stepper, frame_dt);
        match latest_snapshot.lock() {
            Ok(mut lock) => *lock = Some(snapshot),
            Err(_) => {
                warn!("snapshot lock poisoned, stopping game loop");
                return;
            }
        }

        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_frame_time = now;
        }
        next_frame_time += FRAME_DURATION;
    }
}
