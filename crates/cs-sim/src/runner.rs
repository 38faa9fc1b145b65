//! Batch simulation runner with decimated recording.
//!
//! The tick driver itself is variable-dt; this runner is one possible
//! external driver, stepping with a fixed dt and snapshotting state for
//! later export.

use crate::controls::Controls;
use crate::engine::{Engine, EngineState};
use crate::error::{SimError, SimResult};

/// Options for batch runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt_s: f64,
    /// Final simulation time (seconds)
    pub t_end_s: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt_s: 1e-3,
            t_end_s: 1.0,
            max_steps: 100_000,
            record_every: 10,
        }
    }
}

/// Recorded run: time points and state snapshots.
#[derive(Clone, Debug)]
pub struct SimRecord {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots
    pub states: Vec<EngineState>,
}

/// Run a batch simulation, feeding controls from `schedule` each step.
///
/// Records the initial state, every `record_every`-th step, and the final
/// state. `schedule` receives the current time and the state BEFORE the step.
pub fn run_sim(
    engine: &Engine,
    initial: EngineState,
    mut schedule: impl FnMut(f64, &EngineState) -> Controls,
    opts: &SimOptions,
) -> SimResult<SimRecord> {
    if opts.dt_s <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if opts.t_end_s < 0.0 {
        return Err(SimError::InvalidArg {
            what: "t_end must be non-negative",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if opts.record_every == 0 {
        return Err(SimError::InvalidArg {
            what: "record_every must be positive",
        });
    }

    let mut t = 0.0;
    let mut state = initial;

    let mut t_record = vec![t];
    let mut state_record = vec![state];

    let mut step = 0;
    while t < opts.t_end_s && step < opts.max_steps {
        let controls = schedule(t, &state);
        engine.tick(&mut state, &controls, opts.dt_s);
        t += opts.dt_s;
        step += 1;

        if step % opts.record_every == 0 {
            t_record.push(t);
            state_record.push(state);
        }
    }

    // Always record the final state
    if step % opts.record_every != 0 {
        t_record.push(t);
        state_record.push(state);
    }

    Ok(SimRecord {
        t: t_record,
        states: state_record,
    })
}
