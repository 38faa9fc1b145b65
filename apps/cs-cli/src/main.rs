use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use cs_core::units::constants::rpm_from_rad_s;
use cs_sim::{ActuatorState, ControlInput, Controls, LiftActuator, SimOptions, run_sim};

mod config;
mod error;

use config::EngineConfig;
use error::AppResult;

#[derive(Parser)]
#[command(name = "cs-cli")]
#[command(about = "cranksim CLI - single-cylinder engine simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted simulation and export CSV telemetry
    Run {
        /// Path to an engine YAML config (stock engine if omitted)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Time step in seconds
        #[arg(long, default_value_t = 1e-3)]
        dt: f64,
        /// End time in seconds
        #[arg(long, default_value_t = 2.0)]
        t_end: f64,
        /// Constant torque direction: -1, 0, or 1
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        torque: i8,
        /// Constant valve direction: -1, 0, or 1
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        valve: i8,
        /// Record every N-th step
        #[arg(long, default_value_t = 10)]
        record_every: usize,
        /// Shape the valve command through a first-order actuator
        #[arg(long)]
        actuator: bool,
        /// Output CSV file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print derived geometry for a config
    Geometry {
        /// Path to an engine YAML config (stock engine if omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            dt,
            t_end,
            torque,
            valve,
            record_every,
            actuator,
            output,
        } => cmd_run(
            config.as_deref(),
            dt,
            t_end,
            torque,
            valve,
            record_every,
            actuator,
            output.as_deref(),
        ),
        Commands::Geometry { config } => cmd_geometry(config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> AppResult<EngineConfig> {
    match path {
        Some(p) => EngineConfig::load(p),
        None => Ok(EngineConfig::default()),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_run(
    config_path: Option<&Path>,
    dt: f64,
    t_end: f64,
    torque: i8,
    valve: i8,
    record_every: usize,
    use_actuator: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let config = load_config(config_path)?;
    let engine = config.build()?;
    let initial = config.initial_state(&engine);
    let map = config.control_map();

    let input = ControlInput {
        torque_direction: torque.signum(),
        valve_direction: valve.signum(),
    };

    let opts = SimOptions {
        dt_s: dt,
        t_end_s: t_end,
        record_every,
        ..Default::default()
    };

    // Optional lift shaping: a seated valve takes a moment to reach the
    // commanded lift instead of jumping there.
    let lift_shaper = if use_actuator {
        Some(LiftActuator::new(0.05, 40.0, map.valve_lift_m)?)
    } else {
        None
    };
    let mut actuator_state = ActuatorState::default();

    let record = run_sim(
        &engine,
        initial,
        |_, _| {
            let commanded = map.controls(input);
            match &lift_shaper {
                Some(shaper) => {
                    let command = f64::from(input.valve_direction).max(0.0);
                    actuator_state = shaper.step(&actuator_state, dt, command);
                    Controls {
                        exhaust_valve_lift_m: shaper.lift_m(&actuator_state),
                        ..commanded
                    }
                }
                None => commanded,
            }
        },
        &opts,
    )?;

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    writeln!(
        writer,
        "t_s,theta_rad,omega_rad_s,rpm,position_m,velocity_m_s,chamber_pa,gauge_pa,net_force_n,exhaust_lift_m,dt_s"
    )?;
    for (t, state) in record.t.iter().zip(record.states.iter()) {
        let telemetry = engine.telemetry(state);
        writeln!(
            writer,
            "{:.6},{:.9},{:.9},{:.3},{:.9},{:.9},{:.3},{:.3},{:.6},{:.6},{:.6}",
            t,
            state.shaft.theta_rad,
            state.shaft.omega_rad_s,
            telemetry.rpm,
            state.piston.position_m,
            state.piston.velocity_m_s,
            state.chamber_pressure_pa,
            telemetry.gauge_pressure_pa,
            state.piston.net_force_n,
            state.valves.exhaust_lift_m,
            telemetry.dt_s,
        )?;
    }

    if let Some(path) = output {
        eprintln!("Wrote {} records to {}", record.t.len(), path.display());
    }

    Ok(())
}

fn cmd_geometry(config_path: Option<&Path>) -> AppResult<()> {
    let config = load_config(config_path)?;
    let engine = config.build()?;

    let r = engine.crank.crank_radius.value;
    let l = engine.crank.rod_length.value;

    println!(
        "piston area:        {:.6} m²",
        engine.cylinder.piston_area().value
    );
    println!(
        "reference volume:   {:.6e} m³",
        engine.cylinder.reference_volume_m3()
    );
    println!("rod ratio:          {:.4}", engine.crank.rod_ratio());
    println!("stroke top:         {:.5} m (θ = -π/2, position L + r)", l + r);
    println!("stroke bottom:      {:.5} m (θ = +π/2, position L - r)", l - r);
    println!(
        "seated exhaust gap: {:.6e} m²",
        engine.head.exhaust_flow_area_m2(0.0)
    );
    println!(
        "rpm at 100 rad/s:   {:.1}",
        rpm_from_rad_s(100.0)
    );

    Ok(())
}
