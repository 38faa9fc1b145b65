//! Engine configuration schema (YAML).
//!
//! Defaults reproduce the stock engine: 84 mm bore, 90 mm stroke, 45 mm
//! crank throw, 144.35 mm rod, 0.09 kg·m² flywheel, chamber pre-charged to
//! 3 MPa.

use std::path::Path;

use cs_physics::{CrankSlider, CylinderGeometry, Head, PhysicsError, ValveGeometry};
use cs_sim::shaft::DEFAULT_DAMPING_RATE_PER_S;
use cs_sim::{ControlMap, Engine, EngineState, Shaft};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub crank: CrankConfig,
    #[serde(default)]
    pub cylinder: CylinderConfig,
    #[serde(default)]
    pub head: HeadConfig,
    #[serde(default)]
    pub shaft: ShaftConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrankConfig {
    pub radius_m: f64,
    pub rod_length_m: f64,
}

impl Default for CrankConfig {
    fn default() -> Self {
        Self {
            radius_m: 0.045,
            rod_length_m: 0.14435,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CylinderConfig {
    pub bore_m: f64,
    /// Stroke (m); kept consistent with twice the crank radius by convention,
    /// not enforced.
    pub stroke_m: f64,
    pub ambient_pressure_pa: f64,
    /// Chamber pressure at t = 0 (Pa)
    pub initial_chamber_pressure_pa: f64,
}

impl Default for CylinderConfig {
    fn default() -> Self {
        Self {
            bore_m: 0.084,
            stroke_m: 0.09,
            ambient_pressure_pa: 101_325.0,
            initial_chamber_pressure_pa: 3_000_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValveConfig {
    pub valve_radius_m: f64,
    pub seat_radius_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeadConfig {
    pub intake: ValveConfig,
    pub exhaust: ValveConfig,
    pub volume_m3: f64,
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            intake: ValveConfig {
                valve_radius_m: 0.0165,
                seat_radius_m: 0.015,
            },
            exhaust: ValveConfig {
                valve_radius_m: 0.0145,
                seat_radius_m: 0.0135,
            },
            volume_m3: 0.00084,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShaftConfig {
    pub inertia_kg_m2: f64,
    pub damping_rate_per_s: f64,
    pub static_friction_mu: f64,
}

impl Default for ShaftConfig {
    fn default() -> Self {
        Self {
            inertia_kg_m2: 0.09,
            damping_rate_per_s: DEFAULT_DAMPING_RATE_PER_S,
            static_friction_mu: 0.01,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    pub torque_magnitude_n_m: f64,
    pub valve_lift_m: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            torque_magnitude_n_m: 100.0,
            valve_lift_m: 0.01,
        }
    }
}

impl EngineConfig {
    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Build the engine, surfacing geometry errors before any simulation.
    pub fn build(&self) -> AppResult<Engine> {
        use cs_core::units::{m, m3, pa};

        let crank = CrankSlider::new(m(self.crank.radius_m), m(self.crank.rod_length_m))
            .map_err(physics_config_err)?;
        let cylinder = CylinderGeometry::new(
            m(self.cylinder.bore_m),
            m(self.cylinder.stroke_m),
            pa(self.cylinder.ambient_pressure_pa),
        )
        .map_err(physics_config_err)?;
        let head = Head::new(
            ValveGeometry::new(m(self.head.intake.valve_radius_m), m(self.head.intake.seat_radius_m))
                .map_err(physics_config_err)?,
            ValveGeometry::new(
                m(self.head.exhaust.valve_radius_m),
                m(self.head.exhaust.seat_radius_m),
            )
            .map_err(physics_config_err)?,
            m3(self.head.volume_m3),
        );
        let mut shaft = Shaft::new(self.shaft.inertia_kg_m2, self.shaft.damping_rate_per_s)?;
        shaft.static_friction_mu = self.shaft.static_friction_mu;

        Ok(Engine {
            crank,
            cylinder,
            head,
            shaft,
        })
    }

    /// Initial state with the configured chamber pre-charge.
    pub fn initial_state(&self, engine: &Engine) -> EngineState {
        engine.initial_state_with_pressure(cs_core::units::pa(
            self.cylinder.initial_chamber_pressure_pa,
        ))
    }

    /// Control scaling for direction commands.
    pub fn control_map(&self) -> ControlMap {
        ControlMap {
            torque_magnitude_n_m: self.controls.torque_magnitude_n_m,
            valve_lift_m: self.controls.valve_lift_m,
        }
    }
}

fn physics_config_err(e: PhysicsError) -> AppError {
    AppError::Config(e.to_string())
}
