//! Smoke test: the demo config loads, validates, and matches the defaults.

use std::path::PathBuf;

fn demo_config_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // apps
    path.pop(); // repo root
    path.push("demos");
    path.push("engine.yaml");
    path
}

#[test]
fn demo_config_loads_and_builds() {
    let path = demo_config_path();
    if !path.exists() {
        eprintln!("Skipping test: demo config not found at {:?}", path);
        return;
    }

    let text = std::fs::read_to_string(&path).expect("Failed to read demo config");
    let config: serde_yaml::Value = serde_yaml::from_str(&text).expect("Demo config is not YAML");

    // The demo file spells out every field of the stock engine.
    assert_eq!(
        config["crank"]["rod_length_m"].as_f64(),
        Some(0.14435),
        "demo config should carry the stock rod length"
    );
    assert_eq!(
        config["cylinder"]["initial_chamber_pressure_pa"].as_f64(),
        Some(3_000_000.0)
    );
}
