use bevy::prelude::Resource;
use clap::{Parser, ValueEnum};

/// Playing field size in pixels.
pub const FIELD_WIDTH: u32 = 1200;
pub const FIELD_HEIGHT: u32 = 700;

pub const WINDOW_TITLE: &str = "Gravitation version 0.3";

pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

/// Radius of the circle drawn for every body, in pixels.
pub const BODY_RADIUS: f32 = 15.0;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScenarioKind {
    /// Three planets around an immobile sun
    #[default]
    Planetary,
    /// Four equal bodies on the corners of a square
    Square,
    /// A seeded cloud of light bodies
    Random,
}

/// Command-line settings, kept around as a resource for the viewer.
#[derive(Parser, Resource, Clone, Debug)]
#[command(name = "gravitation", about = "Pairwise gravity between a handful of bodies")]
pub struct Settings {
    #[arg(long, value_enum, default_value_t = ScenarioKind::Planetary)]
    pub scenario: ScenarioKind,

    /// Number of bodies in the random scenario
    #[arg(long, default_value_t = 12)]
    pub bodies: usize,

    /// Seed for the random scenario
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Simulation ticks per second
    #[arg(long, default_value_t = DEFAULT_TICKS_PER_SECOND, value_parser = clap::value_parser!(u32).range(1..))]
    pub ticks_per_second: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scenario: ScenarioKind::default(),
            bodies: 12,
            seed: 42,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }
}

impl Settings {
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.ticks_per_second as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parsed_defaults() {
        let parsed = Settings::parse_from(["gravitation"]);
        let defaults = Settings::default();
        assert_eq!(parsed.scenario, defaults.scenario);
        assert_eq!(parsed.bodies, defaults.bodies);
        assert_eq!(parsed.seed, defaults.seed);
        assert_eq!(parsed.ticks_per_second, defaults.ticks_per_second);
    }

    #[test]
    fn parses_random_scenario() {
        let parsed = Settings::parse_from([
            "gravitation",
            "--scenario",
            "random",
            "--bodies",
            "30",
            "--seed",
            "7",
        ]);
        assert_eq!(parsed.scenario, ScenarioKind::Random);
        assert_eq!(parsed.bodies, 30);
        assert_eq!(parsed.seed, 7);
    }

    #[test]
    fn rejects_zero_tick_rate() {
        assert!(Settings::try_parse_from(["gravitation", "--ticks-per-second", "0"]).is_err());
    }
}
