//! Initial body sets.
//!
//! Coordinates are screen pixels: origin at the top-left corner of the
//! playing field, y growing downwards.

use bevy::math::DVec2;
use rand::prelude::*;

use crate::body::Body;
use crate::config::{ScenarioKind, Settings, FIELD_HEIGHT, FIELD_WIDTH};
use crate::error::BodyError;
use crate::field::GravityField;

/// Three light planets swinging around a heavy immobile one.
pub fn planetary() -> Result<GravityField, BodyError> {
    let bodies = [
        Body::new(DVec2::new(500.0, 250.0), DVec2::new(0.4, -0.4), 1.0)?,
        Body::new_immobile(DVec2::new(600.0, 350.0), DVec2::ZERO, 155.0)?,
        Body::new(DVec2::new(700.0, 450.0), DVec2::new(-0.4, 0.4), 1.0)?,
        Body::new(DVec2::new(550.0, 300.0), DVec2::new(0.2, -0.2), 0.1)?,
    ];
    Ok(bodies.into_iter().collect())
}

/// Four bodies of equal `mass` at rest on the corners of a square of side
/// `side`, centered on `center`.
pub fn square(center: DVec2, side: f64, mass: f64) -> Result<GravityField, BodyError> {
    let half = side / 2.0;
    let corners = [
        DVec2::new(-half, -half),
        DVec2::new(half, -half),
        DVec2::new(-half, half),
        DVec2::new(half, half),
    ];

    corners
        .into_iter()
        .map(|corner| Body::new(center + corner, DVec2::ZERO, mass))
        .collect()
}

/// `count` light bodies at rest, scattered over the middle of the field.
pub fn random_cluster<R: Rng>(rng: &mut R, count: usize) -> Result<GravityField, BodyError> {
    let margin = 100.0;
    let mut field = GravityField::new();

    for _ in 0..count {
        let mass = rng.gen_range(0.1..=2.0);
        let position = DVec2::new(
            rng.gen_range(margin..=FIELD_WIDTH as f64 - margin),
            rng.gen_range(margin..=FIELD_HEIGHT as f64 - margin),
        );
        field.add(Body::new(position, DVec2::ZERO, mass)?);
    }

    Ok(field)
}

/// Same as [`random_cluster`] but reproducible from `seed`.
pub fn seeded_cluster(seed: u64, count: usize) -> Result<GravityField, BodyError> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_cluster(&mut rng, count)
}

/// Build the field selected on the command line.
pub fn from_settings(settings: &Settings) -> Result<GravityField, BodyError> {
    match settings.scenario {
        ScenarioKind::Planetary => planetary(),
        ScenarioKind::Square => square(field_center(), 200.0, 10.0),
        ScenarioKind::Random => seeded_cluster(settings.seed, settings.bodies),
    }
}

fn field_center() -> DVec2 {
    DVec2::new(FIELD_WIDTH as f64 / 2.0, FIELD_HEIGHT as f64 / 2.0)
}
