use bevy::math::{DVec2, IVec2};

use crate::error::BodyError;

/// Index of a body inside its [`crate::field::GravityField`].
///
/// Bodies are never removed, so an id stays valid for the field's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// A point mass.
///
/// `position` is the authoritative, continuous coordinate. `pixel_position`
/// is only its truncated projection onto the screen grid and is refreshed by
/// [`Body::render_position`].
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    position: DVec2,
    velocity: DVec2,
    mass: f64,
    immobile: bool,
    pixel_position: IVec2,
}

impl Body {
    /// Create a mobile body.
    pub fn new(position: DVec2, velocity: DVec2, mass: f64) -> Result<Self, BodyError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(BodyError::InvalidMass(mass));
        }
        if !position.is_finite() {
            return Err(BodyError::NonFinite { field: "position" });
        }
        if !velocity.is_finite() {
            return Err(BodyError::NonFinite { field: "velocity" });
        }

        Ok(Self {
            position,
            velocity,
            mass,
            immobile: false,
            pixel_position: truncate(position),
        })
    }

    /// Create a body that attracts others but never moves.
    pub fn new_immobile(position: DVec2, velocity: DVec2, mass: f64) -> Result<Self, BodyError> {
        Self::new(position, velocity, mass).map(|body| body.with_immobile(true))
    }

    pub fn with_immobile(mut self, immobile: bool) -> Self {
        self.immobile = immobile;
        self
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn is_immobile(&self) -> bool {
        self.immobile
    }

    /// Pixel coordinate as of the last [`Body::render_position`] call.
    pub fn pixel_position(&self) -> IVec2 {
        self.pixel_position
    }

    /// Overwrite the velocity with the result of a force pass.
    pub(crate) fn set_velocity(&mut self, velocity: DVec2) {
        self.velocity = velocity;
    }

    /// Advance the position by one tick of velocity.
    ///
    /// Immobile bodies keep their position; whatever velocity the force pass
    /// gave them is never consumed.
    pub fn integrate(&mut self) {
        if self.immobile {
            return;
        }
        self.position += self.velocity;
    }

    /// Recompute and return the pixel position.
    pub fn render_position(&mut self) -> IVec2 {
        self.pixel_position = truncate(self.position);
        self.pixel_position
    }
}

/// Componentwise truncation toward zero.
fn truncate(position: DVec2) -> IVec2 {
    IVec2::new(position.x as i32, position.y as i32)
}
