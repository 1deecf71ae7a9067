//! Pairwise gravity over a small set of bodies.
//!
//! Every tick runs in two phases. The force pass reads one snapshot of all
//! positions and produces new velocities; only after it has finished does the
//! integration pass move anything. A body moving mid-pass would make the
//! result depend on iteration order.
//!
//! The model is intentionally not Newtonian:
//!
//! - the scalar acceleration applied to `b` by `a` is `m_a * m_b / d²`, so the
//!   target's own mass does not cancel out;
//! - the direction is split between the axes so that `|x| + |y| == 1`
//!   (an L1 direction) rather than using a unit vector, so diagonal pulls are
//!   weaker in Euclidean terms than axis-aligned ones.
//!
//! Coincident bodies have no defined direction. Such a pair is skipped for
//! the tick instead of feeding a non-finite value into a velocity.

use bevy::log::{debug, trace};
use bevy::math::DVec2;
use bevy::prelude::Resource;
use rayon::prelude::*;

use crate::body::{Body, BodyId};

/// Direction from `b` towards `a` for the offset `delta = a - b`, rescaled so
/// its absolute components sum to one. Signs are kept; a zero component stays
/// zero.
///
/// Returns the direction together with the distance, or `None` when the
/// offset has zero length.
pub fn l1_direction(delta: DVec2) -> Option<(DVec2, f64)> {
    let distance = (delta.x.powi(2) + delta.y.powi(2)).sqrt();
    if distance == 0.0 {
        return None;
    }

    let sine = delta.x / distance;
    let cosine = delta.y / distance;
    let sum = sine.abs() + cosine.abs();

    let direction = DVec2::new(
        (sine.abs() / sum).copysign(sine),
        (cosine.abs() / sum).copysign(cosine),
    );
    Some((direction, distance))
}

/// Velocity change `attractor` imparts on `target` in one tick, or `None`
/// when the two bodies share a position.
pub fn pull(attractor: &Body, target: &Body) -> Option<DVec2> {
    let (direction, distance) = l1_direction(attractor.position() - target.position())?;
    let inverse_square = 1.0 / distance.powi(2);
    let acceleration = attractor.mass() * target.mass() * inverse_square;
    Some(direction * acceleration)
}

#[derive(Resource, Clone, Debug, Default)]
pub struct GravityField {
    bodies: Vec<Body>,
}

impl GravityField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a body and return its id.
    pub fn add(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Bodies paired with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, body)| (BodyId(i), body))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Force pass: update every body's velocity from the pull of every other
    /// body.
    ///
    /// Each target's contributions are summed in attractor insertion order,
    /// so the parallel pass gives the same bits as a sequential double loop.
    /// Immobile targets still accumulate velocity; it is never consumed.
    pub fn apply_gravity(&mut self) {
        let snapshot = &self.bodies;

        let velocities: Vec<DVec2> = snapshot
            .par_iter()
            .enumerate()
            .map(|(target_index, target)| {
                snapshot
                    .iter()
                    .enumerate()
                    .filter(|(attractor_index, _)| *attractor_index != target_index)
                    .fold(target.velocity(), |velocity, (attractor_index, attractor)| {
                        match pull(attractor, target) {
                            Some(delta) => velocity + delta,
                            None => {
                                debug!(
                                    "bodies {} and {} are coincident, skipping pair",
                                    attractor_index, target_index
                                );
                                velocity
                            }
                        }
                    })
            })
            .collect();

        for (body, velocity) in self.bodies.iter_mut().zip(velocities) {
            body.set_velocity(velocity);
        }
    }

    /// Integration pass: move every mobile body and refresh every pixel
    /// position.
    pub fn integrate_all(&mut self) {
        for (i, body) in self.bodies.iter_mut().enumerate() {
            body.integrate();
            let pixel = body.render_position();
            if !body.is_immobile() {
                trace!(
                    "body {}: velocity = {:?}, position = {:?}, pixel = {:?}",
                    i,
                    body.velocity(),
                    body.position(),
                    pixel
                );
            }
        }
    }

    /// One full simulation step.
    pub fn tick(&mut self) {
        self.apply_gravity();
        self.integrate_all();
    }
}

impl FromIterator<Body> for GravityField {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn l1_direction_components_sum_to_one() {
        let offsets = [
            DVec2::new(3.0, 4.0),
            DVec2::new(-3.0, 4.0),
            DVec2::new(-0.001, -250.0),
            DVec2::new(1e6, 7.5),
            DVec2::new(-42.0, 0.0),
        ];
        for offset in offsets {
            let (direction, _) = l1_direction(offset).unwrap();
            let l1 = direction.x.abs() + direction.y.abs();
            assert!((l1 - 1.0).abs() < EPSILON, "{offset:?} gave {direction:?}");
            assert_eq!(direction.x.signum(), offset.x.signum());
            assert_eq!(direction.y.signum(), offset.y.signum());
        }
    }

    #[test]
    fn l1_direction_of_axis_offset_is_whole() {
        let (direction, distance) = l1_direction(DVec2::new(-100.0, 0.0)).unwrap();
        assert_eq!(direction, DVec2::new(-1.0, 0.0));
        assert_eq!(distance, 100.0);
    }

    #[test]
    fn l1_direction_of_diagonal_is_split_evenly() {
        let (direction, _) = l1_direction(DVec2::new(5.0, -5.0)).unwrap();
        assert_eq!(direction, DVec2::new(0.5, -0.5));
    }

    #[test]
    fn l1_direction_rejects_zero_offset() {
        assert!(l1_direction(DVec2::ZERO).is_none());
    }

    #[test]
    fn pull_uses_mass_product_and_inverse_square() {
        let attractor = Body::new(DVec2::new(0.0, 0.0), DVec2::ZERO, 2.0).unwrap();
        let target = Body::new(DVec2::new(3.0, 4.0), DVec2::ZERO, 5.0).unwrap();

        // distance 5, acceleration 2 * 5 / 25, direction (-3/7, -4/7)
        let delta = pull(&attractor, &target).unwrap();
        assert!((delta.x - (-3.0 / 7.0 * 0.4)).abs() < EPSILON);
        assert!((delta.y - (-4.0 / 7.0 * 0.4)).abs() < EPSILON);
    }

    #[test]
    fn force_pass_leaves_positions_alone() {
        let mut field: GravityField = [
            Body::new(DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0), 1.0).unwrap(),
            Body::new(DVec2::new(10.0, 0.0), DVec2::ZERO, 1.0).unwrap(),
        ]
        .into_iter()
        .collect();

        field.apply_gravity();

        assert_eq!(field.bodies()[0].position(), DVec2::new(0.0, 0.0));
        assert_eq!(field.bodies()[1].position(), DVec2::new(10.0, 0.0));
        assert!(field.bodies()[1].velocity().x < 0.0);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut field = GravityField::new();
        let a = field.add(Body::new(DVec2::ZERO, DVec2::ZERO, 1.0).unwrap());
        let b = field.add(Body::new(DVec2::ONE, DVec2::ZERO, 2.0).unwrap());

        assert_eq!(a, BodyId(0));
        assert_eq!(b, BodyId(1));
        assert_eq!(field.body(b).map(Body::mass), Some(2.0));
        assert!(field.body(BodyId(2)).is_none());
        assert_eq!(field.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![a, b]);
    }
}
