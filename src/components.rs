use bevy::prelude::*;

use crate::body::BodyId;

/// Links a drawable entity to the body it shows.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodyIndex(pub BodyId);

/// Marks drawables of bodies that never move.
#[derive(Component)]
pub struct Anchored;
