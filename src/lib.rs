pub mod body;
pub mod components;
pub mod config;
pub mod error;
pub mod field;
pub mod scenario;
pub mod viewer;

pub use body::{Body, BodyId};
pub use config::{ScenarioKind, Settings};
pub use error::BodyError;
pub use field::{l1_direction, pull, GravityField};
