pub mod body;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod form;
pub mod presenter;
pub mod status;
pub mod view;

pub use body::{Body, BodyId};
pub use clock::StepClock;
pub use config::{AreaConfig, CollisionModel, EngineConfig};
pub use engine::{Engine, Mode};
pub use error::{ConfigError, ValidationError};
pub use events::{Event, RemovalReason};
pub use form::BodyForm;
pub use presenter::Presenter;
pub use status::{StatusEntry, StatusLog};
pub use view::TileView;

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
