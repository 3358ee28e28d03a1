pub mod backend;
pub mod controller;
pub mod error;
pub mod state;

pub use backend::{MediaBackend, MediaEvent};
pub use controller::PlaybackController;
pub use error::PlaybackError;
pub use state::{PlaybackPhase, PlaybackState};
