pub mod handle;
pub mod store;

pub use handle::{LoggingReleaser, ResourceHandle, ResourceReleaser};
pub use store::{ClipStore, GeneratedClip};
