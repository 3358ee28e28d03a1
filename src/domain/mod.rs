pub mod clip;
pub mod playback;
pub mod session;
pub mod synthesis;
pub mod voice;
