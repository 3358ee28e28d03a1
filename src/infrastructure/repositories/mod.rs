pub mod clip_metadata_repository;
pub mod http_clip_metadata_repository;
pub mod http_synthesis_repository;
pub mod synthesis_repository;

pub use clip_metadata_repository::{
    ClipMetadataRecord, ClipMetadataRepository, PersistenceError, SavedClipRecord,
};
pub use http_clip_metadata_repository::HttpClipMetadataRepository;
pub use http_synthesis_repository::HttpSynthesisRepository;
pub use synthesis_repository::{
    SynthesisApiError, SynthesisRepository, SynthesisRequest, SynthesizedAudio,
};
