pub mod config;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryBackend;

pub use config::BackendConfig;
pub use models::{
    CombinationKey, CombinationRecord, DisplayGroup, Document, RouteParams, SignEntry,
    UserProfile, UserType,
};
pub use repo::{BackendError, DocumentStore, IdentityService, Session};
