pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::ai_router;
pub use types::{AnimalDirectory, AnimalProfile, ApiContext, InMemoryAnimalDirectory};
