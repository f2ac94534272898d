pub mod error;
pub mod slug;
pub mod types;

pub use error::UsageError;
pub use slug::slugify;
pub use types::{ImdbId, LookupRequest, Slug};
