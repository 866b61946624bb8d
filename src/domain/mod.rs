pub mod recommendation;
pub mod record;

pub use recommendation::{MatchKind, RecommendationEntry, format_percent};
pub use record::{JobDescriptor, Record};
