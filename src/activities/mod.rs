//! Activity classification for plan days.

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{classify, classify_with_source, MatchSource};
pub use rules::{Rule, Tier};
pub use types::{ActivityClassification, ActivityLine, ActivityType};
