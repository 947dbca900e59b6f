//! User-facing advice derived from an evaluation.

mod builder;
mod recommendation;

pub use builder::{Recommendations, build_recommendations};
pub use recommendation::{Recommendation, RecommendationCategory};
