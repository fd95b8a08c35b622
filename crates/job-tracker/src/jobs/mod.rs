//! Hardcoded job board and keyword-based recommendations.

mod catalog;
mod recommend;
pub mod router;

pub use catalog::{JobCatalog, JobListing};
pub use recommend::{JobRecommendation, DEFAULT_RECOMMENDATION_LIMIT};
pub use router::job_router;
