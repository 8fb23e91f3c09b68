pub mod client;
pub mod queries;
pub mod stats;
pub mod types;

pub use client::{GitHubClient, RestResponse};
pub use stats::{GitHubConfig, GitHubStats, RepoSummary, DEFAULT_API_URL};
