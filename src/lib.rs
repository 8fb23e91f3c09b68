pub mod cli;
pub mod error;
pub mod generate;
pub mod github;
pub mod model;
pub mod output;
pub mod provider;
pub mod render;
pub mod stats;
pub mod template;
pub mod util;

pub use error::{BadgeError, Result};
pub use model::{LanguageStats, StatsSnapshot};
pub use provider::StatsProvider;
