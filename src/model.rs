use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Color used for a language GitHub assigns no color to.
pub const FALLBACK_COLOR: &str = "#000000";

/// One render pass worth of account statistics.
///
/// Built once per run by a [`StatsProvider`](crate::provider::StatsProvider)
/// and only ever read by the renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub name: String,
    pub stargazers: u64,
    pub forks: u64,
    pub total_contributions: u64,
    /// Additions and deletions, in that order.
    pub lines_changed: (u64, u64),
    pub views: u64,
    pub repos: Vec<String>,
    pub languages: BTreeMap<String, LanguageStats>,
}

impl StatsSnapshot {
    /// Widened so two maximal counts still add up exactly.
    pub fn lines_changed_total(&self) -> u128 {
        self.lines_changed.0 as u128 + self.lines_changed.1 as u128
    }

    pub fn repo_count(&self) -> u64 {
        self.repos.len() as u64
    }

    pub fn languages_proportional(&self) -> BTreeMap<&str, f64> {
        self.languages
            .iter()
            .map(|(name, stats)| (name.as_str(), stats.prop()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStats {
    /// Bytes of code across all counted repositories.
    pub size: u64,
    #[serde(default)]
    pub color: Option<String>,
    /// Percentage share of the total size.
    #[serde(default)]
    pub prop: Option<f64>,
    #[serde(default)]
    pub occurrences: u32,
}

impl LanguageStats {
    pub fn new(size: u64, color: Option<String>) -> Self {
        Self {
            size,
            color,
            prop: None,
            occurrences: 1,
        }
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(FALLBACK_COLOR)
    }

    pub fn prop(&self) -> f64 {
        self.prop.unwrap_or(0.0)
    }
}
