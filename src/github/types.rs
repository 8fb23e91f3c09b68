//! Response shapes for the handful of GitHub endpoints we read.
//!
//! Every field defaults so a partial or error payload decodes to zero values.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Default, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewerData<T> {
    pub viewer: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewViewer {
    pub name: Option<String>,
    #[serde(default)]
    pub repositories: RepoConnection,
    #[serde(default)]
    pub repositories_contributed_to: RepoConnection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoConnection {
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<RepoNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoNode {
    pub name_with_owner: String,
    #[serde(default)]
    pub stargazers: TotalCount,
    #[serde(default)]
    pub fork_count: u64,
    #[serde(default)]
    pub languages: LanguageConnection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    #[serde(default)]
    pub total_count: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageConnection {
    #[serde(default)]
    pub edges: Vec<LanguageEdge>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageEdge {
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub node: LanguageNode,
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageNode {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearsViewer {
    #[serde(default)]
    pub contributions_collection: ContributionYears,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionYears {
    #[serde(default)]
    pub contribution_years: Vec<i32>,
}

/// Keyed by the `yearNNNN` aliases of the all-years query.
pub type ContribsViewer = HashMap<String, YearContributions>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearContributions {
    #[serde(default)]
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    #[serde(default)]
    pub total_contributions: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContributorStats {
    pub author: Option<Author>,
    #[serde(default)]
    pub weeks: Vec<WeekStats>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub login: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct WeekStats {
    #[serde(default)]
    pub a: u64,
    #[serde(default)]
    pub d: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrafficViews {
    #[serde(default)]
    pub views: Vec<ViewCount>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewCount {
    #[serde(default)]
    pub count: u64,
}
