use super::client::{GitHubClient, RestResponse};
use super::queries;
use super::types::{
    ContribsViewer, ContributorStats, OverviewViewer, RepoNode, TrafficViews, ViewerData,
    YearsViewer,
};
use crate::error::{BadgeError, Result};
use crate::model::{LanguageStats, StatsSnapshot};
use crate::provider::StatsProvider;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Everything needed to talk to GitHub on behalf of one account.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub actor: String,
    pub token: String,
    pub api_url: String,
    pub exclude_repos: HashSet<String>,
}

impl GitHubConfig {
    pub fn new(actor: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            exclude_repos: HashSet::new(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_excluded<I: IntoIterator<Item = String>>(mut self, repos: I) -> Self {
        self.exclude_repos.extend(repos);
        self
    }
}

/// Repository-level totals gathered from the paged overview query.
#[derive(Debug, Default)]
pub struct RepoSummary {
    pub name: Option<String>,
    pub stargazers: u64,
    pub forks: u64,
    pub repos: Vec<String>,
    pub languages: BTreeMap<String, LanguageStats>,
    seen: HashSet<String>,
}

impl RepoSummary {
    /// Fold one page of repositories in. Repos already seen are skipped.
    pub fn add_page(&mut self, nodes: Vec<RepoNode>, exclude: &HashSet<String>) {
        for repo in nodes {
            if !self.seen.insert(repo.name_with_owner.clone()) {
                continue;
            }
            self.stargazers += repo.stargazers.total_count;
            self.forks += repo.fork_count;

            if !exclude.contains(&repo.name_with_owner) {
                for edge in repo.languages.edges {
                    let lang = edge.node.name.unwrap_or_else(|| "Other".to_string());
                    self.languages
                        .entry(lang)
                        .and_modify(|l| {
                            l.size += edge.size;
                            l.occurrences += 1;
                        })
                        .or_insert_with(|| LanguageStats::new(edge.size, edge.node.color.clone()));
                }
            }
            self.repos.push(repo.name_with_owner);
        }
    }

    /// Fill in every language's percentage share of the total size.
    pub fn compute_proportions(&mut self) {
        let total: u64 = self.languages.values().map(|l| l.size).sum();
        for lang in self.languages.values_mut() {
            lang.prop = Some(if total == 0 {
                0.0
            } else {
                100.0 * lang.size as f64 / total as f64
            });
        }
    }
}

pub fn sum_contributions(by_year: &ContribsViewer) -> u64 {
    by_year
        .values()
        .map(|y| y.contribution_calendar.total_contributions)
        .sum()
}

/// Additions and deletions credited to `login` in one repo's contributor stats.
pub fn sum_lines_for(contributors: &[ContributorStats], login: &str) -> (u64, u64) {
    contributors
        .iter()
        .filter(|c| c.author.as_ref().map(|a| a.login.as_str()) == Some(login))
        .flat_map(|c| &c.weeks)
        .fold((0, 0), |(a, d), w| (a + w.a, d + w.d))
}

pub fn sum_views(traffic: &TrafficViews) -> u64 {
    traffic.views.iter().map(|v| v.count).sum()
}

/// Statistics collected live from the GitHub API.
pub struct GitHubStats {
    config: GitHubConfig,
    client: GitHubClient,
    progress: bool,
}

impl GitHubStats {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        if config.actor.is_empty() {
            return Err(BadgeError::Api("no GitHub actor configured".to_string()));
        }
        if config.token.is_empty() {
            return Err(BadgeError::Api("no access token configured".to_string()));
        }
        let client = GitHubClient::new(&config.api_url, &config.token)?;
        Ok(Self {
            config,
            client,
            progress: true,
        })
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn repo_summary(&self, pb: &ProgressBar) -> Result<RepoSummary> {
        let mut summary = RepoSummary::default();
        let mut next_owned: Option<String> = None;
        let mut next_contrib: Option<String> = None;

        loop {
            let query = queries::repos_overview(next_owned.as_deref(), next_contrib.as_deref());
            let data: ViewerData<OverviewViewer> = self.client.graphql(&query)?;
            let viewer = data
                .viewer
                .ok_or_else(|| BadgeError::Api("overview query returned no viewer".to_string()))?;

            summary.name = viewer.name.or(summary.name);
            let owned = viewer.repositories;
            let contrib = viewer.repositories_contributed_to;
            let more = owned.page_info.has_next_page || contrib.page_info.has_next_page;
            let mut advanced = false;
            if owned.page_info.end_cursor.is_some() && owned.page_info.end_cursor != next_owned {
                next_owned = owned.page_info.end_cursor;
                advanced = true;
            }
            if contrib.page_info.end_cursor.is_some() && contrib.page_info.end_cursor != next_contrib {
                next_contrib = contrib.page_info.end_cursor;
                advanced = true;
            }

            summary.add_page(contrib.nodes, &self.config.exclude_repos);
            summary.add_page(owned.nodes, &self.config.exclude_repos);
            pb.set_message(format!("Listed {} repositories...", summary.repos.len()));

            // A next page without a new cursor would repeat this request.
            if !more || !advanced {
                break;
            }
        }

        summary.compute_proportions();
        Ok(summary)
    }

    fn total_contributions(&self) -> Result<u64> {
        let years: ViewerData<YearsViewer> = self.client.graphql(&queries::contrib_years())?;
        let years = years
            .viewer
            .map(|v| v.contributions_collection.contribution_years)
            .unwrap_or_default();
        if years.is_empty() {
            return Ok(0);
        }
        let by_year: ViewerData<ContribsViewer> =
            self.client.graphql(&queries::all_contribs(&years))?;
        Ok(by_year.viewer.as_ref().map(sum_contributions).unwrap_or(0))
    }

    fn lines_changed(&self, repos: &[String], pb: &ProgressBar) -> Result<(u64, u64)> {
        let mut totals = (0, 0);
        for repo in repos {
            pb.set_message(format!("Counting lines changed in {repo}..."));
            let path = format!("repos/{repo}/stats/contributors");
            if let Some(contributors) = self.rest_or_warn::<Vec<ContributorStats>>(&path, pb)? {
                let (a, d) = sum_lines_for(&contributors, &self.config.actor);
                totals.0 += a;
                totals.1 += d;
            }
        }
        Ok(totals)
    }

    fn views(&self, repos: &[String], pb: &ProgressBar) -> Result<u64> {
        let mut total = 0;
        for repo in repos {
            pb.set_message(format!("Counting views of {repo}..."));
            let path = format!("repos/{repo}/traffic/views");
            if let Some(traffic) = self.rest_or_warn::<TrafficViews>(&path, pb)? {
                total += sum_views(&traffic);
            }
        }
        Ok(total)
    }

    /// Unanswered requests count as zero; they are reported but never retried.
    fn rest_or_warn<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        pb: &ProgressBar,
    ) -> Result<Option<T>> {
        match self.client.rest(path)? {
            RestResponse::Ok(body) => Ok(Some(body)),
            RestResponse::Pending => {
                pb.suspend(|| {
                    eprintln!(
                        "{} {} is still being computed by GitHub, counting it as zero",
                        style("warning:").yellow().bold(),
                        path
                    )
                });
                Ok(None)
            }
            RestResponse::Failed(status) => {
                pb.suspend(|| {
                    eprintln!(
                        "{} {} returned {}, counting it as zero",
                        style("warning:").yellow().bold(),
                        path,
                        status
                    )
                });
                Ok(None)
            }
        }
    }
}

impl StatsProvider for GitHubStats {
    fn snapshot(&self) -> Result<StatsSnapshot> {
        let pb = if self.progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Collecting statistics for {}...", self.config.actor));

        let summary = self.repo_summary(&pb)?;
        pb.set_message("Counting contributions...");
        let total_contributions = self.total_contributions()?;
        let lines_changed = self.lines_changed(&summary.repos, &pb)?;
        let views = self.views(&summary.repos, &pb)?;

        pb.finish_and_clear();

        Ok(StatsSnapshot {
            name: summary.name.unwrap_or_else(|| "No Name".to_string()),
            stargazers: summary.stargazers,
            forks: summary.forks,
            total_contributions,
            lines_changed,
            views,
            repos: summary.repos,
            languages: summary.languages,
        })
    }
}
