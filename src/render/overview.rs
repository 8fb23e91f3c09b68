use super::RenderPaths;
use crate::error::Result;
use crate::model::StatsSnapshot;
use crate::output::OutputDir;
use crate::template::Template;
use crate::util::group_thousands;
use std::path::PathBuf;

pub const OVERVIEW_FILE: &str = "overview.svg";

pub const OVERVIEW_PLACEHOLDERS: [&str; 7] = [
    "name",
    "stars",
    "forks",
    "contributions",
    "lines_changed",
    "views",
    "repos",
];

pub fn render_overview(template: &Template, stats: &StatsSnapshot) -> Result<String> {
    template.require(&OVERVIEW_PLACEHOLDERS)?;

    let stars = group_thousands(stats.stargazers);
    let forks = group_thousands(stats.forks);
    let contributions = group_thousands(stats.total_contributions);
    let lines_changed = group_thousands(stats.lines_changed_total());
    let views = group_thousands(stats.views);
    let repos = group_thousands(stats.repo_count());

    Ok(template.render(&[
        ("name", stats.name.as_str()),
        ("stars", stars.as_str()),
        ("forks", forks.as_str()),
        ("contributions", contributions.as_str()),
        ("lines_changed", lines_changed.as_str()),
        ("views", views.as_str()),
        ("repos", repos.as_str()),
    ]))
}

/// Render the overview badge and write it to the output directory.
pub fn generate_overview(stats: &StatsSnapshot, paths: &RenderPaths) -> Result<PathBuf> {
    let template = Template::load(paths.template(OVERVIEW_FILE))?;
    let output = render_overview(&template, stats)?;
    OutputDir::new(&paths.output).write(OVERVIEW_FILE, &output)
}
