use crate::cli::CommonArgs;
use crate::model::StatsSnapshot;
use crate::provider::{self, StatsProvider};
use crate::util::group_thousands;
use anyhow::Context;
use console::style;

pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    // Keep stdout clean when it carries JSON.
    let provider = provider::from_config(common.snapshot.as_deref(), common.github.to_config(), !json)
        .context("Failed to set up statistics provider")?;
    let stats = provider
        .snapshot()
        .context("Failed to collect statistics")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        output_summary(&stats);
    }
    Ok(())
}

pub fn summary_lines(stats: &StatsSnapshot) -> Vec<(&'static str, String)> {
    let (added, deleted) = stats.lines_changed;
    vec![
        ("Name", stats.name.clone()),
        ("Stargazers", group_thousands(stats.stargazers)),
        ("Forks", group_thousands(stats.forks)),
        ("All-time contributions", group_thousands(stats.total_contributions)),
        ("Repositories with contributions", stats.repo_count().to_string()),
        ("Lines of code added", group_thousands(added)),
        ("Lines of code deleted", group_thousands(deleted)),
        ("Lines of code changed", group_thousands(stats.lines_changed_total())),
        ("Project page views", group_thousands(stats.views)),
    ]
}

fn output_summary(stats: &StatsSnapshot) {
    println!("{}", style("GitHub Statistics").bold());
    println!("{}", "─".repeat(50));

    for (label, value) in summary_lines(stats) {
        println!("{}: {}", label, style(value).cyan());
    }

    println!("Languages:");
    for (lang, prop) in stats.languages_proportional() {
        println!("  - {}: {}", lang, style(format!("{prop:.4}%")).yellow());
    }
}
