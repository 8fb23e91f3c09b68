use crate::cli::{Badge, CommonArgs};
use crate::model::StatsSnapshot;
use crate::provider::{self, StatsProvider};
use crate::render::{generate_languages, generate_overview, RenderPaths};
use anyhow::{bail, Context};
use console::style;
use std::path::PathBuf;

pub fn exec(common: CommonArgs, only: Option<Badge>) -> anyhow::Result<()> {
    let provider = provider::from_config(common.snapshot.as_deref(), common.github.to_config(), true)
        .context("Failed to set up statistics provider")?;
    let stats = provider
        .snapshot()
        .context("Failed to collect statistics")?;

    let paths = common.render_paths();
    let badges = match only {
        Some(badge) => vec![badge],
        None => vec![Badge::Overview, Badge::Languages],
    };

    let mut failed = 0;
    for badge in badges {
        match render_badge(badge, &stats, &paths) {
            Ok(path) => eprintln!("{} {}", style("Wrote").green().bold(), path.display()),
            Err(e) => {
                failed += 1;
                eprintln!("{} {:#}", style("error:").red().bold(), e);
            }
        }
    }

    if failed > 0 {
        bail!("{failed} badge(s) failed to render");
    }
    Ok(())
}

/// Render and write a single badge.
pub fn render_badge(badge: Badge, stats: &StatsSnapshot, paths: &RenderPaths) -> anyhow::Result<PathBuf> {
    match badge {
        Badge::Overview => generate_overview(stats, paths).context("Failed to render overview badge"),
        Badge::Languages => generate_languages(stats, paths).context("Failed to render languages badge"),
    }
}
