use crate::github::{GitHubConfig, DEFAULT_API_URL};
use crate::render::RenderPaths;
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statbadge")]
#[command(about = "Render GitHub statistics into overview and languages SVG badges")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Directory holding overview.svg and languages.svg templates", default_value = "templates")]
    pub templates: PathBuf,

    #[arg(long, help = "Directory rendered badges are written to", default_value = "generated")]
    pub output: PathBuf,

    #[arg(long, global = true, help = "Read statistics from a saved JSON snapshot instead of GitHub")]
    pub snapshot: Option<PathBuf>,

    #[clap(flatten)]
    pub github: GitHubArgs,
}

#[derive(Args, Clone)]
pub struct GitHubArgs {
    #[arg(long, env = "GITHUB_ACTOR", help = "GitHub login whose statistics are collected")]
    pub actor: Option<String>,

    #[arg(long, env = "ACCESS_TOKEN", hide_env_values = true, help = "GitHub personal access token")]
    pub token: Option<String>,

    #[arg(long = "exclude-repo", value_name = "OWNER/NAME", help = "Leave a repository out of language totals (repeatable)")]
    pub exclude_repos: Vec<String>,

    #[arg(long, help = "GitHub API base URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the badges into the output directory
    Generate {
        #[arg(long, value_enum, help = "Render only one badge")]
        only: Option<Badge>,
    },
    /// Print the collected statistics
    Stats {
        #[arg(long, help = "Output the snapshot as JSON")]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Badge {
    Overview,
    Languages,
}

impl CommonArgs {
    pub fn render_paths(&self) -> RenderPaths {
        RenderPaths::new(&self.templates, &self.output)
    }
}

impl GitHubArgs {
    pub fn to_config(&self) -> GitHubConfig {
        GitHubConfig::new(
            self.actor.clone().unwrap_or_default(),
            self.token.clone().unwrap_or_default(),
        )
        .with_api_url(self.api_url.clone())
        .with_excluded(self.exclude_repos.iter().cloned())
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate { only } => crate::generate::exec(self.common, only),
            Commands::Stats { json } => crate::stats::exec(self.common, json),
        }
    }
}
