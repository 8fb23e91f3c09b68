use super::RenderPaths;
use crate::error::Result;
use crate::model::{LanguageStats, StatsSnapshot};
use crate::output::OutputDir;
use crate::template::Template;
use std::fmt::Write;
use std::path::PathBuf;

pub const LANGUAGES_FILE: &str = "languages.svg";

pub const LANGUAGES_PLACEHOLDERS: [&str; 2] = ["progress", "lang_list"];

const DELAY_BETWEEN_MS: usize = 150;

/// Languages by descending size, ties broken by ascending name.
pub fn sorted_languages(stats: &StatsSnapshot) -> Vec<(&str, &LanguageStats)> {
    let mut langs: Vec<_> = stats
        .languages
        .iter()
        .map(|(name, data)| (name.as_str(), data))
        .collect();
    langs.sort_by(|a, b| b.1.size.cmp(&a.1.size).then_with(|| a.0.cmp(b.0)));
    langs
}

/// One bar segment per language, concatenated with no separator.
pub fn progress_fragment(langs: &[(&str, &LanguageStats)]) -> String {
    let mut progress = String::new();
    for (_, data) in langs {
        let _ = write!(
            progress,
            r#"<span style="background-color: {};width: {:.3}%;" class="progress-item"></span>"#,
            data.color(),
            data.prop()
        );
    }
    progress
}

/// One list row per language, revealed with a staggered animation delay.
pub fn lang_list_fragment(langs: &[(&str, &LanguageStats)]) -> String {
    let mut lang_list = String::new();
    for (i, (lang, data)) in langs.iter().enumerate() {
        let _ = write!(
            lang_list,
            concat!(
                "\n<li style=\"animation-delay: {delay}ms;\">\n",
                "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"octicon\" style=\"fill:{color};\" \n",
                "viewBox=\"0 0 16 16\" version=\"1.1\" width=\"16\" height=\"16\"><path \n",
                "fill-rule=\"evenodd\" d=\"M8 4a4 4 0 100 8 4 4 0 000-8z\"></path></svg>\n",
                "<span class=\"lang\">{lang}</span>\n",
                "<span class=\"percent\">{prop:.2}%</span>\n",
                "</li>\n\n",
            ),
            delay = i * DELAY_BETWEEN_MS,
            color = data.color(),
            lang = lang,
            prop = data.prop(),
        );
    }
    lang_list
}

pub fn render_languages(template: &Template, stats: &StatsSnapshot) -> Result<String> {
    template.require(&LANGUAGES_PLACEHOLDERS)?;

    let langs = sorted_languages(stats);
    let progress = progress_fragment(&langs);
    let lang_list = lang_list_fragment(&langs);

    Ok(template.render(&[
        ("progress", progress.as_str()),
        ("lang_list", lang_list.as_str()),
    ]))
}

/// Render the languages badge and write it to the output directory.
pub fn generate_languages(stats: &StatsSnapshot, paths: &RenderPaths) -> Result<PathBuf> {
    let template = Template::load(paths.template(LANGUAGES_FILE))?;
    let output = render_languages(&template, stats)?;
    OutputDir::new(&paths.output).write(LANGUAGES_FILE, &output)
}
