use pretty_assertions::assert_eq;
use statbadge::model::{LanguageStats, StatsSnapshot};
use statbadge::render::{
    generate_languages, generate_overview, lang_list_fragment, progress_fragment, render_languages,
    render_overview, sorted_languages, RenderPaths,
};
use statbadge::template::Template;
use statbadge::BadgeError;
use std::collections::BTreeMap;
use std::path::Path;
use tempfile::tempdir;

fn templates_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

fn lang(size: u64, color: Option<&str>, prop: Option<f64>) -> LanguageStats {
    LanguageStats {
        size,
        color: color.map(str::to_string),
        prop,
        occurrences: 1,
    }
}

fn snapshot() -> StatsSnapshot {
    let mut languages = BTreeMap::new();
    languages.insert("Go".to_string(), lang(500, Some("#00ADD8"), Some(26.316)));
    languages.insert("Python".to_string(), lang(900, Some("#3572A5"), Some(47.368)));
    languages.insert("Rust".to_string(), lang(500, Some("#dea584"), Some(26.316)));
    StatsSnapshot {
        name: "Ada Lovelace".to_string(),
        stargazers: 1234567,
        forks: 42,
        total_contributions: 9001,
        lines_changed: (1200, 340),
        views: 0,
        repos: vec!["ada/engine".to_string(), "ada/notes".to_string()],
        languages,
    }
}

const OVERVIEW: &str = "{{ name }}|{{ stars }}|{{ forks }}|{{ contributions }}|{{ lines_changed }}|{{ views }}|{{ repos }}";

#[test]
fn overview_formats_every_field() {
    let out = render_overview(&Template::new("overview.svg", OVERVIEW), &snapshot()).unwrap();
    assert_eq!(out, "Ada Lovelace|1,234,567|42|9,001|1,540|0|2");
}

#[test]
fn overview_replaces_repeated_placeholders_and_leaves_other_text() {
    let text = format!("{OVERVIEW} {{{{ name }}}} {{{{ unknown }}}}");
    let out = render_overview(&Template::new("overview.svg", text), &snapshot()).unwrap();
    assert!(out.ends_with(" Ada Lovelace {{ unknown }}"));
}

#[test]
fn overview_inserts_name_verbatim_even_with_marker_text() {
    let snap = StatsSnapshot {
        name: "x {{ stars }} y".to_string(),
        ..snapshot()
    };
    let out = render_overview(&Template::new("overview.svg", OVERVIEW), &snap).unwrap();
    assert_eq!(out, "x {{ stars }} y|1,234,567|42|9,001|1,540|0|2");
}

#[test]
fn overview_lines_changed_sum_does_not_overflow() {
    let snap = StatsSnapshot {
        lines_changed: (u64::MAX, 1),
        ..snapshot()
    };
    let out = render_overview(&Template::new("overview.svg", OVERVIEW), &snap).unwrap();
    assert!(out.contains("|18,446,744,073,709,551,616|"));
}

#[test]
fn overview_missing_placeholder_fails() {
    let err = render_overview(&Template::new("overview.svg", "{{ name }}"), &snapshot()).unwrap_err();
    assert!(matches!(err, BadgeError::MissingPlaceholder { ref placeholder, .. } if placeholder == "stars"));
}

#[test]
fn languages_sorted_by_size_then_name() {
    let snap = snapshot();
    let names: Vec<&str> = sorted_languages(&snap).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["Python", "Go", "Rust"]);
}

#[test]
fn fragments_have_one_entry_per_language() {
    let snap = snapshot();
    let langs = sorted_languages(&snap);
    let progress = progress_fragment(&langs);
    let list = lang_list_fragment(&langs);

    assert_eq!(progress.matches("class=\"progress-item\"").count(), 3);
    assert_eq!(list.matches("<li ").count(), 3);
    assert!(progress.starts_with(
        r#"<span style="background-color: #3572A5;width: 47.368%;" class="progress-item"></span>"#
    ));
    assert!(list.contains(r#"<li style="animation-delay: 0ms;">"#));
    assert!(list.contains(r#"<li style="animation-delay: 150ms;">"#));
    assert!(list.contains(r#"<li style="animation-delay: 300ms;">"#));
    assert!(list.contains("<span class=\"percent\">47.37%</span>"));
}

#[test]
fn list_row_markup_is_exact() {
    let mut languages = BTreeMap::new();
    languages.insert("Rust".to_string(), lang(10, Some("#dea584"), Some(100.0)));
    let snap = StatsSnapshot {
        languages,
        ..Default::default()
    };
    let list = lang_list_fragment(&sorted_languages(&snap));
    let expected = "\n<li style=\"animation-delay: 0ms;\">\n\
<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"octicon\" style=\"fill:#dea584;\" \n\
viewBox=\"0 0 16 16\" version=\"1.1\" width=\"16\" height=\"16\"><path \n\
fill-rule=\"evenodd\" d=\"M8 4a4 4 0 100 8 4 4 0 000-8z\"></path></svg>\n\
<span class=\"lang\">Rust</span>\n\
<span class=\"percent\">100.00%</span>\n\
</li>\n\n";
    assert_eq!(list, expected);
}

#[test]
fn missing_color_and_prop_use_fallbacks() {
    let mut languages = BTreeMap::new();
    languages.insert("Mystery".to_string(), lang(7, None, None));
    let snap = StatsSnapshot {
        languages,
        ..Default::default()
    };
    let langs = sorted_languages(&snap);
    let progress = progress_fragment(&langs);
    let list = lang_list_fragment(&langs);

    assert_eq!(
        progress,
        r#"<span style="background-color: #000000;width: 0.000%;" class="progress-item"></span>"#
    );
    assert!(list.contains("style=\"fill:#000000;\""));
    assert!(list.contains("<span class=\"percent\">0.00%</span>"));
}

#[test]
fn empty_languages_render_empty_fragments() {
    let snap = StatsSnapshot::default();
    let template = Template::new("languages.svg", "<p>{{ progress }}</p><ul>{{ lang_list }}</ul>");
    let out = render_languages(&template, &snap).unwrap();
    assert_eq!(out, "<p></p><ul></ul>");
}

#[test]
fn language_values_are_not_rescanned_for_markers() {
    let mut languages = BTreeMap::new();
    languages.insert("Odd".to_string(), lang(1, Some("{{ lang_list }}"), Some(100.0)));
    let snap = StatsSnapshot {
        languages,
        ..Default::default()
    };
    let template = Template::new("languages.svg", "[{{ progress }}]({{ lang_list }})");
    let out = render_languages(&template, &snap).unwrap();
    assert!(out.starts_with(
        r#"[<span style="background-color: {{ lang_list }};width: 100.000%;" class="progress-item"></span>]("#
    ));
    assert_eq!(out.matches("<li ").count(), 1);
}

#[test]
fn languages_missing_placeholder_fails() {
    let template = Template::new("languages.svg", "{{ progress }}");
    let err = render_languages(&template, &snapshot()).unwrap_err();
    assert!(matches!(err, BadgeError::MissingPlaceholder { ref placeholder, .. } if placeholder == "lang_list"));
}

#[test]
fn bundled_templates_render_without_leftover_placeholders() {
    let out = tempdir().unwrap();
    let paths = RenderPaths::new(templates_dir(), out.path().join("generated"));

    let overview = generate_overview(&snapshot(), &paths).unwrap();
    let languages = generate_languages(&snapshot(), &paths).unwrap();

    for path in [overview, languages] {
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("{{ "), "{} kept a placeholder", path.display());
        assert!(text.starts_with("<svg"));
    }
}

#[test]
fn rendering_twice_overwrites_with_identical_output() {
    let out = tempdir().unwrap();
    let paths = RenderPaths::new(templates_dir(), out.path());

    let first_path = generate_languages(&snapshot(), &paths).unwrap();
    let first = std::fs::read(&first_path).unwrap();
    let second_path = generate_languages(&snapshot(), &paths).unwrap();
    let second = std::fs::read(&second_path).unwrap();

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);
}

#[test]
fn missing_template_is_a_read_error() {
    let out = tempdir().unwrap();
    let paths = RenderPaths::new(out.path().join("nope"), out.path().join("generated"));
    let err = generate_overview(&snapshot(), &paths).unwrap_err();
    assert!(matches!(err, BadgeError::TemplateRead { .. }));
    assert!(!out.path().join("generated").exists());
}
