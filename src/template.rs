use crate::error::{BadgeError, Result};
use std::path::Path;

/// SVG template text with `{{ identifier }}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    text: String,
}

impl Template {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read the template from disk. Nothing is cached between calls.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BadgeError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, text })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn contains(&self, placeholder: &str) -> bool {
        self.text.contains(&marker(placeholder))
    }

    /// Fail on the first placeholder in `names` the text does not contain.
    pub fn require(&self, names: &[&str]) -> Result<()> {
        match names.iter().find(|name| !self.contains(name)) {
            Some(missing) => Err(BadgeError::MissingPlaceholder {
                template: self.name.clone(),
                placeholder: missing.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Fill every `{{ name }}` marker listed in `values` in one left-to-right
    /// pass. Inserted values are never rescanned and unknown markers stay.
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();
        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match values.iter().find(|(name, _)| at_marker(tail, name)) {
                Some((name, value)) => {
                    out.push_str(value);
                    rest = &tail[marker(name).len()..];
                }
                None => {
                    out.push_str(OPEN);
                    rest = &tail[OPEN.len()..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

const OPEN: &str = "{{ ";

fn at_marker(text: &str, name: &str) -> bool {
    text.strip_prefix(OPEN)
        .and_then(|t| t.strip_prefix(name))
        .map_or(false, |t| t.starts_with(" }}"))
}

fn marker(name: &str) -> String {
    format!("{{{{ {name} }}}}")
}
