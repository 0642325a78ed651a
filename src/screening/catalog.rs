use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display languages carried by the catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("es") {
            Locale::Es
        } else {
            Locale::En
        }
    }
}

/// English/Spanish text pair for catalog display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub es: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            es: es.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

/// Raised when a catalog cannot back the evaluators. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is missing required entry '{0}'")]
    MissingEntry(&'static str),
    #[error("catalog lists '{0}' more than once")]
    DuplicateEntry(&'static str),
    #[error("catalog entry '{id}' carries {found} parameters")]
    ParameterMismatch {
        id: &'static str,
        found: &'static str,
    },
    #[error("catalog entry '{id}' is invalid: {detail}")]
    InvalidParameters { id: &'static str, detail: String },
    #[error("failed to read catalog file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog file {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tags_resolve_by_primary_subtag() {
        assert_eq!(Locale::from_tag("es-MX"), Locale::Es);
        assert_eq!(Locale::from_tag("ES"), Locale::Es);
        assert_eq!(Locale::from_tag("en_US"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
    }

    #[test]
    fn localized_text_selects_language() {
        let text = LocalizedText::new("Education", "Educación");
        assert_eq!(text.get(Locale::En), "Education");
        assert_eq!(text.get(Locale::Es), "Educación");
    }
}
