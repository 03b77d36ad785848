//! Site metadata loaded from `content/site.toml`.
//!
//! Runtime knobs (port, log filter, development mode) stay in environment
//! variables; this file only describes the site itself: who it belongs to
//! and where the outbound links point.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ContentError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct SiteMeta {
    /// Site title, shown in the layout and the banner.
    pub title: String,

    /// Author display name.
    pub author: String,

    /// One-line tagline under the banner.
    #[serde(default)]
    pub tagline: String,

    /// Outbound profile and asset links. All plain hyperlinks.
    #[serde(default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    /// Source-control host profile.
    #[serde(default)]
    pub github: Option<String>,

    /// Professional network profile.
    #[serde(default)]
    pub linkedin: Option<String>,

    /// Contact address, rendered as a mailto: link.
    #[serde(default)]
    pub email: Option<String>,

    /// Path to the resume PDF under /static.
    #[serde(default)]
    pub resume: Option<String>,
}

impl SiteMeta {
    pub fn parse(raw: &str, path: &Path) -> Result<Self> {
        let meta: SiteMeta =
            toml::from_str(raw).map_err(|e| ContentError::toml(path, e))?;
        meta.validate()?;
        Ok(meta)
    }

    fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(ContentError::site_meta("title cannot be empty"));
        }
        if self.author.is_empty() {
            return Err(ContentError::site_meta("author cannot be empty"));
        }
        Ok(())
    }

    pub fn mailto(&self) -> Option<String> {
        self.links.email.as_ref().map(|addr| format!("mailto:{addr}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_metadata() {
        let raw = r#"
title = "Shubham Kumar Bind"
author = "Shubham Kumar Bind"
tagline = "Android developer"

[links]
github = "https://github.com/Versus04"
linkedin = "https://www.linkedin.com/in/shubham-bind-607404248"
email = "shubhambind2004@gmail.com"
resume = "/static/resume.pdf"
"#;
        let meta = SiteMeta::parse(raw, Path::new("site.toml")).expect("parse");
        assert_eq!(meta.author, "Shubham Kumar Bind");
        assert_eq!(meta.links.resume.as_deref(), Some("/static/resume.pdf"));
        assert_eq!(
            meta.mailto().as_deref(),
            Some("mailto:shubhambind2004@gmail.com")
        );
    }

    #[test]
    fn links_are_optional() {
        let raw = r#"
title = "Site"
author = "Someone"
"#;
        let meta = SiteMeta::parse(raw, Path::new("site.toml")).expect("parse");
        assert!(meta.links.github.is_none());
        assert!(meta.mailto().is_none());
    }

    #[test]
    fn empty_title_is_rejected() {
        let raw = r#"
title = ""
author = "Someone"
"#;
        let err = SiteMeta::parse(raw, Path::new("site.toml")).unwrap_err();
        assert!(err.to_string().contains("title cannot be empty"));
    }
}
