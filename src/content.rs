use std::path::Path;

use chrono::NaiveDate;
use futures::future::try_join_all;
use gray_matter::{engine::YAML, Matter};
use tokio::fs;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::config::SiteMeta;
use crate::error::{ContentError, Result};
use crate::markdown::{reading_time_label, render_markdown_to_html};
use crate::models::{BlogPost, FrontMatter, Project, ProjectsFile, SkillsFile};
use crate::state::AppState;

pub const CONTENT_DIR: &str = "content";

/// HTML shells read once at startup and on hot reload.
#[derive(Debug, Clone)]
pub struct Templates {
    pub layout: String,
    pub banner: String,
    /// Supports a {{slug}} placeholder.
    pub not_found: String,
    /// Rendered from content/home.md.
    pub home: String,
}

pub async fn load_templates(content_dir: &Path) -> Result<Templates> {
    let layout = fs::read_to_string(content_dir.join("layout.html")).await?;
    let banner = fs::read_to_string(content_dir.join("banner.html")).await?;
    let not_found = fs::read_to_string(content_dir.join("not_found.html")).await?;
    let home_md = fs::read_to_string(content_dir.join("home.md")).await?;

    Ok(Templates {
        layout,
        banner,
        not_found,
        home: render_markdown_to_html(&home_md),
    })
}

/// Read the whole content directory into a catalog.
///
/// A post with broken front matter or an unparsable date is skipped with a
/// logged error; a broken record file (projects, skills, site metadata)
/// fails the load, since half a catalog is worse than the previous one.
pub async fn load_catalog(content_dir: &Path) -> Result<Catalog> {
    let site_path = content_dir.join("site.toml");
    let site_raw = fs::read_to_string(&site_path).await?;
    let site = SiteMeta::parse(&site_raw, &site_path)?;

    let mut post_paths = Vec::new();
    let mut entries = fs::read_dir(content_dir.join("posts")).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "md") {
            post_paths.push(path);
        }
    }

    let raw_posts = try_join_all(post_paths.iter().map(fs::read_to_string)).await?;

    let mut posts: Vec<BlogPost> = Vec::new();
    for (path, raw) in post_paths.iter().zip(&raw_posts) {
        match build_post(path, raw) {
            Ok(post) => posts.push(post),
            Err(e) => error!("Skipping post: {e}"),
        }
    }
    // newest first; slug as tie-break so reloads are stable
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

    let projects_path = content_dir.join("projects.toml");
    let projects_raw = fs::read_to_string(&projects_path).await?;
    let projects_file: ProjectsFile = toml::from_str(&projects_raw)
        .map_err(|e| ContentError::toml(&projects_path, e))?;
    let projects = projects_file
        .projects
        .into_iter()
        .map(|record| Project {
            description_html: render_markdown_to_html(&record.full_description),
            slug: record.slug,
            title: record.title,
            description: record.description,
            category: record.category,
            tech: record.tech,
            features: record.features,
            challenges: record.challenges,
            learnings: record.learnings,
            github: record.github,
            live: record.live,
        })
        .collect();

    let skills_path = content_dir.join("skills.toml");
    let skills_raw = fs::read_to_string(&skills_path).await?;
    let skills_file: SkillsFile =
        toml::from_str(&skills_raw).map_err(|e| ContentError::toml(&skills_path, e))?;

    Ok(Catalog {
        site,
        posts,
        projects,
        skill_groups: skills_file.groups,
    })
}

fn build_post(path: &Path, raw: &str) -> Result<BlogPost> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse::<FrontMatter>(raw)
        .map_err(|e| ContentError::front_matter(path, e.to_string()))?;
    let fm = parsed
        .data
        .ok_or_else(|| ContentError::front_matter(path, "no front matter block"))?;

    let date = NaiveDate::parse_from_str(&fm.date, "%Y-%m-%d")
        .map_err(|_| ContentError::date(path, fm.date.clone()))?;
    let read_time = fm
        .read_time
        .unwrap_or_else(|| reading_time_label(&parsed.content));

    Ok(BlogPost {
        slug: fm.slug,
        title: fm.title,
        excerpt: fm.excerpt,
        date,
        read_time,
        category: fm.category,
        tags: fm.tags,
        body_html: render_markdown_to_html(&parsed.content),
    })
}

pub async fn reload_content(app_state: &AppState) {
    info!("Reloading site content...");
    let templates = load_templates(&app_state.content_dir).await;
    let catalog = load_catalog(&app_state.content_dir).await;

    match (templates, catalog) {
        (Ok(templates), Ok(catalog)) => {
            *app_state.templates.write().await = templates;
            *app_state.catalog.write().await = catalog;
            info!("Content successfully reloaded.");
        }
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to reload content, keeping previous catalog: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write(path: PathBuf, body: &str) {
        std::fs::write(path, body).expect("write fixture");
    }

    fn fixture_content_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path();
        std::fs::create_dir(root.join("posts")).expect("create posts dir");

        write(
            root.join("site.toml"),
            r#"
title = "Fixture Site"
author = "Fixture Author"
"#,
        );
        write(root.join("layout.html"), "<html><body>{{ banner }}{{ content }}</body></html>");
        write(root.join("banner.html"), "<header>Fixture</header>");
        write(root.join("not_found.html"), "<h1>Not found: {{slug}}</h1>");
        write(root.join("home.md"), "# Welcome\n\nHello.");
        write(
            root.join("posts/older.md"),
            r#"---
title: Older Post
slug: older-post
date: 2023-12-28
excerpt: The older one.
category: Algorithms
tags: [DSU]
---
Body of the older post.
"#,
        );
        write(
            root.join("posts/newer.md"),
            r#"---
title: Newer Post
slug: newer-post
date: 2024-01-15
excerpt: The newer one.
category: Android Development
read_time: 8 min read
---
Body of the newer post.
"#,
        );
        write(
            root.join("projects.toml"),
            r#"
[[projects]]
slug = "ecommerce-app"
title = "ECommerce Android App"
description = "A full-featured e-commerce application"
full_description = "Built with **Kotlin**."
category = "Android Development"
tech = ["Kotlin", "Jetpack Compose"]
"#,
        );
        write(
            root.join("skills.toml"),
            r#"
[[groups]]
title = "Android Development"

[[groups.skills]]
name = "Kotlin"
description = "Primary language for Android development"
experience = "2+ years"
projects = ["LunarLens"]
level = "Expert"
"#,
        );
        dir
    }

    #[tokio::test]
    async fn loads_catalog_newest_post_first() {
        let dir = fixture_content_dir();
        let catalog = load_catalog(dir.path()).await.expect("load catalog");

        let slugs: Vec<_> = catalog.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer-post", "older-post"]);
        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.skill_groups.len(), 1);
        assert_eq!(catalog.site.title, "Fixture Site");
    }

    #[tokio::test]
    async fn read_time_comes_from_front_matter_or_word_count() {
        let dir = fixture_content_dir();
        let catalog = load_catalog(dir.path()).await.expect("load catalog");

        let newer = catalog.post_by_slug("newer-post").expect("post");
        assert_eq!(newer.read_time, "8 min read");

        // no read_time in front matter, five words of body
        let older = catalog.post_by_slug("older-post").expect("post");
        assert_eq!(older.read_time, "1 min read");
    }

    #[tokio::test]
    async fn project_description_is_rendered_markdown() {
        let dir = fixture_content_dir();
        let catalog = load_catalog(dir.path()).await.expect("load catalog");

        let project = catalog.project_by_slug("ecommerce-app").expect("project");
        assert!(project.description_html.contains("<strong>Kotlin</strong>"));
    }

    #[tokio::test]
    async fn broken_front_matter_skips_that_post_only() {
        let dir = fixture_content_dir();
        write(
            dir.path().join("posts/broken.md"),
            "no front matter here, just text",
        );

        let catalog = load_catalog(dir.path()).await.expect("load catalog");
        assert_eq!(catalog.posts.len(), 2);
    }

    #[tokio::test]
    async fn bad_date_skips_that_post_only() {
        let dir = fixture_content_dir();
        write(
            dir.path().join("posts/bad-date.md"),
            r#"---
title: Bad Date
slug: bad-date
date: January 15th
excerpt: Nope.
category: Algorithms
---
Body.
"#,
        );

        let catalog = load_catalog(dir.path()).await.expect("load catalog");
        assert!(catalog.post_by_slug("bad-date").is_none());
    }

    #[tokio::test]
    async fn templates_render_home_markdown() {
        let dir = fixture_content_dir();
        let templates = load_templates(dir.path()).await.expect("load templates");
        assert!(templates.home.contains("<h1>Welcome</h1>"));
        assert!(templates.not_found.contains("{{slug}}"));
    }
}
