//! The loaded content records and every query the pages ask of them.

use crate::config::SiteMeta;
use crate::models::{BlogPost, Project, Skill, SkillGroup};

/// Category selection meaning "no filtering".
pub const ALL_CATEGORIES: &str = "All";

/// Everything the site knows, loaded once from the content directory and
/// replaced wholesale on hot reload. Records never change in place.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub site: SiteMeta,
    /// Newest first.
    pub posts: Vec<BlogPost>,
    /// File order.
    pub projects: Vec<Project>,
    /// File order.
    pub skill_groups: Vec<SkillGroup>,
}

impl Catalog {
    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// A skill together with the group it belongs to.
    pub fn skill_by_name(&self, name: &str) -> Option<(&SkillGroup, &Skill)> {
        self.skill_groups.iter().find_map(|group| {
            group
                .skills
                .iter()
                .find(|s| s.name == name)
                .map(|s| (group, s))
        })
    }

    /// Skill lookup by its URL slug, which is derived from the name.
    pub fn skill_by_slug(&self, slug: &str) -> Option<(&SkillGroup, &Skill)> {
        self.skill_groups.iter().find_map(|group| {
            group
                .skills
                .iter()
                .find(|s| slugify(&s.name) == slug)
                .map(|s| (group, s))
        })
    }

    /// Posts whose category equals the selection, in catalog order.
    /// `None` or the `All` sentinel yields every post.
    pub fn posts_in_category(&self, selection: Option<&str>) -> Vec<&BlogPost> {
        filter_by_category(&self.posts, selection, |p| p.category.as_str())
    }

    pub fn projects_in_category(&self, selection: Option<&str>) -> Vec<&Project> {
        filter_by_category(&self.projects, selection, |p| p.category.as_str())
    }

    /// Distinct post categories in catalog order, `All` sentinel first.
    pub fn post_categories(&self) -> Vec<&str> {
        distinct_categories(self.posts.iter().map(|p| p.category.as_str()))
    }

    pub fn project_categories(&self) -> Vec<&str> {
        distinct_categories(self.projects.iter().map(|p| p.category.as_str()))
    }
}

fn filter_by_category<'a, T>(
    records: &'a [T],
    selection: Option<&str>,
    category: impl Fn(&T) -> &str,
) -> Vec<&'a T> {
    match selection {
        None => records.iter().collect(),
        Some(sel) if sel == ALL_CATEGORIES => records.iter().collect(),
        Some(sel) => records.iter().filter(|r| category(r) == sel).collect(),
    }
}

fn distinct_categories<'a>(categories: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out = vec![ALL_CATEGORIES];
    for category in categories {
        if !out.contains(&category) {
            out.push(category);
        }
    }
    out
}

/// Lowercase kebab-case URL slug for a record name.
/// "Git & GitHub" becomes "git-github".
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if matches!(c, ' ' | '-' | '_') && !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

/// Accent class for a category chip. Unknown categories get the neutral
/// accent rather than an error.
pub fn category_accent(category: &str) -> &'static str {
    match category {
        "Android Development" => "accent-green",
        "Cloud Computing" => "accent-blue",
        "Performance" => "accent-yellow",
        "Algorithms" => "accent-purple",
        "AI & Health" => "accent-teal",
        "Cloud & AI" => "accent-blue",
        "Tools & Technologies" => "accent-purple",
        _ => "accent-neutral",
    }
}

/// Badge class for a proficiency level, neutral for anything unrecognized.
pub fn level_badge(level: &str) -> &'static str {
    match level {
        "Expert" => "badge-expert",
        "Advanced" => "badge-advanced",
        "Intermediate" => "badge-intermediate",
        "Certified" => "badge-certified",
        _ => "badge-neutral",
    }
}
