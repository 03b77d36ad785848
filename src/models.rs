use chrono::NaiveDate;
use serde::Deserialize;

/// YAML front matter at the top of each post file under `content/posts/`.
#[derive(Deserialize, Debug, Clone)]
pub struct FrontMatter {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display label like "8 min read". Derived from word count when absent.
    #[serde(default)]
    pub read_time: Option<String>,
}

/// A blog post with its body already rendered to HTML.
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub body_html: String,
}

/// One entry of the `[[projects]]` array in `content/projects.toml`.
#[derive(Deserialize, Debug, Clone)]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Markdown, rendered to HTML at load time.
    pub full_description: String,
    pub category: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub learnings: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub description_html: String,
    pub category: String,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub learnings: Vec<String>,
    pub github: Option<String>,
    pub live: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProjectsFile {
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// One skill inside a group in `content/skills.toml`.
#[derive(Deserialize, Debug, Clone)]
pub struct Skill {
    pub name: String,
    pub description: String,
    /// Free-form label like "2+ years" or "Certified".
    pub experience: String,
    /// Names of projects the skill was used in.
    #[serde(default)]
    pub projects: Vec<String>,
    /// Proficiency label: "Expert", "Advanced", "Intermediate", "Certified".
    /// Anything else falls back to the neutral badge style.
    pub level: String,
}

/// A titled group of skills, `[[groups]]` in `content/skills.toml`.
/// File order is display order; the accent comes from the category lookup.
#[derive(Deserialize, Debug, Clone)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SkillsFile {
    #[serde(default)]
    pub groups: Vec<SkillGroup>,
}
