//! HTML page assembly.
//!
//! Pages are built as plain strings and substituted into the layout
//! template's `{{ ... }}` placeholders. All record-derived text passes
//! through the escape helpers here; post and project bodies are already
//! HTML because they were rendered from Markdown at load time.

use crate::catalog::{category_accent, level_badge, slugify, Catalog, ALL_CATEGORIES};
use crate::config::SiteMeta;
use crate::models::{BlogPost, Project, Skill, SkillGroup};

const HOT_RELOAD_SCRIPT: &str = r#"
<script>
    const socket = new WebSocket("ws://" + window.location.host + "/ws");
    socket.onmessage = (event) => {
        if (event.data === "reload") {
            window.location.reload();
        }
    };
</script>
"#;

fn esc(text: &str) -> String {
    htmlescape::encode_minimal(text)
}

fn attr(text: &str) -> String {
    htmlescape::encode_attribute(text)
}

fn category_href(base: &str, category: &str) -> String {
    if category == ALL_CATEGORIES {
        return base.to_string();
    }
    let encoded: String = url::form_urlencoded::byte_serialize(category.as_bytes()).collect();
    format!("{base}?category={encoded}")
}

pub fn render_with_layout(
    layout: &str,
    banner: &str,
    footer: &str,
    title: &str,
    content: &str,
    is_development: bool,
) -> String {
    let mut page = layout
        .replace("{{ title }}", &esc(title))
        .replace("{{ banner }}", banner)
        .replace("{{ content }}", content)
        .replace("{{ footer }}", footer);

    if is_development {
        page = page.replace("</body>", &format!("{HOT_RELOAD_SCRIPT}</body>"));
    }

    page
}

/// Footer with the outbound links from site metadata: profiles, mail
/// client, resume PDF. Plain hyperlinks.
pub fn site_footer(site: &SiteMeta) -> String {
    let mut links = String::new();
    if let Some(github) = &site.links.github {
        links.push_str(&format!("<a href=\"{}\">GitHub</a>", attr(github)));
    }
    if let Some(linkedin) = &site.links.linkedin {
        links.push_str(&format!("<a href=\"{}\">LinkedIn</a>", attr(linkedin)));
    }
    if let Some(mailto) = site.mailto() {
        links.push_str(&format!("<a href=\"{}\">Email</a>", attr(&mailto)));
    }
    if let Some(resume) = &site.links.resume {
        links.push_str(&format!("<a href=\"{}\">Resume</a>", attr(resume)));
    }

    let byline = if site.tagline.is_empty() {
        esc(&site.author)
    } else {
        format!("{} \u{b7} {}", esc(&site.author), esc(&site.tagline))
    };

    format!("<footer><p>{byline}</p><nav class=\"footer-links\">{links}</nav></footer>")
}

pub fn home_page(catalog: &Catalog, home_html: &str) -> String {
    let mut body = String::from(home_html);

    body.push_str("<section class=\"recent-posts\"><h2>Latest Blog Posts</h2><ul>");
    for post in catalog.posts.iter().take(4) {
        body.push_str(&format!(
            "<li><a href=\"/blog/{}\">{}</a> <span class=\"meta\">{} \u{b7} {}</span></li>",
            esc(&post.slug),
            esc(&post.title),
            post.date.format("%b %d, %Y"),
            esc(&post.read_time),
        ));
    }
    body.push_str("</ul><p><a href=\"/blog\">View All Posts</a></p></section>");

    body.push_str("<section class=\"featured-projects\"><h2>Featured Projects</h2><ul>");
    for project in catalog.projects.iter().take(4) {
        body.push_str(&format!(
            "<li><a href=\"/projects/{}\">{}</a> <span class=\"meta\">{}</span></li>",
            esc(&project.slug),
            esc(&project.title),
            esc(&project.description),
        ));
    }
    body.push_str("</ul><p><a href=\"/projects\">All Projects</a></p></section>");

    body
}

fn category_chips(base: &str, categories: &[&str], selection: Option<&str>) -> String {
    let selected = selection.unwrap_or(ALL_CATEGORIES);
    let mut out = String::from("<nav class=\"categories\">");
    for category in categories {
        let state = if *category == selected {
            "chip chip-selected"
        } else {
            "chip"
        };
        out.push_str(&format!(
            "<a class=\"{state} {}\" href=\"{}\">{}</a>",
            category_accent(category),
            category_href(base, category),
            esc(category),
        ));
    }
    out.push_str("</nav>");
    out
}

fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"tags\">");
    for tag in tags {
        out.push_str(&format!("<li>{}</li>", esc(tag)));
    }
    out.push_str("</ul>");
    out
}

pub fn blog_index(catalog: &Catalog, selection: Option<&str>) -> String {
    let mut body = String::from("<h1>Blog</h1>");
    body.push_str(&category_chips(
        "/blog",
        &catalog.post_categories(),
        selection,
    ));

    let posts = catalog.posts_in_category(selection);
    if posts.is_empty() {
        body.push_str("<p class=\"empty\">No posts in this category yet.</p>");
        return body;
    }

    body.push_str("<div class=\"cards\">");
    for post in posts {
        body.push_str(&format!(
            "<article class=\"card\">\
             <span class=\"badge {}\">{}</span>\
             <h2><a href=\"/blog/{}\">{}</a></h2>\
             <p class=\"meta\">{} \u{b7} {}</p>\
             <p>{}</p>{}\
             </article>",
            category_accent(&post.category),
            esc(&post.category),
            esc(&post.slug),
            esc(&post.title),
            post.date.format("%b %d, %Y"),
            esc(&post.read_time),
            esc(&post.excerpt),
            tag_list(&post.tags),
        ));
    }
    body.push_str("</div>");
    body
}

pub fn post_page(post: &BlogPost) -> String {
    format!(
        "<article class=\"post\">\
         <p><a href=\"/blog\">\u{2190} All posts</a></p>\
         <span class=\"badge {}\">{}</span>\
         <h1>{}</h1>\
         <p class=\"meta\">{} \u{b7} {}</p>\
         {}\
         <div class=\"post-body\">{}</div>\
         </article>",
        category_accent(&post.category),
        esc(&post.category),
        esc(&post.title),
        post.date.format("%B %d, %Y"),
        esc(&post.read_time),
        tag_list(&post.tags),
        post.body_html,
    )
}

pub fn project_index(catalog: &Catalog, selection: Option<&str>) -> String {
    let mut body = String::from("<h1>Projects</h1>");
    body.push_str(&category_chips(
        "/projects",
        &catalog.project_categories(),
        selection,
    ));

    let projects = catalog.projects_in_category(selection);
    if projects.is_empty() {
        body.push_str("<p class=\"empty\">No projects in this category yet.</p>");
        return body;
    }

    body.push_str("<div class=\"cards\">");
    for project in projects {
        body.push_str(&format!(
            "<article class=\"card\">\
             <span class=\"badge {}\">{}</span>\
             <h2><a href=\"/projects/{}\">{}</a></h2>\
             <p>{}</p>{}\
             </article>",
            category_accent(&project.category),
            esc(&project.category),
            esc(&project.slug),
            esc(&project.title),
            esc(&project.description),
            tag_list(&project.tech),
        ));
    }
    body.push_str("</div>");
    body
}

fn bullet_section(heading: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = format!("<section><h2>{}</h2><ul>", esc(heading));
    for item in items {
        out.push_str(&format!("<li>{}</li>", esc(item)));
    }
    out.push_str("</ul></section>");
    out
}

pub fn project_page(project: &Project) -> String {
    let mut links = String::new();
    if let Some(github) = &project.github {
        links.push_str(&format!("<a href=\"{}\">Source</a>", attr(github)));
    }
    if let Some(live) = &project.live {
        links.push_str(&format!("<a href=\"{}\">Live</a>", attr(live)));
    }

    format!(
        "<article class=\"project\">\
         <p><a href=\"/projects\">\u{2190} All projects</a></p>\
         <span class=\"badge {}\">{}</span>\
         <h1>{}</h1>\
         <nav class=\"project-links\">{links}</nav>\
         <div class=\"project-body\">{}</div>\
         {}{}{}{}\
         </article>",
        category_accent(&project.category),
        esc(&project.category),
        esc(&project.title),
        project.description_html,
        bullet_section("Tech Stack", &project.tech),
        bullet_section("Key Features", &project.features),
        bullet_section("Challenges", &project.challenges),
        bullet_section("Learnings", &project.learnings),
    )
}

pub fn skills_page(catalog: &Catalog) -> String {
    let mut body = String::from("<h1>Skills</h1>");
    for group in &catalog.skill_groups {
        body.push_str(&format!(
            "<section class=\"skill-group {}\"><h2>{}</h2><div class=\"cards\">",
            category_accent(&group.title),
            esc(&group.title)
        ));
        for skill in &group.skills {
            body.push_str(&skill_card(skill));
        }
        body.push_str("</div></section>");
    }
    body
}

fn skill_card(skill: &Skill) -> String {
    format!(
        "<article class=\"card\">\
         <h3><a href=\"/skills/{}\">{}</a></h3>\
         <span class=\"badge {}\">{}</span>\
         <p class=\"meta\">{}</p>\
         <p>{}</p>\
         </article>",
        slugify(&skill.name),
        esc(&skill.name),
        level_badge(&skill.level),
        esc(&skill.level),
        esc(&skill.experience),
        esc(&skill.description),
    )
}

/// Detail view for one selected skill, the server-side counterpart of the
/// original site's skill modal.
pub fn skill_page(group: &SkillGroup, skill: &Skill) -> String {
    let mut projects = String::new();
    if !skill.projects.is_empty() {
        projects.push_str("<p class=\"meta\">Used in: ");
        projects.push_str(&esc(&skill.projects.join(", ")));
        projects.push_str("</p>");
    }

    format!(
        "<article class=\"skill\">\
         <p><a href=\"/skills\">\u{2190} All skills</a></p>\
         <h1>{}</h1>\
         <span class=\"badge {}\">{}</span>\
         <p class=\"meta\">{} \u{b7} {}</p>\
         <p>{}</p>\
         {projects}\
         </article>",
        esc(&skill.name),
        level_badge(&skill.level),
        esc(&skill.level),
        esc(&group.title),
        esc(&skill.experience),
        esc(&skill.description),
    )
}

/// The not-found placeholder, with the requested identifier substituted
/// into the template's {{slug}} marker.
pub fn not_found_page(template: &str, slug: &str) -> String {
    template.replace("{{slug}}", &esc(slug))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::BlogPost;

    fn post(title: &str, category: &str) -> BlogPost {
        BlogPost {
            slug: "sample".to_string(),
            title: title.to_string(),
            excerpt: "An excerpt.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            read_time: "8 min read".to_string(),
            category: category.to_string(),
            tags: vec!["Kotlin".to_string()],
            body_html: "<p>body</p>".to_string(),
        }
    }

    #[test]
    fn not_found_page_substitutes_and_escapes_the_slug() {
        let page = not_found_page("<h1>No such page: {{slug}}</h1>", "<script>x</script>");
        assert!(page.contains("No such page: &lt;script&gt;x&lt;/script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn record_text_is_escaped_in_cards() {
        let body = post_page(&post("Ownership & <Borrowing>", "Android Development"));
        assert!(body.contains("Ownership &amp; &lt;Borrowing&gt;"));
    }

    #[test]
    fn post_body_html_passes_through_unescaped() {
        let body = post_page(&post("Title", "Performance"));
        assert!(body.contains("<p>body</p>"));
    }

    #[test]
    fn selected_chip_is_marked_and_links_are_encoded() {
        let chips = category_chips(
            "/blog",
            &[ALL_CATEGORIES, "Cloud Computing"],
            Some("Cloud Computing"),
        );
        assert!(chips.contains("chip chip-selected"));
        assert!(chips.contains("/blog?category=Cloud+Computing"));
        // the All chip points at the bare listing
        assert!(chips.contains("href=\"/blog\""));
    }

    #[test]
    fn layout_substitution_fills_every_placeholder() {
        let layout = "<html><title>{{ title }}</title><body>{{ banner }}{{ content }}{{ footer }}</body></html>";
        let page = render_with_layout(layout, "<header/>", "<footer/>", "Blog", "<main/>", false);
        assert!(page.contains("<title>Blog</title>"));
        assert!(page.contains("<header/>"));
        assert!(page.contains("<main/>"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn dev_mode_injects_the_reload_script() {
        let layout = "<html><body>{{ content }}</body></html>";
        let dev = render_with_layout(layout, "", "", "t", "x", true);
        let prod = render_with_layout(layout, "", "", "t", "x", false);
        assert!(dev.contains("new WebSocket"));
        assert!(!prod.contains("new WebSocket"));
    }
}
