use pulldown_cmark::{html, Options, Parser};

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options
}

pub fn render_markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let mut html_out = String::new();
    html::push_html(&mut html_out, parser);
    html_out
}

/// Reading-time label for a post body, assuming 200 words per minute.
/// Never reports less than one minute.
pub fn reading_time_label(markdown: &str) -> String {
    let words = markdown.split_whitespace().count();
    let minutes = (words / 200).max(1);
    format!("{minutes} min read")
}

#[cfg(test)]
mod tests {
    use super::{reading_time_label, render_markdown_to_html};

    #[test]
    fn renders_emphasis_and_paragraphs() {
        let output = render_markdown_to_html("**Presentation Layer**: views and view models.");
        assert!(output.contains("<strong>Presentation Layer</strong>"));
        assert!(output.starts_with("<p>"));
    }

    #[test]
    fn renders_tables() {
        let input = "| a | b |\n|---|---|\n| 1 | 2 |";
        let output = render_markdown_to_html(input);
        assert!(output.contains("<table>"));
    }

    #[test]
    fn renders_strikethrough() {
        let output = render_markdown_to_html("~~old~~ new");
        assert!(output.contains("<del>old</del>"));
    }

    #[test]
    fn short_posts_read_in_one_minute() {
        assert_eq!(reading_time_label("a few words only"), "1 min read");
    }

    #[test]
    fn reading_time_scales_with_word_count() {
        let body = "word ".repeat(1650);
        assert_eq!(reading_time_label(&body), "8 min read");
    }
}
