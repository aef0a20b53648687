use super::setup::OutputFormat;
use anyhow::Result;
use console::Style;
use glimpseapp::model::Post;
use glimpseapp::render::NO_POSTS_MESSAGE;
use serde::Serialize;

struct Styles {
    id: Style,
    title: Style,
    time: Style,
    link: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            id: Style::new().yellow(),
            title: Style::new().bold(),
            time: Style::new().color256(246).italic(),
            link: Style::new().dim(),
        }
    }
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn posts(posts: &[Post], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", json(posts)?)),
        OutputFormat::Text => Ok(posts_text(posts, &Styles::new())),
    }
}

fn posts_text(posts: &[Post], styles: &Styles) -> String {
    if posts.is_empty() {
        return format!("{}\n", NO_POSTS_MESSAGE);
    }

    let mut out = String::new();
    for post in posts {
        out.push_str(&format!(
            "{} {}  {}\n",
            styles.id.apply_to(format!("{:>5}.", post.id)),
            styles.title.apply_to(&post.title),
            styles
                .time
                .apply_to(post.published_at.format("%Y-%m-%d").to_string()),
        ));
        if !post.permalink.is_empty() {
            out.push_str(&format!("       {}\n", styles.link.apply_to(&post.permalink)));
        }
    }
    out
}
