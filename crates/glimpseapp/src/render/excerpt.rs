//! Plain-text excerpts from post HTML.

use scraper::{Html, Node};

/// Elements whose content is dropped along with their tags.
const DROPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Strip markup, collapse whitespace and keep at most `words` words.
///
/// A trailing `…` marks a cut. `words == 0` disables trimming.
pub fn trim_excerpt(html: &str, words: usize) -> String {
    let text = strip_tags(html);
    let mut tokens = text.split_whitespace();

    if words == 0 {
        return tokens.collect::<Vec<_>>().join(" ");
    }

    let kept: Vec<&str> = tokens.by_ref().take(words).collect();
    let mut excerpt = kept.join(" ");
    if tokens.next().is_some() {
        excerpt.push('…');
    }
    excerpt
}

/// Text content of an HTML fragment, without the bodies of `<script>`/`<style>`.
///
/// Character references come back decoded (`&amp;` is `&`), and a `<` that
/// does not open a tag stays in the text.
pub fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());

    for node in fragment.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let dropped = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| DROPPED_ELEMENTS.contains(&el.name()))
        });
        if dropped {
            continue;
        }
        // Text nodes from different elements are separate words.
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(text);
    }
    out
}
