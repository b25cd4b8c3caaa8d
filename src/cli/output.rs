//! Terminal rendering
//!
//! Line-oriented output for categories and facts, plus a best-effort
//! pass over markdown-style emphasis markers. Color is handled by
//! `colored`'s global override (`--no-color`); `--quiet` suppresses
//! confirmations and hints but never primary query output.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

use crate::core::category::Category;
use crate::core::fact::Fact;

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Render one category: name, id, slug, then its facts when inlined.
pub fn print_categories(categories: &[Category]) {
    for category in categories {
        let id = category.id.map(|id| id.to_string()).unwrap_or_default();
        let slug = category.slug.as_deref().unwrap_or_default();
        println!(
            "{} {} {}",
            category.name.bold().underline(),
            id.yellow(),
            slug.on_red(),
        );
        match &category.facts {
            Some(facts) if !facts.is_empty() => print_facts(facts, false),
            _ => println!(),
        }
    }
}

/// Render facts as bullets. Standalone facts also show the owning
/// category's slug, when the server inlined the owner.
pub fn print_facts(facts: &[Fact], standalone: bool) {
    for fact in facts {
        let id = fact.id.map(|id| id.to_string()).unwrap_or_default();
        let slug = if standalone {
            fact.category
                .as_deref()
                .and_then(|c| c.slug.as_deref())
                .unwrap_or_default()
        } else {
            ""
        };
        println!(
            "{} {} {} {}",
            "*".green(),
            render_emphasis(&fact.content),
            id.yellow(),
            slug.on_red(),
        );
        println!();
    }
}

/// Confirmation line after a successful mutation.
pub fn ok() {
    if !quiet() {
        println!("[ {} ]", "OK".green());
    }
}

/// Benign user-facing message (imprecise query, editor abort, usage).
pub fn note(message: &str) {
    println!("{}", message);
}

/// Non-fatal warning.
pub fn warn(message: &str) {
    eprintln!("{}", message.yellow());
}

/// Best effort to render some Markdown for display in a terminal:
/// `**x**` and `<math>x</math>` become bold, `_x_` underlined.
/// Unmatched markers are left verbatim.
pub fn render_emphasis(content: &str) -> String {
    let pass = replace_pair(content, "**", "**", |inner| inner.bold().to_string());
    let pass = replace_pair(&pass, "_", "_", |inner| inner.underline().to_string());
    replace_pair(&pass, "<math>", "</math>", |inner| inner.bold().to_string())
}

/// Replace each shortest `open`..`close` span via `paint`.
fn replace_pair(text: &str, open: &str, close: &str, paint: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        let after = &rest[start + open.len()..];
        match after.find(close) {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str(&paint(&after[..end]));
                rest = &after[end + close.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        // Strip ANSI so assertions see bare text.
        colored::control::set_override(false);
    }

    #[test]
    fn emphasis_markers_are_consumed() {
        plain();
        assert_eq!(render_emphasis("**bold** move"), "bold move");
        assert_eq!(render_emphasis("stay _under_ cover"), "stay under cover");
        assert_eq!(render_emphasis("<math>e = mc^2</math>"), "e = mc^2");
    }

    #[test]
    fn unmatched_markers_stay_verbatim() {
        plain();
        assert_eq!(render_emphasis("**dangling"), "**dangling");
        assert_eq!(render_emphasis("just_one"), "just_one");
        assert_eq!(render_emphasis("a ** b"), "a ** b");
    }

    #[test]
    fn multiple_spans_in_one_line() {
        plain();
        assert_eq!(
            render_emphasis("**a** and **b** and _c_"),
            "a and b and c"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        plain();
        assert_eq!(render_emphasis("nothing special"), "nothing special");
    }
}
