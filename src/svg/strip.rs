//! Color stripping by ordered text substitution.
//!
//! No markup is parsed. Each rule is a regex applied to the whole text,
//! in table order, every rule seeing the previous rule's output. Text that
//! merely looks like a declaration (e.g. `color:` inside a comment) is
//! rewritten too.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// A single substitution step.
pub struct Rule {
    /// Short label used in verbose output.
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

/// Substitution table. Order matters: the `style` removals must run before
/// the inline `color:` removal, and that before the `fill:`/`stroke:` rewrites.
static RULES: LazyLock<[Rule; 9]> = LazyLock::new(|| {
    [
        Rule::new("fill attr (double)", r#"fill="[^"]*""#, r#"fill="currentColor""#),
        Rule::new("fill attr (single)", r"fill='[^']*'", "fill='currentColor'"),
        Rule::new("stroke attr (double)", r#"stroke="[^"]*""#, r#"stroke="currentColor""#),
        Rule::new("stroke attr (single)", r"stroke='[^']*'", "stroke='currentColor'"),
        Rule::new("style attr (double)", r#"style="[^"]*color[^"]*""#, ""),
        Rule::new("style attr (single)", r"style='[^']*color[^']*'", ""),
        Rule::new("color decl", r"color:\s*[^;]+;?", ""),
        Rule::new("fill decl", r"fill:\s*[^;]+;?", "fill: currentColor;"),
        Rule::new("stroke decl", r"stroke:\s*[^;]+;?", "stroke: currentColor;"),
    ]
});

/// Number of matches a rule replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHits {
    pub name: &'static str,
    pub hits: usize,
}

/// Strip explicit colors, pointing fills and strokes at `currentColor`.
pub fn strip_colors(text: &str) -> String {
    let mut out = text.to_owned();
    for rule in RULES.iter() {
        out = rule
            .pattern
            .replace_all(&out, NoExpand(rule.replacement))
            .into_owned();
    }
    out
}

/// Like [`strip_colors`], also counting matches per rule.
pub fn strip_colors_with_stats(text: &str) -> (String, Vec<RuleHits>) {
    let mut out = text.to_owned();
    let mut stats = Vec::with_capacity(RULES.len());

    for rule in RULES.iter() {
        let hits = rule.pattern.find_iter(&out).count();
        if hits > 0 {
            out = rule
                .pattern
                .replace_all(&out, NoExpand(rule.replacement))
                .into_owned();
        }
        stats.push(RuleHits {
            name: rule.name,
            hits,
        });
    }

    (out, stats)
}
