//! Line-oriented action detection for controller sources.
//!
//! This is a lexical heuristic, not a parser: a line is a definition header
//! when, after leading whitespace, it starts with `def` followed by a word.
//! Multi-line signatures, `define_method`, heredocs and comments are not
//! understood. The end of a definition is never detected, so the last header
//! seen stays "current" until the next one, however much code follows it.

use std::sync::LazyLock;

use regex::Regex;

/// Action assumed when no cursor line is given or nothing encloses it
pub const DEFAULT_ACTION: &str = "index";

static DEF_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^def\s+(\w+)").expect("static regex"));

/// Name of the definition whose header is the closest one at or above
/// `target_line` (1-based).
///
/// Returns `None` when the target is 0, past the end of `lines`, or no header
/// precedes it.
pub fn action_at<S: AsRef<str>>(
    lines: &[S],
    target_line: usize,
) -> Option<String>
{
    if target_line == 0 || target_line > lines.len()
    {
        return None;
    }

    lines[..target_line]
        .iter()
        .rev()
        .find_map(|line| definition_name(line.as_ref()))
        .map(str::to_string)
}

/// Whether any line defines exactly `action`.
pub fn defines<S: AsRef<str>>(
    lines: &[S],
    action: &str,
) -> bool
{
    let Ok(pattern) = Regex::new(&format!(r"^def\s+{}\b", regex::escape(action)))
    else
    {
        return false;
    };

    lines
        .iter()
        .any(|line| pattern.is_match(line.as_ref().trim()))
}

/// Identifier declared by a definition header line, if it is one.
fn definition_name(line: &str) -> Option<&str>
{
    DEF_HEADER
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
