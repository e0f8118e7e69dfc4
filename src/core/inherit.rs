//! Single-hop parent lookup for controllers.
//!
//! Only the first `class Foo::BarController < BazController` line of the
//! controller's own file is consulted; the parent's parent is never visited.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use tracing::{debug, instrument};

use crate::core::layout::{ControllerKey, ProjectRoot};
use crate::core::naming::class_name_to_key;
use crate::infra::io::read_lines;

static CLASS_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s+([A-Z][A-Za-z0-9:]*Controller)\s*<\s*([A-Z][A-Za-z0-9:]*Controller)")
        .expect("static regex")
});

/// Key of the controller that `key`'s class directly inherits from.
///
/// `Ok(None)` when the controller file is missing, has no controller-to-
/// controller inheritance line, or inherits from `ApplicationController`.
#[instrument(skip_all, fields(key = %key))]
pub fn parent_key_of(
    key: &ControllerKey,
    root: &ProjectRoot,
) -> Result<Option<ControllerKey>>
{
    let file = root.controller_file(key);

    let Some(lines) = read_lines(&file)?
    else
    {
        debug!(file = %file.display(), "controller file missing, no parent");
        return Ok(None);
    };

    let Some(parent) = parent_class_name(&lines)
    else
    {
        debug!("no controller inheritance declaration");
        return Ok(None);
    };

    let parent_key = class_name_to_key(parent);
    debug!(parent, parent_key = ?parent_key, "parent declaration");

    Ok(parent_key)
}

/// Parent class name from the first controller inheritance declaration.
fn parent_class_name<S: AsRef<str>>(lines: &[S]) -> Option<&str>
{
    lines
        .iter()
        .find_map(|line| {
            CLASS_DECL
                .captures(line.as_ref().trim())
                .and_then(|caps| caps.get(2))
        })
        .map(|m| m.as_str())
}
