//! Class-name ⇄ controller-key conversion.
//!
//! `Admin::UsersController` ⇄ `admin/users` ⇄ `admin/users_controller.rb`

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::layout::{CONTROLLER_SUFFIX, ControllerKey, SOURCE_EXTENSION};

/// Class-name suffix shared by every controller
pub const CLASS_SUFFIX: &str = "Controller";

/// Implicit base class; never a navigation target
pub const BASE_CONTROLLER: &str = "ApplicationController";

/// Namespace separator in class names
const SCOPE_SEPARATOR: &str = "::";

// `HTMLParser` -> `HTML_Parser`
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("static regex"));

// `userID` -> `user_ID`, `v2Api` -> `v2_Api`
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("static regex"));

/// Convert a controller class name into its key.
///
/// Returns `None` for the base application controller and for anything that
/// does not end in `Controller` or has an empty namespace segment.
pub fn class_name_to_key(name: &str) -> Option<ControllerKey>
{
    if name == BASE_CONTROLLER
    {
        return None;
    }

    let trimmed = name.strip_suffix(CLASS_SUFFIX)?;

    let segments: Option<Vec<String>> = trimmed
        .split(SCOPE_SEPARATOR)
        .map(|seg| (!seg.is_empty()).then(|| underscore(seg)))
        .collect();

    ControllerKey::new(segments?.join("/"))
}

/// `users/archives` -> `users/archives_controller.rb`, relative to the
/// controllers directory.
pub fn key_to_relative_controller_path(key: &ControllerKey) -> PathBuf
{
    let mut path: PathBuf = key
        .segments()
        .collect();

    let file = format!(
        "{}{CONTROLLER_SUFFIX}.{SOURCE_EXTENSION}",
        path.file_name()
            .and_then(|f| f.to_str())
            .unwrap_or_default()
    );
    path.set_file_name(file);

    path
}

/// CamelCase segment to snake_case.
fn underscore(segment: &str) -> String
{
    let pass = ACRONYM_BOUNDARY.replace_all(segment, "${1}_${2}");
    WORD_BOUNDARY
        .replace_all(&pass, "${1}_${2}")
        .to_lowercase()
}
