//! Conventional Rails directory layout and the logical controller identity.
//!
//! Everything here is lexical: no file is read, and "does this exist" checks
//! are left to the finders.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// Controllers directory relative to the project root
pub const CONTROLLERS_DIR: [&str; 2] = ["app", "controllers"];

/// Views directory relative to the project root
pub const VIEWS_DIR: [&str; 2] = ["app", "views"];

/// Suffix every controller file name carries before its extension
pub const CONTROLLER_SUFFIX: &str = "_controller";

/// Source extension of controller files (without the dot)
pub const SOURCE_EXTENSION: &str = "rb";

/// Recognized view suffixes, in lookup priority order.
pub const VIEW_SUFFIXES: [&str; 6] =
    [".erb", ".html.erb", ".js.erb", ".json.jbuilder", ".json.erb", ".xml.builder"];

/// Final extensions that mark a file as a view template.
pub const VIEW_EXTENSIONS: [&str; 3] = ["erb", "jbuilder", "builder"];

/// Format infixes that may sit between the action name and the view extension.
pub const VIEW_FORMATS: [&str; 4] = ["html", "json", "js", "xml"];

/// Logical, path-shaped identity of a controller (`users/archives`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ControllerKey(String);

impl ControllerKey
{
    /// Build a key from `/`-joined segments. Empty keys and empty segments
    /// are rejected.
    pub fn new(key: impl Into<String>) -> Option<Self>
    {
        let key = key.into();

        if key.is_empty()
            || key
                .split('/')
                .any(str::is_empty)
        {
            return None;
        }

        Some(Self(key))
    }

    pub fn as_str(&self) -> &str
    {
        &self.0
    }

    /// Iterate over the `/`-separated segments of the key
    pub fn segments(&self) -> impl Iterator<Item = &str>
    {
        self.0
            .split('/')
    }
}

impl fmt::Display for ControllerKey
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result
    {
        f.write_str(&self.0)
    }
}

/// Application root plus the derived controller and view locations.
#[derive(Debug, Clone)]
pub struct ProjectRoot
{
    root: PathBuf,
}

impl ProjectRoot
{
    pub fn new(root: impl Into<PathBuf>) -> Self
    {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path
    {
        &self.root
    }

    /// `<root>/app/controllers`
    pub fn controllers_dir(&self) -> PathBuf
    {
        CONTROLLERS_DIR
            .iter()
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// `<root>/app/views`
    pub fn views_dir(&self) -> PathBuf
    {
        VIEWS_DIR
            .iter()
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// `<root>/app/controllers/<key>_controller.rb`
    pub fn controller_file(
        &self,
        key: &ControllerKey,
    ) -> PathBuf
    {
        self.controllers_dir()
            .join(crate::core::naming::key_to_relative_controller_path(key))
    }

    /// `<root>/app/views/<key>`
    pub fn views_dir_for(
        &self,
        key: &ControllerKey,
    ) -> PathBuf
    {
        key.segments()
            .fold(self.views_dir(), |acc, seg| acc.join(seg))
    }

    /// Path of `file` relative to the controllers directory, if it lies inside it.
    pub fn relative_to_controllers(
        &self,
        file: &Path,
    ) -> Option<PathBuf>
    {
        relative_within(file, &self.controllers_dir())
    }

    /// Path of `file` relative to the views directory, if it lies inside it.
    pub fn relative_to_views(
        &self,
        file: &Path,
    ) -> Option<PathBuf>
    {
        relative_within(file, &self.views_dir())
    }
}

/// Strip `base` from `file`, comparing resolved paths so that `./`, `..` and
/// symlinked roots do not defeat the containment check. Only the directories
/// are resolved; a symlinked file keeps its own name and location.
fn relative_within(
    file: &Path,
    base: &Path,
) -> Option<PathBuf>
{
    let file = resolve_file(file)?;
    let base = resolve(base);

    let rel = file
        .strip_prefix(&base)
        .ok()?;

    if rel
        .as_os_str()
        .is_empty()
    {
        return None;
    }

    Some(rel.to_path_buf())
}

/// Resolve the directory holding `path`, then re-append its file name.
fn resolve_file(path: &Path) -> Option<PathBuf>
{
    let lexical = normalize(path);
    let name = lexical.file_name()?;

    Some(resolve(lexical.parent()?).join(name))
}

/// Absolute path with `.` and `..` folded away, without touching the disk.
fn normalize(path: &Path) -> PathBuf
{
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut lexical = PathBuf::new();

    for component in absolute.components()
    {
        match component
        {
            Component::CurDir =>
            {}
            Component::ParentDir =>
            {
                lexical.pop();
            }
            other => lexical.push(other),
        }
    }

    lexical
}

/// Normalize lexically against the current directory, then canonicalize the
/// deepest ancestor that exists and re-append the missing tail.
fn resolve(path: &Path) -> PathBuf
{
    let lexical = normalize(path);

    for ancestor in lexical.ancestors()
    {
        if let Ok(canonical) = dunce::canonicalize(ancestor)
        {
            // ancestors() only yields prefixes of `lexical`
            let tail = lexical
                .strip_prefix(ancestor)
                .unwrap_or(Path::new(""));
            return if tail
                .as_os_str()
                .is_empty()
            {
                canonical
            }
            else
            {
                canonical.join(tail)
            };
        }
    }

    lexical
}

/// `/`-joined string form of a relative path, `None` if any component is not
/// plain UTF-8.
pub fn slash_joined(rel: &Path) -> Option<String>
{
    let mut parts = Vec::new();

    for component in rel.components()
    {
        match component
        {
            Component::Normal(part) => parts.push(part.to_str()?),
            _ => return None,
        }
    }

    Some(parts.join("/"))
}
