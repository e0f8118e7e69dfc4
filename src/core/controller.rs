//! View template → controller action.

use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::cli::{AppContext, ControllerArgs};
use crate::core::action::defines;
use crate::core::error::JumpError;
use crate::core::layout::{ControllerKey, ProjectRoot, VIEW_EXTENSIONS, VIEW_FORMATS, slash_joined};
use crate::infra::{config::load_config, editor, io::read_lines};

/// Advisory attached when the action has no `def` in the controller
pub const METHOD_NOT_FOUND: &str = "Method not found in controller";

/// Controller file and action a view belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerLookupResult
{
    pub controller_file: PathBuf,
    pub action_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Stateless inverse resolver bound to one project root.
#[derive(Debug, Clone)]
pub struct ControllerFinder
{
    root: ProjectRoot,
}

impl ControllerFinder
{
    pub fn new(root: impl Into<PathBuf>) -> Self
    {
        Self { root: ProjectRoot::new(root) }
    }

    /// Resolve `view_file` to its controller and action.
    ///
    /// `None` when the file is not a view, the path has no controller segment,
    /// or the derived controller file does not exist.
    #[instrument(skip(self), fields(root = %self.root.path().display()))]
    pub fn resolve(
        &self,
        view_file: &Path,
    ) -> Result<Option<ControllerLookupResult>>
    {
        let Some((key, action_name)) = self.split_view_path(view_file)
        else
        {
            debug!("not a resolvable view path");
            return Ok(None);
        };

        let controller_file = self
            .root
            .controller_file(&key);

        let Some(lines) = read_lines(&controller_file)?
        else
        {
            debug!(file = %controller_file.display(), "controller file missing");
            return Ok(None);
        };

        let warning = (!defines(&lines, &action_name)).then(|| METHOD_NOT_FOUND.to_string());
        debug!(key = %key, action = %action_name, confirmed = warning.is_none(), "resolved view");

        Ok(Some(ControllerLookupResult { controller_file, action_name, warning }))
    }

    /// `app/views/users/archives/show.html.erb` → (`users/archives`, `show`).
    pub fn split_view_path(
        &self,
        view_file: &Path,
    ) -> Option<(ControllerKey, String)>
    {
        let rel = self
            .root
            .relative_to_views(view_file)?;
        let rel = slash_joined(&rel)?;

        let bare = strip_view_extension(&rel)?;

        let (controller, action) = bare.rsplit_once('/')?;
        if action.is_empty()
        {
            return None;
        }

        Some((ControllerKey::new(controller)?, action.to_string()))
    }
}

/// Drop the template extension and an optional format infix.
///
/// `show.html.erb` → `show`, `show.erb` → `show`, `show.text.erb` → `show.text`.
/// `None` unless the final extension is a view extension.
fn strip_view_extension(rel: &str) -> Option<&str>
{
    let (stem, ext) = rel.rsplit_once('.')?;
    if !VIEW_EXTENSIONS.contains(&ext)
    {
        return None;
    }

    match stem.rsplit_once('.')
    {
        Some((bare, format)) if VIEW_FORMATS.contains(&format) => Some(bare),
        _ => Some(stem),
    }
}

/// Controller action for `view_file` under `root`.
pub fn resolve(
    view_file: &Path,
    root: &Path,
) -> Result<Option<ControllerLookupResult>>
{
    ControllerFinder::new(root).resolve(view_file)
}

/// `controller` subcommand: open the controller the view belongs to.
pub fn run(
    args: ControllerArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = load_config(&args.root)?;

    let result = ControllerFinder::new(&args.root)
        .resolve(&args.path)?
        .ok_or(JumpError::NoController)?;

    // advisory always on stderr, in text and json modes
    if let Some(warning) = &result.warning
    {
        let msg = format!("warning: {warning}: {}", result.action_name);
        if ctx.no_color
        {
            eprintln!("{msg}");
        }
        else
        {
            eprintln!("{}", msg.yellow());
        }
    }

    if args.json
    {
        println!("{}", serde_json::to_string(&result)?);
    }
    else if !ctx.quiet
    {
        println!("{}#{}", result.controller_file.display(), result.action_name);
    }

    editor::open(&result.controller_file, &config.editor, ctx)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use super::*;

    fn finder_with_users() -> (tempfile::TempDir, ControllerFinder)
    {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp
            .path()
            .join("app/controllers");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("users_controller.rb"),
            "class UsersController < ApplicationController\n  def index\n  end\n\n  def show\n  end\nend\n",
        )
        .unwrap();

        let finder = ControllerFinder::new(tmp.path());
        (tmp, finder)
    }

    #[test]
    fn strips_format_and_extension()
    {
        assert_eq!(strip_view_extension("users/show.html.erb"), Some("users/show"));
        assert_eq!(strip_view_extension("users/show.json.jbuilder"), Some("users/show"));
        assert_eq!(strip_view_extension("users/feed.xml.builder"), Some("users/feed"));
        assert_eq!(strip_view_extension("users/show.erb"), Some("users/show"));
        assert_eq!(strip_view_extension("users/show.text.erb"), Some("users/show.text"));
        assert_eq!(strip_view_extension("users/show.html.haml"), None);
        assert_eq!(strip_view_extension("users/show"), None);
    }

    #[test]
    fn splits_controller_and_action()
    {
        let (tmp, finder) = finder_with_users();
        let views = tmp
            .path()
            .join("app/views");

        let (key, action) = finder
            .split_view_path(&views.join("users/archives/show.html.erb"))
            .unwrap();
        assert_eq!(key.as_str(), "users/archives");
        assert_eq!(action, "show");

        assert!(
            finder
                .split_view_path(&views.join("show.html.erb"))
                .is_none()
        );
        assert!(
            finder
                .split_view_path(
                    &tmp.path()
                        .join("app/assets/users/show.html.erb")
                )
                .is_none()
        );
    }

    #[test]
    fn confirms_defined_action()
    {
        let (tmp, finder) = finder_with_users();
        let view = tmp
            .path()
            .join("app/views/users/show.html.erb");

        let result = finder
            .resolve(&view)
            .unwrap()
            .unwrap();
        assert_eq!(
            result.controller_file,
            tmp.path()
                .join("app/controllers/users_controller.rb")
        );
        assert_eq!(result.action_name, "show");
        assert_eq!(result.warning, None);
    }

    #[test]
    fn flags_undefined_action()
    {
        let (tmp, finder) = finder_with_users();
        let view = tmp
            .path()
            .join("app/views/users/missing_action.html.erb");

        let result = finder
            .resolve(&view)
            .unwrap()
            .unwrap();
        assert_eq!(result.action_name, "missing_action");
        assert_eq!(result.warning.as_deref(), Some(METHOD_NOT_FOUND));
    }

    #[test]
    fn partial_names_keep_their_underscore()
    {
        let (tmp, finder) = finder_with_users();
        let view = tmp
            .path()
            .join("app/views/users/_form.html.erb");

        let result = finder
            .resolve(&view)
            .unwrap()
            .unwrap();
        assert_eq!(result.action_name, "_form");
        assert!(result.warning.is_some());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_view_resolves_by_its_own_path()
    {
        use std::os::unix::fs::symlink;

        let (tmp, finder) = finder_with_users();
        let shared = tmp
            .path()
            .join("shared");
        let views = tmp
            .path()
            .join("app/views/users");
        fs::create_dir_all(&shared).unwrap();
        fs::create_dir_all(&views).unwrap();
        fs::write(shared.join("show.html.erb"), "").unwrap();
        symlink(shared.join("show.html.erb"), views.join("show.html.erb")).unwrap();

        let result = finder
            .resolve(&views.join("show.html.erb"))
            .unwrap()
            .unwrap();
        assert_eq!(result.action_name, "show");
        assert_eq!(result.warning, None);
    }

    #[test]
    fn missing_controller_is_none()
    {
        let (tmp, finder) = finder_with_users();
        let view = tmp
            .path()
            .join("app/views/nonexistent/show.html.erb");

        assert_eq!(finder.resolve(&view).unwrap(), None);
    }
}
