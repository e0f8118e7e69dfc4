//! Controller action → view templates.
//!
//! Resolution order:
//! 1. controller key from the file's path under `app/controllers`
//! 2. action from the cursor line (`index` when there is none)
//! 3. `app/views/<key>/<action><suffix>` for every recognized suffix
//! 4. only if 3 found nothing: the same lookup in the single parent
//!    controller's views directory

use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::cli::{AppContext, LookupArgs};
use crate::core::action::{DEFAULT_ACTION, action_at};
use crate::core::error::JumpError;
use crate::core::inherit::parent_key_of;
use crate::core::layout::{
    CONTROLLER_SUFFIX, ControllerKey, ProjectRoot, SOURCE_EXTENSION, VIEW_SUFFIXES, slash_joined,
};
use crate::infra::{config::load_config, editor, io::read_lines};

/// Outcome of a view lookup for one controller file.
#[derive(Debug, Clone, Serialize)]
pub struct ViewLookup
{
    /// Key derived from the controller's own path
    pub controller_key: ControllerKey,

    /// Action the cursor resolved to
    pub action: String,

    /// Existing view files, in suffix priority order
    pub views: Vec<PathBuf>,

    /// Parent controller whose views were used, when the direct lookup was empty
    pub inherited_from: Option<ControllerKey>,
}

/// Stateless view resolver bound to one project root.
#[derive(Debug, Clone)]
pub struct ViewFinder
{
    root: ProjectRoot,
}

impl ViewFinder
{
    pub fn new(root: impl Into<PathBuf>) -> Self
    {
        Self { root: ProjectRoot::new(root) }
    }

    /// Existing views for the action at `cursor_line` in `controller_file`.
    ///
    /// Empty when the file is not a controller or no view exists.
    pub fn find_views(
        &self,
        controller_file: &Path,
        cursor_line: Option<usize>,
    ) -> Result<Vec<PathBuf>>
    {
        Ok(self
            .lookup(controller_file, cursor_line)?
            .map(|l| l.views)
            .unwrap_or_default())
    }

    /// Full lookup record; `None` when `controller_file` is not a controller.
    #[instrument(skip(self), fields(root = %self.root.path().display()))]
    pub fn lookup(
        &self,
        controller_file: &Path,
        cursor_line: Option<usize>,
    ) -> Result<Option<ViewLookup>>
    {
        let Some(controller_key) = self.controller_key(controller_file)
        else
        {
            debug!("not a controller file");
            return Ok(None);
        };

        let action = self.action_name(controller_file, cursor_line)?;
        debug!(key = %controller_key, action = %action, "resolved controller action");

        let views = self.views_in(&controller_key, &action);
        if !views.is_empty()
        {
            return Ok(Some(ViewLookup { controller_key, action, views, inherited_from: None }));
        }

        let Some(parent) = parent_key_of(&controller_key, &self.root)?
        else
        {
            return Ok(Some(ViewLookup {
                controller_key,
                action,
                views,
                inherited_from: None,
            }));
        };

        let views = self.views_in(&parent, &action);
        debug!(parent = %parent, found = views.len(), "fell back to parent views");

        let inherited_from = (!views.is_empty()).then_some(parent);
        Ok(Some(ViewLookup { controller_key, action, views, inherited_from }))
    }

    /// Key read from the file's path relative to `app/controllers`, case
    /// preserved. `None` outside that directory or without the
    /// `_controller.rb` suffix.
    pub fn controller_key(
        &self,
        controller_file: &Path,
    ) -> Option<ControllerKey>
    {
        if controller_file
            .extension()
            .and_then(|e| e.to_str())
            != Some(SOURCE_EXTENSION)
        {
            return None;
        }

        let rel = self
            .root
            .relative_to_controllers(controller_file)?;
        let rel = slash_joined(&rel)?;

        let key = rel.strip_suffix(&format!("{CONTROLLER_SUFFIX}.{SOURCE_EXTENSION}"))?;
        ControllerKey::new(key)
    }

    /// Action enclosing `cursor_line`, defaulting to `index`.
    pub fn action_name(
        &self,
        controller_file: &Path,
        cursor_line: Option<usize>,
    ) -> Result<String>
    {
        let Some(line) = cursor_line
        else
        {
            return Ok(DEFAULT_ACTION.to_string());
        };

        let action = read_lines(controller_file)?.and_then(|lines| action_at(&lines, line));

        Ok(action.unwrap_or_else(|| DEFAULT_ACTION.to_string()))
    }

    /// Existing `<views>/<key>/<action><suffix>` files in priority order.
    pub fn views_in(
        &self,
        key: &ControllerKey,
        action: &str,
    ) -> Vec<PathBuf>
    {
        let dir = self
            .root
            .views_dir_for(key);

        VIEW_SUFFIXES
            .iter()
            .map(|suffix| dir.join(format!("{action}{suffix}")))
            .filter(|candidate| candidate.is_file())
            .inspect(|hit| debug!(view = %hit.display(), "view candidate exists"))
            .collect()
    }
}

/// Views associated with the action at `cursor_line` of `controller_file`.
pub fn find_views(
    controller_file: &Path,
    root: &Path,
    cursor_line: Option<usize>,
) -> Result<Vec<PathBuf>>
{
    ViewFinder::new(root).find_views(controller_file, cursor_line)
}

/// `lookup` subcommand: open the first associated view.
pub fn run(
    args: LookupArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = load_config(&args.root)?;
    let finder = ViewFinder::new(&args.root);

    let lookup = finder
        .lookup(&args.path, args.cursor_line())?
        .filter(|l| !l.views.is_empty())
        .ok_or(JumpError::NoViews)?;

    if args.json
    {
        println!("{}", serde_json::to_string(&lookup)?);
    }
    else if !ctx.quiet
    {
        if let Some(parent) = &lookup.inherited_from
        {
            let note = format!("Using views inherited from {parent}");
            if ctx.no_color
            {
                eprintln!("{note}");
            }
            else
            {
                eprintln!("{}", note.dimmed());
            }
        }

        for view in &lookup.views
        {
            println!("{}", view.display());
        }
    }

    // VIEW_SUFFIXES order decides which template opens
    let first = &lookup.views[0];
    editor::open(first, &config.editor, ctx)
}
