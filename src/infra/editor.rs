//! Hand a resolved file to the user's editor.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use crate::cli::AppContext;
use crate::infra::config::EditorConfig;

/// Spawn `<command> <args...> <path>` without waiting for it to exit.
///
/// With `--dry-run` the command line is printed instead.
#[instrument(skip(editor, ctx), fields(editor = %editor.command))]
pub fn open(
    path: &Path,
    editor: &EditorConfig,
    ctx: &AppContext,
) -> Result<()>
{
    let mut cmd = command_for(path, editor);

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            let line = format!("DRY RUN: Would run {}", render(&cmd));
            if ctx.no_color
            {
                println!("{line}");
            }
            else
            {
                println!("{}", line.yellow());
            }
        }
        return Ok(());
    }

    let child = cmd
        .spawn()
        .with_context(|| format!("Failed to launch editor `{}`", editor.command))?;

    debug!(pid = child.id(), "editor launched");
    Ok(())
}

/// Build the editor invocation for `path`.
pub fn command_for(
    path: &Path,
    editor: &EditorConfig,
) -> Command
{
    let mut cmd = Command::new(&editor.command);
    cmd.args(&editor.args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

/// Shell-ish rendering of a command for display.
fn render(cmd: &Command) -> String
{
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn appends_path_after_configured_args()
    {
        let editor = EditorConfig {
            command: "code".to_string(),
            args: vec!["--reuse-window".to_string(), "--goto".to_string()],
        };

        let cmd = command_for(Path::new("app/views/users/show.html.erb"), &editor);

        assert_eq!(render(&cmd), "code --reuse-window --goto app/views/users/show.html.erb");
    }

    #[test]
    fn dry_run_does_not_spawn()
    {
        let editor = EditorConfig {
            command: "definitely-not-an-editor-binary".to_string(),
            args: Vec::new(),
        };
        let ctx = AppContext { quiet: true, no_color: true, dry_run: true };

        assert!(open(Path::new("x.rb"), &editor, &ctx).is_ok());
    }

    #[test]
    fn missing_editor_is_an_error()
    {
        let editor = EditorConfig {
            command: "definitely-not-an-editor-binary".to_string(),
            args: Vec::new(),
        };
        let ctx = AppContext { quiet: true, no_color: true, dry_run: false };

        let err = open(Path::new("x.rb"), &editor, &ctx).unwrap_err();
        assert!(
            err.to_string()
                .contains("definitely-not-an-editor-binary")
        );
    }
}
