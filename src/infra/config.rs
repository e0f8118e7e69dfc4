use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};

/// Config file names, in lookup priority order
pub const CONFIG_FILES: [&str; 4] = ["rjump.toml", ".rjump.toml", "rjump.yaml", "rjump.json"];

/// Environment prefix, e.g. `RJUMP_EDITOR__COMMAND=nvim`
const ENV_PREFIX: &str = "RJUMP";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Editor used to open resolved files
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig
{
    /// Executable to launch
    pub command: String,

    /// Arguments placed before the file path
    pub args: Vec<String>,
}

impl Default for EditorConfig
{
    fn default() -> Self
    {
        Self { command: "zed".to_string(), args: Vec::new() }
    }
}

/// Load configuration for the project at `root`.
///
/// The first config file found in `root` wins; the current directory is
/// searched only when `root` has none. Environment variables override files.
pub fn load_config(root: &Path) -> Result<Config>
{
    let mut builder = config::Config::builder();

    if let Some(path) = find_config_file(root).or_else(|| find_config_file(Path::new(".")))
    {
        tracing::debug!(config = %path.display(), "using config file");
        builder = builder.add_source(config::File::from(path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    );

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

fn find_config_file(dir: &Path) -> Option<PathBuf>
{
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join(CONFIG_FILES[0]);

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            println!("DRY RUN: Would write {}:\n{toml_string}", config_path.display());
        }
        return Ok(());
    }

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
