//! **rails-jumper** - jump between Rails controller actions and their views
//!
//! Naming-convention resolution only: controller keys come from file paths,
//! actions from `def` lines, views from `app/views/<key>/<action>.<format>.<handler>`.
//! Nothing is parsed beyond single lines and nothing is cached between runs.

/// Command-line interface with clap integration
pub mod cli;

/// Resolution engine - controller ⇄ view mapping
pub mod core {
    /// Project layout, controller keys and the recognized suffix vocabulary
    pub mod layout;
    pub use layout::{ControllerKey, ProjectRoot};

    /// Class name ⇄ controller key conversion
    pub mod naming;
    pub use naming::{class_name_to_key, key_to_relative_controller_path};

    /// Cursor line → enclosing action (line heuristic)
    pub mod action;
    pub use action::action_at;

    /// One-hop parent controller lookup
    pub mod inherit;
    pub use inherit::parent_key_of;

    /// Controller file + line → existing view templates
    pub mod views;
    pub use views::{ViewFinder, ViewLookup, find_views, run as lookup_run};

    /// View file → controller file + action
    pub mod controller;
    pub use controller::{ControllerFinder, ControllerLookupResult, resolve, run as controller_run};

    /// Not-found outcomes reported by the subcommands
    pub mod error;
    pub use error::JumpError;
}

/// Infrastructure - configuration, file reading, editor launch, logging
pub mod infra {
    /// Configuration management with TOML support and env overrides
    pub mod config;
    pub use config::{Config, EditorConfig, init as config_init, load_config};

    /// Line-oriented source reading
    pub mod io;
    pub use io::read_lines;

    /// Fire-and-forget editor launch
    pub mod editor;

    /// tracing-subscriber setup for the binary
    pub mod logging;
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use self::core::{controller_run, lookup_run};
pub use infra::{Config, load_config};

// Core types for external consumers
pub use self::core::{
    ControllerFinder, ControllerKey, ControllerLookupResult, JumpError, ViewFinder, ViewLookup,
};
