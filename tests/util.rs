//! Shared test utilities for integration tests
//!
//! Builds a small Rails application tree on disk so every test
//! runs against real files without touching the developer's machine.

#![allow(dead_code)]

use assert_fs::prelude::*;
use std::path::PathBuf;

/// Controller with `index` (lines 2-4) and `show` (lines 6-8)
pub const USERS_CONTROLLER: &str = "\
class UsersController < ApplicationController
  def index
    @users = User.all
  end

  def show
    @user = User.find(params[:id])
  end
end
";

/// Nested controller inheriting from UsersController; `show` on line 2,
/// `index` on line 6
pub const ARCHIVES_CONTROLLER: &str = "\
class Users::ArchivesController < UsersController
  def show
    @archive = Archive.find(params[:id])
  end

  def index
    @archives = Archive.all
  end
end
";

/// Namespaced controller without any views of its own
pub const ADMIN_USERS_CONTROLLER: &str = "\
class Admin::UsersController < ApplicationController
  def edit
  end
end
";

/// Create the dummy Rails application.
pub fn make_rails_fixture() -> assert_fs::TempDir
{
    // Initialize the temporary project root
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    let files = [
        ("app/controllers/application_controller.rb", "class ApplicationController < ActionController::Base\nend\n"),
        ("app/controllers/users_controller.rb", USERS_CONTROLLER),
        ("app/controllers/users/archives_controller.rb", ARCHIVES_CONTROLLER),
        ("app/controllers/admin/users_controller.rb", ADMIN_USERS_CONTROLLER),
        ("app/views/users/index.html.erb", "<h1>Users</h1>\n"),
        ("app/views/users/show.html.erb", "<h1><%= @user.name %></h1>\n"),
        ("app/views/users/show.json.jbuilder", "json.extract! @user, :id, :name\n"),
        ("app/views/users/missing_action.html.erb", "<p>orphan</p>\n"),
        ("app/views/users/archives/show.html.erb", "<h1>Archive</h1>\n"),
    ];

    // Write each file into the fixture, creating parent directories
    for (path, body) in files
    {
        tmp.child(path)
            .write_str(body)
            .expect("write fixture file");
    }

    // Return the prepared directory to the caller
    tmp
}

/// Absolute path of `rel` inside the fixture
pub fn path_in(
    tmp: &assert_fs::TempDir,
    rel: &str,
) -> PathBuf
{
    tmp.path()
        .join(rel)
}
