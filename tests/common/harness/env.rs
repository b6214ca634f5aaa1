//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several suites
#![allow(dead_code)]

use super::ZettelCommand;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary archive and config directory.
///
/// The binary never sees the user's real config: `XDG_CONFIG_HOME` and
/// `HOME` point inside the temp directory. The editor is a plain `cp` from a
/// staged file onto the note, so a session "types" whatever was staged.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    /// Path to the archive directory
    archive_dir: PathBuf,
    /// Value for `XDG_CONFIG_HOME`
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    ///
    /// The default editor leaves the note untouched.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let archive_dir = temp_dir.path().join("zk");
        let config_home = temp_dir.path().join("config");

        let env = Self {
            temp_dir,
            archive_dir,
            config_home,
        };
        env.set_editor("true");
        env
    }

    /// Returns the path to the archive directory.
    pub fn archive_dir(&self) -> &Path {
        &self.archive_dir
    }

    /// Returns the path of the index database.
    pub fn db_path(&self) -> PathBuf {
        self.archive_dir.join("archive.db")
    }

    /// Returns the path of a rendered page.
    pub fn html_path(&self, name: &str) -> PathBuf {
        self.archive_dir.join("html").join(name)
    }

    /// Reads a rendered page.
    pub fn read_html(&self, name: &str) -> String {
        fs::read_to_string(self.html_path(name)).expect("Failed to read rendered page")
    }

    /// Returns the backing file of a note.
    pub fn note_path(&self, id: i64) -> PathBuf {
        self.archive_dir.join(format!("{id}.md"))
    }

    /// Writes the config file with the given editor command.
    pub fn set_editor(&self, editor: &str) {
        let config = format!(
            "editor = \"{editor}\"\nviewer = \"true\"\npoll_interval_ms = 5\n"
        );
        // macOS ignores XDG_CONFIG_HOME and looks under $HOME/Library
        let dirs = [
            self.config_home.join("zettel"),
            self.config_home
                .join("Library")
                .join("Application Support")
                .join("zettel"),
        ];
        for dir in dirs {
            fs::create_dir_all(&dir).expect("Failed to create config dir");
            fs::write(dir.join("config.toml"), &config).expect("Failed to write config");
        }
    }

    /// Makes the next editor session replace the note with `content`.
    pub fn editor_writes(&self, content: &str) {
        let staged = self.temp_dir.path().join("staged.md");
        fs::write(&staged, content).expect("Failed to stage editor content");
        self.set_editor(&format!("cp {}", staged.display()));
    }

    /// Makes the next editor session run a shell script; `$1` is the note.
    #[cfg(unix)]
    pub fn editor_script(&self, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let script = self.temp_dir.path().join("editor.sh");
        fs::write(&script, format!("#!/bin/sh\n{body}\n")).expect("Failed to write editor script");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to make editor script executable");
        self.set_editor(&script.to_string_lossy());
    }

    /// Creates a ZettelCommand configured for this test environment.
    pub fn cmd(&self) -> ZettelCommand {
        ZettelCommand::new()
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env("HOME", &self.config_home)
            .env_remove("EDITOR")
            .env_remove("VISUAL")
            .env_remove("RUST_LOG")
            .dir(&self.archive_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
