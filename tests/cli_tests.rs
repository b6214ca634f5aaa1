//! End-to-end CLI test suite.
//!
//! Tests organized by command. Each test drives the binary through its
//! public interface against an isolated archive.

mod common;

use common::harness::TestEnv;
use predicates::prelude::*;

const TOPOLOGY: &str = "---\nshortcut: topology\n---\nA space with *open sets*.\n";

// ===========================================
// ls command tests
// ===========================================
mod ls_tests {
    use super::*;

    #[test]
    fn test_ls_on_fresh_archive() {
        let env = TestEnv::new();

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout("Found 0 notes.\n");

        assert!(env.db_path().exists(), "index database should be created");
        assert!(env.archive_dir().join("templates").join("base.html").exists());
    }

    #[test]
    fn test_ls_json_empty() {
        let env = TestEnv::new();

        let json: serde_json::Value = env.cmd().ls().format_json().output_json();

        assert_eq!(json, serde_json::json!({ "data": [] }));
    }

    #[test]
    fn test_list_alias() {
        let env = TestEnv::new();

        env.cmd()
            .args(["list"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Found 0 notes."));
    }

    #[test]
    fn test_logs_stay_off_stdout() {
        let env = TestEnv::new();

        env.cmd()
            .args(["-vv"])
            .ls()
            .assert()
            .success()
            .stdout("Found 0 notes.\n");
    }
}

// ===========================================
// new command tests
// ===========================================
#[cfg(unix)]
mod new_tests {
    use super::*;

    #[test]
    fn test_new_saves_what_editor_wrote() {
        let env = TestEnv::new();
        env.editor_writes(TOPOLOGY);

        env.cmd()
            .new_note()
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved topology [1]"));

        let page = env.read_html("topology.html");
        assert!(page.contains("<em>open sets</em>"));
        let index = env.read_html("index.html");
        assert!(index.contains("topology.html"));
    }

    #[test]
    fn test_new_untouched_note_uses_id_label() {
        let env = TestEnv::new();

        env.cmd()
            .new_note()
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved 1 [1]"));

        assert!(env.note_path(1).exists());
    }

    #[test]
    fn test_new_notes_listed_by_recency() {
        let env = TestEnv::new();
        env.editor_writes("---\nshortcut: older\n---\n");
        env.cmd().new_note().assert().success();
        // Commit times are whole seconds; make sure the second note is newer.
        std::thread::sleep(std::time::Duration::from_millis(1100));
        env.editor_writes("---\nshortcut: newer\n---\n");
        env.cmd().new_note().assert().success();

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout("Found 2 notes.\nnewer\nolder\n");
    }

    #[test]
    fn test_new_with_malformed_content_fails() {
        let env = TestEnv::new();
        env.editor_writes("no header\n");

        env.cmd()
            .new_note()
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"))
            .stderr(predicate::str::contains("malformed frontmatter"));
    }

    #[test]
    fn test_watcher_failure_is_reported_after_editor_exits() {
        let env = TestEnv::new();
        let html = env.archive_dir().join("html");
        // Saves once the watcher is running, after the output directory
        // has been replaced by a plain file.
        env.editor_script(&format!(
            "sleep 0.3\nrm -rf '{html}'\ntouch '{html}'\nprintf -- '---\\nshortcut: alpha\\n---\\n' > \"$1\"\nsleep 0.5",
            html = html.display()
        ));

        env.cmd()
            .new_note()
            .assert()
            .failure()
            .stderr(predicate::str::starts_with("error:"))
            .stderr(predicate::str::contains("watcher").not());
    }

    #[test]
    fn test_new_with_missing_editor_fails() {
        let env = TestEnv::new();
        env.set_editor("/nonexistent/zettel-test-editor");

        env.cmd()
            .new_note()
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to launch editor"));
    }
}

// ===========================================
// edit command tests
// ===========================================
#[cfg(unix)]
mod edit_tests {
    use super::*;

    #[test]
    fn test_edit_by_alias_changes_label() {
        let env = TestEnv::new();
        env.editor_writes(TOPOLOGY);
        env.cmd().new_note().assert().success();

        env.editor_writes("---\nshortcut: metric\n---\nDistances.\n");
        env.cmd()
            .edit("topology")
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved metric [1]"));

        let json: serde_json::Value = env.cmd().ls().format_json().output_json();
        assert_eq!(json["data"][0]["id"], 1);
        assert_eq!(json["data"][0]["alias"], "metric");
        assert!(env.read_html("metric.html").contains("Distances."));
    }

    #[test]
    fn test_edit_by_id() {
        let env = TestEnv::new();
        env.editor_writes(TOPOLOGY);
        env.cmd().new_note().assert().success();

        env.cmd()
            .edit("1")
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved topology [1]"));
    }

    #[test]
    fn test_edit_unknown_note_fails() {
        let env = TestEnv::new();

        env.cmd()
            .edit("nothing")
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"));
    }

    #[test]
    fn test_edit_keeps_index_when_save_is_malformed() {
        let env = TestEnv::new();
        env.editor_writes(TOPOLOGY);
        env.cmd().new_note().assert().success();

        env.editor_writes("---\nshortcut: half");
        env.cmd().edit("topology").assert().failure();

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout("Found 1 notes.\ntopology\n");
    }
}

// ===========================================
// render and view command tests
// ===========================================
#[cfg(unix)]
mod site_tests {
    use super::*;

    #[test]
    fn test_render_regenerates_pages() {
        let env = TestEnv::new();
        env.editor_writes(TOPOLOGY);
        env.cmd().new_note().assert().success();
        std::fs::remove_file(env.html_path("topology.html")).unwrap();

        env.cmd()
            .render()
            .assert()
            .success()
            .stdout(predicate::str::contains("Rendered 1 notes"));

        assert!(env.html_path("topology.html").exists());
    }

    #[test]
    fn test_render_reports_broken_note() {
        let env = TestEnv::new();
        env.editor_writes(TOPOLOGY);
        env.cmd().new_note().assert().success();
        std::fs::write(env.note_path(1), "---\n").unwrap();

        env.cmd()
            .render()
            .assert()
            .success()
            .stdout(predicate::str::contains("skipped 1"))
            .stderr(predicate::str::contains("topology"));
    }

    #[test]
    fn test_similar_aliases_get_separate_pages() {
        let env = TestEnv::new();
        env.editor_writes("---\nshortcut: Hahn Banach\n---\nFIRST\n");
        env.cmd().new_note().assert().success();
        env.editor_writes("---\nshortcut: Hahn-Banach\n---\nSECOND\n");
        env.cmd().new_note().assert().success();

        assert!(env.read_html("Hahn%20Banach.html").contains("FIRST"));
        assert!(env.read_html("Hahn-Banach.html").contains("SECOND"));
        let index = env.read_html("index.html");
        assert!(index.contains("href=\"Hahn%2520Banach.html\""));
        assert_eq!(index.matches("href=\"Hahn-Banach.html\"").count(), 1);
    }

    #[test]
    fn test_view_renders_missing_index() {
        let env = TestEnv::new();

        env.cmd().view().assert().success();

        assert!(env.html_path("index.html").exists());
    }
}
