#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Minimal two-case document with one corrupt case and one blank sheet.
#[allow(dead_code)]
pub const DOCUMENT: &str = r#"[
  {
    "title": "Web",
    "topic": {
      "title": "2.0>",
      "markers": [],
      "topics": [
        {
          "title": "Login",
          "markers": [],
          "topics": [
            {
              "title": "Password",
              "note": "account exists",
              "markers": [],
              "topics": [
                {
                  "title": "Valid password",
                  "markers": ["priority-1"],
                  "topics": [
                    {
                      "title": "Submit form",
                      "markers": [],
                      "topics": [{"title": "Dashboard opens", "markers": ["symbol-right"], "topics": []}]
                    }
                  ]
                },
                {"title": "Missing markers", "topics": []}
              ]
            },
            {"title": "Logout", "labels": ["auto"], "markers": [], "topics": []}
          ]
        }
      ]
    }
  },
  {"title": "Notes", "topic": {"title": "Scratch", "markers": [], "topics": []}}
]"#;

/// Create a configured `mindcase` command suitable for integration tests.
///
/// Points `MINDCASE_CONFIG` at a path that does not exist so the developer's
/// own config never leaks into a test.
#[allow(dead_code)]
pub fn mindcase_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mindcase"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("MINDCASE_CONFIG");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/mindcase-tests");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write [`DOCUMENT`] into `dir` and return its path.
#[allow(dead_code)]
pub fn write_document(dir: &Path) -> PathBuf {
    let path = dir.join("design.json");
    std::fs::write(&path, DOCUMENT).expect("failed to write test document");
    path
}
