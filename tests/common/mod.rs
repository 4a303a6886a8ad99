//! Shared helpers for integration tests

#![allow(dead_code, reason = "each test binary uses only part of these helpers")]

use std::fs;
use std::path::{Path, PathBuf};

use branchpick::PickerHost;
use git2::{Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// Records host callbacks in the order they arrive.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<String>,
}

impl PickerHost for RecordingHost {
    fn on_select(&mut self, branch: &str) {
        self.events.push(format!("select:{branch}"));
    }

    fn on_close(&mut self) {
        self.events.push("close".to_string());
    }
}

/// A temporary repository with one commit on `master`.
pub struct TestRepo {
    _temp_dir: TempDir,
    pub path: PathBuf,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        // Canonicalize to handle symlinked temp dirs.
        let path = temp_dir
            .path()
            .canonicalize()
            .unwrap_or_else(|_| temp_dir.path().to_path_buf());

        let mut init_opts = RepositoryInitOptions::new();
        init_opts.initial_head("master");
        let repo = Repository::init_opts(&path, &init_opts)?;
        {
            let sig = Signature::now("Test", "test@test.com")?;
            fs::write(path.join("README.md"), "# Test Repository\n")?;
            let mut index = repo.index()?;
            index.add_path(Path::new("README.md"))?;
            index.write()?;
            let tree = repo.find_tree(index.write_tree()?)?;
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;
        }

        Ok(Self {
            _temp_dir: temp_dir,
            path,
            repo,
        })
    }

    pub fn create_branch(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo.branch(name, &head, false)?;
        Ok(())
    }

    pub fn switch_to(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.repo.set_head(&format!("refs/heads/{name}"))?;
        Ok(())
    }
}
