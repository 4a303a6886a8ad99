//! Reading local branches and the checked-out branch

use crate::store::BranchUpdate;
use git2::{BranchType, ErrorCode, Repository};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors raised while reading branches from a repository
#[derive(Debug, Error)]
pub enum SourceError {
    /// No repository at or above the path
    #[error("Failed to open git repository at {path}")]
    Open {
        /// Path that was searched
        path: PathBuf,
        /// Underlying libgit2 error
        #[source]
        source: git2::Error,
    },

    /// Listing local branches failed
    #[error("Failed to list local branches")]
    List(#[source] git2::Error),

    /// Resolving HEAD failed for a reason other than detached or unborn HEAD
    #[error("Failed to resolve HEAD")]
    Head(#[source] git2::Error),
}

/// A repository the branch store is populated from.
pub struct BranchSource {
    repo: Repository,
    path: PathBuf,
}

impl std::fmt::Debug for BranchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchSource")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl BranchSource {
    /// Open the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not inside a git repository
    pub fn discover(path: &Path) -> Result<Self, SourceError> {
        let repo = Repository::discover(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    /// Path the source was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Local branch names.
    ///
    /// `main` and `master` come first, then the rest by most recent commit.
    /// Names that are not valid UTF-8 are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the branches cannot be listed
    pub fn branches(&self) -> Result<Vec<String>, SourceError> {
        let branches = self
            .repo
            .branches(Some(BranchType::Local))
            .map_err(SourceError::List)?;

        let mut named: Vec<(String, Option<i64>)> = Vec::new();
        for branch_result in branches {
            let (branch, _) = branch_result.map_err(SourceError::List)?;
            let name = match branch.name() {
                Ok(Some(name)) => name.to_string(),
                Ok(None) | Err(_) => {
                    warn!("Skipping branch with non UTF-8 name");
                    continue;
                }
            };
            let commit_time = branch
                .get()
                .peel_to_commit()
                .ok()
                .map(|c| c.time().seconds());
            named.push((name, commit_time));
        }

        named.sort_by(|(a_name, a_time), (b_name, b_time)| {
            branch_priority(b_name)
                .cmp(&branch_priority(a_name))
                .then_with(|| b_time.cmp(a_time))
                .then_with(|| a_name.cmp(b_name))
        });

        Ok(named.into_iter().map(|(name, _)| name).collect())
    }

    /// The checked-out branch, or `None` for a detached or unborn HEAD.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be resolved for another reason
    pub fn current_branch(&self) -> Result<Option<String>, SourceError> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(None);
            }
            Err(e) => return Err(SourceError::Head(e)),
        };

        if !head.is_branch() {
            return Ok(None);
        }
        Ok(head.shorthand().map(str::to_string))
    }

    /// Both fields, ready for the store.
    ///
    /// # Errors
    ///
    /// Returns an error if either the branches or HEAD cannot be read
    pub fn read(&self) -> Result<BranchUpdate, SourceError> {
        Ok(BranchUpdate {
            branches: self.branches()?,
            current_branch: self.current_branch()?,
        })
    }
}

/// Higher sorts first.
fn branch_priority(name: &str) -> u8 {
    match name {
        "main" => 2,
        "master" => 1,
        _ => 0,
    }
}
