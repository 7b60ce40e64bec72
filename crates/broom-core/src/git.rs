//! Git CLI collaborator
//!
//! Thin wrapper over the `git` binary. The workflow consumes it through the
//! [`GitBackend`] trait so reconciliation logic can be exercised against an
//! in-memory backend in tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::BroomError;

/// Version-control operations the reconciliation workflow needs
pub trait GitBackend {
    /// Raw `git branch` listing, one branch per element, markers included
    fn list_local_branches(&self) -> Result<Vec<String>, BroomError>;

    /// Raw `git branch -r` listing
    fn list_remote_branches(&self) -> Result<Vec<String>, BroomError>;

    /// Force-delete one local branch
    fn delete_branch(&self, name: &str) -> Result<(), BroomError>;
}

/// Git CLI backend anchored at a repository clone
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
}

impl GitCli {
    /// Open a repository clone at `path`
    ///
    /// Fails with [`BroomError::NotAGitRepository`] when the path does not
    /// exist or `git rev-parse` refuses it. All later commands run with
    /// `git -C` against this root, so the process working directory is
    /// never changed.
    pub fn open(path: &Path) -> Result<Self, BroomError> {
        let not_a_repo = || BroomError::NotAGitRepository {
            path: path.display().to_string(),
        };

        if !path.is_dir() {
            return Err(not_a_repo());
        }

        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["rev-parse", "--git-dir"])
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BroomError::GitCommand {
                        reason: "git binary not found on PATH".to_string(),
                    }
                } else {
                    BroomError::GitCommand {
                        reason: format!("failed to run git: {}", e),
                    }
                }
            })?;

        if !output.status.success() {
            return Err(not_a_repo());
        }

        Ok(Self {
            repo_root: path.to_path_buf(),
        })
    }

    /// The repository root this backend is anchored at
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    fn run(&self, args: &[&str]) -> Result<String, BroomError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo_root)
            .args(args)
            .output()
            .map_err(|e| BroomError::GitCommand {
                reason: format!("failed to run git {}: {}", args.join(" "), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BroomError::GitCommand {
                reason: format!("git {} failed: {}", args.join(" "), stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn list(&self, args: &[&str]) -> Result<Vec<String>, BroomError> {
        let stdout = self.run(args)?;
        Ok(stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect())
    }
}

impl GitBackend for GitCli {
    fn list_local_branches(&self) -> Result<Vec<String>, BroomError> {
        self.list(&["branch"])
    }

    fn list_remote_branches(&self) -> Result<Vec<String>, BroomError> {
        self.list(&["branch", "-r"])
    }

    fn delete_branch(&self, name: &str) -> Result<(), BroomError> {
        self.run(&["branch", "-D", name]).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_missing_directory() {
        let err = GitCli::open(Path::new("/nonexistent/definitely/not/here")).unwrap_err();
        assert!(matches!(err, BroomError::NotAGitRepository { .. }));
    }

    #[test]
    fn test_open_rejects_plain_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = GitCli::open(dir.path());
        // Without git installed the probe itself fails; either way opening
        // a non-clone must not succeed.
        assert!(result.is_err());
    }
}
