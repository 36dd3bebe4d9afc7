use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::{DateTime, Local};

use crate::config::PublishConfig;
use crate::{Error, Result};

/// Outcome of a publish attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Artifacts were committed and pushed
    Pushed,
    /// The output directory had no changes; nothing was committed or pushed
    NothingToPublish,
}

/// Publishes the output directory to a branch of a remote git repository.
///
/// Pushes are never retried; every failure surfaces as a categorized
/// error for the caller to log.
#[derive(Debug, Clone)]
pub struct GitPublisher {
    remote: String,
    branch: String,
    repo_dir: PathBuf,
}

impl GitPublisher {
    pub fn new(config: &PublishConfig, repo_dir: &Path) -> Self {
        Self {
            remote: config.remote.clone(),
            branch: config.branch.clone(),
            repo_dir: repo_dir.to_path_buf(),
        }
    }

    /// Commit and push the current state of `output_dir`.
    ///
    /// Checks run in order: authentication material, branch agreement,
    /// then change detection. An unchanged output directory skips the
    /// commit and push entirely.
    pub async fn publish(&self, output_dir: &Path) -> Result<PublishOutcome> {
        let publisher = self.clone();
        let output_dir = output_dir.to_path_buf();

        tokio::task::spawn_blocking(move || publisher.publish_blocking(&output_dir))
            .await
            .map_err(|e| Error::GitCommand(format!("task join error: {}", e)))?
    }

    fn publish_blocking(&self, output_dir: &Path) -> Result<PublishOutcome> {
        if self.remote.is_empty() {
            return Err(Error::Config("publish.remote is not configured".to_string()));
        }

        self.check_auth()?;
        self.check_branch()?;

        if !self.has_changes(output_dir)? {
            tracing::info!(
                "No changes under {}; skipping commit and push",
                output_dir.display()
            );
            return Ok(PublishOutcome::NothingToPublish);
        }

        let dir = output_dir.to_string_lossy();
        self.run_git(&["add", "--", dir.as_ref()])?;

        let message = commit_message(Local::now());
        self.run_git(&["commit", "-m", &message])?;
        tracing::info!("Committed: {}", message);

        let refspec = format!("{0}:{0}", self.branch);
        self.run_git(&["push", &self.remote, &refspec])
            .map_err(|e| match e {
                Error::GitCommand(msg) => Error::PushRejected(msg),
                other => other,
            })?;
        tracing::info!("Pushed '{}' to {}", self.branch, self.remote);

        Ok(PublishOutcome::Pushed)
    }

    /// SSH remotes need a reachable credential agent before any network
    /// operation is attempted
    fn check_auth(&self) -> Result<()> {
        if is_ssh_remote(&self.remote) && std::env::var_os("SSH_AUTH_SOCK").is_none() {
            return Err(Error::AuthUnavailable(
                "remote uses SSH but no credential agent is reachable (SSH_AUTH_SOCK is unset)"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// The local HEAD branch must agree with the configured push branch
    fn check_branch(&self) -> Result<()> {
        let local = self
            .run_git(&["rev-parse", "--abbrev-ref", "HEAD"])?
            .trim()
            .to_string();

        if local != self.branch {
            return Err(Error::BranchMismatch {
                local,
                expected: self.branch.clone(),
            });
        }
        Ok(())
    }

    fn has_changes(&self, output_dir: &Path) -> Result<bool> {
        let dir = output_dir.to_string_lossy();
        let status = self.run_git(&["status", "--porcelain", "--", dir.as_ref()])?;
        Ok(!status.trim().is_empty())
    }

    fn run_git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                Error::GitCommand(format!(
                    "failed to run git {}: {}",
                    args.first().unwrap_or(&""),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::GitCommand(format!(
                "git {} failed: {}",
                args.first().unwrap_or(&""),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

fn is_ssh_remote(remote: &str) -> bool {
    remote.starts_with("git@") || remote.starts_with("ssh://")
}

fn commit_message(at: DateTime<Local>) -> String {
    format!("news update {}", at.format("%Y%m%d-%H%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ssh_remote_detection() {
        assert!(is_ssh_remote("git@github.com:example/site.git"));
        assert!(is_ssh_remote("ssh://git@github.com/example/site.git"));
        assert!(!is_ssh_remote("https://github.com/example/site.git"));
    }

    #[test]
    fn test_commit_message_is_timestamped() {
        let at = Local.with_ymd_and_hms(2025, 8, 4, 9, 5, 0).unwrap();
        assert_eq!(commit_message(at), "news update 20250804-0905");
    }
}
