//! GitHub relationship client.
//!
//! Structure:
//! - `RelationshipClient`: the five operations the rest of the crate needs
//! - `CommandRunner`: seam around process execution (mocked in tests)
//! - `GhClient`: implementation on top of the GitHub CLI (`gh`)
//!
//! No retry or rate-limit handling lives here: every call either returns a
//! complete result or a terminal error.

use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::ClientError;
use crate::types::{AccountName, RelationAction};

// ============================================================================
// CLIENT INTERFACE
// ============================================================================

/// The remote follow-relationship service.
///
/// Shared across worker threads, hence `Send + Sync`.
pub trait RelationshipClient: Send + Sync {
    /// Login of the authenticated account.
    fn current_user(&self) -> Result<AccountName, ClientError>;

    /// Accounts `user` follows.
    fn following(&self, user: &str) -> Result<Vec<AccountName>, ClientError>;

    /// Accounts following `user`.
    fn followers(&self, user: &str) -> Result<Vec<AccountName>, ClientError>;

    fn follow(&self, target: &str) -> Result<(), ClientError>;

    fn unfollow(&self, target: &str) -> Result<(), ClientError>;

    /// Dispatch a [`RelationAction`] to `follow` / `unfollow`.
    fn apply(&self, action: RelationAction, target: &str) -> Result<(), ClientError> {
        match action {
            RelationAction::Follow => self.follow(target),
            RelationAction::Unfollow => self.unfollow(target),
        }
    }
}

// ============================================================================
// PROCESS EXECUTION
// ============================================================================

/// Captured output of a successful command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Runs external commands. Non-zero exit is an error.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ClientError>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ClientError> {
        let command = command_line(program, args);
        tracing::debug!(%command, "running");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ClientError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ClientError::CommandFailed {
                command,
                // Killed by a signal → no code
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// GH CLIENT
// ============================================================================

/// `gh auth status` line naming the active account.
///
/// Current gh prints "Logged in to github.com account NAME (keyring)",
/// older releases print "Logged in to github.com as NAME (...)".
static AUTH_STATUS_USER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Logged in to github\.com (?:account|as) (\S+)").expect("static regex is valid")
});

/// Minimal projection of a GitHub user object.
#[derive(Debug, Deserialize)]
struct GitHubUser {
    login: String,
}

/// [`RelationshipClient`] that shells out to the GitHub CLI.
pub struct GhClient {
    program: String,
    runner: Box<dyn CommandRunner>,
}

impl GhClient {
    /// Client using `program` (usually just `gh`) and real processes.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_runner(program, ProcessRunner)
    }

    /// Client with an injected runner.
    pub fn with_runner(program: impl Into<String>, runner: impl CommandRunner + 'static) -> Self {
        GhClient {
            program: program.into(),
            runner: Box::new(runner),
        }
    }

    fn list(&self, endpoint: &str) -> Result<Vec<AccountName>, ClientError> {
        let output = self.runner.run(&self.program, &["api", "--paginate", endpoint])?;
        let logins = parse_logins(endpoint, &output.stdout)?;
        tracing::debug!(endpoint, count = logins.len(), "listed accounts");
        Ok(logins)
    }

    fn mutate(&self, method: &str, target: &str) -> Result<(), ClientError> {
        let endpoint = format!("user/following/{}", target);
        self.runner
            .run(&self.program, &["api", "--method", method, &endpoint])?;
        Ok(())
    }
}

impl RelationshipClient for GhClient {
    fn current_user(&self) -> Result<AccountName, ClientError> {
        let output = self.runner.run(&self.program, &["auth", "status"])?;

        // gh has moved this report between stdout and stderr across releases
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push('\n');
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        parse_auth_status(&text).ok_or(ClientError::UserNotFound)
    }

    fn following(&self, user: &str) -> Result<Vec<AccountName>, ClientError> {
        self.list(&format!("users/{}/following", user))
    }

    fn followers(&self, user: &str) -> Result<Vec<AccountName>, ClientError> {
        self.list(&format!("users/{}/followers", user))
    }

    fn follow(&self, target: &str) -> Result<(), ClientError> {
        self.mutate("PUT", target)
    }

    fn unfollow(&self, target: &str) -> Result<(), ClientError> {
        self.mutate("DELETE", target)
    }
}

/// Extract the logged-in account from `gh auth status` output.
pub fn parse_auth_status(text: &str) -> Option<AccountName> {
    AUTH_STATUS_USER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Flatten `gh api --paginate` output into logins.
///
/// With `--paginate`, gh writes one JSON array per page back to back
/// (`[...][...]`), so the output is a stream of arrays, not one document.
/// Empty output means zero pages.
pub fn parse_logins(endpoint: &str, output: &[u8]) -> Result<Vec<AccountName>, ClientError> {
    let mut logins = Vec::new();
    for page in serde_json::Deserializer::from_slice(output).into_iter::<Vec<GitHubUser>>() {
        let page = page.map_err(|source| ClientError::Parse {
            endpoint: endpoint.to_string(),
            source,
        })?;
        logins.extend(page.into_iter().map(|u| u.login));
    }
    Ok(logins)
}

// ============================================================================
// TESTS
// ============================================================================
