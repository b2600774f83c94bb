use serde::Serialize;
use std::process::Command;

/// Metadata block attached to every JSON document the CLI prints.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    pub command: &'static str,
}

impl Provenance {
    pub fn new(command: &'static str) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: gearshape::VERSION,
            command,
        }
    }
}

/// Revision that produced a rating: `GIT_COMMIT` baked in at build time,
/// then `GIT_COMMIT` at run time, then `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let nonempty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    option_env!("GIT_COMMIT")
        .and_then(nonempty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().as_deref().and_then(nonempty))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|r| !r.is_empty())
}
