//! Commit source backed by an existing git repository
//!
//! Runs `git log --topo-order` so that every child is listed before its
//! parents, then parses a separator-delimited record per commit.

use crate::areas::commit_source::{CommitSource, dedup_commits};
use crate::artifacts::objects::commit::{Author, GraphCommit};
use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use std::path::PathBuf;
use std::process::Command;

const FIELD_SEPARATOR: char = '\u{1f}';
const RECORD_SEPARATOR: char = '\u{1e}';
const LOG_FORMAT: &str = "--format=%H%x1f%P%x1f%an%x1f%ae%x1f%at%x1f%D%x1f%B%x1e";

const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";
const REMOTE_BRANCH_PREFIX: &str = "refs/remotes/";

#[derive(Debug, Clone)]
pub struct GitLogSource {
    path: PathBuf,
    max_count: Option<usize>,
    all: bool,
}

impl GitLogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_count: None,
            all: false,
        }
    }

    pub fn with_max_count(mut self, max_count: Option<usize>) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "--topo-order".to_string(),
            "--decorate=full".to_string(),
            LOG_FORMAT.to_string(),
        ];
        if self.all {
            args.push("--all".to_string());
        }
        if let Some(max_count) = self.max_count {
            args.push(format!("--max-count={max_count}"));
        }
        args
    }

    /// `git` invocation with messages forced to the C locale so that stderr
    /// can be matched
    fn command(&self) -> Command {
        let mut command = Command::new("git");
        command
            .env("LC_ALL", "C")
            .arg("-C")
            .arg(&self.path)
            .args(self.args());
        command
    }
}

impl CommitSource for GitLogSource {
    fn commits(&self) -> anyhow::Result<Vec<GraphCommit>> {
        debug_log!("running git {} in {}", self.args().join(" "), self.path.display());

        let output = self.command().output().context("failed to run git")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // an unborn branch has nothing to draw
            if stderr.contains("does not have any commits yet") {
                return Ok(Vec::new());
            }
            anyhow::bail!("git log failed: {}", stderr.trim());
        }

        parse_git_log(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse the output of `git log` run with the record format above
pub fn parse_git_log(output: &str) -> anyhow::Result<Vec<GraphCommit>> {
    let commits = output
        .split(RECORD_SEPARATOR)
        .map(|record| record.trim_start_matches(['\n', '\r']))
        .filter(|record| !record.is_empty())
        .map(parse_record)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(dedup_commits(commits))
}

fn parse_record(record: &str) -> anyhow::Result<GraphCommit> {
    let fields = record.splitn(7, FIELD_SEPARATOR).collect::<Vec<_>>();
    let [oid, parents, name, email, timestamp, decorations, message] = fields[..] else {
        anyhow::bail!("malformed git log record: {record:?}");
    };

    let oid = CommitId::try_parse(oid)?;
    let parents = parents
        .split_whitespace()
        .map(CommitId::try_parse)
        .collect::<anyhow::Result<Vec<_>>>()?;
    let timestamp = timestamp
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid author timestamp for {oid}: {timestamp:?}"))?;
    let author = Author::new(name.to_string(), email.to_string(), timestamp);
    let (branches, remote_branches) = classify_decorations(decorations);

    Ok(
        GraphCommit::new(oid, parents, author, message.trim_end().to_string())
            .with_branches(branches)
            .with_remote_branches(remote_branches),
    )
}

/// Split `%D` output into local and remote branch names
///
/// `HEAD`, tags and symbolic remote heads are not branches and are skipped.
fn classify_decorations(decorations: &str) -> (Vec<String>, Vec<String>) {
    let mut branches = Vec::new();
    let mut remote_branches = Vec::new();

    for decoration in decorations.split(", ").map(str::trim) {
        let name = decoration.strip_prefix("HEAD -> ").unwrap_or(decoration);

        if let Some(branch) = name.strip_prefix(LOCAL_BRANCH_PREFIX) {
            branches.push(branch.to_string());
        } else if let Some(remote) = name.strip_prefix(REMOTE_BRANCH_PREFIX)
            && !remote.ends_with("/HEAD")
        {
            remote_branches.push(remote.to_string());
        }
    }

    (branches, remote_branches)
}
