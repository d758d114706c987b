//! Commit source reading a JSON array of commit records

use crate::areas::commit_source::{CommitSource, dedup_commits};
use crate::artifacts::objects::commit::GraphCommit;
use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the JSON document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonInput {
    Stdin,
    File(PathBuf),
}

impl JsonInput {
    /// `-` means standard input, anything else is a file path
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => JsonInput::Stdin,
            Some(path) if path == Path::new("-") => JsonInput::Stdin,
            Some(path) => JsonInput::File(path.to_path_buf()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonCommitSource {
    input: JsonInput,
}

impl JsonCommitSource {
    pub fn new(input: JsonInput) -> Self {
        Self { input }
    }

    /// Parse a JSON array of commit records
    pub fn parse(content: &str) -> anyhow::Result<Vec<GraphCommit>> {
        let commits: Vec<GraphCommit> =
            serde_json::from_str(content).context("invalid commit list JSON")?;
        Ok(dedup_commits(commits))
    }
}

impl CommitSource for JsonCommitSource {
    fn commits(&self) -> anyhow::Result<Vec<GraphCommit>> {
        let content = match &self.input {
            JsonInput::Stdin => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("failed to read commit list from stdin")?;
                content
            }
            JsonInput::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read commit list {}", path.display()))?,
        };

        Self::parse(&content)
    }
}
