use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use derive_new::new;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with a merged feature branch:
///
/// ```text
/// *   Merge branch 'feature'   (main)
/// |\
/// * | Work on main
/// | * Work on feature          (feature)
/// |/
/// *   Initial commit
/// ```
#[fixture]
pub fn merged_repository_dir(repository_dir: TempDir) -> TempDir {
    let dir = repository_dir.path();
    run_git_command(dir, &["init", "--initial-branch=main"])
        .assert()
        .success();

    commit_file(dir, "base.txt", "base", "Initial commit", "2023-01-01 10:00:00 +0000");
    run_git_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir, "main.txt", "main", "Work on main", "2023-01-01 11:00:00 +0000");

    run_git_command(dir, &["checkout", "-q", "feature"])
        .assert()
        .success();
    commit_file(
        dir,
        "feature.txt",
        "feature",
        "Work on feature",
        "2023-01-01 12:00:00 +0000",
    );

    run_git_command(dir, &["checkout", "-q", "main"])
        .assert()
        .success();
    git_with_author(
        dir,
        &["merge", "--no-ff", "-m", "Merge branch 'feature'", "feature"],
        "2023-01-01 13:00:00 +0000",
    )
    .assert()
    .success();

    repository_dir
}

/// JSON commit list of the same shape as `merged_repository_dir`
#[fixture]
pub fn merge_commits_json() -> String {
    r#"[
  { "oid": "a1", "parents": ["b2", "c3"], "message": "Merge branch 'feature'",
    "author": { "name": "fake_user", "email": "fake_email@email.com", "timestamp": 1672578000 },
    "branches": ["main"] },
  { "oid": "b2", "parents": ["d4"], "message": "Work on main",
    "author": { "name": "fake_user", "email": "fake_email@email.com", "timestamp": 1672570800 } },
  { "oid": "c3", "parents": ["d4"], "message": "Work on feature",
    "author": { "name": "fake_user", "email": "fake_email@email.com", "timestamp": 1672574400 },
    "branches": ["feature"], "remoteBranches": ["origin/feature"] },
  { "oid": "d4", "parents": [], "message": "Initial commit",
    "author": { "name": "fake_user", "email": "fake_email@email.com", "timestamp": 1672567200 } }
]"#
    .to_string()
}

pub fn write_json(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let file = dir.child(name);
    file.write_str(content).expect("Failed to write JSON file");
    file.path().to_path_buf()
}

pub fn run_bit_graph_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bit-graph").expect("Failed to find bit-graph binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("BIT_GRAPH_LANE_PITCH")
        .env_remove("BIT_GRAPH_DOT_RADIUS")
        .env_remove("BIT_GRAPH_ROW_HEIGHT")
        .env_remove("BIT_GRAPH_PALETTE_SIZE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

#[derive(Debug, Clone, new)]
struct RandomAuthor {
    name: String,
    email: String,
}

fn generate_random_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}

/// Git command with a random author and a fixed date, run without user config
pub fn git_with_author(dir: &Path, args: &[&str], date: &str) -> Command {
    let author = generate_random_author();
    let mut cmd = run_git_command(dir, args);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", author.name.as_str()),
        ("GIT_AUTHOR_EMAIL", author.email.as_str()),
        ("GIT_AUTHOR_DATE", date), // %Y-%m-%d %H:%M:%S %z
        ("GIT_COMMITTER_NAME", author.name.as_str()),
        ("GIT_COMMITTER_EMAIL", author.email.as_str()),
        ("GIT_COMMITTER_DATE", date),
        ("GIT_MERGE_AUTOEDIT", "no"),
    ]);
    cmd
}

pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str, date: &str) {
    std::fs::write(dir.join(name), content).expect("Failed to write file");
    run_git_command(dir, &["add", name]).assert().success();
    git_with_author(dir, &["commit", "-q", "-m", message], date)
        .assert()
        .success();
}
