use crate::GraphFormat;
use crate::areas::git_source::GitLogSource;
use crate::areas::session::Session;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LogOptions {
    pub path: PathBuf,
    pub max_count: Option<usize>,
    pub all: bool,
    pub format: GraphFormat,
}

impl Session {
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let source = GitLogSource::new(&opts.path)
            .with_max_count(opts.max_count)
            .with_all(opts.all);

        self.draw_graph(&source, opts.format)
    }
}
