use crate::GraphFormat;
use crate::areas::json_source::{JsonCommitSource, JsonInput};
use crate::areas::session::Session;

#[derive(Debug, Clone)]
pub struct RenderCommandOptions {
    pub input: JsonInput,
    pub format: GraphFormat,
}

impl Session {
    pub fn render(&self, opts: &RenderCommandOptions) -> anyhow::Result<()> {
        let source = JsonCommitSource::new(opts.input.clone());

        self.draw_graph(&source, opts.format)
    }
}
