use crate::GraphFormat;
use crate::areas::commit_source::CommitSource;
use crate::artifacts::core::layout_config::LayoutConfig;
use crate::artifacts::graph::layout::GraphLayout;
use crate::artifacts::render::{RenderOptions, renderer_for};
use std::cell::{RefCell, RefMut};
use std::io::Write;

/// Everything a command needs to draw a graph: where to write and how to draw
pub struct Session {
    writer: RefCell<Box<dyn Write>>,
    config: LayoutConfig,
    options: RenderOptions,
}

impl Session {
    pub fn new(
        writer: Box<dyn Write>,
        config: LayoutConfig,
        options: RenderOptions,
    ) -> anyhow::Result<Self> {
        config.validate()?;

        Ok(Session {
            writer: RefCell::new(writer),
            config,
            options,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Lay out the commits of `source` and write them in `format`
    pub fn draw_graph(&self, source: &dyn CommitSource, format: GraphFormat) -> anyhow::Result<()> {
        let commits = source.commits()?;
        let layout = GraphLayout::compute(&commits, &self.config);
        debug_log!(
            "laid out {} commits over {} lanes",
            layout.rows().len(),
            layout.lane_count()
        );

        let renderer = renderer_for(format, self.config, self.options);
        let mut writer = self.writer();
        renderer.render(&layout, &commits, &mut **writer)?;
        writer.flush()?;

        Ok(())
    }
}
