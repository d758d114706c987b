//! Layout rows as JSON

use crate::artifacts::graph::layout::GraphLayout;
use crate::artifacts::objects::commit::GraphCommit;
use crate::artifacts::render::GraphRenderer;
use std::io::Write;

/// Writes the layout rows as a pretty-printed JSON array
pub struct JsonRenderer;

impl GraphRenderer for JsonRenderer {
    fn render(
        &self,
        layout: &GraphLayout,
        _commits: &[GraphCommit],
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, layout.rows())?;
        writeln!(writer)?;
        Ok(())
    }
}
