//! Renderers for a computed graph layout
//!
//! Renderers own presentation only: palette mapping, escaping of untrusted
//! commit text and the output syntax. Given the same layout they always
//! produce the same output.
//!
//! - `text`: `git log --graph` style text, optionally colored
//! - `svg`: standalone SVG document
//! - `json`: the layout rows as JSON
//! - `palette`: color key to color mapping
//! - `escape`: terminal and XML escaping

pub mod escape;
pub mod json;
pub mod palette;
pub mod svg;
pub mod text;

use crate::GraphFormat;
use crate::artifacts::core::layout_config::LayoutConfig;
use crate::artifacts::graph::layout::GraphLayout;
use crate::artifacts::objects::commit::GraphCommit;
use std::io::Write;

/// Converts layout rows plus commit metadata into visual output
pub trait GraphRenderer {
    /// Render `layout`, whose rows line up one-to-one with `commits`
    fn render(
        &self,
        layout: &GraphLayout,
        commits: &[GraphCommit],
        writer: &mut dyn Write,
    ) -> anyhow::Result<()>;
}

/// Presentation switches shared by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub color: bool,
    pub abbrev_commit: bool,
}

pub fn renderer_for(
    format: GraphFormat,
    config: LayoutConfig,
    options: RenderOptions,
) -> Box<dyn GraphRenderer> {
    match format {
        GraphFormat::Text => Box::new(text::TextRenderer::new(config, options)),
        GraphFormat::Json => Box::new(json::JsonRenderer),
        GraphFormat::Svg => Box::new(svg::SvgRenderer::new(config, options)),
    }
}

/// Commit id as shown next to the graph, abbreviated on request
pub(crate) fn display_oid(commit: &GraphCommit, abbrev_commit: bool) -> String {
    if abbrev_commit {
        commit.oid().to_short_oid()
    } else {
        commit.oid().to_string()
    }
}

/// Local then remote branch names, comma separated, if any
pub(crate) fn ref_label(commit: &GraphCommit) -> Option<String> {
    let refs = commit
        .branches()
        .iter()
        .chain(commit.remote_branches())
        .map(String::as_str)
        .collect::<Vec<_>>();

    (!refs.is_empty()).then(|| refs.join(", "))
}
