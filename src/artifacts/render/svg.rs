//! Standalone SVG output
//!
//! Geometry follows the layout configuration: lane `n` is centered at
//! `n * lane_pitch + lane_pitch / 2`, row `r` spans
//! `[r * row_height, (r + 1) * row_height)` with its dot in the middle.
//! Straight segments are lines, curves are cubic Béziers, markers are circles
//! carrying the commit id as their click target.

use crate::artifacts::core::layout_config::LayoutConfig;
use crate::artifacts::graph::edge_router::{Edge, EdgeKind, EdgeRole};
use crate::artifacts::graph::layout::{GraphLayout, LayoutRow};
use crate::artifacts::objects::commit::GraphCommit;
use crate::artifacts::render::escape::escape_xml;
use crate::artifacts::render::palette::svg_color;
use crate::artifacts::render::{GraphRenderer, RenderOptions, display_oid, ref_label};
use derive_new::new;
use std::io::Write;

/// Width reserved for the commit description next to the graph
const TEXT_WIDTH: u64 = 720;
const FONT_SIZE: u64 = 12;

#[derive(new)]
pub struct SvgRenderer {
    config: LayoutConfig,
    options: RenderOptions,
}

/// Vertical extent of one row
#[derive(Debug, Clone, Copy)]
struct RowBand {
    top: u64,
    middle: u64,
    bottom: u64,
}

impl SvgRenderer {
    fn lane_pitch(&self) -> u64 {
        u64::from(self.config.lane_pitch)
    }

    fn row_height(&self) -> u64 {
        u64::from(self.config.row_height)
    }

    fn lane_x(&self, lane: usize) -> u64 {
        lane as u64 * self.lane_pitch() + self.lane_pitch() / 2
    }

    fn band(&self, row: usize) -> RowBand {
        let top = row as u64 * self.row_height();
        RowBand {
            top,
            middle: top + self.row_height() / 2,
            bottom: top + self.row_height(),
        }
    }

    fn edge_element(&self, row: &LayoutRow, edge: &Edge) -> String {
        let band = self.band(row.marker.row);
        let stroke = svg_color(self.config.color_key(match edge.role(row.lane) {
            EdgeRole::Outbound => edge.to_lane,
            EdgeRole::Inbound | EdgeRole::PassThrough => edge.from_lane,
        }));
        let (x1, x2) = (self.lane_x(edge.from_lane), self.lane_x(edge.to_lane));
        let (y1, y2) = match edge.role(row.lane) {
            EdgeRole::PassThrough => (band.top, band.bottom),
            EdgeRole::Inbound => (band.top, band.middle),
            EdgeRole::Outbound => (band.middle, band.bottom),
        };

        match edge.kind {
            EdgeKind::Straight => format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}"/>"#
            ),
            EdgeKind::Curve => format!(
                r#"<path d="M {x1} {y1} C {x1} {y2} {x2} {y1} {x2} {y2}" stroke="{stroke}"/>"#
            ),
        }
    }

    fn row_elements(&self, row: &LayoutRow, commit: &GraphCommit, text_x: u64) -> Vec<String> {
        let band = self.band(row.marker.row);
        let oid = escape_xml(commit.oid().as_ref());
        let label = display_oid(commit, self.options.abbrev_commit);
        let author = commit.author();
        let class = if commit.is_merge() { "commit merge" } else { "commit" };

        let mut elements = vec![
            format!(r#"<g class="row" data-oid="{oid}">"#),
            r#"  <g class="edges" fill="none" stroke-width="2">"#.to_string(),
        ];
        elements.extend(
            row.edges
                .iter()
                .map(|edge| format!("    {}", self.edge_element(row, edge))),
        );
        elements.push("  </g>".to_string());
        elements.push(format!(
            r#"  <circle class="{class}" cx="{}" cy="{}" r="{}" fill="{}"><title>{oid}&#10;{}&#10;{}</title></circle>"#,
            self.lane_x(row.marker.lane),
            band.middle,
            self.config.dot_radius,
            svg_color(row.color_key),
            escape_xml(&author.display_name()),
            escape_xml(&author.readable_timestamp()),
        ));

        let mut text = format!(
            r#"  <text x="{text_x}" y="{}"><tspan class="oid">{}</tspan>"#,
            band.middle + FONT_SIZE / 3,
            escape_xml(&label)
        );
        if let Some(refs) = ref_label(commit) {
            text.push_str(&format!(
                r#" <tspan class="refs">({})</tspan>"#,
                escape_xml(&refs)
            ));
        }
        text.push_str(&format!(
            r#" <tspan class="message">{}</tspan> <tspan class="author">{}</tspan></text>"#,
            escape_xml(commit.short_message()),
            escape_xml(&author.display_name())
        ));
        elements.push(text);
        elements.push("</g>".to_string());

        elements
    }
}

impl GraphRenderer for SvgRenderer {
    fn render(
        &self,
        layout: &GraphLayout,
        commits: &[GraphCommit],
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let graph_width = layout.lane_count().max(1) as u64 * self.lane_pitch();
        let text_x = graph_width + self.lane_pitch() / 2;
        let width = text_x + TEXT_WIDTH;
        let height = layout.rows().len().max(1) as u64 * self.row_height();

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="monospace" font-size="{FONT_SIZE}">"#
        )?;

        if layout.is_empty() {
            writeln!(
                writer,
                r#"<text x="{}" y="{}">No commits</text>"#,
                self.lane_pitch() / 2,
                self.band(0).middle + FONT_SIZE / 3
            )?;
        }

        for (row, commit) in layout.rows().iter().zip(commits) {
            for element in self.row_elements(row, commit, text_x) {
                writeln!(writer, "{element}")?;
            }
        }

        writeln!(writer, "</svg>")?;
        Ok(())
    }
}
