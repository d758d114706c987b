//! `git log --graph` style text output
//!
//! Lane `n` is drawn in column `2n`. Every commit gets one line with its dot
//! (`*`) and the tracks passing by (`|`). Curves need extra connector lines:
//! one above the commit line when tracks converge into the dot, one below it
//! when tracks branch out of it.
//!
//! ```text
//! *   a1b2c3d (main) Merge branch 'feature'
//! |\
//! * | d4e5f6a Work on main
//! | * 0a1b2c3 (feature) Work on feature
//! |/
//! *   9f8e7d6 Initial commit
//! ```

use crate::artifacts::core::layout_config::LayoutConfig;
use crate::artifacts::graph::edge_router::{EdgeKind, EdgeRole};
use crate::artifacts::graph::layout::{GraphLayout, LayoutRow};
use crate::artifacts::objects::commit::GraphCommit;
use crate::artifacts::render::escape::sanitize_terminal;
use crate::artifacts::render::palette::terminal_color;
use crate::artifacts::render::{GraphRenderer, RenderOptions, display_oid};
use colored::Colorize;
use derive_new::new;
use std::io::Write;

const EMPTY_PLACEHOLDER: &str = "(no commits)";

#[derive(Debug, Clone, Copy)]
struct Cell {
    glyph: char,
    color_key: usize,
}

impl Cell {
    const BLANK: Cell = Cell {
        glyph: ' ',
        color_key: 0,
    };
}

/// One text line worth of graph columns
struct Canvas<'a> {
    cells: Vec<Cell>,
    config: &'a LayoutConfig,
}

impl<'a> Canvas<'a> {
    fn new(lane_count: usize, config: &'a LayoutConfig) -> Self {
        let width = (lane_count.max(1) * 2).saturating_sub(1);
        Self {
            cells: vec![Cell::BLANK; width],
            config,
        }
    }

    fn put(&mut self, column: usize, glyph: char, lane: usize) {
        if let Some(cell) = self.cells.get_mut(column) {
            *cell = Cell {
                glyph,
                color_key: self.config.color_key(lane),
            };
        }
    }

    /// Like `put`, but never overwrites a glyph already drawn
    fn fill(&mut self, column: usize, glyph: char, lane: usize) {
        if self.cells.get(column).is_some_and(|cell| cell.glyph == ' ') {
            self.put(column, glyph, lane);
        }
    }

    fn vertical(&mut self, lane: usize) {
        self.put(lane * 2, '|', lane);
    }

    /// Diagonal between two lanes on adjacent lines, colored as `track_lane`
    fn diagonal(&mut self, upper_lane: usize, lower_lane: usize, track_lane: usize) {
        let (left, right) = (upper_lane.min(lower_lane), upper_lane.max(lower_lane));
        let (column, glyph) = if upper_lane < lower_lane {
            (left * 2 + 1, '\\')
        } else {
            (right * 2 - 1, '/')
        };

        self.put(column, glyph, track_lane);
        for underline in left * 2 + 1..right * 2 {
            self.fill(underline, '_', track_lane);
        }
    }

    fn render(&self, color: bool, trim: bool) -> String {
        let end = if trim {
            self.cells
                .iter()
                .rposition(|cell| cell.glyph != ' ')
                .map_or(0, |last| last + 1)
        } else {
            self.cells.len()
        };

        self.cells[..end]
            .iter()
            .map(|cell| {
                if color && cell.glyph != ' ' {
                    cell.glyph
                        .to_string()
                        .as_str()
                        .color(terminal_color(cell.color_key))
                        .to_string()
                } else {
                    cell.glyph.to_string()
                }
            })
            .collect()
    }
}

#[derive(new)]
pub struct TextRenderer {
    config: LayoutConfig,
    options: RenderOptions,
}

impl TextRenderer {
    fn render_row(
        &self,
        row: &LayoutRow,
        commit: &GraphCommit,
        lane_count: usize,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let pass_throughs = row
            .edges
            .iter()
            .filter(|edge| edge.role(row.lane) == EdgeRole::PassThrough)
            .collect::<Vec<_>>();
        let curves_with_role = |role: EdgeRole| {
            row.edges
                .iter()
                .any(|edge| edge.role(row.lane) == role && edge.kind == EdgeKind::Curve)
        };

        if curves_with_role(EdgeRole::Inbound) {
            let mut canvas = Canvas::new(lane_count, &self.config);
            pass_throughs
                .iter()
                .for_each(|edge| canvas.vertical(edge.from_lane));
            for edge in row.edges.iter().filter(|edge| edge.into_dot_from_above) {
                match edge.kind {
                    EdgeKind::Straight => canvas.vertical(row.lane),
                    EdgeKind::Curve => canvas.diagonal(edge.from_lane, row.lane, edge.from_lane),
                }
            }
            writeln!(writer, "{}", canvas.render(self.options.color, true))?;
        }

        let mut canvas = Canvas::new(lane_count, &self.config);
        pass_throughs
            .iter()
            .for_each(|edge| canvas.vertical(edge.from_lane));
        canvas.put(row.lane * 2, '*', row.lane);
        writeln!(
            writer,
            "{} {}",
            canvas.render(self.options.color, false),
            self.describe(commit)
        )?;

        if curves_with_role(EdgeRole::Outbound) {
            let mut canvas = Canvas::new(lane_count, &self.config);
            pass_throughs
                .iter()
                .for_each(|edge| canvas.vertical(edge.from_lane));
            for edge in row
                .edges
                .iter()
                .filter(|edge| edge.role(row.lane) == EdgeRole::Outbound)
            {
                match edge.kind {
                    EdgeKind::Straight => canvas.vertical(row.lane),
                    EdgeKind::Curve => canvas.diagonal(row.lane, edge.to_lane, edge.to_lane),
                }
            }
            writeln!(writer, "{}", canvas.render(self.options.color, true))?;
        }

        Ok(())
    }

    /// "<oid> (<branches>, <remote branches>) <subject>"
    fn describe(&self, commit: &GraphCommit) -> String {
        let oid = sanitize_terminal(&display_oid(commit, self.options.abbrev_commit));
        let subject = sanitize_terminal(commit.short_message());

        let local = commit.branches().iter().map(|name| {
            self.paint(sanitize_terminal(name), |s| s.green().bold().to_string())
        });
        let remote = commit.remote_branches().iter().map(|name| {
            self.paint(sanitize_terminal(name), |s| s.red().bold().to_string())
        });
        let refs = local.chain(remote).collect::<Vec<_>>();
        let decoration = if refs.is_empty() {
            String::new()
        } else {
            format!(" ({})", refs.join(", "))
        };

        format!(
            "{}{} {}",
            self.paint(oid, |s| s.yellow().to_string()),
            decoration,
            subject
        )
    }

    fn paint(&self, text: String, style: impl Fn(&str) -> String) -> String {
        if self.options.color {
            style(&text)
        } else {
            text
        }
    }
}

impl GraphRenderer for TextRenderer {
    fn render(
        &self,
        layout: &GraphLayout,
        commits: &[GraphCommit],
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        if layout.is_empty() {
            writeln!(writer, "{EMPTY_PLACEHOLDER}")?;
            return Ok(());
        }

        for (row, commit) in layout.rows().iter().zip(commits) {
            self.render_row(row, commit, layout.lane_count(), writer)?;
        }

        Ok(())
    }
}
