//! Lane colors
//!
//! Colors are a pure function of the color key (`lane mod palette_size`), so
//! identical layouts are always drawn with identical colors.

use crate::artifacts::core::layout_config::MAX_PALETTE_SIZE;
use colored::Color;

const TERMINAL_PALETTE: [Color; MAX_PALETTE_SIZE] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
];

const SVG_PALETTE: [&str; MAX_PALETTE_SIZE] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#008080", "#9a6324", "#800000",
];

pub fn terminal_color(color_key: usize) -> Color {
    TERMINAL_PALETTE[color_key % TERMINAL_PALETTE.len()]
}

pub fn svg_color(color_key: usize) -> &'static str {
    SVG_PALETTE[color_key % SVG_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::core::layout_config::LayoutConfig;
    use std::collections::HashSet;

    #[test]
    fn test_colors_cycle() {
        assert_eq!(terminal_color(0), terminal_color(TERMINAL_PALETTE.len()));
        assert_eq!(svg_color(1), svg_color(SVG_PALETTE.len() + 1));
        assert_ne!(svg_color(0), svg_color(1));
    }

    #[test]
    fn test_every_key_of_largest_palette_is_distinct() {
        let config = LayoutConfig {
            palette_size: MAX_PALETTE_SIZE,
            ..LayoutConfig::default()
        };
        let keys = (0..MAX_PALETTE_SIZE)
            .map(|lane| config.color_key(lane))
            .collect::<Vec<_>>();

        let svg = keys.iter().map(|&key| svg_color(key)).collect::<HashSet<_>>();
        let terminal = keys
            .iter()
            .map(|&key| format!("{:?}", terminal_color(key)))
            .collect::<HashSet<_>>();
        assert_eq!(svg.len(), MAX_PALETTE_SIZE);
        assert_eq!(terminal.len(), MAX_PALETTE_SIZE);
        assert_eq!(svg_color(config.color_key(MAX_PALETTE_SIZE)), svg_color(0));
    }
}
