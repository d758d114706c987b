//! Rendering constants for the commit graph
//!
//! None of these affect lane assignment or edge routing; they only size and
//! color what renderers draw.
//!
//! ## Resolution order
//!
//! defaults < environment (`BIT_GRAPH_*`) < command line flags

use anyhow::Context;

pub const LANE_PITCH_ENV: &str = "BIT_GRAPH_LANE_PITCH";
pub const DOT_RADIUS_ENV: &str = "BIT_GRAPH_DOT_RADIUS";
pub const ROW_HEIGHT_ENV: &str = "BIT_GRAPH_ROW_HEIGHT";
pub const PALETTE_SIZE_ENV: &str = "BIT_GRAPH_PALETTE_SIZE";

/// Upper bound for every pixel dimension
pub const MAX_PIXELS: u32 = 4096;
/// Number of distinct colors the renderers can draw
pub const MAX_PALETTE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Horizontal spacing per lane, in pixels
    pub lane_pitch: u32,
    /// Commit marker radius, in pixels
    pub dot_radius: u32,
    /// Vertical spacing per commit, in pixels
    pub row_height: u32,
    /// Number of distinct lane colors before cycling
    pub palette_size: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            lane_pitch: 16,
            dot_radius: 4,
            row_height: 24,
            palette_size: 8,
        }
    }
}

/// Optional overrides, typically collected from command line flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOverrides {
    pub lane_pitch: Option<u32>,
    pub dot_radius: Option<u32>,
    pub row_height: Option<u32>,
    pub palette_size: Option<usize>,
}

impl LayoutConfig {
    /// Load the configuration from `BIT_GRAPH_*` environment variables
    pub fn load_from_env() -> anyhow::Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary variable lookup
    ///
    /// Unset variables keep their defaults; set but invalid ones are errors.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let config = LayoutConfig {
            lane_pitch: parse_var(&lookup, LANE_PITCH_ENV)?.unwrap_or(defaults.lane_pitch),
            dot_radius: parse_var(&lookup, DOT_RADIUS_ENV)?.unwrap_or(defaults.dot_radius),
            row_height: parse_var(&lookup, ROW_HEIGHT_ENV)?.unwrap_or(defaults.row_height),
            palette_size: parse_var(&lookup, PALETTE_SIZE_ENV)?.unwrap_or(defaults.palette_size),
        };
        config.validate()?;

        Ok(config)
    }

    /// Apply overrides on top of this configuration
    pub fn with_overrides(self, overrides: LayoutOverrides) -> anyhow::Result<Self> {
        let config = LayoutConfig {
            lane_pitch: overrides.lane_pitch.unwrap_or(self.lane_pitch),
            dot_radius: overrides.dot_radius.unwrap_or(self.dot_radius),
            row_height: overrides.row_height.unwrap_or(self.row_height),
            palette_size: overrides.palette_size.unwrap_or(self.palette_size),
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.lane_pitch == 0 {
            anyhow::bail!("lane pitch must be greater than zero");
        }
        if self.row_height == 0 {
            anyhow::bail!("row height must be greater than zero");
        }
        if self.palette_size == 0 {
            anyhow::bail!("palette size must be greater than zero");
        }

        for (name, value) in [
            ("lane pitch", self.lane_pitch),
            ("dot radius", self.dot_radius),
            ("row height", self.row_height),
        ] {
            if value > MAX_PIXELS {
                anyhow::bail!("{name} must be at most {MAX_PIXELS} pixels, got {value}");
            }
        }
        if self.palette_size > MAX_PALETTE_SIZE {
            anyhow::bail!(
                "palette size must be at most {MAX_PALETTE_SIZE}, got {}",
                self.palette_size
            );
        }
        Ok(())
    }

    /// Color key of a lane: `lane mod palette_size`
    pub fn color_key(&self, lane: usize) -> usize {
        lane % self.palette_size.max(1)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {value:?}"))
        })
        .transpose()
}
