use anyhow::Result;
use bit_graph::areas::json_source::JsonInput;
use bit_graph::areas::session::Session;
use bit_graph::artifacts::core::PagerWriter;
use bit_graph::artifacts::core::layout_config::{LayoutConfig, LayoutOverrides};
use bit_graph::artifacts::render::RenderOptions;
use bit_graph::commands::plumbing::render::RenderCommandOptions;
use bit_graph::commands::porcelain::log::LogOptions;
use bit_graph::{ColorMode, GraphFormat};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bit-graph",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Draw the branch topology of a commit history",
    long_about = "This tool lays out an ordered list of commits into lanes and draws the \
    connecting edges, in the spirit of `git log --graph`. \
    It reads history either from an existing git repository or from a JSON commit list.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, global = true, help = "Horizontal spacing per lane, in pixels")]
    lane_pitch: Option<u32>,
    #[arg(long, global = true, help = "Commit marker radius, in pixels")]
    dot_radius: Option<u32>,
    #[arg(long, global = true, help = "Vertical spacing per commit, in pixels")]
    row_height: Option<u32>,
    #[arg(long, global = true, help = "Number of lane colors before cycling")]
    palette_size: Option<usize>,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ColorMode::Auto,
        help = "When to color text output"
    )]
    color: ColorMode,
    #[arg(long, global = true, help = "Show abbreviated commit ids")]
    abbrev_commit: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "log",
        about = "Draw the history of a git repository",
        long_about = "This command runs `git log --topo-order` in the given repository \
        (the current directory by default) and draws the resulting commit graph."
    )]
    Log {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
        #[arg(short = 'n', long, help = "Limit the number of commits drawn")]
        max_count: Option<usize>,
        #[arg(long, help = "Draw all refs, not just HEAD")]
        all: bool,
        #[arg(long, value_enum, default_value_t = GraphFormat::Text, help = "Output format")]
        format: GraphFormat,
    },
    #[command(
        name = "render",
        about = "Draw a commit list read from JSON",
        long_about = "This command reads a JSON array of commit records, children before parents, \
        from a file or standard input and draws the resulting commit graph."
    )]
    Render {
        #[arg(short, long, help = "The JSON file to read, `-` for standard input")]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = GraphFormat::Text, help = "Output format")]
        format: GraphFormat,
    },
}

impl Commands {
    fn format(&self) -> GraphFormat {
        match self {
            Commands::Log { format, .. } | Commands::Render { format, .. } => *format,
        }
    }
}

fn use_color(mode: ColorMode, format: GraphFormat) -> bool {
    if format != GraphFormat::Text {
        return false;
    }

    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}

fn use_pager(format: GraphFormat) -> bool {
    format == GraphFormat::Text
        && std::env::var_os("NO_PAGER").is_none()
        && std::io::stdout().is_terminal()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = LayoutConfig::load_from_env()?.with_overrides(LayoutOverrides {
        lane_pitch: cli.lane_pitch,
        dot_radius: cli.dot_radius,
        row_height: cli.row_height,
        palette_size: cli.palette_size,
    })?;

    let format = cli.command.format();
    let color = use_color(cli.color, format);
    colored::control::set_override(color);
    let options = RenderOptions {
        color,
        abbrev_commit: cli.abbrev_commit,
    };

    let pager = use_pager(format).then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };
    let session = Session::new(writer, config, options)?;

    match cli.command {
        Commands::Log {
            path,
            max_count,
            all,
            format,
        } => {
            let path = match path {
                Some(path) => path,
                None => std::env::current_dir()?,
            };

            session.log(&LogOptions {
                path,
                max_count,
                all,
                format,
            })?
        }
        Commands::Render { input, format } => session.render(&RenderCommandOptions {
            input: JsonInput::from_arg(input.as_deref()),
            format,
        })?,
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
