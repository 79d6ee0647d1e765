//! Subcommand modules for the `sqv` binary.

pub mod index;
pub mod render;

use clap::*;
use sqv::libs::viewer::DisplayOptions;

/// Arguments shared by subcommands that lay out grids.
pub fn option_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("options")
            .long("options")
            .num_args(1)
            .help("JSON file of display options, e.g. {\"chunkSize\": 10}"),
    )
    .arg(
        Arg::new("chunk_size")
            .long("chunk-size")
            .short('c')
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help("Positions per chunk, 0 for a single block [default: 10]"),
    )
    .arg(
        Arg::new("font_size")
            .long("font-size")
            .num_args(1)
            .help("CSS font size with a two-letter unit [default: 14px]"),
    )
    .arg(
        Arg::new("space_size")
            .long("space-size")
            .value_parser(value_parser!(f64))
            .num_args(1)
            .help("Space between chunks, in em [default: 1]"),
    )
    .arg(
        Arg::new("top_indexes")
            .long("top-indexes")
            .action(ArgAction::SetTrue)
            .help("Number chunk ends above the grid"),
    )
    .arg(
        Arg::new("lateral_indexes")
            .long("lateral-indexes")
            .action(ArgAction::SetTrue)
            .help("Plain position of each chunk beside the labels"),
    )
    .arg(
        Arg::new("lateral_indexes_gap")
            .long("lateral-indexes-gap")
            .action(ArgAction::SetTrue)
            .help("Gap-aware residue number of each chunk beside the labels"),
    )
    .arg(
        Arg::new("one_line")
            .long("one-line")
            .action(ArgAction::SetTrue)
            .help("Single scrolling line instead of wrapped chunks"),
    )
    .arg(
        Arg::new("one_line_width")
            .long("one-line-width")
            .num_args(1)
            .help("CSS width of the one-line scroller [default: 300px]"),
    )
}

/// Defaults, then the `--options` file, then command line flags.
pub fn display_options(args: &ArgMatches) -> anyhow::Result<DisplayOptions> {
    let mut opt = match args.get_one::<String>("options") {
        Some(path) => DisplayOptions::from_file(std::path::Path::new(path))?,
        None => DisplayOptions::default(),
    };

    if let Some(chunk_size) = args.get_one::<usize>("chunk_size") {
        opt.chunk_size = *chunk_size;
    }
    if let Some(font_size) = args.get_one::<String>("font_size") {
        opt.font_size = font_size.to_string();
    }
    if let Some(space_size) = args.get_one::<f64>("space_size") {
        opt.space_size = *space_size;
    }
    if let Some(width) = args.get_one::<String>("one_line_width") {
        opt.one_line_width = width.to_string();
    }
    opt.top_indexes |= args.get_flag("top_indexes");
    opt.lateral_indexes |= args.get_flag("lateral_indexes");
    opt.lateral_indexes_gap |= args.get_flag("lateral_indexes_gap");
    opt.one_line_setting |= args.get_flag("one_line");

    tracing::debug!(?opt, "display options");
    Ok(opt)
}
