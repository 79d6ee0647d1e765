extern crate clap;
use clap::*;

mod cmd_sqv;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = Command::new("sqv")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`sqv` - Sequence Viewer for block FA alignments")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_sqv::render::make_subcommand())
        .subcommand(cmd_sqv::index::make_subcommand())
        .after_help(
            r###"Subcommands:

* render - Chunked, indexed grids as HTML or plain text
* index  - Plain and gap-aware residue numbers of every chunk

Set RUST_LOG=debug to trace grid building and wrap detection.

"###,
        );

    // Check which subcommand the user ran...
    match app.get_matches().subcommand() {
        Some(("render", sub_matches)) => cmd_sqv::render::execute(sub_matches),
        Some(("index", sub_matches)) => cmd_sqv::index::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
