use clap::*;
use sqv::libs::viewer::document::flow_lines;
use sqv::libs::viewer::{html, text};
use sqv::libs::viewer::{FlowDocument, ResizeCoordinator, SequenceViewer};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("render")
        .about("Renders block FA files as chunked, indexed grids")
        .after_help(
            r###"
Renders every block of the input as its own viewer, `sqv-body-1`, `sqv-body-2`, ...

Notes:
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'
* Rows are labelled with the sequence names; lateral indexes start at the header range
    * `S1.chr1(+):101-107` numbers its first residue 101
    * A header without a range starts at 1
* `--width` is the container width in characters. Chunks wrap onto new visual lines,
  and only the first chunk of each line shows its labels and indexes
* `--lateral-indexes` wins over `--lateral-indexes-gap`; `--top-indexes` replaces both counters
* Options are resolved as defaults < `--options` file < command line flags

Examples:
1. HTML page with gap-aware residue numbers:
   sqv render tests/fas/example.fas --lateral-indexes-gap

2. Plain text, 5 positions per chunk, 40 characters wide:
   sqv render tests/fas/example.fas --format text -c 5 --width 40

3. Options from a file, live re-layout in the browser:
   sqv render tests/fas/example.fas --options opts.json --script -o view.html

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Input block FA file(s) to process"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .short('w')
                .value_parser(value_parser!(usize))
                .num_args(1)
                .default_value("80")
                .help("Container width in characters"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["html", "text"])
                .default_value("html")
                .help("Output format"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .action(ArgAction::SetTrue)
                .help("Embed a script re-running wrap detection on browser resize"),
        );

    super::option_args(cmd).arg(
        Arg::new("outfile")
            .long("outfile")
            .short('o')
            .num_args(1)
            .default_value("stdout")
            .help("Output filename. [stdout] for screen"),
    )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let mut writer = sqv::writer(args.get_one::<String>("outfile").unwrap())?;
    let opt = super::display_options(args)?;
    let width = *args.get_one::<usize>("width").unwrap();
    let format = args.get_one::<String>("format").unwrap();

    //----------------------------
    // Ops
    //----------------------------
    let mut doc = FlowDocument::new();
    let mut coordinator = ResizeCoordinator::new();
    let mut containers = vec![];

    for infile in args.get_many::<String>("infiles").unwrap() {
        let mut reader = sqv::reader(infile)?;
        while let Some(block) = sqv::libs::fas::next_fas_block(&mut reader)? {
            let container = format!("sqv-body-{}", containers.len() + 1);
            doc.add_container(&container, width);

            let viewer = SequenceViewer::new(&container);
            viewer.draw(
                &mut doc,
                &mut coordinator,
                &block.to_matrix(),
                &block.to_label_set(),
                &opt,
            );
            containers.push(container);
        }
    }

    //----------------------------
    // Output
    //----------------------------
    let grids: Vec<_> = containers
        .iter()
        .filter_map(|c| doc.grid(c).cloned())
        .collect();

    let out_string = match format.as_str() {
        "text" => grids
            .iter()
            .map(|grid| text::render_text(grid, &flow_lines(grid, width)))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => html::render_page(&grids, args.get_flag("script")),
    };
    writer.write_all(out_string.as_ref())?;

    Ok(())
}
