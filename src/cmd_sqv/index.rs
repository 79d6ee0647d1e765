use clap::*;
use sqv::libs::viewer::labels::{generate_labels, LabelEntry};
use sqv::libs::viewer::GridBuilder;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("index")
        .about("Residue numbers at the start of every chunk")
        .after_help(
            r###"
Prints, for every chunk of every block, the plain and the gap-aware number of the
chunk's first position in each sequence.

Output columns:
* block     - 1-based block number across all inputs
* chunk     - 1-based chunk number within the block
* start     - first alignment position of the chunk
* name      - sequence name
* index     - header start - 1 + position
* gap_index - header start - 1 + residues up to the position, gaps not counted

Examples:
1. Chunks of 10:
   sqv index tests/fas/example.fas

2. Chunks of 3, options file for the rest:
   sqv index tests/fas/example.fas -c 3 --options opts.json

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Input block FA file(s) to process"),
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

    let field_names = vec!["block", "chunk", "start", "name", "index", "gap_index"];

    //----------------------------
    // Operating
    //----------------------------
    writer.write_all(format!("{}\n", field_names.join("\t")).as_ref())?;

    let mut serial = 0;
    for infile in args.get_many::<String>("infiles").unwrap() {
        let mut reader = sqv::reader(infile)?;

        while let Some(block) = sqv::libs::fas::next_fas_block(&mut reader)? {
            serial += 1;
            let matrix = block.to_matrix();
            let labels = block.to_label_set();
            let grid = GridBuilder::new(&matrix, &labels, &opt, "index").build();

            for (i, chunk) in grid.chunks.iter().enumerate() {
                let plain = generate_labels(
                    Some(chunk.start),
                    &labels,
                    false,
                    None,
                    "",
                    false,
                    &matrix,
                );
                let gap = generate_labels(
                    Some(chunk.start),
                    &labels,
                    false,
                    Some(opt.chunk_size),
                    "",
                    false,
                    &matrix,
                );
                let (Some(plain), Some(gap)) = (plain, gap) else {
                    continue;
                };

                for (j, entry) in block.entries.iter().enumerate() {
                    writer.write_all(
                        format!(
                            "{}\t{}\t{}\t{}\t{}\t{}\n",
                            serial,
                            i + 1,
                            chunk.start,
                            entry.name,
                            fmt_entry(&plain.entries[j]),
                            fmt_entry(&gap.entries[j]),
                        )
                        .as_ref(),
                    )?;
                }
            }
        }
    }

    Ok(())
}

fn fmt_entry(entry: &LabelEntry) -> String {
    match entry {
        LabelEntry::Index(i) => i.to_string(),
        _ => String::new(),
    }
}
