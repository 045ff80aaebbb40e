use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use fastblocks_frame::BlockFramer;
use tracing::debug;

use crate::cmd::InsertArgs;
use crate::exit::{frame_error, io_error, CliResult, SUCCESS};
use crate::output::{print_summary, OutputFormat};

pub fn run(args: InsertArgs, format: OutputFormat) -> CliResult<i32> {
    let raw = open_reader(&args.data)?;
    let index = open_reader(&args.index)?;
    let out = File::create(&args.output)
        .map_err(|err| io_error(&format!("failed creating {}", args.output.display()), err))?;

    let mut framer = BlockFramer::new(raw, BufWriter::new(out));
    let summary = framer
        .run(index)
        .map_err(|err| frame_error("framing failed", err))?;

    debug!(
        messages = summary.messages,
        bytes = summary.bytes_copied,
        output = %args.output.display(),
        "insert complete"
    );

    if !args.quiet {
        print_summary(&summary, &args.output, format);
    }
    Ok(SUCCESS)
}

fn open_reader(path: &Path) -> CliResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))
}
