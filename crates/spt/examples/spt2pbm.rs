use std::{io::Write, path::PathBuf};

use clap::Parser;
use spt::Decoder;

#[derive(Debug, Parser)]
/// Converts a file from Super-Star SPT to a Portable Bit-Map
struct Opts {
    /// The file to convert
    file: PathBuf,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let opts: Opts = Opts::parse();

    let decoded = Decoder::default().decode_file(&opts.file)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    decoded.pixels.write_pbm(&mut out)?;
    out.flush()?;
    Ok(())
}
