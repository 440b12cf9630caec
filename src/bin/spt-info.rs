use std::{fs::File, io::BufReader, path::PathBuf};

use color_eyre::eyre::{self, WrapErr};
use prettytable::{format, row, Table};
use spt::{
    header::{read_header, HeaderPolicy},
    util::HexDump,
    Decoder,
};

#[derive(clap::Parser)]
/// Describe the header of a Super-Star image
struct Options {
    /// An SPT file
    file: PathBuf,
    /// Also decode the pixel data
    #[clap(long)]
    decode: bool,
}

fn main() -> eyre::Result<()> {
    let opt: Options = spt_tool::cli::init()?;

    let file = File::open(&opt.file)
        .wrap_err_with(|| format!("Failed to open file: `{}`", opt.file.display()))?;
    let (header, warning) = read_header(&mut BufReader::new(file), HeaderPolicy::Warn)?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["field", "offset", "value"]);
    table.add_row(row!["magic", "0", HexDump(&header.magic)]);
    table.add_row(row!["width", "34", header.width]);
    table.add_row(row!["height", "36", header.height]);
    table.add_row(row!["kind", "38", format!("0x{:02X}", header.kind)]);
    table.add_row(row!["flags", "39", format!("0x{:02X}", header.flags.bits())]);
    table.printstd();

    println!("Magic matches: {}", header.has_magic());
    println!("Compressed: {}", header.is_compressed());
    if let Some(warning) = warning {
        println!("Warning: {}", warning);
    }

    if opt.decode {
        let decoded = Decoder::default().decode_file(&opt.file)?;
        let pixels = &decoded.pixels;
        println!(
            "Decoded: {}x{} ({} bytes per row)",
            pixels.width(),
            pixels.height(),
            pixels.bytes_per_line()
        );
    }
    Ok(())
}
