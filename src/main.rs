//! # Super-Star image converter
#![warn(missing_docs)]

use color_eyre::eyre;
use log::info;
use spt_tool::cli::{self, convert::Converter, opt::Options};

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;
    let messages = opt.lang.messages();

    let path = match &opt.path {
        Some(path) => path,
        None => {
            println!("{}", messages.help());
            return Ok(());
        }
    };

    let converter = Converter::new(&opt, messages);
    let summary = converter.run(path);
    info!("{}", messages.finished(summary.converted, summary.failed));
    Ok(())
}
