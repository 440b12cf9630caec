//! Converting files and folders

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use color_eyre::eyre::{self, WrapErr};
use image::ImageFormat;
use log::{error, info, warn};
use spt::{DecodeOptions, DecodeWarning, Decoder, HeaderPolicy, PixelBuffer};

use super::{
    messages::Messages,
    opt::{Format, Options},
    walk::Files,
};

/// The extension of input files
pub const EXTENSION: &str = "spt";

/// Counts of a batch run
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Files that were written
    pub converted: usize,
    /// Files or folders that failed
    pub failed: usize,
}

/// Converts SPT files next to their source
pub struct Converter<'a> {
    decoder: Decoder,
    format: Format,
    messages: &'a dyn Messages,
}

impl<'a> Converter<'a> {
    /// Create a converter from the command line options
    pub fn new(opt: &Options, messages: &'a dyn Messages) -> Self {
        let header = if opt.strict {
            HeaderPolicy::Abort
        } else {
            HeaderPolicy::Warn
        };
        Self {
            decoder: Decoder::new(DecodeOptions { header }),
            format: opt.format,
            messages,
        }
    }

    /// Where the output for `path` is stored
    pub fn out_path(&self, path: &Path) -> PathBuf {
        path.with_extension(self.format.extension())
    }

    /// Convert a single file
    pub fn convert(&self, path: &Path) -> eyre::Result<PathBuf> {
        let out_path = self.out_path(path);
        info!("{}", self.messages.converting(path, &out_path));

        let decoded = self.decoder.decode_file(path)?;
        for warning in &decoded.warnings {
            match warning {
                DecodeWarning::HeaderTooShort(_) => warn!("{}", self.messages.header_error(path)),
            }
        }
        let header = &decoded.header;
        info!(
            "{}",
            self.messages
                .image_info(header.width, header.height, header.is_compressed())
        );

        self.save(&decoded.pixels, &out_path)
            .wrap_err_with(|| format!("Failed to save `{}`", out_path.display()))?;
        Ok(out_path)
    }

    fn save(&self, pixels: &PixelBuffer, out_path: &Path) -> eyre::Result<()> {
        match self.format {
            Format::Png => {
                let image = pixels.to_image();
                image.save_with_format(out_path, ImageFormat::Png)?;
            }
            Format::Pbm => {
                let mut out = BufWriter::new(File::create(out_path)?);
                pixels.write_pbm(&mut out)?;
                out.flush()?;
            }
        }
        Ok(())
    }

    /// Convert `root`, or all SPT files below it if it is a directory.
    ///
    /// Failures are logged and counted, they never stop the run.
    pub fn run(&self, root: &Path) -> Summary {
        let mut summary = Summary::default();
        if !root.exists() {
            warn!("{}", self.messages.file_not_found(root));
            return summary;
        }

        for entry in Files::new(root, EXTENSION) {
            match entry {
                Ok(path) => match self.convert(&path) {
                    Ok(_) => summary.converted += 1,
                    Err(e) => {
                        error!("{}", self.messages.failed(&path, &format!("{:#}", e)));
                        summary.failed += 1;
                    }
                },
                Err(e) => {
                    let path = e.path().unwrap_or(root);
                    error!("{}", self.messages.failed(path, &e));
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use clap::Parser;

    use super::{Converter, Summary};
    use crate::cli::{messages::ENGLISH, opt::Options};

    fn spt_file(width: u16, height: u16, flags: u8, data: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; 64];
        out[..16].copy_from_slice(b"Super-Star File.");
        out[34..36].copy_from_slice(&width.to_le_bytes());
        out[36..38].copy_from_slice(&height.to_le_bytes());
        out[39] = flags;
        out.extend_from_slice(data);
        out
    }

    #[test]
    fn batch() {
        let root = std::env::temp_dir().join(format!("spt-tool-batch-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("A.SPT"), spt_file(8, 2, 0x00, &[0xF0, 0x0F])).unwrap();
        fs::write(root.join("sub/B.spt"), spt_file(16, 1, 0x80, &[0xFF, 0x00])).unwrap();
        // truncated run
        fs::write(root.join("sub/C.spt"), spt_file(16, 4, 0x80, &[0x05, 0x00])).unwrap();
        // header cut off after the height
        fs::write(root.join("sub/D.spt"), &spt_file(16, 2, 0x80, &[])[..38]).unwrap();

        let opt = Options::parse_from(["spt-tool", "-F", "pbm"]);
        let converter = Converter::new(&opt, &ENGLISH);
        let summary = converter.run(&root);
        assert_eq!(
            summary,
            Summary {
                converted: 3,
                failed: 1
            }
        );

        let a = fs::read(root.join("A.pbm")).unwrap();
        assert_eq!(&a[..], b"P4\n8 2\n\x0F\xF0");
        let b = fs::read(root.join("sub/B.pbm")).unwrap();
        assert_eq!(&b[..], b"P4\n16 1\n\xFF\xFF");
        assert!(!root.join("sub/C.pbm").exists());
        let d = fs::read(root.join("sub/D.pbm")).unwrap();
        assert_eq!(&d[..], b"P4\n16 0\n");

        fs::remove_file(root.join("sub/D.pbm")).unwrap();
        let opt = Options::parse_from(["spt-tool", "-F", "pbm", "--strict"]);
        let converter = Converter::new(&opt, &ENGLISH);
        let summary = converter.run(&root);
        assert_eq!(
            summary,
            Summary {
                converted: 2,
                failed: 2
            }
        );
        assert!(!root.join("sub/D.pbm").exists());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn png_output() {
        let root = std::env::temp_dir().join(format!("spt-tool-png-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        let path = root.join("IMAGE.SPT");
        fs::write(&path, spt_file(8, 1, 0x00, &[0b1010_1010])).unwrap();

        let opt = Options::parse_from(["spt-tool"]);
        let converter = Converter::new(&opt, &ENGLISH);
        let out = converter.convert(&path).unwrap();
        assert_eq!(out, root.join("IMAGE.png"));

        let image = image::open(&out).unwrap().into_luma8();
        assert_eq!(image.dimensions(), (8, 1));
        assert_eq!(image.get_pixel(0, 0).0, [0xFF]);
        assert_eq!(image.get_pixel(1, 0).0, [0x00]);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn missing_root() {
        let opt = Options::parse_from(["spt-tool"]);
        let converter = Converter::new(&opt, &ENGLISH);
        let summary = converter.run(Path::new("/this/does/not/exist"));
        assert_eq!(summary, Summary::default());
    }
}
