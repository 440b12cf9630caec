//! User-facing messages
//!
//! The batch converter reports through a [`Messages`] implementation that is
//! picked once from the command line and then passed down.

use std::{fmt::Display, path::Path};

/// Localized messages of the batch converter
pub trait Messages {
    /// Usage help, printed when no path was given
    fn help(&self) -> &'static str;

    /// The path given on the command line does not exist
    fn file_not_found(&self, path: &Path) -> String;

    /// The file is shorter than its header
    fn header_error(&self, path: &Path) -> String;

    /// Dimensions and encoding from the header
    fn image_info(&self, width: u16, height: u16, compressed: bool) -> String;

    /// A file is about to be converted
    fn converting(&self, from: &Path, to: &Path) -> String;

    /// A file could not be converted
    fn failed(&self, path: &Path, error: &dyn Display) -> String;

    /// All files were processed
    fn finished(&self, converted: usize, failed: usize) -> String;
}

/// English messages
pub struct English;

/// The English messages
pub static ENGLISH: English = English;

impl Messages for English {
    fn help(&self) -> &'static str {
        "Usage: spt-tool [OPTIONS] <PATH>\n\
         Converts a Super-Star (*.SPT) image to PNG. If PATH is a folder, all\n\
         SPT files in it and its subfolders are converted. Each output file is\n\
         saved next to its source.\n\
         \n\
         Options:\n\
         \x20   -F, --format <png|pbm>  Output format (default: png)\n\
         \x20   --strict                Skip files with an incomplete header\n\
         \x20   --lang <en|zh>          Language of the messages (default: en)"
    }

    fn file_not_found(&self, path: &Path) -> String {
        format!("File or folder does not exist: {}", path.display())
    }

    fn header_error(&self, path: &Path) -> String {
        format!("File header is incomplete: {}", path.display())
    }

    fn image_info(&self, width: u16, height: u16, compressed: bool) -> String {
        format!(
            "Width: {}, height: {}, compressed: {}",
            width, height, compressed
        )
    }

    fn converting(&self, from: &Path, to: &Path) -> String {
        format!("{} ==> {}", from.display(), to.display())
    }

    fn failed(&self, path: &Path, error: &dyn Display) -> String {
        format!("Failed to convert {}: {}", path.display(), error)
    }

    fn finished(&self, converted: usize, failed: usize) -> String {
        format!("Done. {} converted, {} failed.", converted, failed)
    }
}

/// Simplified Chinese messages
pub struct Chinese;

/// The Simplified Chinese messages
pub static CHINESE: Chinese = Chinese;

impl Messages for Chinese {
    fn help(&self) -> &'static str {
        "用法：spt-tool [选项] <路径>\n\
         将金山 SPT 图形文件转换为 PNG 图片。如果路径是目录，\n\
         则转换该目录及其子目录中所有 SPT 文件。输出文件保存在源文件旁边。\n\
         \n\
         选项：\n\
         \x20   -F, --format <png|pbm>  输出格式（默认：png）\n\
         \x20   --strict                跳过文件头不完整的文件\n\
         \x20   --lang <en|zh>          提示语言（默认：en）"
    }

    fn file_not_found(&self, path: &Path) -> String {
        format!("文件或目录不存在：{}", path.display())
    }

    fn header_error(&self, path: &Path) -> String {
        format!("文件头错误：{}", path.display())
    }

    fn image_info(&self, width: u16, height: u16, compressed: bool) -> String {
        let compressed = if compressed { "是" } else { "否" };
        format!("宽度：{}，高度：{}，压缩：{}", width, height, compressed)
    }

    fn converting(&self, from: &Path, to: &Path) -> String {
        format!("{} ==> {}", from.display(), to.display())
    }

    fn failed(&self, path: &Path, error: &dyn Display) -> String {
        format!("转换失败 {}：{}", path.display(), error)
    }

    fn finished(&self, converted: usize, failed: usize) -> String {
        format!("执行完毕。成功 {} 个，失败 {} 个。", converted, failed)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{Messages, CHINESE, ENGLISH};

    #[test]
    fn image_info() {
        assert_eq!(
            ENGLISH.image_info(640, 480, true),
            "Width: 640, height: 480, compressed: true"
        );
        assert_eq!(CHINESE.image_info(8, 1, false), "宽度：8，高度：1，压缩：否");
    }

    #[test]
    fn help_lists_options() {
        for help in [ENGLISH.help(), CHINESE.help()] {
            for option in ["--format", "--strict", "--lang", "pbm"] {
                assert!(help.contains(option), "{:?} missing in {}", option, help);
            }
        }
        assert!(ENGLISH.help().contains("\n    --strict"));
    }

    #[test]
    fn converting() {
        let msg = ENGLISH.converting(Path::new("A.SPT"), Path::new("A.png"));
        assert_eq!(msg, "A.SPT ==> A.png");
    }
}
