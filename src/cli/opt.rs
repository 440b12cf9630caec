//! Command line options

use std::{fmt, path::PathBuf, str::FromStr};

use clap::Parser;
use thiserror::Error;

use super::messages::{Messages, CHINESE, ENGLISH};

/// The format to convert images into
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Format {
    /// Portable Network Graphic
    #[default]
    Png,
    /// Portable Bitmap Format (binary)
    Pbm,
}

#[derive(Debug, Error)]
#[error("Use one of `png` or `pbm`")]
/// Failed to parse a format name
pub struct FormatError {}

impl FromStr for Format {
    type Err = FormatError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "png" => Ok(Self::Png),
            "pbm" => Ok(Self::Pbm),
            _ => Err(FormatError {}),
        }
    }
}

impl Format {
    /// The file extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pbm => "pbm",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The language of user-facing messages
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Lang {
    /// English
    #[default]
    En,
    /// Simplified Chinese
    Zh,
}

#[derive(Debug, Error)]
#[error("Use one of `en` or `zh`")]
/// Failed to parse a language name
pub struct LangError {}

impl FromStr for Lang {
    type Err = LangError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "en" => Ok(Self::En),
            "zh" | "zh-CN" => Ok(Self::Zh),
            _ => Err(LangError {}),
        }
    }
}

impl Lang {
    /// The messages for this language
    pub fn messages(self) -> &'static dyn Messages {
        match self {
            Self::En => &ENGLISH,
            Self::Zh => &CHINESE,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::En => "en",
            Self::Zh => "zh",
        })
    }
}

#[derive(Parser, Debug)]
/// Convert Super-Star (*.SPT) images to PNG
pub struct Options {
    /// An SPT file, or a folder that is searched for SPT files
    pub path: Option<PathBuf>,
    /// Format of the output. Valid choices are "png" and "pbm"
    #[clap(default_value_t, long, short = 'F')]
    pub format: Format,
    /// Skip files with an incomplete header instead of converting them
    #[clap(long)]
    pub strict: bool,
    /// Language of the messages. Valid choices are "en" and "zh"
    #[clap(default_value_t, long)]
    pub lang: Lang,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Format, Lang, Options};

    #[test]
    fn parse_options() {
        let opt = Options::parse_from(["spt-tool", "-F", "pbm", "--lang", "zh", "IMAGES"]);
        assert_eq!(opt.format, Format::Pbm);
        assert_eq!(opt.lang, Lang::Zh);
        assert!(!opt.strict);
        assert_eq!(opt.path.as_deref(), Some(std::path::Path::new("IMAGES")));

        let opt = Options::parse_from(["spt-tool"]);
        assert_eq!(opt.format, Format::Png);
        assert_eq!(opt.lang, Lang::En);
        assert!(opt.path.is_none());
    }

    #[test]
    fn reject_unknown_format() {
        assert!(Options::try_parse_from(["spt-tool", "-F", "gif"]).is_err());
        assert!("pdf".parse::<Format>().is_err());
    }
}
