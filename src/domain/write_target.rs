use serde::{Deserialize, Serialize};
use std::fmt;

/// Output sink selection.
///
/// Parsing never fails: anything that is not a recognized target is kept as
/// `Unrecognized` and handled by the console fallback at emission time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawWriteTarget", into = "String")]
pub enum WriteTarget {
    /// Standard output only
    #[default]
    Console,
    /// Log file only
    File,
    /// Standard output, then the log file
    Both,
    /// A value outside the known set, kept verbatim for diagnostics
    Unrecognized(String),
}

impl WriteTarget {
    pub fn writes_console(&self) -> bool {
        matches!(self, WriteTarget::Console | WriteTarget::Both)
    }

    pub fn writes_file(&self) -> bool {
        matches!(self, WriteTarget::File | WriteTarget::Both)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, WriteTarget::Unrecognized(_))
    }
}

/// Digit-only input goes through the numeric codes, so `"1"` is `File`.
impl From<&str> for WriteTarget {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return match trimmed.parse::<u8>() {
                Ok(code) => WriteTarget::from(code),
                Err(_) => WriteTarget::Unrecognized(value.to_string()),
            };
        }
        match trimmed.to_lowercase().as_str() {
            "console" => WriteTarget::Console,
            "file" => WriteTarget::File,
            "both" | "console_and_file" => WriteTarget::Both,
            _ => WriteTarget::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for WriteTarget {
    fn from(value: String) -> Self {
        WriteTarget::from(value.as_str())
    }
}

/// Numeric codes follow the declaration order: 0 console, 1 file, 2 both.
impl From<u8> for WriteTarget {
    fn from(code: u8) -> Self {
        match code {
            0 => WriteTarget::Console,
            1 => WriteTarget::File,
            2 => WriteTarget::Both,
            other => WriteTarget::Unrecognized(other.to_string()),
        }
    }
}

/// Config files may name the target or give its numeric code.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawWriteTarget {
    Code(i64),
    Name(String),
}

impl From<RawWriteTarget> for WriteTarget {
    fn from(raw: RawWriteTarget) -> Self {
        match raw {
            RawWriteTarget::Code(code) => match u8::try_from(code) {
                Ok(code) => WriteTarget::from(code),
                Err(_) => WriteTarget::Unrecognized(code.to_string()),
            },
            RawWriteTarget::Name(name) => WriteTarget::from(name),
        }
    }
}

impl From<WriteTarget> for String {
    fn from(target: WriteTarget) -> Self {
        target.to_string()
    }
}

impl fmt::Display for WriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteTarget::Console => f.write_str("console"),
            WriteTarget::File => f.write_str("file"),
            WriteTarget::Both => f.write_str("both"),
            WriteTarget::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
