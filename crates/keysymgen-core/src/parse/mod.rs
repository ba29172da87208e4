// Keysymgen Header Parsers
// Line-oriented parsers for keysymdef.h, XF86keysym.h and qnamespace.h

pub mod primary;
pub mod toolkit;
pub mod vendor;

pub use primary::{CaseIndex, PrimarySymbol, PrimaryTable, UnicodeEquivalent, UnicodeIndex};
pub use toolkit::ToolkitTable;
pub use vendor::VendorTable;

use strum_macros::{Display, EnumString};

/// The three definition sources consumed by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    /// X11 keysymdef.h (`XK_*`)
    Keysymdef,
    /// XFree86 vendor keysyms, XF86keysym.h (`XF86XK_*`)
    Vendor,
    /// Qt key enum, qnamespace.h (`Key_*`)
    Toolkit,
}

impl SourceKind {
    /// Conventional file name of this source
    pub fn file_name(self) -> &'static str {
        match self {
            SourceKind::Keysymdef => "keysymdef.h",
            SourceKind::Vendor => "XF86keysym.h",
            SourceKind::Toolkit => "qnamespace.h",
        }
    }
}

/// Fatal input-format violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{source_kind} line {line}: unhandled definition: {text}")]
    MalformedDefinition {
        source_kind: SourceKind,
        line: usize,
        text: String,
    },

    #[error("{source_kind} line {line}: value does not fit in 32 bits: {text}")]
    InvalidCode {
        source_kind: SourceKind,
        line: usize,
        text: String,
    },

    #[error("vendor line {line}: {name} = {code:#x} is outside 0x10080001..=0x1008ffff")]
    VendorCodeOutOfRange { line: usize, name: String, code: u32 },
}

/// Parse the hex digits captured after `0x`
fn parse_hex(
    digits: &str,
    source_kind: SourceKind,
    line: usize,
    text: &str,
) -> Result<u32, ParseError> {
    u32::from_str_radix(digits, 16).map_err(|_| ParseError::InvalidCode {
        source_kind,
        line,
        text: text.trim().to_string(),
    })
}
