// Keysymgen Vendor Symbol Parser
// Parses XF86keysym.h ("XFree86 vendor specific keysyms": brightness, media, power keys)

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::{parse_hex, ParseError, SourceKind};
use crate::keysym::Keysym;

const DEFINE_PREFIX: &str = "#define XF86XK_";

static DEFINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#define XF86XK_([a-zA-Z_0-9]+)\s+0x([0-9a-fA-F]+)\s*(/\*\s*(.*)\s*\*/)?\s*$")
        .expect("XF86keysym pattern is valid")
});

/// Vendor keysyms by name (without the `XF86XK_` prefix), in file order
#[derive(Debug, Clone, Default)]
pub struct VendorTable {
    symbols: IndexMap<String, Keysym>,
}

impl VendorTable {
    /// Parse the full text of XF86keysym.h
    ///
    /// Every value must lie in 0x10080001..=0x1008FFFF. keysymdef.h keysyms
    /// top out at 0x0110FFFF (0x01000000 + the last Unicode code point), so a
    /// value outside the vendor range means the file is not what we think it is.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut symbols = IndexMap::new();

        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;
            let Some(caps) = DEFINE_RE.captures(line) else {
                if line.starts_with(DEFINE_PREFIX) {
                    return Err(ParseError::MalformedDefinition {
                        source_kind: SourceKind::Vendor,
                        line: line_no,
                        text: line.trim().to_string(),
                    });
                }
                continue;
            };

            let name = caps[1].to_string();
            let keysym = Keysym(parse_hex(&caps[2], SourceKind::Vendor, line_no, line)?);
            if !keysym.is_vendor() {
                return Err(ParseError::VendorCodeOutOfRange {
                    line: line_no,
                    name,
                    code: keysym.code(),
                });
            }
            symbols.insert(name, keysym);
        }

        log::debug!("XF86keysym: {} vendor keysyms", symbols.len());
        Ok(Self { symbols })
    }

    /// Code of a vendor symbol by exact name
    pub fn code(&self, name: &str) -> Option<Keysym> {
        self.symbols.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
