// Keysymgen Primary Symbol Parser
// Parses keysymdef.h into the accepted keysym set plus its case and Unicode indices

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::{parse_hex, ParseError, SourceKind};
use crate::Keysym;

const DEFINE_PREFIX: &str = "#define XK_";

// One of the patterns suggested by keysymdef.h itself.
static DEFINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#define XK_([a-zA-Z_0-9]+)\s+0x([0-9a-f]+)\s*(/\*\s*(.*)\s*\*/)?\s*$")
        .expect("keysymdef pattern is valid")
});

// "U+xxxx UNICODE NAME", as documented in keysymdef.h.
static UNICODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^U\+([0-9A-F]{4,6}) (.*)$").expect("unicode comment pattern is valid")
});

/// Unicode character a keysym corresponds to one-to-one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeEquivalent {
    /// Code point (at most 24 bits)
    pub position: u32,
    /// Official Unicode character name
    pub name: String,
}

/// A single `#define XK_<name> 0x<code>` definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimarySymbol {
    /// Mnemonic name without the `XK_` prefix
    pub name: String,
    pub code: Keysym,
    pub unicode: Option<UnicodeEquivalent>,
    /// Comment was fully parenthesized: legacy keysym, never accepted
    pub deprecated: bool,
}

/// Maps a lowercase-folded name to the only spelling it occurs under.
///
/// Names seen under two or more casings (`a`/`A`, `Eth`/`eth`) are kept in a
/// separate non-unique set and are absent from the unique map.
#[derive(Debug, Clone, Default)]
pub struct CaseIndex {
    unique: HashMap<String, String>,
    non_unique: HashSet<String>,
}

impl CaseIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted name, demoting its folded form on a second casing
    pub fn record(&mut self, name: &str) {
        let folded = name.to_lowercase();
        if self.non_unique.contains(&folded) {
            return;
        }
        match self.unique.get(&folded) {
            Some(existing) if existing == name => {}
            Some(_) => {
                self.unique.remove(&folded);
                self.non_unique.insert(folded);
            }
            None => {
                self.unique.insert(folded, name.to_string());
            }
        }
    }

    /// Original spelling of `name` if its folded form is unique
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.unique.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Whether the folded form of `name` occurs under several casings
    pub fn is_non_unique(&self, name: &str) -> bool {
        self.non_unique.contains(&name.to_lowercase())
    }

    /// Number of uniquely-cased names
    pub fn len(&self) -> usize {
        self.unique.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unique.is_empty()
    }

    /// Number of folded names with several casings
    pub fn non_unique_len(&self) -> usize {
        self.non_unique.len()
    }
}

/// Maps a Unicode code point to the keysym name declaring equivalence to it.
/// The first declaration of a code point wins.
#[derive(Debug, Clone, Default)]
pub struct UnicodeIndex {
    by_position: BTreeMap<u32, String>,
}

impl UnicodeIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping; returns false if the code point was already taken
    pub fn insert(&mut self, position: u32, name: &str) -> bool {
        if self.by_position.contains_key(&position) {
            return false;
        }
        self.by_position.insert(position, name.to_string());
        true
    }

    /// Keysym name for a code point
    pub fn get(&self, position: u32) -> Option<&str> {
        self.by_position.get(&position).map(String::as_str)
    }

    /// Entries in ascending code point order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.by_position.iter().map(|(p, n)| (*p, n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_position.is_empty()
    }
}

/// Counts of definitions that were parsed but not accepted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimaryStats {
    /// Later names for an already accepted code
    pub aliases: usize,
    /// Definitions with a parenthesized comment
    pub deprecated: usize,
    /// Redefinitions of an accepted name with a new code
    pub duplicate_names: usize,
}

/// The accepted keysymdef.h symbols, in file order
#[derive(Debug, Clone, Default)]
pub struct PrimaryTable {
    symbols: IndexMap<String, PrimarySymbol>,
    codes: HashSet<Keysym>,
    case_index: CaseIndex,
    unicode_index: UnicodeIndex,
    stats: PrimaryStats,
}

impl PrimaryTable {
    /// Parse the full text of keysymdef.h
    ///
    /// Fails on the first `#define XK_` line that does not have the expected
    /// shape. Everything else in the file is ignored.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut table = Self::default();

        for (idx, line) in source.lines().enumerate() {
            let Some(symbol) = parse_definition(line, idx + 1)? else {
                continue;
            };

            // keysymdef.h: "Where several mnemonic names are defined for the
            // same keysym in this file, all but the first one listed should be
            // considered deprecated."
            if table.codes.contains(&symbol.code) {
                table.stats.aliases += 1;
                continue;
            }
            if symbol.deprecated {
                table.stats.deprecated += 1;
                continue;
            }
            if table.symbols.contains_key(&symbol.name) {
                log::debug!(
                    "keysymdef line {}: XK_{} redefined, keeping first definition",
                    idx + 1,
                    symbol.name
                );
                table.stats.duplicate_names += 1;
                continue;
            }
            table.accept(symbol);
        }

        log::debug!(
            "keysymdef: {} accepted, {} aliases, {} deprecated, {} unicode equivalents, {} case-unique",
            table.symbols.len(),
            table.stats.aliases,
            table.stats.deprecated,
            table.unicode_index.len(),
            table.case_index.len()
        );
        Ok(table)
    }

    fn accept(&mut self, symbol: PrimarySymbol) {
        self.codes.insert(symbol.code);
        if let Some(unicode) = &symbol.unicode {
            if !self.unicode_index.insert(unicode.position, &symbol.name) {
                log::debug!(
                    "U+{:04X} already mapped to XK_{}, ignoring XK_{}",
                    unicode.position,
                    self.unicode_index.get(unicode.position).unwrap_or_default(),
                    symbol.name
                );
            }
        }
        self.case_index.record(&symbol.name);
        self.symbols.insert(symbol.name.clone(), symbol);
    }

    /// Look up an accepted symbol by exact name
    pub fn get(&self, name: &str) -> Option<&PrimarySymbol> {
        self.symbols.get(name)
    }

    /// Code of an accepted symbol by exact name
    pub fn code(&self, name: &str) -> Option<Keysym> {
        self.symbols.get(name).map(|s| s.code)
    }

    /// Whether `name` is an accepted symbol
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn case_index(&self) -> &CaseIndex {
        &self.case_index
    }

    pub fn unicode_index(&self) -> &UnicodeIndex {
        &self.unicode_index
    }

    pub fn stats(&self) -> PrimaryStats {
        self.stats
    }
}

/// Parse one line; `Ok(None)` for lines that are not `XK_` definitions
fn parse_definition(line: &str, line_no: usize) -> Result<Option<PrimarySymbol>, ParseError> {
    let Some(caps) = DEFINE_RE.captures(line) else {
        if line.starts_with(DEFINE_PREFIX) {
            return Err(ParseError::MalformedDefinition {
                source_kind: SourceKind::Keysymdef,
                line: line_no,
                text: line.trim().to_string(),
            });
        }
        return Ok(None);
    };

    let name = caps[1].to_string();
    let code = Keysym(parse_hex(&caps[2], SourceKind::Keysymdef, line_no, line)?);

    let mut unicode = None;
    let mut deprecated = false;
    if let Some(comment) = caps.get(4).map(|m| m.as_str().trim()) {
        if let Some(u) = UNICODE_RE.captures(comment) {
            unicode = Some(UnicodeEquivalent {
                position: parse_hex(&u[1], SourceKind::Keysymdef, line_no, line)?,
                name: u[2].trim().to_string(),
            });
        } else if comment.starts_with('(') && comment.ends_with(')') {
            deprecated = true;
        }
    }

    Ok(Some(PrimarySymbol {
        name,
        code,
        unicode,
        deprecated,
    }))
}
