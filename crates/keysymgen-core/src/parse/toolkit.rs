// Keysymgen Toolkit Key Parser
// Extracts the Qt::Key enumerators from qnamespace.h

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::{parse_hex, ParseError, SourceKind};

static KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ *Key_([a-zA-Z_0-9]+)\s*=\s*0x([0-9a-fA-F]+)\s*,?\s*(//.*)?$")
        .expect("qnamespace pattern is valid")
});

/// Qt key codes by enumerator name (without the `Key_` prefix), sorted by name
#[derive(Debug, Clone, Default)]
pub struct ToolkitTable {
    keys: BTreeMap<String, u32>,
}

impl ToolkitTable {
    /// Parse the full text of qnamespace.h
    ///
    /// Lines that do not look like `Key_<name> = 0x<hex>,` are skipped: the
    /// header declares plenty of unrelated enums. A name defined twice keeps
    /// the last value.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut keys = BTreeMap::new();

        for (idx, line) in source.lines().enumerate() {
            let Some(caps) = KEY_RE.captures(line) else {
                continue;
            };
            let code = parse_hex(&caps[2], SourceKind::Toolkit, idx + 1, line)?;
            keys.insert(caps[1].to_string(), code);
        }

        log::debug!("qnamespace: {} Qt keys", keys.len());
        Ok(Self { keys })
    }

    /// Build a table directly from `(name, code)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            keys: pairs.into_iter().map(|(n, c)| (n.into(), c)).collect(),
        }
    }

    /// Qt code of a key by name
    pub fn code(&self, name: &str) -> Option<u32> {
        self.keys.get(name).copied()
    }

    /// Keys sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.keys.iter().map(|(name, code)| (name.as_str(), *code))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
