// Keysymgen Resolver
// Merges keysymdef.h, XF86keysym.h and the Qt key enum into one ordered decision table

use std::collections::BTreeMap;
use std::fmt;

use crate::modifier::{ModifierFlag, Platform};
use crate::overrides::Overrides;
use crate::parse::{PrimaryTable, ToolkitTable, VendorTable};
use crate::Keysym;

/// How a Qt key maps to a keysym
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Always the same keysym
    Fixed(Keysym),
    /// `upper` while Shift is held, `lower` otherwise
    Shift { lower: Keysym, upper: Keysym },
    /// `keypad` while the keypad modifier is set, `plain` otherwise
    Keypad { plain: Keysym, keypad: Keysym },
    /// `swapped` when compiled for `platform`, `normal` everywhere else.
    /// Neither side is itself platform swapped.
    PlatformSwapped {
        normal: Box<Resolution>,
        swapped: Box<Resolution>,
        platform: Platform,
    },
}

impl Resolution {
    /// The keysym this resolution produces for a modifier state on a platform
    pub fn evaluate(&self, modifiers: u32, platform: Platform) -> Keysym {
        match self {
            Resolution::Fixed(keysym) => *keysym,
            Resolution::Shift { lower, upper } => {
                if ModifierFlag::Shift.is_set(modifiers) {
                    *upper
                } else {
                    *lower
                }
            }
            Resolution::Keypad { plain, keypad } => {
                if ModifierFlag::Keypad.is_set(modifiers) {
                    *keypad
                } else {
                    *plain
                }
            }
            Resolution::PlatformSwapped {
                normal,
                swapped,
                platform: target,
            } => {
                if platform == *target {
                    swapped.evaluate(modifiers, platform)
                } else {
                    normal.evaluate(modifiers, platform)
                }
            }
        }
    }
}

/// One dispatch case of the generated table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionEntry {
    /// Qt key name without the `Key_` prefix
    pub name: String,
    /// `Qt::Key` value
    pub toolkit_code: u32,
    pub resolution: Resolution,
}

/// A Qt key that could not be mapped. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Only a differently-cased keysym name exists, under several casings
    CaseMismatch { key: String },
    /// No keysym under any rule
    NoMatch { key: String },
    /// Key resolved, but the other member of the swap pair did not
    SwapPartnerUnresolved { key: String, partner: String },
}

impl Diagnostic {
    /// Qt key name the diagnostic is about
    pub fn key(&self) -> &str {
        match self {
            Diagnostic::CaseMismatch { key }
            | Diagnostic::NoMatch { key }
            | Diagnostic::SwapPartnerUnresolved { key, .. } => key,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::CaseMismatch { key } => write!(
                f,
                "Qt key not found in keysymdef.h, but lowercase name found in non-unique list: {}",
                key
            ),
            Diagnostic::NoMatch { key } => write!(f, "Qt key not found in keysymdef.h: {}", key),
            Diagnostic::SwapPartnerUnresolved { key, partner } => write!(
                f,
                "Qt key {} is not swapped: its partner {} has no mapping",
                key, partner
            ),
        }
    }
}

/// Violations of the resolver's own invariants, or of the override data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(
        "internal error: Qt key {key} not found with lowercase name in unique index, but also not in non-unique set"
    )]
    CaseIndexInconsistent { key: String },

    #[error("keypad keysym XK_{keysym} for Qt key {key} is not defined in keysymdef.h")]
    UnknownKeypadSymbol { key: String, keysym: String },
}

/// The resolver's complete output, the sole input of the emitters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionTable {
    text: BTreeMap<u32, Keysym>,
    entries: Vec<DecisionEntry>,
    diagnostics: Vec<Diagnostic>,
}

impl DecisionTable {
    /// Single-character text cases, ascending by code point
    pub fn text_cases(&self) -> impl Iterator<Item = (u32, Keysym)> + '_ {
        self.text.iter().map(|(p, k)| (*p, *k))
    }

    /// Resolved keys sorted by Qt key name
    pub fn entries(&self) -> &[DecisionEntry] {
        &self.entries
    }

    /// Look up a resolved key by name
    pub fn entry(&self, name: &str) -> Option<&DecisionEntry> {
        self.entries
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Keys that were left unmapped or unswapped
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Evaluate the table the way the generated dispatch function does.
    ///
    /// Text consisting of exactly one character whose code point has a keysym
    /// wins over the key code. Returns `None` where the generated code returns
    /// the "no keysym" value.
    pub fn translate(
        &self,
        qt_key: u32,
        modifiers: u32,
        text: &str,
        platform: Platform,
    ) -> Option<Keysym> {
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(keysym) = self.text.get(&u32::from(c)) {
                return Some(*keysym);
            }
        }
        self.entries
            .iter()
            .find(|e| e.toolkit_code == qt_key)
            .map(|e| e.resolution.evaluate(modifiers, platform))
    }
}

enum BaseOutcome {
    Resolved(Resolution),
    Ignored,
    Unresolved(Diagnostic),
}

/// Resolves Qt keys against the parsed keysym tables
pub struct Resolver<'a> {
    primary: &'a PrimaryTable,
    vendor: &'a VendorTable,
    overrides: &'a Overrides,
}

impl<'a> Resolver<'a> {
    pub fn new(primary: &'a PrimaryTable, vendor: &'a VendorTable, overrides: &'a Overrides) -> Self {
        Self {
            primary,
            vendor,
            overrides,
        }
    }

    /// Build the decision table for every key of `toolkit`
    pub fn resolve(&self, toolkit: &ToolkitTable) -> Result<DecisionTable, ResolveError> {
        let mut entries = Vec::with_capacity(toolkit.len());
        let mut diagnostics = Vec::new();
        let mut ignored = 0usize;

        for (name, toolkit_code) in toolkit.iter() {
            match self.resolve_base(name)? {
                BaseOutcome::Ignored => ignored += 1,
                BaseOutcome::Unresolved(diagnostic) => {
                    log::warn!("{}", diagnostic);
                    diagnostics.push(diagnostic);
                }
                BaseOutcome::Resolved(base) => {
                    let resolution = self.apply_keypad(name, base)?;
                    log::trace!("Key_{} -> {:?}", name, resolution);
                    entries.push(DecisionEntry {
                        name: name.to_string(),
                        toolkit_code,
                        resolution,
                    });
                }
            }
        }

        self.apply_platform_swap(&mut entries, &mut diagnostics);

        let text = self.text_cases();
        log::debug!(
            "resolved {} of {} Qt keys ({} ignored, {} unresolved), {} text cases",
            entries.len(),
            toolkit.len(),
            ignored,
            diagnostics.len(),
            text.len()
        );

        Ok(DecisionTable {
            text,
            entries,
            diagnostics,
        })
    }

    /// Resolution rules in priority order, first match wins
    fn resolve_base(&self, name: &str) -> Result<BaseOutcome, ResolveError> {
        if self.overrides.is_ignored(name) {
            return Ok(BaseOutcome::Ignored);
        }

        let case_index = self.primary.case_index();
        if let Some(original) = case_index.lookup(name) {
            if let Some(code) = self.primary.code(original) {
                return Ok(BaseOutcome::Resolved(Resolution::Fixed(code)));
            }
        }

        if let Some(exact) = self.primary.code(name) {
            // Reaching this point means the lowercase form has several casings,
            // e.g. Key_A against XK_a and XK_A.
            if !case_index.is_non_unique(name) {
                return Err(ResolveError::CaseIndexInconsistent {
                    key: name.to_string(),
                });
            }
            let lower = self.primary.code(&name.to_lowercase());
            let upper = self.primary.code(&name.to_uppercase());
            let resolution = match (lower, upper) {
                (Some(lower), Some(upper)) => Resolution::Shift { lower, upper },
                (Some(lower), None) => Resolution::Fixed(lower),
                // keysym name made of several parts with mixed case
                _ => Resolution::Fixed(exact),
            };
            return Ok(BaseOutcome::Resolved(resolution));
        }

        let alternative = self.overrides.alternative(name);
        if let Some(code) = alternative.and_then(|alt| self.primary.code(alt)) {
            return Ok(BaseOutcome::Resolved(Resolution::Fixed(code)));
        }

        if let Some(code) = self.vendor.code(name) {
            return Ok(BaseOutcome::Resolved(Resolution::Fixed(code)));
        }

        if let Some(code) = alternative.and_then(|alt| self.vendor.code(alt)) {
            return Ok(BaseOutcome::Resolved(Resolution::Fixed(code)));
        }

        let key = name.to_string();
        Ok(BaseOutcome::Unresolved(if case_index.is_non_unique(name) {
            Diagnostic::CaseMismatch { key }
        } else {
            Diagnostic::NoMatch { key }
        }))
    }

    fn apply_keypad(&self, name: &str, base: Resolution) -> Result<Resolution, ResolveError> {
        let Some(keypad_name) = self.overrides.keypad(name) else {
            return Ok(base);
        };
        let keypad = self
            .primary
            .code(keypad_name)
            .ok_or_else(|| ResolveError::UnknownKeypadSymbol {
                key: name.to_string(),
                keysym: keypad_name.to_string(),
            })?;

        match base {
            Resolution::Fixed(plain) => Ok(Resolution::Keypad { plain, keypad }),
            other => {
                log::warn!(
                    "Qt key {} maps to a shift-dependent keysym, keypad keysym XK_{} not applied",
                    name,
                    keypad_name
                );
                Ok(other)
            }
        }
    }

    fn apply_platform_swap(&self, entries: &mut [DecisionEntry], diagnostics: &mut Vec<Diagnostic>) {
        let swap = self.overrides.swap();
        let first = entries.iter().position(|e| e.name == swap.first);
        let second = entries.iter().position(|e| e.name == swap.second);

        match (first, second) {
            (Some(a), Some(b)) => {
                let resolution_a = entries[a].resolution.clone();
                let resolution_b = entries[b].resolution.clone();
                entries[a].resolution = Resolution::PlatformSwapped {
                    normal: Box::new(resolution_a.clone()),
                    swapped: Box::new(resolution_b.clone()),
                    platform: swap.platform,
                };
                entries[b].resolution = Resolution::PlatformSwapped {
                    normal: Box::new(resolution_b),
                    swapped: Box::new(resolution_a),
                    platform: swap.platform,
                };
            }
            // A lone member keeps its own keysym on every platform. Its code
            // is never moved under the missing partner's label.
            (Some(i), None) | (None, Some(i)) => {
                let key = entries[i].name.clone();
                let partner = swap.partner(&key).unwrap_or_default().to_string();
                let diagnostic = Diagnostic::SwapPartnerUnresolved { key, partner };
                log::warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
            (None, None) => {}
        }
    }

    fn text_cases(&self) -> BTreeMap<u32, Keysym> {
        self.primary
            .unicode_index()
            .iter()
            .filter_map(|(position, name)| self.primary.code(name).map(|code| (position, code)))
            .collect()
    }
}
