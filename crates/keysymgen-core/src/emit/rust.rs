// Keysymgen Rust Emitter
// Generates a Rust module mapping Qt key events to X11 keysyms

use std::fmt::{self, Write};

use super::Emitter;
use crate::keysym::NO_KEYSYM;
use crate::modifier::{ModifierFlag, Platform};
use crate::resolve::{DecisionTable, Resolution};

/// Emits a self-contained Rust module, meant to be `include!`d or checked in.
#[derive(Debug, Clone)]
pub struct RustEmitter {
    pub function_name: String,
}

impl Default for RustEmitter {
    fn default() -> Self {
        Self {
            function_name: "qt_key_to_keysym".to_string(),
        }
    }
}

impl Emitter for RustEmitter {
    fn emit(&self, table: &DecisionTable, out: &mut String) -> fmt::Result {
        writeln!(
            out,
            r#"// @generated by keysymgen. All changes will be overwritten.
//
// Maps a Qt key event to the X11 keysym value used by the VNC (RFB) protocol.
// See keysymdef.h and XF86keysym.h of the X server for the keysym values."#
        )?;
        writeln!(out)?;

        for flag in [ModifierFlag::Shift, ModifierFlag::Keypad] {
            writeln!(out, "/// `{}`", flag.qt_name())?;
            writeln!(
                out,
                "pub const {}: u32 = {:#010x};",
                flag.const_name(),
                flag.mask()
            )?;
        }
        writeln!(out, "/// Returned when no keysym is known for a key event.")?;
        writeln!(out, "pub const NO_KEYSYM: u32 = {};", NO_KEYSYM)?;
        writeln!(out)?;

        writeln!(out, "/// `Qt::Key` values that have a keysym mapping.")?;
        writeln!(out, "#[allow(non_upper_case_globals, dead_code)]")?;
        writeln!(out, "pub mod qt_key {{")?;
        for entry in table.entries() {
            writeln!(
                out,
                "    pub const Key_{}: u32 = {:#x};",
                entry.name, entry.toolkit_code
            )?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "/// Map a Qt key event to an X11 keysym.")?;
        writeln!(out, "///")?;
        writeln!(
            out,
            "/// A `text` of exactly one character that has a keysym of its own takes"
        )?;
        writeln!(out, "/// precedence over `qt_key`.")?;
        writeln!(out, "#[allow(unreachable_patterns, unused_variables)]")?;
        writeln!(
            out,
            "pub fn {}(qt_key: u32, qt_modifiers: u32, text: &str) -> u32 {{",
            self.function_name
        )?;
        writeln!(out, "    let mut chars = text.chars();")?;
        writeln!(
            out,
            "    if let (Some(c), None) = (chars.next(), chars.next()) {{"
        )?;
        writeln!(out, "        match u32::from(c) {{")?;
        for (position, keysym) in table.text_cases() {
            writeln!(out, "            {:#06x} => return {},", position, keysym)?;
        }
        writeln!(out, "            _ => {{}}")?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;

        writeln!(out, "    match qt_key {{")?;
        for entry in table.entries() {
            match &entry.resolution {
                Resolution::Fixed(keysym) => {
                    writeln!(out, "        qt_key::Key_{} => {},", entry.name, keysym)?;
                }
                other => {
                    writeln!(out, "        qt_key::Key_{} => {{", entry.name)?;
                    writeln!(out, "            {}", expression(other))?;
                    writeln!(out, "        }}")?;
                }
            }
        }
        writeln!(out, "        _ => NO_KEYSYM,")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")
    }
}

fn expression(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Fixed(keysym) => keysym.to_string(),
        Resolution::Shift { lower, upper } => modifier_branch(ModifierFlag::Shift, upper, lower),
        Resolution::Keypad { plain, keypad } => {
            modifier_branch(ModifierFlag::Keypad, keypad, plain)
        }
        Resolution::PlatformSwapped {
            normal,
            swapped,
            platform,
        } => format!(
            "if {} {{ {} }} else {{ {} }}",
            cfg_predicate(*platform),
            expression(swapped),
            expression(normal)
        ),
    }
}

fn modifier_branch(flag: ModifierFlag, set: impl fmt::Display, unset: impl fmt::Display) -> String {
    format!(
        "if qt_modifiers & {} != 0 {{ {} }} else {{ {} }}",
        flag.const_name(),
        set,
        unset
    )
}

fn cfg_predicate(platform: Platform) -> &'static str {
    match platform {
        Platform::MacOs => r#"cfg!(target_os = "macos")"#,
        Platform::Other => r#"cfg!(not(target_os = "macos"))"#,
    }
}
