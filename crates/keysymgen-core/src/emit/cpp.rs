// Keysymgen C++ Header Emitter
// Generates orv_qtkey_to_xkeysym.h for Qt code linking against libopenrv

use std::fmt::{self, Write};

use super::Emitter;
use crate::modifier::{ModifierFlag, Platform};
use crate::resolve::{DecisionTable, Resolution};

/// Emits an inline C++ function switching over `Qt::Key`.
#[derive(Debug, Clone)]
pub struct CppHeaderEmitter {
    pub function_name: String,
    pub include_guard: String,
}

impl Default for CppHeaderEmitter {
    fn default() -> Self {
        Self {
            function_name: "orv_qt_key_to_keysym".to_string(),
            include_guard: "OPENRV_QTKEY_TO_XKEYSYM_H".to_string(),
        }
    }
}

impl Emitter for CppHeaderEmitter {
    fn emit(&self, table: &DecisionTable, out: &mut String) -> fmt::Result {
        writeln!(out, "/* Auto-generated file from keysymgen")?;
        writeln!(out, "   All changes will be overwritten.")?;
        writeln!(out)?;
        writeln!(
            out,
            "   This file provides convenience functions to map a Qt::Key to a X11 keysym value"
        )?;
        writeln!(out, "   as used by the VNC protocol.")?;
        writeln!(out)?;
        writeln!(
            out,
            "   See also the keysymdef.h/XF86keysym.h files of the X server for the keysym values. */"
        )?;
        writeln!(out)?;
        writeln!(out, "#ifndef {}", self.include_guard)?;
        writeln!(out, "#define {}", self.include_guard)?;
        writeln!(out)?;
        writeln!(out, "#include <QtCore/qnamespace.h>")?;
        writeln!(out, "#include <QtCore/qstring.h>")?;
        writeln!(out)?;
        writeln!(
            out,
            "inline int {}(int qtKey, int qtModifiers, const QString& text)",
            self.function_name
        )?;
        writeln!(out, "{{")?;
        writeln!(out, "  if (text.size() == 1) {{")?;
        writeln!(out, "    switch (text.unicode()[0].unicode()) {{")?;
        // A single QChar is one UTF-16 unit, astral code points never match.
        for (position, keysym) in table.text_cases().filter(|(p, _)| *p <= 0xFFFF) {
            writeln!(out, "      case {:#06x}: return {};", position, keysym)?;
        }
        writeln!(out, "      default: break;")?;
        writeln!(out, "    }}")?;
        writeln!(out, "  }}")?;
        writeln!(out, "  switch (qtKey) {{")?;
        for entry in table.entries() {
            match &entry.resolution {
                Resolution::PlatformSwapped { .. } => {
                    writeln!(out, "    case Qt::Key_{}:", entry.name)?;
                    writeln!(out, "{}", platform_block(&entry.resolution, "      "))?;
                }
                other => {
                    writeln!(out, "    case Qt::Key_{}: {}", entry.name, statement(other))?;
                }
            }
        }
        writeln!(out, "    default: return 0;")?;
        writeln!(out, "  }}")?;
        writeln!(out, "}}")?;
        writeln!(out, "#endif")
    }
}

fn statement(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Fixed(keysym) => format!("return {};", keysym),
        Resolution::Shift { lower, upper } => modifier_branch(ModifierFlag::Shift, upper, lower),
        Resolution::Keypad { plain, keypad } => {
            modifier_branch(ModifierFlag::Keypad, keypad, plain)
        }
        Resolution::PlatformSwapped { .. } => format!("\n{}\n", platform_block(resolution, "      ")),
    }
}

/// `#if`/`#else` block for a platform-swapped resolution, without trailing newline
fn platform_block(resolution: &Resolution, indent: &str) -> String {
    let Resolution::PlatformSwapped {
        normal,
        swapped,
        platform,
    } = resolution
    else {
        return format!("{}{}", indent, statement(resolution));
    };
    format!(
        "#if {}\n{}{}\n#else\n{}{}\n#endif",
        preprocessor_predicate(*platform),
        indent,
        statement(swapped),
        indent,
        statement(normal)
    )
}

fn modifier_branch(flag: ModifierFlag, set: impl fmt::Display, unset: impl fmt::Display) -> String {
    format!(
        "if (qtModifiers & {}) {{ return {}; }} else {{ return {}; }}",
        flag.qt_name(),
        set,
        unset
    )
}

fn preprocessor_predicate(platform: Platform) -> &'static str {
    match platform {
        Platform::MacOs => "defined(Q_OS_OSX)",
        Platform::Other => "!defined(Q_OS_OSX)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::Overrides;
    use crate::parse::{PrimaryTable, ToolkitTable, VendorTable};
    use crate::resolve::Resolver;

    fn emit(keysymdef: &str, keys: &[(&str, u32)]) -> String {
        let primary = PrimaryTable::parse(keysymdef).unwrap();
        let vendor = VendorTable::default();
        let toolkit = ToolkitTable::from_pairs(keys.iter().copied());
        let table = Resolver::new(&primary, &vendor, Overrides::builtin())
            .resolve(&toolkit)
            .unwrap();
        let mut out = String::new();
        CppHeaderEmitter::default().emit(&table, &mut out).unwrap();
        out
    }

    #[test]
    fn test_header_layout() {
        let out = emit("#define XK_Escape 0xff1b\n", &[("Escape", 0x0100_0000)]);
        assert!(out.starts_with("/* Auto-generated file from keysymgen\n"));
        assert!(out.contains("#ifndef OPENRV_QTKEY_TO_XKEYSYM_H\n#define OPENRV_QTKEY_TO_XKEYSYM_H\n"));
        assert!(out.contains(
            "inline int orv_qt_key_to_keysym(int qtKey, int qtModifiers, const QString& text)\n{\n"
        ));
        assert!(out.contains("    case Qt::Key_Escape: return 0xff1b;\n"));
        assert!(out.ends_with("    default: return 0;\n  }\n}\n#endif\n"));
    }

    #[test]
    fn test_shift_and_keypad_cases() {
        let out = emit(
            "#define XK_Tab 0xff09\n\
             #define XK_KP_Tab 0xff89\n\
             #define XK_A 0x0041\n\
             #define XK_a 0x0061\n",
            &[("A", 0x41), ("Tab", 0x0100_0001)],
        );
        assert!(out.contains(
            "    case Qt::Key_A: if (qtModifiers & Qt::ShiftModifier) { return 0x0041; } else { return 0x0061; }\n"
        ));
        assert!(out.contains(
            "    case Qt::Key_Tab: if (qtModifiers & Qt::KeypadModifier) { return 0xff89; } else { return 0xff09; }\n"
        ));
    }

    #[test]
    fn test_platform_swap_block() {
        let out = emit(
            "#define XK_Control_L 0xffe3\n#define XK_Meta_L 0xffe7\n",
            &[("Control", 0x0100_0021), ("Meta", 0x0100_0022)],
        );
        assert!(out.contains(
            "    case Qt::Key_Control:\n#if defined(Q_OS_OSX)\n      return 0xffe7;\n#else\n      return 0xffe3;\n#endif\n"
        ));
        assert!(out.contains(
            "    case Qt::Key_Meta:\n#if defined(Q_OS_OSX)\n      return 0xffe3;\n#else\n      return 0xffe7;\n#endif\n"
        ));
    }

    #[test]
    fn test_astral_text_cases_skipped() {
        let out = emit(
            "#define XK_EuroSign 0x20ac  /* U+20AC EURO SIGN */\n\
             #define XK_emoji 0x101f600  /* U+1F600 GRINNING FACE */\n",
            &[],
        );
        assert!(out.contains("      case 0x20ac: return 0x20ac;\n"));
        assert!(!out.contains("0x1f600"));
    }
}
