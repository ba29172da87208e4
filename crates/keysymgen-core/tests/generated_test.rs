// Keysymgen Generated Module Tests
//
// tests/fixtures/qtkey_to_keysym.rs is the Rust output for the fixture
// headers. It is compiled in here and must agree with DecisionTable::translate.
// After an intended change to the emitter, regenerate it with:
//   keysymgen --keysymdef tests/fixtures/keysymdef.h \
//     --vendor tests/fixtures/XF86keysym.h --toolkit tests/fixtures/qnamespace.h \
//     -o tests/fixtures/qtkey_to_keysym.rs
//
// Run with: cargo test -p keysymgen-core --test generated_test

use std::path::PathBuf;

use keysymgen_core::config::{InputsConfig, SourcePaths};
use keysymgen_core::{build_table, generate, DecisionTable, Overrides, Platform, RustEmitter, SourceTexts};

mod generated {
    include!("fixtures/qtkey_to_keysym.rs");
}

// =========================================================================
// Test Helpers
// =========================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn sources() -> SourceTexts {
    let inputs = InputsConfig {
        keysymdef: Some(fixture("keysymdef.h")),
        vendor: Some(fixture("XF86keysym.h")),
        toolkit: Some(fixture("qnamespace.h")),
    };
    SourcePaths::locate(&inputs).unwrap().read().unwrap()
}

fn table() -> DecisionTable {
    build_table(&sources(), Overrides::builtin()).unwrap()
}

/// The platform the included module was compiled for
fn host_platform() -> Platform {
    if cfg!(target_os = "macos") {
        Platform::MacOs
    } else {
        Platform::Other
    }
}

fn expected(table: &DecisionTable, qt_key: u32, modifiers: u32, text: &str) -> u32 {
    table
        .translate(qt_key, modifiers, text, host_platform())
        .map(u32::from)
        .unwrap_or(generated::NO_KEYSYM)
}

const MODIFIER_STATES: [u32; 4] = [
    0,
    generated::SHIFT_MODIFIER,
    generated::KEYPAD_MODIFIER,
    generated::SHIFT_MODIFIER | generated::KEYPAD_MODIFIER,
];

// =========================================================================
// Tests
// =========================================================================

#[test]
fn test_fixture_matches_emitter() {
    let generated = generate(&sources(), Overrides::builtin(), &RustEmitter::default()).unwrap();
    assert_eq!(
        generated.output,
        include_str!("fixtures/qtkey_to_keysym.rs"),
        "tests/fixtures/qtkey_to_keysym.rs is stale"
    );
}

#[test]
fn test_generated_keys_match_translate() {
    let table = table();
    for entry in table.entries() {
        for modifiers in MODIFIER_STATES {
            assert_eq!(
                generated::qt_key_to_keysym(entry.toolkit_code, modifiers, ""),
                expected(&table, entry.toolkit_code, modifiers, ""),
                "Key_{} with modifiers {:#010x}",
                entry.name,
                modifiers
            );
        }
    }
}

#[test]
fn test_generated_text_cases_match_translate() {
    let table = table();
    for (position, keysym) in table.text_cases() {
        let text = char::from_u32(position).unwrap().to_string();
        for modifiers in MODIFIER_STATES {
            let actual = generated::qt_key_to_keysym(0, modifiers, &text);
            assert_eq!(actual, expected(&table, 0, modifiers, &text), "U+{position:04X}");
            assert_eq!(actual, u32::from(keysym));
        }
    }
}

#[test]
fn test_generated_fallbacks() {
    let table = table();
    // Key_Dead_Grave is unresolved, Key_Launch0 ignored
    for qt_key in [0x0100_1250, 0x0100_0090, 0x01ff_ffff] {
        assert_eq!(generated::qt_key_to_keysym(qt_key, 0, ""), generated::NO_KEYSYM);
        assert_eq!(table.translate(qt_key, 0, "", host_platform()), None);
    }
    // text without a keysym of its own, or longer than one character
    assert_eq!(
        generated::qt_key_to_keysym(generated::qt_key::Key_Escape, 0, "\u{1b}"),
        expected(&table, generated::qt_key::Key_Escape, 0, "\u{1b}")
    );
    assert_eq!(
        generated::qt_key_to_keysym(generated::qt_key::Key_A, generated::SHIFT_MODIFIER, "Ab"),
        0x41
    );
}

#[test]
fn test_generated_platform_swap() {
    let control = generated::qt_key_to_keysym(generated::qt_key::Key_Control, 0, "");
    let meta = generated::qt_key_to_keysym(generated::qt_key::Key_Meta, 0, "");
    if cfg!(target_os = "macos") {
        assert_eq!((control, meta), (0xffe7, 0xffe3));
    } else {
        assert_eq!((control, meta), (0xffe3, 0xffe7));
    }
}
