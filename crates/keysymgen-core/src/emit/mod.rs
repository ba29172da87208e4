// Keysymgen Emitters
// Serialize a decision table as dispatch source text

pub mod cpp;
pub mod rust;

use std::fmt;

use serde::Deserialize;
use strum_macros::{Display, EnumString};

pub use cpp::CppHeaderEmitter;
pub use rust::RustEmitter;

use crate::resolve::DecisionTable;

/// Writes a complete generated artifact.
///
/// Implementations must iterate the table in its own order only, so that the
/// same table always yields the same bytes.
pub trait Emitter {
    fn emit(&self, table: &DecisionTable, out: &mut String) -> fmt::Result;
}

/// Language of the generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Rust module with a `qt_key_to_keysym` function
    #[default]
    Rust,
    /// C++ header with an inline `orv_qt_key_to_keysym` function
    CppHeader,
}

impl OutputFormat {
    /// File name used when no output path is configured
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Rust => "qtkey_to_keysym.rs",
            OutputFormat::CppHeader => "orv_qtkey_to_xkeysym.h",
        }
    }

    /// Emitter for this format, optionally overriding the function name
    pub fn emitter(self, function_name: Option<&str>) -> Box<dyn Emitter> {
        match self {
            OutputFormat::Rust => {
                let mut emitter = RustEmitter::default();
                if let Some(name) = function_name {
                    emitter.function_name = name.to_string();
                }
                Box::new(emitter)
            }
            OutputFormat::CppHeader => {
                let mut emitter = CppHeaderEmitter::default();
                if let Some(name) = function_name {
                    emitter.function_name = name.to_string();
                }
                Box::new(emitter)
            }
        }
    }
}

/// Render `table` with any emitter
pub fn render(table: &DecisionTable, emitter: &dyn Emitter) -> Result<String, fmt::Error> {
    let mut out = String::new();
    emitter.emit(table, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("rust".parse::<OutputFormat>().unwrap(), OutputFormat::Rust);
        assert_eq!(
            "cpp-header".parse::<OutputFormat>().unwrap(),
            OutputFormat::CppHeader
        );
        assert!("python".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::CppHeader.to_string(), "cpp-header");
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(OutputFormat::Rust.default_file_name(), "qtkey_to_keysym.rs");
        assert_eq!(
            OutputFormat::CppHeader.default_file_name(),
            "orv_qtkey_to_xkeysym.h"
        );
    }

    #[test]
    fn test_render_empty_table() {
        let table = DecisionTable::default();
        let out = render(&table, OutputFormat::Rust.emitter(Some("to_keysym")).as_ref()).unwrap();
        assert!(out.contains("pub fn to_keysym(qt_key: u32, qt_modifiers: u32, text: &str) -> u32"));
        assert!(out.contains("        _ => NO_KEYSYM,"));
    }
}
