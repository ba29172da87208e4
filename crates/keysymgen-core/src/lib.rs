// Keysymgen Core Library
// Qt key -> X11 keysym dispatch table generation

pub mod config;
pub mod emit;
pub mod generate;
pub mod keysym;
pub mod modifier;
pub mod overrides;
pub mod parse;
pub mod resolve;

pub use config::{ConfigError, GeneratorConfig, SourcePaths};
pub use emit::{render, CppHeaderEmitter, Emitter, OutputFormat, RustEmitter};
pub use generate::{build_table, generate, GenerateError, Generated, SourceTexts};
pub use keysym::{Keysym, NO_KEYSYM};
pub use modifier::{ModifierFlag, Platform};
pub use overrides::{OverrideExtensions, Overrides, PlatformSwap};
pub use parse::{ParseError, PrimaryTable, SourceKind, ToolkitTable, VendorTable};
pub use resolve::{DecisionEntry, DecisionTable, Diagnostic, Resolution, ResolveError, Resolver};
