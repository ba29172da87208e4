// Keysymgen Config API
// TOML configuration and header discovery

pub mod files;
pub mod parser;

pub use files::{candidates, is_up_to_date, locate_input, write_output, SourcePaths};
pub use parser::{ConfigError, GeneratorConfig, InputsConfig, OutputConfig};
