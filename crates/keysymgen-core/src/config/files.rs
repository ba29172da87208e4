// Keysymgen Input/Output Files
// Locates the definition headers and writes the generated artifact

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::parser::{ConfigError, InputsConfig};
use crate::generate::SourceTexts;
use crate::parse::SourceKind;

const SOURCE_KINDS: [SourceKind; 3] = [SourceKind::Keysymdef, SourceKind::Vendor, SourceKind::Toolkit];

/// Well-known locations of a header, most specific first
pub fn candidates(kind: SourceKind) -> Vec<PathBuf> {
    match kind {
        SourceKind::Keysymdef | SourceKind::Vendor => vec![
            PathBuf::from(kind.file_name()),
            Path::new("/usr/include/X11").join(kind.file_name()),
        ],
        SourceKind::Toolkit => {
            let mut paths = vec![
                PathBuf::from("/usr/include/qt5/QtCore/qnamespace.h"),
                PathBuf::from("/usr/include/x86_64-linux-gnu/qt5/QtCore/qnamespace.h"),
            ];
            if let Some(home) = dirs::home_dir() {
                paths.push(home.join("Qt/5.5/clang_64/lib/QtCore.framework/Headers/qnamespace.h"));
            }
            paths
        }
    }
}

/// Resolve the path of one header.
///
/// An explicit path is used as-is and never falls back to the candidates.
pub fn locate_input(kind: SourceKind, explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(ConfigError::MissingInput {
            kind,
            searched: vec![path.to_path_buf()],
        });
    }

    let searched = candidates(kind);
    match searched.iter().find(|p| p.is_file()) {
        Some(path) => {
            log::debug!("found {} at {}", kind.file_name(), path.display());
            Ok(path.clone())
        }
        None => Err(ConfigError::MissingInput { kind, searched }),
    }
}

/// Paths of the three headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub keysymdef: PathBuf,
    pub vendor: PathBuf,
    pub toolkit: PathBuf,
}

impl SourcePaths {
    /// Locate every header, using configured paths where present
    pub fn locate(inputs: &InputsConfig) -> Result<Self, ConfigError> {
        let [keysymdef, vendor, toolkit] =
            SOURCE_KINDS.map(|kind| locate_input(kind, inputs.path(kind)));
        Ok(Self {
            keysymdef: keysymdef?,
            vendor: vendor?,
            toolkit: toolkit?,
        })
    }

    pub fn get(&self, kind: SourceKind) -> &Path {
        match kind {
            SourceKind::Keysymdef => &self.keysymdef,
            SourceKind::Vendor => &self.vendor,
            SourceKind::Toolkit => &self.toolkit,
        }
    }

    /// Read all three headers into memory
    pub fn read(&self) -> Result<SourceTexts, ConfigError> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| ConfigError::ReadInput {
                path: path.to_path_buf(),
                source,
            })
        };
        Ok(SourceTexts {
            keysymdef: read(&self.keysymdef)?,
            vendor: read(&self.vendor)?,
            toolkit: read(&self.toolkit)?,
        })
    }
}

/// Replace `path` with `contents`.
///
/// The data goes to a sibling temp file first, so a failed run never leaves
/// a truncated artifact behind.
pub fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    let tmp = path.with_file_name(tmp_name);

    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

/// True when `path` already holds exactly `contents`
pub fn is_up_to_date(path: &Path, contents: &str) -> io::Result<bool> {
    match fs::read_to_string(path) {
        Ok(existing) => Ok(existing == contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
