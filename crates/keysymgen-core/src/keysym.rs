// Keysymgen Keysym Type
// Represents a single X11 keysym value as transmitted by the RFB protocol

use std::fmt;

/// First keysym of the XFree86 vendor range (exclusive lower bound + 1).
pub const VENDOR_RANGE_START: u32 = 0x1008_0001;

/// Last keysym of the XFree86 vendor range.
pub const VENDOR_RANGE_END: u32 = 0x1008_FFFF;

/// Value returned by the generated dispatch when no keysym is known.
pub const NO_KEYSYM: Keysym = Keysym(0);

/// Represents a single X11 keysym code.
///
/// This is a newtype wrapper around u32 for type safety.
/// The numeric values match keysymdef.h / XF86keysym.h definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Keysym(pub u32);

impl Keysym {
    /// Get the raw numeric code value
    pub fn code(self) -> u32 {
        self.0
    }

    /// Whether this keysym lies in the reserved XFree86 vendor range
    pub fn is_vendor(self) -> bool {
        (VENDOR_RANGE_START..=VENDOR_RANGE_END).contains(&self.0)
    }
}

impl From<u32> for Keysym {
    fn from(code: u32) -> Self {
        Keysym(code)
    }
}

impl From<Keysym> for u32 {
    fn from(keysym: Keysym) -> Self {
        keysym.0
    }
}

/// Formats as `0x` followed by at least four lowercase hex digits,
/// the notation used in both generated outputs.
impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}
