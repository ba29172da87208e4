// Keysymgen Modifier Flags
// Qt keyboard modifier bits consulted by the generated dispatch, and the
// target platform selecting the Control/Meta swap

/// A Qt keyboard modifier flag that changes which keysym a key produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ModifierFlag {
    /// `Qt::ShiftModifier`
    Shift = 0x0200_0000,
    /// `Qt::KeypadModifier`
    Keypad = 0x2000_0000,
}

impl ModifierFlag {
    /// Bit mask of this flag in a `Qt::KeyboardModifiers` value
    pub fn mask(self) -> u32 {
        self as u32
    }

    /// Whether this flag is set in a modifier bit set
    pub fn is_set(self, modifiers: u32) -> bool {
        modifiers & self.mask() != 0
    }

    /// Qualified C++ enumerator name
    pub fn qt_name(self) -> &'static str {
        match self {
            ModifierFlag::Shift => "Qt::ShiftModifier",
            ModifierFlag::Keypad => "Qt::KeypadModifier",
        }
    }

    /// Name of the constant declared in generated Rust code
    pub fn const_name(self) -> &'static str {
        match self {
            ModifierFlag::Shift => "SHIFT_MODIFIER",
            ModifierFlag::Keypad => "KEYPAD_MODIFIER",
        }
    }
}

/// Platform a generated table is compiled for.
///
/// Only macOS changes the table: Qt reports the Command key as `Key_Control`
/// and the Control key as `Key_Meta` there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    MacOs,
    #[default]
    Other,
}
