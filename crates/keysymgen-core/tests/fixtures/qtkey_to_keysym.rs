// @generated by keysymgen. All changes will be overwritten.
//
// Maps a Qt key event to the X11 keysym value used by the VNC (RFB) protocol.
// See keysymdef.h and XF86keysym.h of the X server for the keysym values.

/// `Qt::ShiftModifier`
pub const SHIFT_MODIFIER: u32 = 0x02000000;
/// `Qt::KeypadModifier`
pub const KEYPAD_MODIFIER: u32 = 0x20000000;
/// Returned when no keysym is known for a key event.
pub const NO_KEYSYM: u32 = 0x0000;

/// `Qt::Key` values that have a keysym mapping.
#[allow(non_upper_case_globals, dead_code)]
pub mod qt_key {
    pub const Key_0: u32 = 0x30;
    pub const Key_1: u32 = 0x31;
    pub const Key_A: u32 = 0x41;
    pub const Key_Agrave: u32 = 0xc0;
    pub const Key_Alt: u32 = 0x1000023;
    pub const Key_Asterisk: u32 = 0x2a;
    pub const Key_B: u32 = 0x42;
    pub const Key_Back: u32 = 0x1000061;
    pub const Key_Backspace: u32 = 0x1000003;
    pub const Key_Backtab: u32 = 0x1000002;
    pub const Key_Calculator: u32 = 0x10000cb;
    pub const Key_CapsLock: u32 = 0x1000024;
    pub const Key_Control: u32 = 0x1000021;
    pub const Key_Delete: u32 = 0x1000007;
    pub const Key_Enter: u32 = 0x1000005;
    pub const Key_Escape: u32 = 0x1000000;
    pub const Key_Home: u32 = 0x1000010;
    pub const Key_Left: u32 = 0x1000012;
    pub const Key_MediaPlay: u32 = 0x1000080;
    pub const Key_Meta: u32 = 0x1000022;
    pub const Key_MonBrightnessUp: u32 = 0x10000b2;
    pub const Key_PageDown: u32 = 0x1000017;
    pub const Key_PageUp: u32 = 0x1000016;
    pub const Key_Plus: u32 = 0x2b;
    pub const Key_Return: u32 = 0x1000004;
    pub const Key_Shift: u32 = 0x1000020;
    pub const Key_Space: u32 = 0x20;
    pub const Key_Tab: u32 = 0x1000001;
    pub const Key_Up: u32 = 0x1000013;
    pub const Key_VolumeDown: u32 = 0x1000070;
    pub const Key_VolumeMute: u32 = 0x1000071;
    pub const Key_VolumeUp: u32 = 0x1000072;
}

/// Map a Qt key event to an X11 keysym.
///
/// A `text` of exactly one character that has a keysym of its own takes
/// precedence over `qt_key`.
#[allow(unreachable_patterns, unused_variables)]
pub fn qt_key_to_keysym(qt_key: u32, qt_modifiers: u32, text: &str) -> u32 {
    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        match u32::from(c) {
            0x0020 => return 0x0020,
            0x0027 => return 0x0027,
            0x002a => return 0x002a,
            0x002b => return 0x002b,
            0x0030 => return 0x0030,
            0x0031 => return 0x0031,
            0x0041 => return 0x0041,
            0x0042 => return 0x0042,
            0x0061 => return 0x0061,
            0x0062 => return 0x0062,
            0x00c0 => return 0x00c0,
            0x00e0 => return 0x00e0,
            0x20ac => return 0x20ac,
            0x223c => return 0x08c8,
            _ => {}
        }
    }
    match qt_key {
        qt_key::Key_0 => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xffb0 } else { 0x0030 }
        }
        qt_key::Key_1 => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xffb1 } else { 0x0031 }
        }
        qt_key::Key_A => {
            if qt_modifiers & SHIFT_MODIFIER != 0 { 0x0041 } else { 0x0061 }
        }
        qt_key::Key_Agrave => 0x00e0,
        qt_key::Key_Alt => 0xffe9,
        qt_key::Key_Asterisk => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xffaa } else { 0x002a }
        }
        qt_key::Key_B => {
            if qt_modifiers & SHIFT_MODIFIER != 0 { 0x0042 } else { 0x0062 }
        }
        qt_key::Key_Back => 0x1008ff26,
        qt_key::Key_Backspace => 0xff08,
        qt_key::Key_Backtab => 0xfe20,
        qt_key::Key_Calculator => 0x1008ff1d,
        qt_key::Key_CapsLock => 0xffe5,
        qt_key::Key_Control => {
            if cfg!(target_os = "macos") { 0xffe7 } else { 0xffe3 }
        }
        qt_key::Key_Delete => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xff9f } else { 0xffff }
        }
        qt_key::Key_Enter => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xff8d } else { 0xff8d }
        }
        qt_key::Key_Escape => 0xff1b,
        qt_key::Key_Home => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xff95 } else { 0xff50 }
        }
        qt_key::Key_Left => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xff96 } else { 0xff51 }
        }
        qt_key::Key_MediaPlay => 0x1008ff14,
        qt_key::Key_Meta => {
            if cfg!(target_os = "macos") { 0xffe3 } else { 0xffe7 }
        }
        qt_key::Key_MonBrightnessUp => 0x1008ff02,
        qt_key::Key_PageDown => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xff9b } else { 0xff56 }
        }
        qt_key::Key_PageUp => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xff9a } else { 0xff55 }
        }
        qt_key::Key_Plus => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xffab } else { 0x002b }
        }
        qt_key::Key_Return => 0xff0d,
        qt_key::Key_Shift => 0xffe1,
        qt_key::Key_Space => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xff80 } else { 0x0020 }
        }
        qt_key::Key_Tab => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xff89 } else { 0xff09 }
        }
        qt_key::Key_Up => {
            if qt_modifiers & KEYPAD_MODIFIER != 0 { 0xff97 } else { 0xff52 }
        }
        qt_key::Key_VolumeDown => 0x1008ff11,
        qt_key::Key_VolumeMute => 0x1008ff12,
        qt_key::Key_VolumeUp => 0x1008ff13,
        _ => NO_KEYSYM,
    }
}
