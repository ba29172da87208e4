// Keysymgen Override Tables
// Hand-authored mappings for Qt keys whose names have no structural keysym match

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::Deserialize;

use crate::modifier::Platform;

/// Qt key name -> keysym name, for spellings that differ between the two.
const ALTERNATIVE_NAMES: &[(&str, &str)] = &[
    // Qt has "Alt" and "AltGr", X has "Alt_L" and "Alt_R"
    ("Alt", "Alt_L"),
    ("AltGr", "Alt_R"),
    // Page_Up/Page_Down are later aliases of Prior/Next in keysymdef.h
    ("PageUp", "Prior"),
    ("PageDown", "Next"),
    ("ScrollLock", "Scroll_Lock"),
    ("CapsLock", "Caps_Lock"),
    // X has left and right variants, Qt only one. We map to the left one.
    ("Shift", "Shift_L"),
    ("Meta", "Meta_L"),
    ("Control", "Control_L"),
    ("OpenUrl", "OpenURL"),
    ("NumLock", "Num_Lock"),
    ("MicMute", "AudioMicMute"),
    ("VolumeMute", "AudioMute"),
    ("VolumeUp", "AudioRaiseVolume"),
    ("VolumeDown", "AudioLowerVolume"),
    ("MediaStop", "AudioStop"),
    ("MediaRecord", "AudioRecord"),
    ("MediaNext", "AudioNext"),
    ("MediaPause", "AudioPause"),
    ("MediaPlay", "AudioPlay"),
    ("MediaPrevious", "AudioPrev"),
    ("LaunchMedia", "AudioMedia"),
    ("LaunchMail", "Mail"),
    ("KeyboardLightOnOff", "KbdLightOnOff"),
    ("KeyboardBrightnessDown", "KbdBrightnessDown"),
    ("KeyboardBrightnessUp", "KbdBrightnessUp"),
    // Qt::Key_Enter implies Qt::KeypadModifier
    ("Enter", "KP_Enter"),
    // Qt reports ISO_Left_Tab as Backtab
    ("Backtab", "ISO_Left_Tab"),
];

/// Qt key name -> dedicated keypad keysym.
///
/// X has separate keysyms for keypad keys, Qt reports the plain key plus
/// `Qt::KeypadModifier`.
const KEYPAD_NAMES: &[(&str, &str)] = &[
    ("Space", "KP_Space"),
    ("Tab", "KP_Tab"),
    ("Enter", "KP_Enter"),
    ("F1", "KP_F1"),
    ("F2", "KP_F2"),
    ("F3", "KP_F3"),
    ("F4", "KP_F4"),
    ("Home", "KP_Home"),
    ("Left", "KP_Left"),
    ("Up", "KP_Up"),
    ("Right", "KP_Right"),
    ("Down", "KP_Down"),
    ("PageUp", "KP_Prior"),
    ("PageDown", "KP_Next"),
    ("End", "KP_End"),
    ("Clear", "KP_Begin"),
    ("Insert", "KP_Insert"),
    ("Delete", "KP_Delete"),
    ("Equal", "KP_Equal"),
    ("Asterisk", "KP_Multiply"),
    ("Plus", "KP_Add"),
    ("Comma", "KP_Separator"),
    ("Minus", "KP_Subtract"),
    ("Period", "KP_Decimal"),
    ("Slash", "KP_Divide"),
    ("0", "KP_0"),
    ("1", "KP_1"),
    ("2", "KP_2"),
    ("3", "KP_3"),
    ("4", "KP_4"),
    ("5", "KP_5"),
    ("6", "KP_6"),
    ("7", "KP_7"),
    ("8", "KP_8"),
    ("9", "KP_9"),
];

/// Qt keys not used on X11, or with no sensible keysym.
const IGNORED_KEYS: &[&str] = &[
    "unknown",
    "MicVolumeDown",
    "MicVolumeUp",
    "No",
    "Ooblique",
    "Play",
    "Printer",
    "QuoteLeft",
    "Settings",
    "SysReq",
    "ToggleCallHangup",
    "TrebleDown",
    "TrebleUp",
    "VoiceDial",
    "Yes",
    "Zoom",
    "MediaTogglePlayPause",
    "MediaLast",
    "Exit",
    "Flip",
    "Guide",
    "Hangup",
    "Henkan",
    "Direction_L",
    "Direction_R",
    "Info",
    "LastNumberRedial",
    "ChannelDown",
    "ChannelUp",
    "Context1",
    "Context2",
    "Context3",
    "Context4",
    "BassBoost",
    "BassDown",
    "BassUp",
    "Call",
    "Camera",
    "CameraFocus",
    // Qt maps Launch0 to XF86XK_MyComputer, Launch1 to XF86XK_Calculator and
    // LaunchN to XF86XK_Launch(N-2). Not worth following for remote control.
    "Launch0",
    "Launch1",
    "Launch2",
    "Launch3",
    "Launch4",
    "Launch5",
    "Launch6",
    "Launch7",
    "Launch8",
    "Launch9",
    "LaunchA",
    "LaunchB",
    "LaunchC",
    "LaunchD",
    "LaunchE",
    "LaunchF",
    "LaunchG",
    "LaunchH",
];

static BUILTIN: LazyLock<Overrides> = LazyLock::new(|| Overrides {
    alternative_names: to_map(ALTERNATIVE_NAMES),
    keypad: to_map(KEYPAD_NAMES),
    ignore: IGNORED_KEYS.iter().map(|s| s.to_string()).collect(),
    swap: PlatformSwap::CONTROL_META,
});

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The two Qt keys whose resolved keysyms trade places on one platform.
///
/// On macOS `Qt::Key_Control` is the Command key and `Qt::Key_Meta` is Ctrl.
/// A remote system expects Ctrl to arrive as Ctrl, so the two are swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSwap {
    pub first: &'static str,
    pub second: &'static str,
    pub platform: Platform,
}

impl PlatformSwap {
    pub const CONTROL_META: PlatformSwap = PlatformSwap {
        first: "Control",
        second: "Meta",
        platform: Platform::MacOs,
    };

    /// The other member of the pair, if `name` is a member
    pub fn partner(&self, name: &str) -> Option<&'static str> {
        if name == self.first {
            Some(self.second)
        } else if name == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Extra override entries, merged on top of the built-in tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideExtensions {
    /// Qt key name -> keysym name
    #[serde(default)]
    pub alternative_names: BTreeMap<String, String>,

    /// Qt key name -> keypad keysym name
    #[serde(default)]
    pub keypad: BTreeMap<String, String>,

    /// Additional Qt keys to skip
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl OverrideExtensions {
    pub fn is_empty(&self) -> bool {
        self.alternative_names.is_empty() && self.keypad.is_empty() && self.ignore.is_empty()
    }
}

/// Lookup tables consulted by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overrides {
    alternative_names: BTreeMap<String, String>,
    keypad: BTreeMap<String, String>,
    ignore: BTreeSet<String>,
    swap: PlatformSwap,
}

impl Default for Overrides {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Overrides {
    /// The built-in tables
    pub fn builtin() -> &'static Overrides {
        &BUILTIN
    }

    /// No alternative names, keypad keys or ignored keys; only the swap pair
    pub fn empty() -> Self {
        Self {
            alternative_names: BTreeMap::new(),
            keypad: BTreeMap::new(),
            ignore: BTreeSet::new(),
            swap: PlatformSwap::CONTROL_META,
        }
    }

    /// Merge extra entries; an extension replaces a built-in entry of the same key
    pub fn extend(&mut self, extensions: &OverrideExtensions) {
        for (qt, x) in &extensions.alternative_names {
            if let Some(old) = self.alternative_names.insert(qt.clone(), x.clone()) {
                log::debug!("alternative name for {} changed from {} to {}", qt, old, x);
            }
        }
        for (qt, x) in &extensions.keypad {
            if let Some(old) = self.keypad.insert(qt.clone(), x.clone()) {
                log::debug!("keypad keysym for {} changed from {} to {}", qt, old, x);
            }
        }
        self.ignore.extend(extensions.ignore.iter().cloned());
    }

    /// Builder form of [`Overrides::extend`]
    pub fn with_extensions(mut self, extensions: &OverrideExtensions) -> Self {
        self.extend(extensions);
        self
    }

    /// Keysym name to use instead of the Qt key name
    pub fn alternative(&self, qt_name: &str) -> Option<&str> {
        self.alternative_names.get(qt_name).map(String::as_str)
    }

    /// Keypad keysym name for a Qt key
    pub fn keypad(&self, qt_name: &str) -> Option<&str> {
        self.keypad.get(qt_name).map(String::as_str)
    }

    /// Whether a Qt key is skipped without a diagnostic
    pub fn is_ignored(&self, qt_name: &str) -> bool {
        self.ignore.contains(qt_name)
    }

    pub fn swap(&self) -> PlatformSwap {
        self.swap
    }
}
