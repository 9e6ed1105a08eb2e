// Vkbd Core Library
// Layout geometry and the press/release state machine for an on-screen
// virtual keyboard, plus its evdev collaborators

pub mod event;
pub mod key;
pub mod keyboard;
pub mod layout;
pub mod layouts;
pub mod output;
pub mod press;
pub mod settings;
pub mod state;

#[cfg(feature = "uinput")]
pub mod input;

pub use event::{PointerButton, PointerEvent};
pub use key::{key_from_name, key_name, Key};
pub use keyboard::{KeyView, Keyboard};
pub use layout::{compute_layout, locate, ButtonMap, KeyDef, KeyRect, LayoutSpec};
pub use output::{Injector, RecordingInjector};
pub use press::{Discipline, Injection, InjectionBatch, PressController};
pub use settings::{Settings, SettingsError, WindowPlacement};
pub use state::{KeyStateStore, VisualState};

#[cfg(feature = "uinput")]
pub use input::{DeviceInfo, PointerSource, PointerSourceError};
#[cfg(feature = "uinput")]
pub use output::uinput::{UinputError, UinputKeyboard};
