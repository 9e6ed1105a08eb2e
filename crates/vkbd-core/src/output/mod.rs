// Vkbd Output
// The injection boundary toward the host input subsystem

#[cfg(feature = "uinput")]
pub mod uinput;

use crate::key::Key;
use crate::press::Injection;

/// Sink for synthetic key events.
///
/// Fire-and-forget contract: the core never inspects an outcome, so
/// implementations handle (typically log) their own failures.
pub trait Injector {
    fn key_down(&mut self, key: Key);
    fn key_up(&mut self, key: Key);

    /// Forward an ordered injection batch.
    fn apply(&mut self, batch: &[Injection]) {
        for injection in batch {
            match *injection {
                Injection::Press(key) => self.key_down(key),
                Injection::Release(key) => self.key_up(key),
            }
        }
    }
}

/// Injector that records everything it is handed. Test support and dry runs.
#[derive(Debug, Default)]
pub struct RecordingInjector {
    events: Vec<Injection>,
}

impl RecordingInjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Injection] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<Injection> {
        std::mem::take(&mut self.events)
    }
}

impl Injector for RecordingInjector {
    fn key_down(&mut self, key: Key) {
        self.events.push(Injection::Press(key));
    }

    fn key_up(&mut self, key: Key) {
        self.events.push(Injection::Release(key));
    }
}
