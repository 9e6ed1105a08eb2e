// Vkbd Pointer Source
// Direct evdev pointer handling: device discovery, polling and translation
// into the core's pointer events

use evdev::{AbsoluteAxisType, Device, EventType, RelativeAxisType};
use log::debug;
use std::os::unix::io::AsRawFd;

use crate::event::{PointerButton, PointerEvent};
use crate::output::uinput::VIRT_DEVICE_NAME;

const ABS_X: u16 = 0;
const ABS_Y: u16 = 1;
const REL_X: u16 = 0;
const REL_Y: u16 = 1;
const BTN_LEFT: u16 = 0x110;
const BTN_TOUCH: u16 = 0x14a;

/// Result type for pointer source operations
pub type PointerSourceResult<T> = Result<T, PointerSourceError>;

/// Errors that can occur while reading pointer devices
#[derive(Debug, thiserror::Error)]
pub enum PointerSourceError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Device information for listing devices
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub index: usize,
    pub name: String,
    pub path: Option<String>,
}

struct PointerDevice {
    device: Device,
    /// (min, max) of the absolute axes, when the device reports them.
    abs_x: Option<(i32, i32)>,
    abs_y: Option<(i32, i32)>,
}

/// Polls evdev pointer devices and yields translated pointer events.
///
/// Touch and absolute devices are scaled from their axis range onto the
/// keyboard surface; relative devices move a clamped cursor. The blocking
/// wait lives here, outside the core.
pub struct PointerSource {
    devices: Vec<PointerDevice>,
    poll_fds: Vec<libc::pollfd>,
    surface: (i32, i32),
    cursor: (i32, i32),
}

impl PointerSource {
    /// Open all pointer devices, autodetected.
    pub fn new() -> PointerSourceResult<Self> {
        Self::with_filter(None)
    }

    /// Open pointer devices whose name contains `filter`, or all of them.
    pub fn with_filter(filter: Option<&str>) -> PointerSourceResult<Self> {
        let mut devices = Vec::new();
        for (_, device) in evdev::enumerate() {
            let name = device.name().unwrap_or("Unknown");
            if name.starts_with(VIRT_DEVICE_NAME) || !Self::is_pointer_device(&device) {
                continue;
            }
            if let Some(filter) = filter {
                if !name.contains(filter) {
                    continue;
                }
            }
            let abs_x = Self::abs_range(&device, ABS_X);
            let abs_y = Self::abs_range(&device, ABS_Y);
            debug!("pointer device: {} abs_x={:?} abs_y={:?}", name, abs_x, abs_y);
            devices.push(PointerDevice { device, abs_x, abs_y });
        }

        if devices.is_empty() {
            return Err(PointerSourceError::DeviceNotFound(
                "No pointer devices found".to_string(),
            ));
        }

        let poll_fds = devices
            .iter()
            .map(|d| libc::pollfd {
                fd: d.device.as_raw_fd(),
                events: libc::POLLIN,
                revents: 0,
            })
            .collect();

        Ok(Self {
            devices,
            poll_fds,
            surface: (0, 0),
            cursor: (0, 0),
        })
    }

    /// List available pointer devices, for the --list-devices flag.
    pub fn list_devices() -> PointerSourceResult<Vec<DeviceInfo>> {
        let mut infos = Vec::new();
        for (path, device) in evdev::enumerate() {
            let name = device.name().unwrap_or("Unknown");
            if name.starts_with(VIRT_DEVICE_NAME) || !Self::is_pointer_device(&device) {
                continue;
            }
            infos.push(DeviceInfo {
                index: infos.len(),
                name: name.to_string(),
                path: path.to_str().map(|s| s.to_string()),
            });
        }
        if infos.is_empty() {
            return Err(PointerSourceError::DeviceNotFound(
                "No pointer devices found".to_string(),
            ));
        }
        Ok(infos)
    }

    /// A pointer device reports a button or touch contact plus at least one
    /// positioning axis.
    fn is_pointer_device(device: &Device) -> bool {
        if !device.supported_events().contains(EventType::KEY) {
            return false;
        }
        let keys = match device.supported_keys() {
            Some(k) => k,
            None => return false,
        };
        let has_button =
            keys.contains(evdev::Key::new(BTN_LEFT)) || keys.contains(evdev::Key::new(BTN_TOUCH));
        let has_abs = device
            .supported_absolute_axes()
            .map_or(false, |a| a.contains(AbsoluteAxisType(ABS_X)));
        let has_rel = device
            .supported_relative_axes()
            .map_or(false, |r| r.contains(RelativeAxisType(REL_X)));
        has_button && (has_abs || has_rel)
    }

    fn abs_range(device: &Device, axis: u16) -> Option<(i32, i32)> {
        let state = device.get_abs_state().ok()?;
        let info = state.get(axis as usize)?;
        if info.maximum > info.minimum {
            Some((info.minimum, info.maximum))
        } else {
            None
        }
    }

    /// Set the surface the pointer is mapped onto (the keyboard window size).
    pub fn set_surface(&mut self, width: i32, height: i32) {
        self.surface = (width, height);
    }

    /// Largest absolute axis extent across devices, as a stand-in for the
    /// screen size when no windowing system is around to report one.
    pub fn surface_hint(&self) -> Option<(i32, i32)> {
        self.devices.iter().find_map(|d| match (d.abs_x, d.abs_y) {
            (Some((x0, x1)), Some((y0, y1))) => Some((x1 - x0 + 1, y1 - y0 + 1)),
            _ => None,
        })
    }

    /// Names of the opened devices.
    pub fn device_names(&self) -> Vec<String> {
        self.devices
            .iter()
            .map(|d| d.device.name().unwrap_or("Unknown").to_string())
            .collect()
    }

    /// Poll for pointer events with a timeout in milliseconds
    /// (0 = non-blocking, -1 = infinite).
    ///
    /// Returns an empty vector on timeout or EINTR; the caller re-checks its
    /// running flag and calls again.
    pub fn poll_events(&mut self, timeout_ms: i32) -> PointerSourceResult<Vec<PointerEvent>> {
        let mut events = Vec::new();

        let poll_result = unsafe {
            libc::poll(
                self.poll_fds.as_mut_ptr(),
                self.poll_fds.len() as libc::nfds_t,
                timeout_ms,
            )
        };

        if poll_result < 0 {
            let err = std::io::Error::last_os_error();
            // EINTR just means a signal arrived; treat like a timeout.
            if err.raw_os_error() == Some(libc::EINTR) {
                return Ok(events);
            }
            return Err(PointerSourceError::Io(err));
        }
        if poll_result == 0 {
            return Ok(events);
        }

        for i in 0..self.devices.len() {
            if self.poll_fds[i].revents & libc::POLLIN == 0 {
                continue;
            }
            let (abs_x, abs_y) = (self.devices[i].abs_x, self.devices[i].abs_y);
            let raw: Vec<_> = match self.devices[i].device.fetch_events() {
                Ok(iter) => iter.collect(),
                Err(_) => continue,
            };
            for event in raw {
                self.translate(event, abs_x, abs_y, &mut events);
            }
        }

        Ok(events)
    }

    fn translate(
        &mut self,
        event: evdev::InputEvent,
        abs_x: Option<(i32, i32)>,
        abs_y: Option<(i32, i32)>,
        out: &mut Vec<PointerEvent>,
    ) {
        match event.event_type() {
            EventType::ABSOLUTE => match event.code() {
                ABS_X => {
                    self.cursor.0 = Self::scale(event.value(), abs_x, self.surface.0);
                    out.push(self.moved());
                }
                ABS_Y => {
                    self.cursor.1 = Self::scale(event.value(), abs_y, self.surface.1);
                    out.push(self.moved());
                }
                _ => {}
            },
            EventType::RELATIVE => match event.code() {
                REL_X => {
                    self.cursor.0 =
                        (self.cursor.0 + event.value()).clamp(0, (self.surface.0 - 1).max(0));
                    out.push(self.moved());
                }
                REL_Y => {
                    self.cursor.1 =
                        (self.cursor.1 + event.value()).clamp(0, (self.surface.1 - 1).max(0));
                    out.push(self.moved());
                }
                _ => {}
            },
            EventType::KEY => {
                // Only real click buttons and touch contacts; tool-presence
                // codes like BTN_TOOL_FINGER are not presses.
                let code = event.code();
                let button = match code {
                    0x110..=0x117 | BTN_TOUCH => PointerButton::from_code(code),
                    _ => return,
                };
                match event.value() {
                    1 => out.push(PointerEvent::Down {
                        x: self.cursor.0,
                        y: self.cursor.1,
                        button,
                    }),
                    0 => out.push(PointerEvent::Up { x: self.cursor.0, y: self.cursor.1 }),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn moved(&self) -> PointerEvent {
        PointerEvent::Move { x: self.cursor.0, y: self.cursor.1 }
    }

    fn scale(value: i32, range: Option<(i32, i32)>, extent: i32) -> i32 {
        match range {
            Some((min, max)) if max > min && extent > 1 => {
                let span = i64::from(max - min);
                let pos = i64::from(value.clamp(min, max) - min);
                (pos * i64::from(extent - 1) / span) as i32
            }
            _ => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_maps_range_onto_surface() {
        assert_eq!(PointerSource::scale(0, Some((0, 4095)), 1280), 0);
        assert_eq!(PointerSource::scale(4095, Some((0, 4095)), 1280), 1279);
        assert_eq!(PointerSource::scale(2048, Some((0, 4095)), 1280), 639);
    }

    #[test]
    fn test_scale_clamps_out_of_range_values() {
        assert_eq!(PointerSource::scale(-50, Some((0, 100)), 200), 0);
        assert_eq!(PointerSource::scale(150, Some((0, 100)), 200), 199);
    }

    #[test]
    fn test_scale_without_range_passes_through() {
        assert_eq!(PointerSource::scale(42, None, 200), 42);
    }
}
