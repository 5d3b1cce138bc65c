//! OSS mixer device access
//!
//! Each mixer channel is a 16-bit register: low byte left level, high byte
//! right level, both in the 0-100 range. This tool treats a channel as a
//! single value, replicated into both bytes on write and masked to the low
//! byte on read. Registers are reached through three ioctls on the device
//! node: per-channel read and write, plus a presence bitmask telling which
//! registry channels the hardware actually wires up.

use std::fs::{File, OpenOptions};
use std::mem;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use nix::errno::Errno;

use crate::{MixerError, Result};

/// Default mixer device node.
pub const DEFAULT_DEVICE: &str = "/dev/mixer";

/// Environment variable overriding the mixer device path.
pub const DEVICE_ENV: &str = "MIXCTL_DEVICE";

/// `SOUND_MIXER_DEVMASK` register in the OSS API.
const DEVMASK: i32 = 0xfe;

/// Register-level access to a mixer device.
///
/// Implemented by [`OssMixer`] for real hardware and by
/// [`crate::mock::MockMixer`] for tests. The provided methods carry the
/// volume conventions shared by both: device call failures are logged and
/// swallowed, never surfaced to the caller.
pub trait Mixer {
    /// Read the raw 16-bit register word for a channel.
    fn read_reg(&self, id: i32) -> Result<i32>;

    /// Write the raw 16-bit register word for a channel.
    fn write_reg(&mut self, id: i32, word: i32) -> Result<()>;

    /// Bitmask of channels the device exposes, one bit per registry index.
    fn device_mask(&self) -> Result<u32>;

    /// Current level of a channel, masked to the low byte.
    ///
    /// A failed read reports 0, matching a zero-initialized register word.
    fn get_volume(&self, id: i32) -> u8 {
        match self.read_reg(id) {
            Ok(word) => (word & 0xff) as u8,
            Err(e) => {
                tracing::debug!("read of mixer channel {} failed: {}", id, e);
                0
            }
        }
    }

    /// Set a channel's level, replicating the low byte of `value` into both
    /// stereo bytes. The device clamps out-of-range levels internally.
    fn set_volume(&mut self, id: i32, value: i32) {
        let level = value & 0xff;
        if let Err(e) = self.write_reg(id, level | level << 8) {
            tracing::debug!("write of mixer channel {} failed: {}", id, e);
        }
    }

    /// Device-presence mask, with an unreadable mask reported as empty.
    fn present_mask(&self) -> u32 {
        match self.device_mask() {
            Ok(mask) => mask,
            Err(e) => {
                tracing::debug!("read of mixer device mask failed: {}", e);
                0
            }
        }
    }
}

/// Mixer device handle backed by the OSS ioctl interface.
///
/// The handle is opened once at startup and released on drop.
#[derive(Debug)]
pub struct OssMixer {
    file: File,
    path: PathBuf,
}

impl OssMixer {
    /// Open a mixer device node for reading and writing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|source| MixerError::Open {
                path: path.clone(),
                source,
            })?;
        tracing::debug!("opened mixer device {}", path.display());
        Ok(Self { file, path })
    }

    /// Open the device named by [`DEVICE_ENV`], falling back to
    /// [`DEFAULT_DEVICE`] when the variable is unset.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(DEVICE_ENV).unwrap_or_else(|_| DEFAULT_DEVICE.to_string());
        Self::open(path)
    }

    /// Path this handle was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Mixer for OssMixer {
    fn read_reg(&self, id: i32) -> Result<i32> {
        let mut word: libc::c_int = 0;
        // MIXER_READ(id) = _IOR('M', id, int)
        let request = nix::request_code_read!(b'M', id, mem::size_of::<libc::c_int>());
        Errno::result(unsafe { libc::ioctl(self.file.as_raw_fd(), request, &mut word) })?;
        Ok(word)
    }

    fn write_reg(&mut self, id: i32, word: i32) -> Result<()> {
        let mut word: libc::c_int = word;
        // MIXER_WRITE(id) = _IOWR('M', id, int); the kernel writes the
        // clamped result back through the argument, which is not reported.
        let request = nix::request_code_readwrite!(b'M', id, mem::size_of::<libc::c_int>());
        Errno::result(unsafe { libc::ioctl(self.file.as_raw_fd(), request, &mut word) })?;
        Ok(())
    }

    fn device_mask(&self) -> Result<u32> {
        let mut mask: libc::c_int = 0;
        let request = nix::request_code_read!(b'M', DEVMASK, mem::size_of::<libc::c_int>());
        Errno::result(unsafe { libc::ioctl(self.file.as_raw_fd(), request, &mut mask) })?;
        Ok(mask as u32)
    }
}
