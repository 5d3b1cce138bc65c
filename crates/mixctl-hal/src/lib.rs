//! Mixer device access for mixctl
//!
//! This crate wraps the legacy OSS mixer interface: a fixed table of named
//! channels, each backed by a 16-bit register read and written through
//! ioctls on a device node such as `/dev/mixer`.
//!
//! # Example
//!
//! ```no_run
//! use mixctl_hal::{registry, Mixer, OssMixer};
//!
//! fn main() -> mixctl_hal::Result<()> {
//!     let mut mixer = OssMixer::from_env()?;
//!     let id = registry::resolve("pcm");
//!     mixer.set_volume(id, 40);
//!     println!("{}", mixer.get_volume(id));
//!     Ok(())
//! }
//! ```

pub mod mixer;
pub mod mock;
pub mod registry;

pub use mixer::{DEFAULT_DEVICE, DEVICE_ENV, Mixer, OssMixer};
pub use mock::MockMixer;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MixerError {
    #[error("cannot open mixer device {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("mixer ioctl failed: {0}")]
    Ioctl(#[from] nix::errno::Errno),
}

/// HAL Result type
pub type Result<T> = std::result::Result<T, MixerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display() {
        let err = MixerError::Open {
            path: PathBuf::from("/dev/mixer"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("cannot open mixer device /dev/mixer"));
    }
}
