//! Mock mixer for testing without an OSS device
//!
//! Keeps one register word per registry channel in memory and applies the
//! same per-byte clamping as the kernel drivers, so tests exercise the real
//! volume conventions. Channels outside the presence mask reject reads and
//! writes with `EINVAL`, the way the kernel rejects an unknown id.

use nix::errno::Errno;

use crate::mixer::Mixer;
use crate::registry;
use crate::{MixerError, Result};

/// Highest level the OSS drivers accept per stereo byte.
const MAX_LEVEL: i32 = 100;

/// In-memory mixer for tests.
pub struct MockMixer {
    present: u32,
    regs: Vec<i32>,
}

impl MockMixer {
    /// Mixer exposing every registry channel, all levels zero.
    pub fn new() -> Self {
        Self {
            present: (1u32 << registry::CHANNEL_NAMES.len()) - 1,
            regs: vec![0; registry::CHANNEL_NAMES.len()],
        }
    }

    /// Mixer exposing only the named channels.
    ///
    /// Names must be registry entries.
    pub fn with_channels(names: &[&str]) -> Self {
        let mut mock = Self::new();
        mock.present = names
            .iter()
            .map(|name| registry::resolve(name))
            .fold(0, |mask, id| mask | 1u32 << id);
        mock
    }

    /// Raw register word of a named channel, for test assertions.
    pub fn reg(&self, name: &str) -> i32 {
        self.regs[registry::resolve(name) as usize]
    }

    fn index(&self, id: i32) -> Result<usize> {
        let index = usize::try_from(id).map_err(|_| MixerError::Ioctl(Errno::EINVAL))?;
        if index >= self.regs.len() || self.present & (1u32 << index) == 0 {
            return Err(MixerError::Ioctl(Errno::EINVAL));
        }
        Ok(index)
    }
}

impl Default for MockMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixer for MockMixer {
    fn read_reg(&self, id: i32) -> Result<i32> {
        Ok(self.regs[self.index(id)?])
    }

    fn write_reg(&mut self, id: i32, word: i32) -> Result<()> {
        let index = self.index(id)?;
        let left = (word & 0xff).min(MAX_LEVEL);
        let right = (word >> 8 & 0xff).min(MAX_LEVEL);
        self.regs[index] = right << 8 | left;
        Ok(())
    }

    fn device_mask(&self) -> Result<u32> {
        Ok(self.present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_round_trip() {
        let mut mock = MockMixer::new();
        let id = registry::resolve("bass");
        for level in 0..=100 {
            mock.set_volume(id, level);
            assert_eq!(mock.get_volume(id), level as u8);
        }
    }

    #[test]
    fn test_read_is_idempotent() {
        let mut mock = MockMixer::new();
        let id = registry::resolve("vol");
        mock.set_volume(id, 70);
        assert_eq!(mock.get_volume(id), mock.get_volume(id));
    }

    #[test]
    fn test_write_replicates_both_bytes() {
        let mut mock = MockMixer::new();
        mock.set_volume(registry::resolve("pcm"), 40);
        assert_eq!(mock.reg("pcm"), 40 | 40 << 8);
    }

    #[test]
    fn test_device_clamps_levels() {
        let mut mock = MockMixer::new();
        let id = registry::resolve("vol");
        mock.write_reg(id, 0xffff).unwrap();
        assert_eq!(mock.reg("vol"), 100 | 100 << 8);
    }

    #[test]
    fn test_read_masks_to_low_byte() {
        let mut mock = MockMixer::new();
        let id = registry::resolve("vol");
        mock.write_reg(id, 30 | 90 << 8).unwrap();
        assert_eq!(mock.get_volume(id), 30);
    }

    #[test]
    fn test_absent_channel_rejects_access() {
        let mut mock = MockMixer::with_channels(&["vol"]);
        let pcm = registry::resolve("pcm");
        assert!(mock.read_reg(pcm).is_err());
        assert!(mock.write_reg(pcm, 40).is_err());
        // The swallowing layer turns the rejection into a zero read.
        assert_eq!(mock.get_volume(pcm), 0);
    }

    #[test]
    fn test_sentinel_id_rejected_like_the_kernel() {
        let mut mock = MockMixer::new();
        assert!(mock.read_reg(registry::UNKNOWN).is_err());
        mock.set_volume(registry::UNKNOWN, 55);
        assert_eq!(mock.get_volume(registry::UNKNOWN), 0);
    }

    #[test]
    fn test_present_mask_matches_channels() {
        let mock = MockMixer::with_channels(&["vol", "pcm"]);
        assert_eq!(mock.present_mask(), 1 | 1 << 4);
    }
}
