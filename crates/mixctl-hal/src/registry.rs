//! Fixed registry of mixer channel names
//!
//! The OSS API exposes a static table of channels; a channel's position in
//! the table is the id used in mixer ioctls. The names below are the
//! kernel's `SOUND_DEVICE_NAMES` in their canonical order.

/// Channel names in kernel order; a channel's index is its mixer id.
pub const CHANNEL_NAMES: &[&str] = &[
    "vol", "bass", "treble", "synth", "pcm", "speaker", "line", "mic", "cd", "mix", "pcm2", "rec",
    "igain", "ogain", "line1", "line2", "line3", "dig1", "dig2", "dig3", "phin", "phout", "video",
    "radio", "monitor",
];

/// Channel operated on when no name is given on the command line.
pub const DEFAULT_CHANNEL: &str = "pcm";

/// Sentinel id returned when a name matches no registry entry.
pub const UNKNOWN: i32 = -1;

/// Resolve a command-line token to a mixer channel id.
///
/// Tokens starting with a decimal digit are parsed as literal ids and are
/// not bounds checked; malformed digit-leading tokens parse as 0. Anything
/// else is looked up by exact, case-sensitive name, resolving to [`UNKNOWN`]
/// when absent.
pub fn resolve(token: &str) -> i32 {
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return token.parse().unwrap_or(0);
    }
    CHANNEL_NAMES
        .iter()
        .position(|name| *name == token)
        .map_or(UNKNOWN, |index| index as i32)
}

/// Name of a channel id, when the id is a registry index.
pub fn name(id: i32) -> Option<&'static str> {
    usize::try_from(id)
        .ok()
        .and_then(|index| CHANNEL_NAMES.get(index))
        .copied()
}
