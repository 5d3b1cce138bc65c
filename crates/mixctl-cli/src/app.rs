//! Per-token command dispatch
//!
//! Every command-line token is handled on its own, left to right; the only
//! state carried between tokens is the default channel id. Read results are
//! printed as they happen, so a set and a read of the same channel can be
//! combined in one invocation.

use std::io::{self, Write};

use mixctl_hal::registry;
use mixctl_hal::Mixer;

/// Fixed version string printed by `-v`.
pub const VERSION: &str = concat!("mixctl ", env!("CARGO_PKG_VERSION"));

/// Usage text printed by `-h`.
pub const USAGE: &str = "\
usage: mixctl [options]

examples:
   mixctl                   default control (pcm) value
   mixctl 40                set default control value
   mixctl /                 list all controls and their values
   mixctl pcm vol           show the value of specified controls
   mixctl pcm=40 bass=50    set the value of specified controls
   mixctl vol=70 vol        set and show the values at the same time
";

/// Process command-line tokens against an open mixer, writing results to
/// `out`.
///
/// With no tokens, reports the default channel's level. Only failures
/// writing to `out` abort the run; device failures never do.
pub fn run<M: Mixer, W: Write>(mixer: &mut M, tokens: &[String], out: &mut W) -> io::Result<()> {
    let default_id = registry::resolve(registry::DEFAULT_CHANNEL);

    if tokens.is_empty() {
        writeln!(out, "{}", mixer.get_volume(default_id))?;
    }

    for token in tokens {
        if token == "-h" {
            out.write_all(USAGE.as_bytes())?;
        } else if token == "-v" {
            writeln!(out, "{VERSION}")?;
        } else if let Some((name, value)) = token.split_once('=') {
            mixer.set_volume(registry::resolve(name), parse_level(value));
        } else if token.starts_with(|c: char| c.is_ascii_alphabetic()) {
            writeln!(out, "{}", mixer.get_volume(registry::resolve(token)))?;
        } else if token.starts_with(|c: char| c.is_ascii_digit()) {
            mixer.set_volume(default_id, parse_level(token));
        } else if token == "/" {
            list_channels(mixer, out)?;
        }
    }

    Ok(())
}

/// Parse a level argument; malformed text reads as zero.
fn parse_level(text: &str) -> i32 {
    text.parse().unwrap_or(0)
}

/// Print `name\tvalue` for every channel the device reports present, in
/// registry order.
fn list_channels<M: Mixer, W: Write>(mixer: &M, out: &mut W) -> io::Result<()> {
    let mask = mixer.present_mask();
    for (id, name) in registry::CHANNEL_NAMES.iter().enumerate() {
        if mask & (1u32 << id) != 0 {
            writeln!(out, "{name}\t{}", mixer.get_volume(id as i32))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("40"), 40);
        assert_eq!(parse_level("abc"), 0);
        assert_eq!(parse_level(""), 0);
    }

    #[test]
    fn test_version_string_names_the_tool() {
        assert!(VERSION.starts_with("mixctl "));
    }

    #[test]
    fn test_usage_covers_every_form() {
        for form in ["mixctl /", "pcm=40", "vol=70 vol"] {
            assert!(USAGE.contains(form), "usage text lost example: {form}");
        }
    }
}
