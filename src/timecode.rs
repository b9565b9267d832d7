//! Timecode addresses: conversion between frame counts and `HH:MM:SS:FF`
//! strings.
//!
//! A frame count is the offset of a frame from the zeroth frame of a 24-hour
//! cycle; a timecode string names the same position in hours, minutes,
//! seconds, and frames. Conversion in both directions depends on the mode's
//! [`ModeCounts`](crate::ModeCounts) radix constants. In drop-frame modes
//! some strings are not legal addresses (their frame numbers are dropped at
//! minute boundaries); rendering corrects those to the nearest legal address,
//! while duration rendering keeps the literal positional breakdown.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Result, TimecodeError};
use crate::mode::Mode;

/// Rendering semantics for a frame count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    /// An absolute position; drop-frame-illegal addresses are corrected.
    Address,
    /// An elapsed span; no correction, every count renders literally.
    Duration,
}

/// One timecode address: a mode, a normalized frame count, and the canonical
/// string rendering of that count.
///
/// The three fields are mutually consistent by construction: the string is
/// always recomputed from the count, never taken verbatim from caller input,
/// so an illegal drop-frame address given as input comes back corrected.
///
/// Serialization carries only the mode and count; deserialization rebuilds
/// the string, so the consistency invariant survives round-trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "TimecodeRepr", into = "TimecodeRepr")]
pub struct Timecode {
    mode: Mode,
    count: i64,
    string: String,
}

/// Wire form of a [`Timecode`]: mode and count only.
#[derive(Serialize, Deserialize)]
struct TimecodeRepr {
    mode: Mode,
    count: i64,
}

impl From<Timecode> for TimecodeRepr {
    fn from(tc: Timecode) -> Self {
        Self {
            mode: tc.mode,
            count: tc.count,
        }
    }
}

impl From<TimecodeRepr> for Timecode {
    fn from(repr: TimecodeRepr) -> Self {
        Timecode::from_count(repr.mode, repr.count)
    }
}

// ── Conversions ────────────────────────────────────────────────

impl Timecode {
    /// Wrap a frame count into `[0, fp24h)` for the given mode.
    ///
    /// Negative counts and counts past 24 hours wrap around; the result is
    /// idempotent under further normalization.
    #[inline]
    pub fn normalize(mode: Mode, count: i64) -> i64 {
        count.rem_euclid(mode.counts().fp24h)
    }

    /// Render a frame count as a timecode address string.
    ///
    /// The count is normalized first. In drop-frame modes the rendered
    /// address skips the dropped frame numbers, so e.g. 1798 frames of
    /// `Fps30Df` renders as `"00:00:59:28"`, not `"00:01:00:00"`.
    pub fn count_to_string(mode: Mode, count: i64) -> String {
        render(mode, count, Style::Address)
    }

    /// Render a frame count as a duration string.
    ///
    /// A duration (typically the difference of two counts) is a literal
    /// positional breakdown with no drop-frame correction: 1798 frames of
    /// `Fps30Df` is one minute, `"00:01:00:00"`, even though that string is
    /// not a legal `Fps30Df` address.
    pub fn string_as_duration(mode: Mode, count: i64) -> String {
        render(mode, count, Style::Duration)
    }

    /// Compute a frame count from a timecode string.
    ///
    /// The string must be four two-digit fields separated by `:`, `;`, or
    /// `.` (interchangeably), with hours < 24, minutes < 60, seconds < 60,
    /// and frames below the mode's rate. The count is a direct positional
    /// weighted sum; no drop-frame correction is applied in this direction,
    /// so an illegal drop-frame address still converts to a count. Rendering
    /// that count back yields the corrected string.
    pub fn string_to_count(mode: Mode, string: &str) -> Result<i64> {
        parse(mode, string)
    }
}

// ── Construction ───────────────────────────────────────────────

impl Timecode {
    /// Construct from an optional string and an optional count.
    ///
    /// A supplied count takes precedence: it is normalized and the string
    /// argument is ignored entirely, even if malformed. With no count the
    /// string is parsed and errors propagate. Both absent is
    /// [`TimecodeError::MissingInput`].
    pub fn new(mode: Mode, string: Option<&str>, count: Option<i64>) -> Result<Self> {
        match (string, count) {
            (_, Some(count)) => Ok(Self::from_count(mode, count)),
            (Some(string), None) => Self::from_string(mode, string),
            (None, None) => Err(TimecodeError::MissingInput),
        }
    }

    /// Construct from a frame count. Infallible; the count is normalized.
    pub fn from_count(mode: Mode, count: i64) -> Self {
        let count = Self::normalize(mode, count);
        let string = Self::count_to_string(mode, count);
        Self {
            mode,
            count,
            string,
        }
    }

    /// Construct from a timecode string.
    ///
    /// The stored string is re-rendered from the parsed count, so an illegal
    /// drop-frame address comes back as its corrected canonical form.
    pub fn from_string(mode: Mode, string: &str) -> Result<Self> {
        let count = Self::string_to_count(mode, string)?;
        Ok(Self::from_count(mode, count))
    }

    /// Construct from a frame count supplied as a float, as arrives from
    /// scripting or UI layers. Non-finite or fractional values fail with
    /// [`TimecodeError::InvalidCount`].
    pub fn from_count_f64(mode: Mode, count: f64) -> Result<Self> {
        if !count.is_finite() || count.fract() != 0.0 {
            return Err(TimecodeError::InvalidCount(count));
        }
        Ok(Self::from_count(mode, count as i64))
    }
}

// ── Accessors & instance operations ────────────────────────────

impl Timecode {
    /// The mode this address was constructed under.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The normalized frame count, in `[0, fp24h)`.
    #[inline]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// The canonical `HH:MM:SS:FF` address string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// The next address in the sequence. The last frame of the 24-hour
    /// cycle wraps to `"00:00:00:00"`.
    pub fn succ(&self) -> Self {
        Self::from_count(self.mode, self.count + 1)
    }

    /// This value's count rendered with duration semantics.
    pub fn as_duration(&self) -> String {
        Self::string_as_duration(self.mode, self.count)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl AsRef<str> for Timecode {
    fn as_ref(&self) -> &str {
        &self.string
    }
}

// Equality, ordering, and hashing compare the rendered string only, never
// mode or count: a drop-frame and a non-drop-frame value whose addresses
// coincide are equal even though their counts differ.

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string
    }
}

impl Eq for Timecode {}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.string.cmp(&other.string)
    }
}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string.hash(state);
    }
}

// ── Conversion internals ───────────────────────────────────────

fn render(mode: Mode, count: i64, style: Style) -> String {
    let c = mode.counts();
    let count = count.rem_euclid(c.fp24h);

    let hours = count / c.fph;
    let mut rem = count % c.fph;
    let tens_mins = rem / c.fptm;
    rem %= c.fptm;
    let mut units_mins = rem / c.fpm;
    rem %= c.fpm;

    // Addresses skip the frame numbers dropped at every minute that is not
    // a multiple of ten, so a count landing on a dropped number belongs to
    // the tail of the previous minute. Durations render literally.
    let dropped = mode.dropped_frames_per_minute();
    if style == Style::Address && dropped > 0 && units_mins > 0 && rem < dropped {
        units_mins -= 1;
        rem += c.fpm;
    }

    let secs = rem / c.fps;
    let frms = rem % c.fps;

    format!("{hours:02}:{tens_mins}{units_mins}:{secs:02}:{frms:02}")
}

const SEPARATORS: [u8; 3] = [b':', b';', b'.'];

// Fixed-offset field parsing of "DD?DD?DD?DD" where ? is any separator.
// Byte indexing is safe: every accepted byte is ASCII, and any multi-byte
// character fails the digit/separator checks.
fn parse(mode: Mode, s: &str) -> Result<i64> {
    let bytes = s.as_bytes();
    if bytes.len() != 11 {
        return Err(TimecodeError::InvalidFormat(s.to_owned()));
    }
    if !SEPARATORS.contains(&bytes[2])
        || !SEPARATORS.contains(&bytes[5])
        || !SEPARATORS.contains(&bytes[8])
    {
        return Err(TimecodeError::InvalidFormat(s.to_owned()));
    }

    let digit = |i: usize| -> Result<i64> {
        let b = bytes[i];
        if b.is_ascii_digit() {
            Ok(i64::from(b - b'0'))
        } else {
            Err(TimecodeError::InvalidFormat(s.to_owned()))
        }
    };

    let hours = digit(0)? * 10 + digit(1)?;
    // minutes stay split into digits: fptm weights the tens digit, fpm the
    // units digit
    let tens_mins = digit(3)?;
    let units_mins = digit(4)?;
    let secs = digit(6)? * 10 + digit(7)?;
    let frms = digit(9)? * 10 + digit(10)?;

    let c = mode.counts();
    let bound = |field: &'static str, value: i64, max: i64| -> Result<()> {
        if value > max {
            Err(TimecodeError::FieldOutOfRange { field, value, max })
        } else {
            Ok(())
        }
    };
    bound("hours", hours, 23)?;
    bound("minutes", tens_mins * 10 + units_mins, 59)?;
    bound("seconds", secs, 59)?;
    bound("frames", frms, c.fps - 1)?;

    Ok(hours * c.fph + tens_mins * c.fptm + units_mins * c.fpm + secs * c.fps + frms)
}
