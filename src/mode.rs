//! Timecode modes and their per-mode frame-count constants.
//!
//! A mode fixes the frame rate and the dropness (drop-frame or
//! non-drop-frame) of a timecode address. The per-mode constants are
//! precomputed to match production drop-frame arithmetic, not derived at
//! runtime: in a drop-frame mode an hour is not sixty equal minutes, because
//! every minute that is not a multiple of ten omits frame numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimecodeError;

/// Frame-rate/dropness configuration for a timecode address.
///
/// Serialized (and parsed via [`FromStr`]) under the legacy snake_case names
/// `fps_24`, `fps_25`, `fps_30_df`, `fps_30_ndf`, `fps_48`, `fps_50`,
/// `fps_60_df`, `fps_60_ndf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "fps_24")]
    Fps24,
    #[serde(rename = "fps_25")]
    Fps25,
    #[serde(rename = "fps_30_df")]
    Fps30Df,
    #[serde(rename = "fps_30_ndf")]
    Fps30Ndf,
    #[serde(rename = "fps_48")]
    Fps48,
    #[serde(rename = "fps_50")]
    Fps50,
    #[serde(rename = "fps_60_df")]
    Fps60Df,
    #[serde(rename = "fps_60_ndf")]
    Fps60Ndf,
}

/// Precomputed frame counts for one mode.
///
/// Minutes are handled at two granularities (`fptm` for ten minutes, `fpm`
/// for one minute) because drop-frame corrections apply only at
/// non-ten-minute boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModeCounts {
    /// Frames per 24 hours. Counts are normalized into `[0, fp24h)`.
    pub fp24h: i64,
    /// Frames per hour.
    pub fph: i64,
    /// Frames per ten minutes.
    pub fptm: i64,
    /// Frames per minute.
    pub fpm: i64,
    /// Frames per second (nominal).
    pub fps: i64,
}

impl ModeCounts {
    const fn new(fp24h: i64, fph: i64, fptm: i64, fpm: i64, fps: i64) -> Self {
        Self {
            fp24h,
            fph,
            fptm,
            fpm,
            fps,
        }
    }
}

impl Mode {
    /// All eight modes, for iteration.
    pub const ALL: [Mode; 8] = [
        Mode::Fps24,
        Mode::Fps25,
        Mode::Fps30Df,
        Mode::Fps30Ndf,
        Mode::Fps48,
        Mode::Fps50,
        Mode::Fps60Df,
        Mode::Fps60Ndf,
    ];

    /// The frame-count constants for this mode. Static read-only data.
    #[inline]
    pub const fn counts(self) -> ModeCounts {
        match self {
            Mode::Fps24 => ModeCounts::new(2_073_600, 86_400, 14_400, 1_440, 24),
            Mode::Fps25 => ModeCounts::new(2_160_000, 90_000, 15_000, 1_500, 25),
            Mode::Fps30Df => ModeCounts::new(2_589_408, 107_892, 17_982, 1_798, 30),
            Mode::Fps30Ndf => ModeCounts::new(2_592_000, 108_000, 18_000, 1_800, 30),
            Mode::Fps48 => ModeCounts::new(4_147_200, 172_800, 28_800, 2_880, 48),
            Mode::Fps50 => ModeCounts::new(4_320_000, 180_000, 30_000, 3_000, 50),
            Mode::Fps60Df => ModeCounts::new(5_178_816, 215_784, 35_964, 3_596, 60),
            Mode::Fps60Ndf => ModeCounts::new(5_184_000, 216_000, 36_000, 3_600, 60),
        }
    }

    /// Whether this mode drops frame numbers at minute boundaries.
    #[inline]
    pub const fn is_drop_frame(self) -> bool {
        matches!(self, Mode::Fps30Df | Mode::Fps60Df)
    }

    /// Frame numbers omitted at every minute that is not a multiple of ten.
    #[inline]
    pub const fn dropped_frames_per_minute(self) -> i64 {
        match self {
            Mode::Fps30Df => 2,
            Mode::Fps60Df => 4,
            _ => 0,
        }
    }

    /// The legacy snake_case name for this mode.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Fps24 => "fps_24",
            Mode::Fps25 => "fps_25",
            Mode::Fps30Df => "fps_30_df",
            Mode::Fps30Ndf => "fps_30_ndf",
            Mode::Fps48 => "fps_48",
            Mode::Fps50 => "fps_50",
            Mode::Fps60Df => "fps_60_df",
            Mode::Fps60Ndf => "fps_60_ndf",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| TimecodeError::InvalidMode(s.to_owned()))
    }
}
