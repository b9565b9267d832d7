//! fps-timecode - Frame-accurate timecode conversion
//!
//! Converts between the two representations of a position in a frame
//! sequence: an integer frame count (offset from the zeroth frame of a
//! 24-hour cycle) and a `HH:MM:SS:FF` timecode string, under a fixed set of
//! video production frame-rate modes including the 30 and 60 fps drop-frame
//! variants.
//!
//! The library answers two questions:
//! - Given the address of the first frame of a sequence and an offset n,
//!   what is the address of the nth frame?
//! - Given the addresses of the first and the nth frame, what is n?
//!
//! ```
//! use fps_timecode::{Mode, Timecode};
//!
//! // 100 frames past 00:01:00:00 at 30 fps non-drop
//! let start = Timecode::string_to_count(Mode::Fps30Ndf, "00:01:00:00")?;
//! assert_eq!(Timecode::count_to_string(Mode::Fps30Ndf, start + 100), "00:01:03:10");
//!
//! // and the offset between two addresses
//! let nth = Timecode::string_to_count(Mode::Fps30Ndf, "00:01:03:10")?;
//! assert_eq!(nth - start, 100);
//! # Ok::<(), fps_timecode::TimecodeError>(())
//! ```
//!
//! Drop-frame modes skip frame numbers at every minute that is not a
//! multiple of ten, so some strings are not legal addresses; constructing a
//! [`Timecode`] corrects them:
//!
//! ```
//! use fps_timecode::{Mode, Timecode};
//!
//! let tc = Timecode::from_string(Mode::Fps30Df, "00:01:00:00")?;
//! assert_eq!(tc.as_str(), "00:00:59:28");
//! # Ok::<(), fps_timecode::TimecodeError>(())
//! ```
//!
//! All values are immutable and every operation is a pure function, so the
//! whole API is freely usable across threads.

pub mod error;
pub mod mode;
pub mod timecode;

pub use error::{Result, TimecodeError};
pub use mode::{Mode, ModeCounts};
pub use timecode::Timecode;
