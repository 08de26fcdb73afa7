//! A compact binary codec for dates, times, and timestamps, optimized for
//! size over a wide range of precisions.
//!
//! Three entities are provided — [`Date`], [`Time`], and [`Timestamp`] —
//! each with its own `new`/`encoded_size`/`encode`/`decode` quartet. Years
//! are variable-width (a small fixed field plus a reverse-VLQ tail), so the
//! common case (a year within a few centuries of 2000) costs nothing extra
//! over the fixed fields, while the format is formally unbounded. Sub-second
//! precision is chosen per-value at the coarsest magnitude (none, milli,
//! micro, nano) that represents it exactly, so whole seconds cost zero extra
//! bits. A timezone is either absent (UTC), a borrowed opaque label, or a
//! coarse latitude/longitude pair.
//!
//! ```
//! use compact_time::{Timestamp, Timezone};
//!
//! let tz = Timezone::string(b"Europe/Berlin").unwrap();
//! let ts = Timestamp::new(2017, 1, 15, 18, 45, 30, 123_456_000, tz).unwrap();
//!
//! let mut buf = [0u8; 32];
//! let written = ts.encode(&mut buf).unwrap();
//! assert_eq!(written, ts.encoded_size());
//!
//! let (decoded, consumed) = Timestamp::decode(&buf[..written]).unwrap();
//! assert_eq!(consumed, written);
//! assert_eq!(decoded, ts);
//! ```
//!
//! None of the entities validate calendar consistency (a `Date` happily
//! represents February 30th); only the individually-documented field ranges
//! are enforced, at construction time, so a value that type-checks is
//! always encodable without a further range error.

#![forbid(unsafe_code)]

mod bitfield;
mod subsecond;
mod util;
mod vlq;
mod year;

pub mod date;
pub mod error;
pub mod time;
pub mod timestamp;
pub mod timezone;

pub use date::Date;
pub use error::{Error, Result};
pub use time::Time;
pub use timestamp::Timestamp;
pub use timezone::Timezone;
