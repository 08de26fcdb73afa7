//! The `Timestamp` entity: a full date and time of day in one accumulator,
//! with the UTC flag folded into the year stream rather than carried as its
//! own bit (unlike `Time`, which has room to spare for it in the base).

use crate::bitfield::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::subsecond;
use crate::timezone::Timezone;
use crate::util::{byte_count, offset_err};
use crate::year;

/// Bits occupied by magnitude, second, minute, hour, day, and month, not
/// counting the variable-width subsecond field or the year stream.
const BASE_BITS: u32 = 28;

/// Bits of the year stream packed inline with the base fields, indexed by
/// subsecond magnitude — chosen so the inline field exactly fills whatever
/// slack is left after rounding the base+subsecond width up to a byte.
const YEAR_INLINE_BITS: [u32; 4] = [4, 2, 0, 6];

/// A calendar date and wall-clock time with sub-second precision and a
/// timezone, packed as a single entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp<'a> {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
    timezone: Timezone<'a>,
}

impl<'a> Timestamp<'a> {
    /// Builds a `Timestamp`, rejecting any field outside its declared
    /// range. No cross-field (calendar) validation is performed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        timezone: Timezone<'a>,
    ) -> Result<Self> {
        if year == 0
            || !(1..=12).contains(&month)
            || !(1..=31).contains(&day)
            || hour > 23
            || minute > 59
            || second > 60
            || nanosecond > 999_999_999
        {
            return Err(Error::OutOfRange);
        }
        // The UTC flag is folded into the low bit of the zigzag-encoded
        // year stream (`year_stream`); a year whose encoding already
        // occupies the full 32 bits would have that flag bit truncate the
        // top of the stream away, so such years are rejected here instead
        // of silently losing a bit at encode time.
        if year::encode(year) >> 31 != 0 {
            return Err(Error::OutOfRange);
        }
        crate::timezone::validate(&timezone)?;
        Ok(Timestamp { year, month, day, hour, minute, second, nanosecond, timezone })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    pub fn timezone(&self) -> Timezone<'a> {
        self.timezone
    }

    fn year_stream(&self) -> u32 {
        (year::encode(self.year) << 1) | self.timezone.is_zero() as u32
    }

    /// The exact number of bytes [`Timestamp::encode`] will write for this
    /// value.
    pub fn encoded_size(&self) -> usize {
        let magnitude = subsecond::magnitude(self.nanosecond);
        let base = byte_count(BASE_BITS + subsecond::width(magnitude));
        let groups = year::group_count(self.year_stream(), YEAR_INLINE_BITS[magnitude as usize]);
        base + groups + crate::timezone::encoded_size(&self.timezone)
    }

    /// Encodes this timestamp to `dst`, returning the number of bytes
    /// written.
    pub fn encode(&self, dst: &mut [u8]) -> Result<usize> {
        let magnitude = subsecond::magnitude(self.nanosecond);
        let subsecond_value = subsecond::stored_value(self.nanosecond, magnitude);
        let inline_bits = YEAR_INLINE_BITS[magnitude as usize];
        let (inline, low, groups) = year::split(self.year_stream(), inline_bits);

        let mut w = BitWriter::new();
        w.push(magnitude as u64, 2)
            .push(self.second as u64, 6)
            .push(self.minute as u64, 6)
            .push(self.hour as u64, 5)
            .push(self.day as u64, 5)
            .push(self.month as u64, 4)
            .push(subsecond_value as u64, subsecond::width(magnitude))
            .push(inline as u64, inline_bits);

        let mut offset = w.write(dst)?;
        offset += year::write_tail(low, groups, &mut dst[offset..])
            .map_err(|e| offset_err(e, offset))?;

        if !self.timezone.is_zero() {
            offset += crate::timezone::encode(&self.timezone, &mut dst[offset..])
                .map_err(|e| offset_err(e, offset))?;
        }
        Ok(offset)
    }

    /// Decodes a timestamp from `src`, returning the value and the number
    /// of bytes consumed.
    pub fn decode(src: &'a [u8]) -> Result<(Self, usize)> {
        if src.is_empty() {
            return Err(Error::BufferTooShort { at: 1 });
        }
        let magnitude = src[0] & 0x3;
        let inline_bits = YEAR_INLINE_BITS[magnitude as usize];
        let base = byte_count(BASE_BITS + subsecond::width(magnitude));
        if src.len() < base {
            return Err(Error::BufferTooShort { at: base });
        }

        let mut r = BitReader::new(src, base);
        let _magnitude = r.pop(2);
        let second = r.pop(6) as u8;
        let minute = r.pop(6) as u8;
        let hour = r.pop(5) as u8;
        let day = r.pop(5) as u8;
        let month = r.pop(4) as u8;
        let stored = r.pop(subsecond::width(magnitude)) as u32;
        let nanosecond = stored * subsecond::multiplier(magnitude);
        let inline = r.pop(inline_bits) as u32;

        let (year_stream, tail_consumed) = year::read_tail(inline, &src[base..])
            .map_err(|e| offset_err(e, base))?;
        let is_utc = year_stream & 1 == 1;
        let year = year::decode(year_stream >> 1);
        let mut offset = base + tail_consumed;

        let (timezone, tz_consumed) = if is_utc {
            (Timezone::Zero, 0)
        } else {
            crate::timezone::decode(&src[offset..]).map_err(|e| offset_err(e, offset))?
        };
        offset += tz_consumed;

        let timestamp = Timestamp::new(year, month, day, hour, minute, second, nanosecond, timezone)?;
        Ok((timestamp, offset))
    }
}
