//! The `Date` entity: a signed year, month, and day with no cross-field
//! (calendar) validation.

use crate::bitfield::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::util::offset_err;
use crate::year;

const INLINE_YEAR_BITS: u32 = 7;
const FIXED_BYTES: usize = 2;

/// A calendar date: year (non-zero), month (1-12), day (1-31). Fields are
/// range-checked individually at construction; `Date` never validates Feb
/// 30 or similar calendar nonsense, by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Builds a `Date`, rejecting a zero year or an out-of-range month/day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if year == 0 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(Error::OutOfRange);
        }
        Ok(Date { year, month, day })
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

    /// The exact number of bytes [`Date::encode`] will write for this
    /// value.
    pub fn encoded_size(&self) -> usize {
        let encoded_year = year::encode(self.year);
        FIXED_BYTES + year::group_count(encoded_year, INLINE_YEAR_BITS)
    }

    /// Encodes this date to `dst`, returning the number of bytes written.
    pub fn encode(&self, dst: &mut [u8]) -> Result<usize> {
        let encoded_year = year::encode(self.year);
        let (inline, low, groups) = year::split(encoded_year, INLINE_YEAR_BITS);

        let mut w = BitWriter::new();
        w.push(self.day as u64, 5)
            .push(self.month as u64, 4)
            .push(inline as u64, INLINE_YEAR_BITS);

        let mut offset = w.write(dst)?;
        offset += year::write_tail(low, groups, &mut dst[offset..])
            .map_err(|e| offset_err(e, offset))?;
        Ok(offset)
    }

    /// Decodes a date from `src`, returning the value and the number of
    /// bytes consumed.
    pub fn decode(src: &[u8]) -> Result<(Self, usize)> {
        if src.len() < FIXED_BYTES {
            return Err(Error::BufferTooShort { at: FIXED_BYTES });
        }
        let mut r = BitReader::new(src, FIXED_BYTES);
        let day = r.pop(5) as u8;
        let month = r.pop(4) as u8;
        let inline = r.pop(INLINE_YEAR_BITS) as u32;

        let (encoded_year, consumed) = year::read_tail(inline, &src[FIXED_BYTES..])
            .map_err(|e| offset_err(e, FIXED_BYTES))?;

        let date = Date::new(year::decode(encoded_year), month, day)?;
        Ok((date, FIXED_BYTES + consumed))
    }
}
