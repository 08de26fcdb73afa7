//! The `Time` entity: hour/minute/second, sub-second precision, and a
//! timezone, packed into a single UTC-flagged accumulator.

use crate::bitfield::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::subsecond;
use crate::timezone::Timezone;
use crate::util::{byte_count, offset_err};

/// Bits occupied by hour, minute, second, magnitude, and the UTC flag, not
/// counting the variable-width subsecond field.
const BASE_BITS: u32 = 20;

/// A wall-clock time with sub-second precision and a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time<'a> {
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
    timezone: Timezone<'a>,
}

impl<'a> Time<'a> {
    /// Builds a `Time`, rejecting any field outside its declared range.
    /// `second` permits 60 for leap-second encoding; leap-second arithmetic
    /// itself is out of scope.
    pub fn new(
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        timezone: Timezone<'a>,
    ) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 60 || nanosecond > 999_999_999 {
            return Err(Error::OutOfRange);
        }
        crate::timezone::validate(&timezone)?;
        Ok(Time { hour, minute, second, nanosecond, timezone })
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

    /// The exact number of bytes [`Time::encode`] will write for this
    /// value.
    pub fn encoded_size(&self) -> usize {
        let magnitude = subsecond::magnitude(self.nanosecond);
        byte_count(BASE_BITS + subsecond::width(magnitude))
            + crate::timezone::encoded_size(&self.timezone)
    }

    /// Encodes this time to `dst`, returning the number of bytes written.
    pub fn encode(&self, dst: &mut [u8]) -> Result<usize> {
        let magnitude = subsecond::magnitude(self.nanosecond);
        let subsecond_value = subsecond::stored_value(self.nanosecond, magnitude);
        let is_utc = self.timezone.is_zero();

        let mut w = BitWriter::new();
        w.push(is_utc as u64, 1)
            .push(magnitude as u64, 2)
            .push(self.hour as u64, 5)
            .push(self.minute as u64, 6)
            .push(self.second as u64, 6)
            .push(subsecond_value as u64, subsecond::width(magnitude));

        let mut offset = w.write(dst)?;
        if !is_utc {
            offset += crate::timezone::encode(&self.timezone, &mut dst[offset..])
                .map_err(|e| offset_err(e, offset))?;
        }
        Ok(offset)
    }

    /// Decodes a time from `src`, returning the value and the number of
    /// bytes consumed.
    pub fn decode(src: &'a [u8]) -> Result<(Self, usize)> {
        if src.is_empty() {
            return Err(Error::BufferTooShort { at: 1 });
        }
        let magnitude = (src[0] >> 1) & 0x3;
        let base = byte_count(BASE_BITS + subsecond::width(magnitude));
        if src.len() < base {
            return Err(Error::BufferTooShort { at: base });
        }

        let mut r = BitReader::new(src, base);
        let is_utc = r.pop(1) == 1;
        let _magnitude = r.pop(2);
        let hour = r.pop(5) as u8;
        let minute = r.pop(6) as u8;
        let second = r.pop(6) as u8;
        let stored = r.pop(subsecond::width(magnitude)) as u32;
        let nanosecond = stored * subsecond::multiplier(magnitude);

        let (timezone, consumed) = if is_utc {
            (Timezone::Zero, 0)
        } else {
            crate::timezone::decode(&src[base..]).map_err(|e| offset_err(e, base))?
        };

        let time = Time::new(hour, minute, second, nanosecond, timezone)?;
        Ok((time, base + consumed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_13_15_30_utc() {
        let t = Time::new(13, 15, 30, 0, Timezone::Zero).unwrap();
        let mut buf = [0u8; 8];
        let n = t.encode(&mut buf).unwrap();
        assert_eq!(n, 3);
        assert_eq!(n, t.encoded_size());
        // derived by hand from the low->high utc|magnitude|hour|minute|second
        // packing in SPEC_FULL.md §4 / the original C `encode_time_base`.
        assert_eq!(&buf[..n], &[0x69, 0x8F, 0x07]);

        let (decoded, consumed) = Time::decode(&buf[..n]).unwrap();
        assert_eq!(consumed, n);
        assert_eq!(decoded, t);
    }

    #[test]
    fn scenario_nanosecond_with_string_timezone() {
        let tz = Timezone::string(b"Europe/Berlin").unwrap();
        let t = Time::new(0, 0, 0, 1, tz).unwrap();
        assert_eq!(t.encoded_size(), 7 + 14); // 50 bits -> 7 bytes, + 1 + 13
        let mut buf = [0u8; 32];
        let n = t.encode(&mut buf).unwrap();
        assert_eq!(n, t.encoded_size());
        assert_eq!(buf[7], 13 << 1);
        assert_eq!(&buf[8..21], b"Europe/Berlin");

        let (decoded, consumed) = Time::decode(&buf[..n]).unwrap();
        assert_eq!(consumed, n);
        assert_eq!(decoded, t);
    }

    #[test]
    fn lat_long_timezone_roundtrip() {
        let tz = Timezone::lat_long(5252, 1341).unwrap();
        let t = Time::new(23, 59, 60, 999_999_999, tz).unwrap();
        let mut buf = [0u8; 16];
        let n = t.encode(&mut buf).unwrap();
        assert_eq!(n, t.encoded_size());
        let (decoded, consumed) = Time::decode(&buf[..n]).unwrap();
        assert_eq!(consumed, n);
        assert_eq!(decoded, t);
    }

    #[test]
    fn out_of_range_fields_rejected() {
        assert_eq!(Time::new(24, 0, 0, 0, Timezone::Zero).unwrap_err(), Error::OutOfRange);
        assert_eq!(Time::new(0, 60, 0, 0, Timezone::Zero).unwrap_err(), Error::OutOfRange);
        assert_eq!(Time::new(0, 0, 61, 0, Timezone::Zero).unwrap_err(), Error::OutOfRange);
        assert_eq!(Time::new(0, 0, 0, 1_000_000_000, Timezone::Zero).unwrap_err(), Error::OutOfRange);
    }

    #[test]
    fn directly_constructed_out_of_range_timezone_is_rejected() {
        let label = [b'x'; 41];
        assert_eq!(
            Time::new(1, 2, 3, 0, Timezone::String(&label)).unwrap_err(),
            Error::OutOfRange
        );
        assert_eq!(
            Time::new(1, 2, 3, 0, Timezone::LatLong { latitude: 9000, longitude: 0 }).unwrap_err(),
            Error::OutOfRange
        );
    }

    #[test]
    fn magnitude_minimality_matches_encoded_size() {
        for (ns, expected_base_bits) in [
            (0u32, BASE_BITS),
            (500_000_000, BASE_BITS + 10),
            (500_000, BASE_BITS + 20),
            (1, BASE_BITS + 30),
        ] {
            let t = Time::new(1, 2, 3, ns, Timezone::Zero).unwrap();
            assert_eq!(t.encoded_size(), byte_count(expected_base_bits));
        }
    }

    #[test]
    fn buffer_too_short_never_reports_out_of_range() {
        let tz = Timezone::string(b"X").unwrap();
        let t = Time::new(1, 2, 3, 123_456_789, tz).unwrap();
        let mut full = [0u8; 16];
        let n = t.encode(&mut full).unwrap();
        for k in 0..n {
            let mut buf = vec![0u8; k];
            let err = t.encode(&mut buf).unwrap_err();
            assert_ne!(err, Error::OutOfRange);

            let decode_err = Time::decode(&full[..k]).unwrap_err();
            assert_ne!(decode_err, Error::OutOfRange);
        }
    }
}
