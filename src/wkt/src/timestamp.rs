// Copyright 2025 Watson SDK for Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A point in time, as exchanged with Watson services.
///
/// # Examples
/// ```
/// # use watson_sdk_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2019-11-29T04:45:33.123Z")?;
/// assert_eq!(ts.seconds(), 1575002733);
/// assert_eq!(ts.nanos(), 123_000_000);
///
/// assert_eq!(ts, Timestamp::new(1575002733, 123_000_000)?);
/// # Ok::<(), TimestampError>(())
/// ```
///
/// A `Timestamp` is a count of seconds and fractions of a second at
/// nanosecond resolution, relative to the Unix epoch in UTC. The range is
/// restricted to `0001-01-01T00:00:00Z` through `9999-12-31T23:59:59Z` so
/// every value converts to and from an RFC 3339 date string.
///
/// # JSON mapping
///
/// On the wire the service uses UTC date strings with exactly three
/// fractional digits: `{year}-{month}-{day}T{hour}:{min}:{sec}.{millis}Z`.
/// Formatting always prints the milliseconds; parsing accepts any number of
/// fractional digits, including none, and truncates below the millisecond.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[non_exhaustive]
pub struct Timestamp {
    /// Seconds of UTC time since the Unix epoch.
    seconds: i64,

    /// Non-negative fractions of a second at nanosecond resolution. Negative
    /// second values with fractions still count forward in time.
    nanos: i32,
}

/// Represent failures in converting or creating [Timestamp] instances.
///
/// # Examples
/// ```
/// # use watson_sdk_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::new(Timestamp::MAX_SECONDS + 2, 0);
/// assert!(matches!(ts, Err(TimestampError::OutOfRange)));
///
/// let ts = Timestamp::try_from("invalid");
/// assert!(matches!(ts, Err(TimestampError::Deserialize(_))));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// There was a problem deserializing a timestamp.
    #[error("cannot deserialize timestamp, source={0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = TimestampError;

impl Timestamp {
    const NS: i32 = 1_000_000_000;

    /// The minimum value for the `seconds` component. Corresponds to '0001-01-01T00:00:00Z'.
    pub const MIN_SECONDS: i64 = -62135596800;

    /// The maximum value for the `seconds` component. Corresponds to '9999-12-31T23:59:59Z'.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = 0;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// Creates a new [Timestamp] from the seconds and nanoseconds.
    ///
    /// If either value is out of range it returns an error.
    ///
    /// # Examples
    /// ```
    /// # use watson_sdk_wkt::{Timestamp, TimestampError};
    /// let ts = Timestamp::new(1575002733, 0)?;
    /// assert_eq!(String::from(ts), "2019-11-29T04:45:33.000Z");
    ///
    /// let ts = Timestamp::new(1575002733, 2_000_000_000);
    /// assert!(matches!(ts, Err(TimestampError::OutOfRange)));
    /// # Ok::<(), TimestampError>(())
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Create a normalized, clamped [Timestamp].
    ///
    /// # Examples
    /// ```
    /// # use watson_sdk_wkt::Timestamp;
    /// let ts = Timestamp::clamp(1575002733, 2_000_000_000);
    /// // extra nanoseconds are carried as seconds
    /// assert_eq!(String::from(ts), "2019-11-29T04:45:35.000Z");
    /// ```
    ///
    /// The function adds the nanoseconds part (with carry) to the seconds
    /// part, saturating at the representable range.
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let (seconds, nanos) = match nanos.cmp(&0_i32) {
            std::cmp::Ordering::Equal => (seconds, nanos),
            std::cmp::Ordering::Greater => (
                seconds.saturating_add((nanos / Self::NS) as i64),
                nanos % Self::NS,
            ),
            std::cmp::Ordering::Less => (
                seconds.saturating_sub(1 - (nanos / Self::NS) as i64),
                Self::NS + nanos % Self::NS,
            ),
        };
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        } else if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// Seconds of UTC time since the Unix epoch (1970-01-01T00:00:00Z).
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Non-negative fractions of a second at nanosecond resolution.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

const NS: i128 = 1_000_000_000;

const EXPECT_IN_RANGE: &str = concat!(
    "converting a Timestamp to time::OffsetDateTime should always succeed ",
    "because the seconds component is range-checked on construction",
);

/// Implement [`serde`](::serde) serialization for timestamps.
impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        String::from(*self).serialize(serializer)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

/// Implement [`serde`](::serde) deserialization for timestamps.
impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

/// Converts a [Timestamp] to the service wire format.
///
/// The service always prints milliseconds, with exactly three digits.
///
/// # Examples
/// ```
/// # use watson_sdk_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::new(1575002733, 500_000_000)?;
/// assert_eq!(String::from(ts), "2019-11-29T04:45:33.500Z");
/// # Ok::<(), TimestampError>(())
/// ```
impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        let odt = time::OffsetDateTime::from_unix_timestamp(timestamp.seconds)
            .expect(EXPECT_IN_RANGE);
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            odt.year(),
            u8::from(odt.month()),
            odt.day(),
            odt.hour(),
            odt.minute(),
            odt.second(),
            timestamp.nanos / 1_000_000
        )
    }
}

/// Converts the string representation of a timestamp to [Timestamp].
///
/// Accepts RFC 3339 strings with or without fractional digits.
///
/// # Examples
/// ```
/// # use watson_sdk_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2019-11-29T04:45:33Z")?;
/// assert_eq!(ts.seconds(), 1575002733);
/// assert_eq!(ts.nanos(), 0);
/// # Ok::<(), TimestampError>(())
/// ```
impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use time::format_description::well_known::Rfc3339;
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| TimestampError::Deserialize(e.into()))?;
        let nanos_since_epoch = odt.unix_timestamp_nanos();
        let seconds = (nanos_since_epoch / NS) as i64;
        let nanos = (nanos_since_epoch % NS) as i32;
        if nanos < 0 {
            return Timestamp::new(seconds - 1, Self::NS + nanos);
        }
        Timestamp::new(seconds, nanos)
    }
}

/// Converts the string representation of a timestamp to [Timestamp].
impl TryFrom<&String> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Timestamp::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn epoch() -> Result {
        let ts = Timestamp::default();
        assert_eq!(String::from(ts), "1970-01-01T00:00:00.000Z");
        Ok(())
    }

    #[test_case("2019-11-29T04:45:33Z", 1575002733, 0; "no fraction")]
    #[test_case("2019-11-29T04:45:33.5Z", 1575002733, 500_000_000; "one digit")]
    #[test_case("2019-11-29T04:45:33.123Z", 1575002733, 123_000_000; "milliseconds")]
    #[test_case("2019-11-29T04:45:33.123456789Z", 1575002733, 123_456_789; "nanoseconds")]
    fn parse(input: &str, seconds: i64, nanos: i32) -> Result {
        let ts = Timestamp::try_from(input)?;
        assert_eq!(ts.seconds(), seconds, "{input}");
        assert_eq!(ts.nanos(), nanos, "{input}");
        Ok(())
    }

    #[test_case(1575002733, 0, "2019-11-29T04:45:33.000Z"; "whole second")]
    #[test_case(1575002733, 500_000_000, "2019-11-29T04:45:33.500Z"; "half second")]
    #[test_case(1575002733, 123_456_789, "2019-11-29T04:45:33.123Z"; "sub milliseconds truncate")]
    #[test_case(0, 7_000_000, "1970-01-01T00:00:00.007Z"; "padded millis")]
    fn format(seconds: i64, nanos: i32, want: &str) -> Result {
        let ts = Timestamp::new(seconds, nanos)?;
        assert_eq!(String::from(ts), want);
        Ok(())
    }

    #[test]
    fn roundtrip_through_serde() -> Result {
        let ts = Timestamp::new(1575002733, 123_000_000)?;
        let json = serde_json::to_value(ts)?;
        assert_eq!(json, serde_json::json!("2019-11-29T04:45:33.123Z"));
        let back = serde_json::from_value::<Timestamp>(json)?;
        assert_eq!(back, ts);
        Ok(())
    }

    #[test_case(Timestamp::MAX_SECONDS + 1, 0; "seconds over")]
    #[test_case(Timestamp::MIN_SECONDS - 1, 0; "seconds under")]
    #[test_case(0, Timestamp::MAX_NANOS + 1; "nanos over")]
    #[test_case(0, -1; "nanos negative")]
    fn out_of_range(seconds: i64, nanos: i32) {
        let ts = Timestamp::new(seconds, nanos);
        assert!(matches!(ts, Err(TimestampError::OutOfRange)), "{ts:?}");
    }

    #[test]
    fn clamp_carries_and_saturates() {
        let ts = Timestamp::clamp(10, 2_500_000_000);
        assert_eq!((ts.seconds(), ts.nanos()), (12, 500_000_000));
        let ts = Timestamp::clamp(10, -500_000_000);
        assert_eq!((ts.seconds(), ts.nanos()), (9, 500_000_000));
        let ts = Timestamp::clamp(Timestamp::MAX_SECONDS + 10, 0);
        assert_eq!((ts.seconds(), ts.nanos()), (Timestamp::MAX_SECONDS, 0));
        let ts = Timestamp::clamp(Timestamp::MIN_SECONDS - 10, 0);
        assert_eq!((ts.seconds(), ts.nanos()), (Timestamp::MIN_SECONDS, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        let ts = Timestamp::try_from("not a timestamp");
        assert!(matches!(ts, Err(TimestampError::Deserialize(_))), "{ts:?}");
    }
}
