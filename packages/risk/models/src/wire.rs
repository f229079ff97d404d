//! Serde helpers that keep the JSON output identical to what the dashboard
//! produces in the browser.

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix, e.g.
/// `2024-07-15T09:30:00.000Z`.
///
/// Use with `#[serde(with = "outbreak_risk_models::wire::millis_timestamp")]`.
pub mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    /// Serializes `value` truncated to milliseconds.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Deserializes any RFC 3339 timestamp and converts it to UTC.
    ///
    /// # Errors
    ///
    /// Fails if the string is not a valid RFC 3339 timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}

/// Numbers written without a trailing `.0` when they hold a whole value,
/// so `55.0` serializes as `55` and `12.5` stays `12.5`.
///
/// Use with `#[serde(with = "outbreak_risk_models::wire::js_number")]`.
pub mod js_number {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Largest magnitude at which every integer is exactly representable.
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    /// Serializes whole values as integers and everything else as `f64`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    /// Deserializes any JSON number as `f64`.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a number.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        f64::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone as _, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "super::millis_timestamp")]
        at: DateTime<Utc>,
        #[serde(with = "super::js_number")]
        value: f64,
    }

    #[test]
    fn timestamps_use_millisecond_precision() {
        let at = Utc
            .with_ymd_and_hms(2024, 7, 15, 9, 30, 0)
            .unwrap()
            .checked_add_signed(chrono::TimeDelta::nanoseconds(123_456_789))
            .unwrap();
        let json = serde_json::to_value(Stamped { at, value: 1.0 }).unwrap();
        assert_eq!(json["at"], "2024-07-15T09:30:00.123Z");
    }

    #[test]
    fn whole_numbers_drop_the_fraction() {
        let at = Utc.with_ymd_and_hms(2024, 7, 15, 9, 30, 0).unwrap();
        let text = serde_json::to_string(&Stamped { at, value: 55.0 }).unwrap();
        assert_eq!(text, r#"{"at":"2024-07-15T09:30:00.000Z","value":55}"#);

        let text = serde_json::to_string(&Stamped { at, value: -12.5 }).unwrap();
        assert!(text.ends_with(r#""value":-12.5}"#), "got {text}");
    }

    #[test]
    fn reads_back_what_it_writes() {
        let original = Stamped {
            at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            value: 7.0,
        };
        let parsed: Stamped =
            serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
        assert_eq!(parsed, original);
    }
}
