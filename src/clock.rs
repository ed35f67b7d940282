use time::OffsetDateTime;

/// Current UTC time at millisecond precision, the resolution records are stored with.
pub fn now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(now.millisecond() as u32 * 1_000_000)
        .unwrap_or(now)
}

/// Serde adapter writing `2024-05-01T12:00:00.250Z`: UTC, always three
/// fractional digits. Reads any RFC 3339 timestamp.
pub mod iso_millis {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use time::format_description::well_known::Rfc3339;
    use time::macros::format_description;
    use time::{OffsetDateTime, UtcOffset};

    pub fn format(value: &OffsetDateTime) -> Result<String, time::error::Format> {
        value.to_offset(UtcOffset::UTC).format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
    }

    pub fn serialize<S: Serializer>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = format(value).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&text, &Rfc3339).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn drops_sub_millisecond_digits() {
        assert_eq!(now().nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn always_writes_three_fraction_digits() {
        assert_eq!(
            iso_millis::format(&datetime!(2024-05-01 12:00:00.25 UTC)).unwrap(),
            "2024-05-01T12:00:00.250Z"
        );
        assert_eq!(
            iso_millis::format(&datetime!(2024-05-01 12:00:00 UTC)).unwrap(),
            "2024-05-01T12:00:00.000Z"
        );
        assert_eq!(
            iso_millis::format(&datetime!(2024-05-01 14:00:00.5 +02:00)).unwrap(),
            "2024-05-01T12:00:00.500Z"
        );
    }

    #[test]
    fn reads_short_and_long_fractions() {
        #[derive(serde::Deserialize)]
        struct Stamp {
            #[serde(with = "iso_millis")]
            at: OffsetDateTime,
        }
        for raw in ["2024-05-01T12:00:00.25Z", "2024-05-01T12:00:00.250Z", "2024-05-01T14:00:00.25+02:00"] {
            let stamp: Stamp = serde_json::from_str(&format!(r#"{{"at":"{raw}"}}"#)).unwrap();
            assert_eq!(stamp.at, datetime!(2024-05-01 12:00:00.25 UTC));
        }
    }
}
