use crate::error::Error;
use serde::Serialize;

/// Raw `"lat,long"` literals the generator picks from.
pub const COORDINATES: [&str; 5] = [
    "-16.499586146571012,-68.159141379932314",
    "-16.48905192924404,-68.08858855399531",
    "-16.48131549825551,-68.17579253349894",
    "-16.536615948734706,-68.16703780327317",
    "-16.54467927520438,-68.06421263846475",
];

/// A latitude/longitude pair borrowed from its raw literal.
///
/// Both halves stay strings so the digits reach the client exactly as written.
/// Field order is the JSON key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coordinate<'a> {
    pub lat: &'a str,
    pub long: &'a str,
}

impl<'a> Coordinate<'a> {
    /// Splits a raw `"lat,long"` value. Anything other than exactly two
    /// comma separated parts is rejected.
    pub fn parse(raw: &'a str) -> Result<Self, Error> {
        let mut parts = raw.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(long), None) => Ok(Coordinate { lat, long }),
            _ => Err(Error::format(format!(
                "expected \"lat,long\" but got {raw:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parse_splits_latitude_and_longitude() {
        let coordinate = Coordinate::parse(COORDINATES[1]).unwrap();

        assert_eq!(coordinate.lat, "-16.48905192924404");
        assert_eq!(coordinate.long, "-68.08858855399531");
    }

    #[test]
    fn parse_accepts_every_known_coordinate() {
        for raw in COORDINATES {
            assert!(Coordinate::parse(raw).is_ok(), "{raw} should parse");
        }
    }

    #[test]
    fn parse_rejects_value_without_comma() {
        let err = Coordinate::parse("-16.499586146571012").unwrap_err();
        assert!(matches!(err.error_kind, ErrorKind::Format(_)));
    }

    #[test]
    fn parse_rejects_value_with_extra_parts() {
        let err = Coordinate::parse("-16.4,-68.1,12.0").unwrap_err();
        assert!(matches!(err.error_kind, ErrorKind::Format(_)));
    }

    #[test]
    fn parse_rejects_empty_value() {
        assert!(Coordinate::parse("").is_err());
    }
}
