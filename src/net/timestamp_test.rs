use serde_json::json;
use time::Month;

use super::*;

fn decode(value: serde_json::Value) -> Result<Timestamp, serde_json::Error> {
    serde_json::from_value(value)
}

#[test]
fn new_year_maps_to_month_index_zero() {
    let ts = decode(json!([2022, 1, 1, 0, 0, 0])).unwrap();
    assert_eq!(ts.to_string(), "2022-01-01T00:00:00");
    assert_eq!(ts.month_index(), 0);
    assert_eq!(ts.datetime().month(), Month::January);
}

#[test]
fn december_maps_to_month_index_eleven() {
    let ts = decode(json!([2023, 12, 31, 23, 59, 59])).unwrap();
    assert_eq!(ts.month_index(), 11);
    assert_eq!(ts.datetime().month(), Month::December);
    assert_eq!(ts.datetime().day(), 31);
    assert_eq!(ts.to_string(), "2023-12-31T23:59:59");
}

#[test]
fn to_parts_restores_one_based_month() {
    let ts = Timestamp::from_parts(&[2024, 2, 29, 8, 30, 5]).unwrap();
    assert_eq!(ts.to_parts(), [2024, 2, 29, 8, 30, 5]);
}

#[test]
fn rejects_wrong_length() {
    assert_eq!(Timestamp::from_parts(&[2022, 1, 1, 0, 0]), Err(TimestampError::WrongLength(5)));
    assert!(decode(json!([2022, 1, 1, 0, 0, 0, 0])).is_err());
    assert!(decode(json!([])).is_err());
}

#[test]
fn rejects_month_zero_and_thirteen() {
    assert_eq!(
        Timestamp::from_parts(&[2022, 0, 1, 0, 0, 0]),
        Err(TimestampError::OutOfRange { field: "month", value: 0 })
    );
    assert!(Timestamp::from_parts(&[2022, 13, 1, 0, 0, 0]).is_err());
}

#[test]
fn rejects_impossible_day() {
    assert!(matches!(Timestamp::from_parts(&[2023, 2, 29, 0, 0, 0]), Err(TimestampError::Invalid(_))));
}

#[test]
fn rejects_negative_hour() {
    assert_eq!(
        Timestamp::from_parts(&[2023, 1, 1, -1, 0, 0]),
        Err(TimestampError::OutOfRange { field: "hour", value: -1 })
    );
}

#[test]
fn rejects_non_numeric_components() {
    assert!(decode(json!(["2022", 1, 1, 0, 0, 0])).is_err());
    assert!(decode(json!("2022-01-01T00:00:00")).is_err());
}

#[test]
fn serializes_as_display_string() {
    let ts = Timestamp::from_parts(&[2022, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(serde_json::to_value(ts).unwrap(), json!("2022-03-04T05:06:07"));
}
