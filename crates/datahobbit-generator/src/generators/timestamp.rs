//! Date and timestamp value generators.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use datahobbit_core::Value;
use rand::Rng;

/// Generate a random date in the given range (inclusive).
pub fn generate_date_range<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> Value {
    if start >= end {
        return Value::Date(start);
    }

    let first = start.num_days_from_ce();
    let last = end.num_days_from_ce();
    let day = rng.gen_range(first..=last);
    Value::Date(NaiveDate::from_num_days_from_ce_opt(day).unwrap_or(start))
}

/// Generate a random timestamp, at whole-second resolution, in the given range.
///
/// Fractional bounds are tightened to the whole seconds inside the range.
pub fn generate_timestamp_range<R: Rng>(
    rng: &mut R,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> Value {
    let start_ts = start.timestamp() + i64::from(start.timestamp_subsec_nanos() > 0);
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        let dt = DateTime::from_timestamp(start_ts, 0).unwrap_or(*start);
        return Value::Timestamp(dt);
    }

    let random_ts = rng.gen_range(start_ts..=end_ts);
    let dt = DateTime::from_timestamp(random_ts, 0).unwrap_or(*start);
    Value::Timestamp(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datahobbit_core::schema::parse_timestamp;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_generate_date_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let (start, end) = (date("2020-01-01"), date("2024-12-31"));

        for _ in 0..100 {
            let value = generate_date_range(&mut rng, start, end);
            let d = value.as_date().unwrap();
            assert!(d >= start && d <= end);
        }
    }

    #[test]
    fn test_single_day_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let day = date("2024-02-29");
        assert_eq!(generate_date_range(&mut rng, day, day), Value::Date(day));
    }

    #[test]
    fn test_generate_timestamp_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = parse_timestamp("2020-01-01T00:00:00Z").unwrap();
        let end = parse_timestamp("2024-12-31T23:59:59Z").unwrap();

        let value = generate_timestamp_range(&mut rng, &start, &end);

        if let Value::Timestamp(dt) = value {
            assert!(dt.year() >= 2020 && dt.year() <= 2024);
            assert_eq!(dt.timestamp_subsec_nanos(), 0);
        } else {
            panic!("Expected Timestamp value");
        }
    }

    #[test]
    fn test_fractional_bounds_stay_inside_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = parse_timestamp("2020-01-01T00:00:00.900Z").unwrap();
        let end = parse_timestamp("2020-01-01T00:00:02Z").unwrap();

        for _ in 0..200 {
            let Value::Timestamp(dt) = generate_timestamp_range(&mut rng, &start, &end) else {
                panic!("Expected Timestamp value");
            };
            assert!(dt >= start && dt <= end, "{dt} outside range");
            assert_eq!(dt.timestamp_subsec_nanos(), 0);
        }

        let degenerate = generate_timestamp_range(&mut rng, &start, &start);
        assert_eq!(
            degenerate,
            Value::Timestamp(parse_timestamp("2020-01-01T00:00:01Z").unwrap())
        );
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let start = parse_timestamp("2020-01-01").unwrap();
        let end = parse_timestamp("2024-12-31").unwrap();

        let value1 = generate_timestamp_range(&mut rng1, &start, &end);
        let value2 = generate_timestamp_range(&mut rng2, &start, &end);

        assert_eq!(value1, value2);
    }
}
