use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

pub(crate) fn now() -> DateTime<Utc> {
    Utc::now()
}

pub(crate) fn now_ms() -> i64 {
    now().timestamp_millis()
}

/// Random v4 UUID.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Uniform value in `[0, 1)`.
pub(crate) fn random_unit() -> f64 {
    let mut bytes = [0u8; 8];
    if getrandom::getrandom(&mut bytes).is_err() {
        return 0.5;
    }
    (u64::from_le_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64
}

/// "5m ago", "3h ago", "2d ago", then a local calendar date past a week.
pub(crate) fn format_relative_age(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(date);
    let minutes = diff.num_minutes().max(0);
    let hours = diff.num_hours();
    let days = diff.num_days();

    if hours < 1 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        date.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
    }
}

pub(crate) fn local_time_label(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_generate_id_is_v4_uuid_shape() {
        let id = generate_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.chars().nth(14), Some('4'));
        assert_eq!(id.matches('-').count(), 4);
    }

    #[test]
    fn test_generate_id_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_unit_range() {
        for _ in 0..100 {
            let v = random_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_format_relative_age_buckets() {
        let now = Utc::now();
        assert_eq!(format_relative_age(now - Duration::seconds(20), now), "0m ago");
        assert_eq!(format_relative_age(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_relative_age(now - Duration::minutes(90), now), "1h ago");
        assert_eq!(format_relative_age(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_relative_age(now - Duration::days(3), now), "3d ago");
    }

    #[test]
    fn test_format_relative_age_absolute_after_a_week() {
        let now = Utc::now();
        let out = format_relative_age(now - Duration::days(30), now);
        assert!(!out.ends_with("ago"));
        assert_eq!(out.matches('/').count(), 2);
    }

    #[test]
    fn test_format_relative_age_future_clamps_to_zero() {
        let now = Utc::now();
        assert_eq!(format_relative_age(now + Duration::minutes(3), now), "0m ago");
    }
}
