//! Time and window grammars used by RDS backup and maintenance settings

use super::ValidationResult;

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// `hh24:mi`
pub(crate) fn validate_time(t: &str) -> ValidationResult {
    let parts: Vec<&str> = t.split(':').collect();
    ensure!(
        parts.len() == 2,
        "Time format must take the form of 'hh24:mi'. i.e. '21:30'"
    );
    validate_clock(parts[0], parts[1])
}

/// `ddd:hh24:mi`
pub(crate) fn validate_day_time(t: &str) -> ValidationResult {
    let parts: Vec<&str> = t.split(':').collect();
    ensure!(
        parts.len() == 3,
        "Date format must take the form of 'ddd:hh24:mi'. i.e. 'Mon:21:30'"
    );
    ensure!(
        DAYS.contains(&parts[0]),
        "Date format invalid. Day must be one of {}",
        DAYS.join(", ")
    );
    validate_clock(parts[1], parts[2])
}

/// `hh24:mi-hh24:mi`
pub(crate) fn validate_time_window(w: &str) -> ValidationResult {
    let Some((from, to)) = w.split_once('-') else {
        fail!("Window format must take the form of 'hh24:mi-hh24:mi'. i.e. '21:30-22:00'");
    };
    validate_time(from)?;
    validate_time(to)
}

/// `ddd:hh24:mi-ddd:hh24:mi`
pub(crate) fn validate_weekly_window(w: &str) -> ValidationResult {
    let parts: Vec<&str> = w.split('-').collect();
    ensure!(
        parts.len() == 2,
        "Window format must take the form of 'ddd:hh24:mi-ddd:hh24:mi'. i.e. 'Mon:21:30-Mon:22:00'"
    );
    validate_day_time(parts[0])?;
    validate_day_time(parts[1])
}

fn validate_clock(hour: &str, minute: &str) -> ValidationResult {
    ensure!(
        matches!(hour.parse::<u8>(), Ok(h) if h <= 23),
        "Date format invalid. Hour must be between 0 and 23 hours"
    );
    ensure!(
        matches!(minute.parse::<u8>(), Ok(m) if m <= 59),
        "Date format invalid. Minute must be between 0 and 59 minutes"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_window() {
        assert!(validate_weekly_window("Mon:21:30-Mon:22:00").is_ok());
        assert!(validate_weekly_window("Sun:23:59-Mon:00:00").is_ok());

        let err = validate_weekly_window("Mon:21:30").unwrap_err();
        assert!(err.message().starts_with("Window format must take the form"));

        let err = validate_weekly_window("Foo:21:30-Mon:22:00").unwrap_err();
        assert!(err.message().starts_with("Date format invalid. Day"));

        let err = validate_weekly_window("Mon:24:00-Mon:22:00").unwrap_err();
        assert!(err.message().contains("Hour must be between 0 and 23"));

        let err = validate_weekly_window("Mon:21:60-Mon:22:00").unwrap_err();
        assert!(err.message().contains("Minute must be between 0 and 59"));
    }

    #[test]
    fn test_daily_window() {
        assert!(validate_time_window("03:00-04:30").is_ok());
        assert!(validate_time_window("0300").is_err());
        assert!(validate_time_window("03:00-25:00").is_err());
    }
}
