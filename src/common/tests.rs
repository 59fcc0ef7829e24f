#[cfg(test)]
mod common_tests {
    use crate::common::common::{parse_duration, parse_log_level};
    use crate::common::structs::custom_error::CustomError;
    use std::time::Duration;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("90s"), Some(Duration::from_secs(90)));
        assert_eq!(parse_duration("2m"), Some(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h30m"), Some(Duration::from_secs(5400)));
        assert_eq!(parse_duration("1.5h"), Some(Duration::from_secs(5400)));
        assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_duration(" 120 "), Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("abc"), None);
        assert_eq!(parse_duration("10"), Some(Duration::from_secs(10)));
        assert_eq!(parse_duration("10x"), None);
        assert_eq!(parse_duration("m"), None);
        assert_eq!(parse_duration("-5s"), None);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        let err = parse_log_level("verbose").unwrap_err();
        assert_eq!(err, CustomError::new("Unknown log level encountered: 'verbose'"));
    }
}
