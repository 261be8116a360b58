use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_known_levels_parse() {
    assert_eq!(LogLevel::from_str("debug").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("WARN").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
}

#[test]
fn test_unknown_level_defaults_to_info() {
    assert_eq!(LogLevel::from_str("verbose").unwrap().0, LevelFilter::Info);
}

#[test]
fn test_level_deserializes_from_toml() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let parsed: Wrapper = toml::from_str("level = \"trace\"").unwrap();
    assert_eq!(*parsed.level, LevelFilter::Trace);
}
