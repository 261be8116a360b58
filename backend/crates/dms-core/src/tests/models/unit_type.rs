use crate::UnitType;

use std::str::FromStr;

#[test]
fn test_unit_type_as_str() {
    assert_eq!(UnitType::Room.as_str(), "room");
    assert_eq!(UnitType::Cabinet.as_str(), "cabinet");
    assert_eq!(UnitType::Layer.as_str(), "layer");
    assert_eq!(UnitType::Box.as_str(), "box");
    assert_eq!(UnitType::Folder.as_str(), "folder");
}

#[test]
fn test_unit_type_from_str_accepts_any_case() {
    assert_eq!(UnitType::from_str("room").unwrap(), UnitType::Room);
    assert_eq!(UnitType::from_str("Cabinet").unwrap(), UnitType::Cabinet);
    assert_eq!(UnitType::from_str(" FOLDER ").unwrap(), UnitType::Folder);
    assert!(UnitType::from_str("drawer").is_err());
    assert!(UnitType::from_str("").is_err());
}

#[test]
fn test_unit_type_order_matches_rank() {
    assert!(UnitType::Room < UnitType::Cabinet);
    assert!(UnitType::Cabinet < UnitType::Layer);
    assert!(UnitType::Layer < UnitType::Box);
    assert!(UnitType::Box < UnitType::Folder);

    let ranks: Vec<u8> = UnitType::ALL.iter().map(|t| t.rank()).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_unit_type_display_matches_as_str() {
    for unit_type in UnitType::ALL {
        assert_eq!(unit_type.to_string(), unit_type.as_str());
    }
}
