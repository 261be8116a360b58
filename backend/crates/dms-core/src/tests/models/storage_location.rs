use crate::{NewStorageLocation, UnitType};

#[test]
fn test_new_location_keeps_capacity_for_folder() {
    let row = NewStorageLocation::new(
        1,
        None,
        Some(4),
        "F1".to_string(),
        UnitType::Folder,
        "Lab1/A/L/B/F1".to_string(),
        25,
    );

    assert_eq!(row.folder_capacity, 25);
}

#[test]
fn test_new_location_zeroes_capacity_for_non_folder() {
    for unit_type in [UnitType::Room, UnitType::Cabinet, UnitType::Layer, UnitType::Box] {
        let row = NewStorageLocation::new(
            1,
            None,
            None,
            "X".to_string(),
            unit_type,
            "X".to_string(),
            25,
        );
        assert_eq!(row.folder_capacity, 0, "{unit_type} must not carry a capacity");
    }
}
