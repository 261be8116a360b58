/// Canonical path of a unit: the parent's full path plus the unit name,
/// or the bare name for a root.
pub fn build_full_path(parent_path: Option<&str>, unit_name: &str) -> String {
    match parent_path {
        Some(parent) => format!("{parent}/{unit_name}"),
        None => unit_name.to_string(),
    }
}
