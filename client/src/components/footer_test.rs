use super::*;

#[test]
fn copyright_line_names_year_and_owner() {
    assert_eq!(copyright_line(2025), format!("© 2025 {NAME}. All rights reserved."));
}
