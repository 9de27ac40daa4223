use super::*;

#[test]
fn experience_value_round_trips_through_select() {
    assert_eq!(experience_value(None), "");
    for level in ExperienceLevel::ALL {
        let value = experience_value(Some(level));
        assert_eq!(ExperienceLevel::from_code(value), Some(level));
    }
    assert_eq!(ExperienceLevel::from_code(experience_value(None)), None);
}

#[test]
fn search_button_label() {
    assert_eq!(search_label(false), "Search");
    assert_eq!(search_label(true), "Searching...");
}

#[test]
fn chip_class_marks_selected_skills() {
    assert_eq!(chip_class(true), "chip chip--active");
    assert_eq!(chip_class(false), "chip");
}
