use super::*;

// =============================================================
// Candidate
// =============================================================

#[test]
fn candidate_deserializes_backend_shape_with_numeric_id() {
    let raw = serde_json::json!({
        "resume_id": 7,
        "name": "Ada Lovelace",
        "skills": ["Python", "Django"],
        "experience": ["Engineer"],
        "education": ["BSc Mathematics"],
        "certifications": []
    });
    let candidate: Candidate = serde_json::from_value(raw).expect("candidate should parse");
    assert_eq!(candidate.resume_id.as_deref(), Some("7"));
    assert_eq!(candidate.display_name(), "Ada Lovelace");
    assert_eq!(candidate.skills_line(), "Python, Django");
    assert_eq!(candidate.certifications_line(), "None");
}

#[test]
fn candidate_missing_and_null_fields_render_placeholders() {
    let raw = serde_json::json!({ "name": null, "skills": null });
    let candidate: Candidate = serde_json::from_value(raw).expect("candidate should parse");
    assert_eq!(candidate.display_name(), "Not Available");
    assert_eq!(candidate.experience_line(), "N/A");
    assert_eq!(candidate.skills_line(), "N/A");
    assert_eq!(candidate.education_line(), "N/A");
    assert_eq!(candidate.certifications_line(), "None");
}

#[test]
fn empty_name_uses_placeholder() {
    let candidate = Candidate { name: Some(String::new()), ..Candidate::default() };
    assert_eq!(candidate.display_name(), "Not Available");
}

#[test]
fn join_or_treats_blank_join_as_missing() {
    assert_eq!(join_or(&[String::new()], "N/A"), "N/A");
    assert_eq!(join_or(&["a".to_owned(), "b".to_owned()], "N/A"), "a, b");
}

#[test]
fn candidate_ref_accepts_string_or_number_ids() {
    let list: Vec<CandidateRef> =
        serde_json::from_str(r#"[{"id": 3, "name": "Unknown Candidate"}, {"id": "abc", "name": "Bo"}]"#)
            .expect("candidate list should parse");
    assert_eq!(list[0].id, "3");
    assert_eq!(list[1].id, "abc");
}

#[test]
fn candidate_ref_rejects_object_id() {
    let result = serde_json::from_str::<CandidateRef>(r#"{"id": {"nested": 1}, "name": "x"}"#);
    assert!(result.is_err());
}

// =============================================================
// SearchFilters
// =============================================================

#[test]
fn filters_serialize_with_backend_field_names() {
    let mut filters = SearchFilters::default();
    filters.toggle_skill("React");
    filters.min_experience = Some(ExperienceLevel::SixMonths);
    filters.education_level = "Master".to_owned();
    let json = serde_json::to_value(&filters).expect("filters serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "skills": ["React"],
            "customSkill": "",
            "min_experience": "0.5",
            "education_level": "Master",
            "certifications": []
        })
    );
}

#[test]
fn unset_experience_serializes_as_empty_code() {
    let json = serde_json::to_value(SearchFilters::default()).expect("filters serialize");
    assert_eq!(json["min_experience"], "");
}

#[test]
fn toggling_a_predefined_skill_twice_restores_membership() {
    let mut filters = SearchFilters::default();
    filters.toggle_skill("Python");
    let before = filters.skills.clone();
    filters.toggle_skill("Django");
    filters.toggle_skill("Django");
    assert_eq!(filters.skills, before);
}

#[test]
fn adding_same_custom_skill_twice_keeps_one_occurrence() {
    let mut filters = SearchFilters::default();
    filters.custom_skill = "Rust".to_owned();
    assert!(filters.add_custom_skill());
    assert!(filters.custom_skill.is_empty());

    filters.custom_skill = "  Rust ".to_owned();
    assert!(!filters.add_custom_skill());
    assert_eq!(filters.skills, vec!["Rust".to_owned()]);
}

#[test]
fn blank_custom_skill_is_ignored() {
    let mut filters = SearchFilters { custom_skill: "   ".to_owned(), ..SearchFilters::default() };
    assert!(!filters.add_custom_skill());
    assert!(filters.skills.is_empty());
}

#[test]
fn certifications_are_trimmed_and_unique() {
    let mut filters = SearchFilters::default();
    assert!(filters.add_certification(" AWS SA "));
    assert!(!filters.add_certification("AWS SA"));
    assert!(!filters.add_certification(""));
    filters.remove_certification("AWS SA");
    assert!(filters.certifications.is_empty());
}

#[test]
fn experience_codes_round_trip_through_labels() {
    for level in ExperienceLevel::ALL {
        assert_eq!(ExperienceLevel::from_code(level.code()), Some(level));
    }
    assert_eq!(ExperienceLevel::from_code(""), None);
    assert_eq!(ExperienceLevel::FivePlusYears.label(), "5+ Years");
}

// =============================================================
// ResumeFile
// =============================================================

#[test]
fn resume_file_accepts_office_and_pdf_extensions_case_insensitively() {
    assert!(ResumeFile::new("cv.PDF", Vec::<u8>::new()).is_supported());
    assert!(ResumeFile::new("cv.doc", Vec::<u8>::new()).is_supported());
    assert!(ResumeFile::new("my.cv.docx", Vec::<u8>::new()).is_supported());
}

#[test]
fn resume_file_rejects_other_or_missing_extensions() {
    assert!(!ResumeFile::new("cv.txt", Vec::<u8>::new()).is_supported());
    assert!(!ResumeFile::new("pdf", Vec::<u8>::new()).is_supported());
    assert!(!ResumeFile::new(".pdf", Vec::<u8>::new()).is_supported());
}

#[test]
fn resume_file_content_type_follows_extension() {
    assert_eq!(ResumeFile::new("a.pdf", Vec::<u8>::new()).content_type(), "application/pdf");
    assert_eq!(ResumeFile::new("a.bin", Vec::<u8>::new()).content_type(), "application/octet-stream");
    assert_eq!(ResumeFile::new("a.pdf", vec![1_u8, 2, 3]).size(), 3);
}
