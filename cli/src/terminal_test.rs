use super::*;

#[test]
fn notice_format_pads_level() {
    assert_eq!(format_notice(&Notice::info("Uploading file...")), "[info   ] Uploading file...");
    assert_eq!(format_notice(&Notice::success("Upload successful!")), "[success] Upload successful!");
}

#[test]
fn bar_fills_proportionally() {
    assert_eq!(render_bar(0), format!("[{}]   0%", "-".repeat(30)));
    assert_eq!(render_bar(50), format!("[{}{}]  50%", "#".repeat(15), "-".repeat(15)));
    assert_eq!(render_bar(100), format!("[{}] 100%", "#".repeat(30)));
}

#[test]
fn bar_clamps_overflow() {
    assert_eq!(render_bar(250), render_bar(100));
}

#[test]
fn progress_store_tracks_updates() {
    let store = ProgressStore::default();
    store.update(|s| s.progress = 40);
    store.update(|s| s.is_uploading = true);

    assert_eq!(store.with(|s| s.progress), 40);
    assert!(store.with(|s| s.is_uploading));
}

fn upload(progress: u8, is_uploading: bool) -> UploadState {
    UploadState { selected_file: None, progress, is_uploading }
}

#[test]
fn bar_is_drawn_on_progress_and_stays_open() {
    let (out, open) = bar_transition(&upload(0, true), &upload(40, true), false);

    assert_eq!(out, format!("\r{}", render_bar(40)));
    assert!(open);
}

#[test]
fn full_bar_ends_its_line() {
    let (out, open) = bar_transition(&upload(40, true), &upload(100, true), true);

    assert!(out.ends_with("100%\n"));
    assert!(!open);
}

#[test]
fn stalled_bar_is_closed_when_upload_stops() {
    let (out, open) = bar_transition(&upload(40, true), &upload(40, false), true);

    assert_eq!(out, "\n");
    assert!(!open);
}

#[test]
fn stopping_without_a_bar_prints_nothing() {
    let (out, open) = bar_transition(&upload(0, true), &upload(0, false), false);

    assert!(out.is_empty());
    assert!(!open);
}

// =============================================================
// chat output
// =============================================================

#[test]
fn latest_replies_skip_greeting_and_keep_order() {
    let mut state = ChatState::default();
    state.messages.extend([
        screening::ChatMessage::user("a?"),
        screening::ChatMessage::user("b?"),
        screening::ChatMessage::bot("A"),
        screening::ChatMessage::bot("B"),
    ]);

    assert_eq!(latest_replies(&state, 2), vec!["A".to_owned(), "B".to_owned()]);
    assert_eq!(latest_replies(&state, 5), vec!["A".to_owned(), "B".to_owned()]);
    assert!(latest_replies(&ChatState::default(), 1).is_empty());
}

#[test]
fn exchange_quotes_the_question() {
    assert_eq!(render_exchange("Skills?", "Rust."), "> Skills?\nRust.");
}

#[test]
fn candidate_block_uses_placeholders() {
    let candidate = Candidate {
        skills: vec!["Rust".to_owned(), "SQL".to_owned()],
        ..Candidate::default()
    };

    let rendered = render_candidate(&candidate);

    assert_eq!(
        rendered,
        "Not Available\n  Experience: N/A\n  Skills: Rust, SQL\n  Education: N/A\n  Certifications: None"
    );
}
