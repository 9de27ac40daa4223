use screening::{ResumeFile, Store};

use super::*;

fn staged(is_uploading: bool) -> UploadState {
    UploadState {
        selected_file: Some(ResumeFile::new("jane_doe.pdf", vec![0_u8; 2048])),
        progress: 0,
        is_uploading,
    }
}

#[test]
fn selected_label_shows_name_and_size() {
    assert_eq!(selected_label(&staged(false)), Some("Selected: jane_doe.pdf (2.0 KB)".to_owned()));
    assert_eq!(selected_label(&UploadState::default()), None);
}

#[test]
fn upload_needs_a_file_and_no_request_in_flight() {
    assert!(can_upload(&staged(false)));
    assert!(!can_upload(&staged(true)));
    assert!(!can_upload(&UploadState::default()));
}

#[test]
fn button_label_follows_upload_state() {
    assert_eq!(upload_label(false), "Upload");
    assert_eq!(upload_label(true), "Uploading...");
}

// =============================================================
// staging after the read finishes
// =============================================================

fn controller_under(owner: &Owner) -> StoredValue<BrowserUpload> {
    owner.with(|| {
        let toasts = ToastNotifier::new(RwSignal::new(crate::state::toasts::ToastState::default()));
        StoredValue::new(BrowserUpload::new(
            HttpBackend::default(),
            toasts,
            SignalStore::new(UploadState::default()),
        ))
    })
}

#[test]
fn read_file_is_staged_while_page_is_open() {
    let root = Owner::new();
    root.set();
    let page = root.child();
    let controller = controller_under(&page);

    assert!(stage_resume(controller, ResumeFile::new("cv.pdf", vec![1_u8; 8])));

    let staged = controller.with_value(|c| c.state().with(|s| s.selected_file.clone()));
    assert_eq!(staged.map(|f| f.name), Some("cv.pdf".to_owned()));
}

#[test]
fn read_finishing_after_page_closed_is_dropped() {
    let root = Owner::new();
    root.set();
    let page = root.child();
    let controller = controller_under(&page);

    page.cleanup();

    assert!(!stage_resume(controller, ResumeFile::new("cv.pdf", vec![1_u8; 8])));
}
