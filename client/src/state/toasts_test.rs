use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn pushed_toasts_keep_arrival_order_and_unique_ids() {
    let mut state = ToastState::default();
    let first = state.push(Notice::info("one"));
    let second = state.push(Notice::error("two"));

    assert_ne!(first, second);
    let texts: Vec<&str> = state.items.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(Notice::info("one"));
    state.push(Notice::warning("two"));

    state.dismiss(first);
    state.dismiss(999);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].level, NoticeLevel::Warning);
}

#[test]
fn toast_class_carries_level() {
    let mut state = ToastState::default();
    state.push(Notice::success("saved"));
    assert_eq!(state.items[0].class(), "toast toast--success");
}

// =============================================================
// ToastNotifier
// =============================================================

#[test]
fn notifier_appends_to_signal() {
    let owner = Owner::new();
    owner.set();
    let signal = RwSignal::new(ToastState::default());
    let notifier = ToastNotifier::new(signal);

    notifier.notify(Notice::error("boom"));

    let items = signal.get_untracked().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "boom");
}
