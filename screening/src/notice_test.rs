use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct Collect(RefCell<Vec<Notice>>);

impl Notify for Collect {
    fn notify(&self, notice: Notice) {
        self.0.borrow_mut().push(notice);
    }
}

#[test]
fn constructors_set_level() {
    assert_eq!(Notice::info("a").level, NoticeLevel::Info);
    assert_eq!(Notice::success("a").level, NoticeLevel::Success);
    assert_eq!(Notice::warning("a").level, NoticeLevel::Warning);
    assert_eq!(Notice::error("a").level, NoticeLevel::Error);
}

#[test]
fn level_names_are_lowercase() {
    assert_eq!(NoticeLevel::Warning.as_str(), "warning");
    assert_eq!(NoticeLevel::Error.as_str(), "error");
}

#[test]
fn references_and_rc_forward_to_inner_sink() {
    fn emit(sink: impl Notify, text: &str) {
        sink.notify(Notice::info(text));
    }

    let sink = Rc::new(Collect::default());
    emit(&*sink, "one");
    emit(Rc::clone(&sink), "two");
    let texts: Vec<String> = sink.0.borrow().iter().map(|n| n.text.clone()).collect();
    assert_eq!(texts, vec!["one".to_owned(), "two".to_owned()]);
}
