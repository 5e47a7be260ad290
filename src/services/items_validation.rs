//! Whether to warn about `items.xml` files changed since the last build.

use crate::constants::ITEMS_VALIDATION_WARNING;
use crate::provider::{ItemsFileValidation, NotificationSink};
use camino::Utf8Path;

/// True as soon as one of `files` is out of date.
pub fn any_items_file_out_of_date<P, V>(files: &[P], validation: &V) -> bool
where
    P: AsRef<Utf8Path>,
    V: ItemsFileValidation + ?Sized,
{
    files
        .iter()
        .any(|file| validation.is_file_out_of_date(file.as_ref()))
}

/// Send a single warning to `sink` if any of `files` is out of date.
///
/// Returns whether the warning was sent.
pub fn warn_if_items_out_of_date<P, V, N>(files: &[P], validation: &V, sink: &N) -> bool
where
    P: AsRef<Utf8Path>,
    V: ItemsFileValidation + ?Sized,
    N: NotificationSink + ?Sized,
{
    if !any_items_file_out_of_date(files, validation) {
        return false;
    }

    tracing::info!("Out of date items.xml detected, notifying");
    sink.show_warning_message(ITEMS_VALIDATION_WARNING);
    true
}

/// Send the warning if a single opened or selected file is out of date.
///
/// Returns whether the warning was sent.
pub fn warn_if_file_out_of_date<V, N>(file: &Utf8Path, validation: &V, sink: &N) -> bool
where
    V: ItemsFileValidation + ?Sized,
    N: NotificationSink + ?Sized,
{
    if !validation.is_file_out_of_date(file) {
        return false;
    }

    tracing::info!("Out of date items.xml opened: {}", file);
    sink.show_warning_message(ITEMS_VALIDATION_WARNING);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StaleNames(&'static [&'static str]);

    impl ItemsFileValidation for StaleNames {
        fn is_file_out_of_date(&self, file: &Utf8Path) -> bool {
            self.0.contains(&file.as_str())
        }
    }

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<String>>);

    impl NotificationSink for RecordingSink {
        fn show_warning_message(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_no_files_no_warning() {
        let sink = RecordingSink::default();
        let files: [&str; 0] = [];
        assert!(!warn_if_items_out_of_date(&files, &StaleNames(&["a"]), &sink));
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn test_single_warning_for_many_stale_files() {
        let sink = RecordingSink::default();
        let files = ["core/items.xml", "facades/items.xml"];
        let validation = StaleNames(&["core/items.xml", "facades/items.xml"]);

        assert!(warn_if_items_out_of_date(&files, &validation, &sink));
        assert_eq!(sink.0.borrow().as_slice(), [ITEMS_VALIDATION_WARNING]);
    }

    #[test]
    fn test_opened_file_warns_only_when_stale() {
        let sink = RecordingSink::default();
        let validation = StaleNames(&["core/items.xml"]);

        assert!(!warn_if_file_out_of_date(
            Utf8Path::new("facades/items.xml"),
            &validation,
            &sink
        ));
        assert!(sink.0.borrow().is_empty());

        assert!(warn_if_file_out_of_date(
            Utf8Path::new("core/items.xml"),
            &validation,
            &sink
        ));
        assert_eq!(sink.0.borrow().as_slice(), [ITEMS_VALIDATION_WARNING]);
    }

    #[test]
    fn test_up_to_date_files() {
        let files = ["core/items.xml"];
        assert!(!any_items_file_out_of_date(&files, &StaleNames(&[])));
    }
}
