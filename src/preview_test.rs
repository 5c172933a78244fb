use std::collections::HashMap;

use super::*;
use crate::test_support::FakeDialog;

fn card(pairs: &[(&str, &str)]) -> PreviewRequest {
    let data: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    PreviewRequest::from_card_data(|key| data.get(key).cloned())
}

// =============================================================
// PreviewRequest
// =============================================================

#[test]
fn request_reads_all_fields() {
    let req = card(&[
        ("title", "Folio"),
        ("desc", "A site"),
        ("demo", "https://demo.example"),
        ("code", "https://github.com/x/folio"),
    ]);
    assert_eq!(req.title, "Folio");
    assert_eq!(req.description, "A site");
    assert_eq!(req.demo_url.as_deref(), Some("https://demo.example"));
    assert_eq!(req.code_url.as_deref(), Some("https://github.com/x/folio"));
}

#[test]
fn missing_title_and_description_use_defaults() {
    let req = card(&[]);
    assert_eq!(req.title, "Project");
    assert_eq!(req.description, "");
    assert_eq!(req.demo_url, None);
    assert_eq!(req.code_url, None);
}

#[test]
fn empty_values_count_as_absent() {
    let req = card(&[("title", ""), ("demo", ""), ("code", "https://code.example")]);
    assert_eq!(req.title, "Project");
    assert_eq!(req.demo_url, None);
    assert_eq!(req.code_url.as_deref(), Some("https://code.example"));
}

// =============================================================
// PreviewController
// =============================================================

#[test]
fn open_populates_and_shows_dialog() {
    let dialog = FakeDialog::default();
    let mut controller = PreviewController::new(dialog.clone());
    controller.open(&card(&[("title", "Folio"), ("desc", "A site"), ("demo", "https://demo.example")]));

    let view = dialog.0.borrow();
    assert_eq!(view.title, "Folio");
    assert_eq!(view.description, "A site");
    assert_eq!(view.demo.as_deref(), Some("https://demo.example"));
    assert_eq!(view.code, None);
    assert_eq!(view.shown, 1);
}

#[test]
fn second_open_overwrites_previous_content() {
    let dialog = FakeDialog::default();
    let mut controller = PreviewController::new(dialog.clone());
    controller.open(&card(&[
        ("title", "First"),
        ("desc", "first desc"),
        ("demo", "https://one.example"),
        ("code", "https://one.example/src"),
    ]));
    controller.open(&card(&[("title", "Second")]));

    let view = dialog.0.borrow();
    assert_eq!(view.title, "Second");
    assert_eq!(view.description, "");
    assert_eq!(view.demo, None);
    assert_eq!(view.code, None);
    assert_eq!(view.shown, 2);
}

#[test]
fn buttons_shown_iff_url_present() {
    let combos = [(None, None), (Some("d"), None), (None, Some("c")), (Some("d"), Some("c"))];
    for (demo, code) in combos {
        let mut pairs = vec![("title", "T")];
        if let Some(d) = demo {
            pairs.push(("demo", d));
        }
        if let Some(c) = code {
            pairs.push(("code", c));
        }
        let dialog = FakeDialog::default();
        PreviewController::new(dialog.clone()).open(&card(&pairs));
        assert_eq!(dialog.0.borrow().demo.as_deref(), demo);
        assert_eq!(dialog.0.borrow().code.as_deref(), code);
    }
}
