use super::*;
use crate::test_support::FakeLink;

fn sections() -> Vec<String> {
    ["home", "about", "projects", "contact"].iter().map(|&s| s.to_owned()).collect()
}

fn links() -> Vec<FakeLink> {
    ["#home", "#about", "#projects", "#contact"].iter().map(|&h| FakeLink::new(h)).collect()
}

fn active_hrefs(links: &[FakeLink]) -> Vec<String> {
    links
        .iter()
        .filter(|l| l.is_active())
        .filter_map(|l| l.href.clone())
        .collect()
}

#[test]
fn starts_with_no_active_section() {
    let spy = ScrollSpy::new(sections(), links());
    assert_eq!(spy.active_section(), None);
    assert_eq!(spy.sections().len(), 4);
}

#[test]
fn intersecting_section_activates_matching_link() {
    let handles = links();
    let mut spy = ScrollSpy::new(sections(), handles.clone());
    spy.on_intersections(&[VisibilityChange::entered("about".to_owned())]);
    assert_eq!(spy.active_section(), Some("about"));
    assert_eq!(active_hrefs(&handles), vec!["#about"]);
}

#[test]
fn leaving_section_does_not_change_highlight() {
    let handles = links();
    let mut spy = ScrollSpy::new(sections(), handles.clone());
    spy.on_intersections(&[VisibilityChange::entered("projects".to_owned())]);
    spy.on_intersections(&[VisibilityChange::left("projects".to_owned())]);
    assert_eq!(spy.active_section(), Some("projects"));
    assert_eq!(active_hrefs(&handles), vec!["#projects"]);
}

#[test]
fn last_intersecting_entry_in_batch_wins() {
    let handles = links();
    let mut spy = ScrollSpy::new(sections(), handles.clone());
    spy.on_intersections(&[
        VisibilityChange::entered("home".to_owned()),
        VisibilityChange::entered("contact".to_owned()),
        VisibilityChange::left("about".to_owned()),
    ]);
    assert_eq!(spy.active_section(), Some("contact"));
    assert_eq!(active_hrefs(&handles), vec!["#contact"]);
}

#[test]
fn at_most_one_link_active_after_any_sequence() {
    let handles = links();
    let mut spy = ScrollSpy::new(sections(), handles.clone());
    let order = ["home", "projects", "about", "about", "contact", "home"];
    for id in order {
        spy.on_intersections(&[
            VisibilityChange::entered(id.to_owned()),
            VisibilityChange::left("home".to_owned()),
        ]);
        assert!(active_hrefs(&handles).len() <= 1);
    }
    assert_eq!(active_hrefs(&handles), vec!["#home"]);
}

#[test]
fn untracked_section_is_ignored() {
    let handles = links();
    let mut spy = ScrollSpy::new(sections(), handles.clone());
    spy.on_intersections(&[VisibilityChange::entered("about".to_owned())]);
    spy.on_intersections(&[VisibilityChange::entered("footer".to_owned())]);
    assert_eq!(spy.active_section(), Some("about"));
    assert_eq!(active_hrefs(&handles), vec!["#about"]);
}

#[test]
fn links_without_matching_href_stay_inactive() {
    let mut handles = links();
    handles.push(FakeLink::new("/resume.pdf"));
    handles.push(FakeLink { href: None, active: std::rc::Rc::default() });
    let mut spy = ScrollSpy::new(sections(), handles.clone());
    spy.activate("home");
    assert_eq!(active_hrefs(&handles), vec!["#home"]);
    assert!(!handles[5].is_active());
}
