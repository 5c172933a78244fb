//! Browser bindings: finds the page's elements, wraps them in the host
//! capabilities, and routes DOM events into the controllers.
//!
//! ARCHITECTURE
//! ============
//! Each controller mounts independently. A controller whose elements are
//! missing is logged and skipped; the rest of the page keeps working. Event
//! closures are leaked; the page never unmounts.

mod elements;
mod observer;
mod query;
mod widgets;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, IntersectionObserver, Window};

use self::elements::{
    DomCard, DomChip, DomContactForm, DomNavLink, DomPreviewDialog, DomRevealTarget, DomTextSlot, DomThemeSurface,
    LocalStore, TextField, card_data,
};
use self::observer::IndexedObserver;
use self::query::{document, qs, qs_as, qs_in, qsa, window};
use self::widgets::{Modal, Toast};
use crate::config::SiteConfig;
use crate::contact::{ContactController, ContactSettings, SubmitOutcome};
use crate::error::HostError;
use crate::filter::FilterController;
use crate::footer::render_year;
use crate::host::VisibilityChange;
use crate::preview::{PreviewController, PreviewRequest};
use crate::reveal::{RevealController, RevealId};
use crate::scroll_spy::ScrollSpy;
use crate::theme::ThemeController;

const CONFIG_ELEMENT_ID: &str = "site-config";
const LIVE_LINK_EVENTS: [&str; 3] = ["input", "change", "keyup"];

type Shared<T> = Rc<RefCell<T>>;

thread_local! {
    static MOUNTED: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Every mounted controller. `None` means the page lacks that feature's markup.
pub struct Site {
    theme: Option<Shared<ThemeController<LocalStore, DomThemeSurface>>>,
    scroll_spy: Option<Shared<ScrollSpy<DomNavLink>>>,
    reveal: Option<Shared<RevealController<DomRevealTarget>>>,
    filter: Option<Shared<FilterController<DomChip, DomCard>>>,
    preview: Option<Shared<PreviewController<DomPreviewDialog>>>,
    contact: Option<Shared<ContactController<DomContactForm>>>,
    observers: Vec<IntersectionObserver>,
}

impl Site {
    /// Names of the controllers that found their markup.
    #[must_use]
    pub fn mounted(&self) -> Vec<&'static str> {
        [
            ("theme", self.theme.is_some()),
            ("scroll-spy", self.scroll_spy.is_some()),
            ("reveal", self.reveal.is_some()),
            ("filter", self.filter.is_some()),
            ("preview", self.preview.is_some()),
            ("contact", self.contact.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

/// Attach every controller to the current document.
///
/// # Errors
///
/// Fails only if there is no window or document. Missing feature markup
/// disables that controller and is logged.
pub fn mount() -> Result<Site, HostError> {
    let window = window()?;
    let document = document()?;
    let config = load_config(&document);
    let mut observers = Vec::new();

    let theme = enabled("theme", mount_theme(&window, &document, &config));
    let scroll_spy = enabled("scroll-spy", mount_scroll_spy(&document, &config)).map(|(spy, obs)| {
        observers.push(obs);
        spy
    });
    let reveal = enabled("reveal", mount_reveal(&document, &config)).map(|(reveal, obs)| {
        observers.push(obs);
        reveal
    });
    let filter = enabled("filter", mount_filter(&document));
    let preview = enabled("preview", mount_preview(&document));
    let contact = enabled("contact", mount_contact(&document, &config));
    enabled("footer", mount_footer(&document));

    Ok(Site { theme, scroll_spy, reveal, filter, preview, contact, observers })
}

/// Keep `site` alive for the rest of the page.
pub fn retain(site: Site) {
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(site));
}

fn enabled<T>(name: &str, result: Result<T, HostError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{name} disabled: {e}");
            None
        }
    }
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => {
            log::debug!("site config loaded from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(e) => {
            log::warn!("{e}; using defaults");
            SiteConfig::default()
        }
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), HostError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| HostError::Js("event listener"))?;
    closure.forget();
    Ok(())
}

fn html_element(element: Element, selector: &str) -> Result<HtmlElement, HostError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| HostError::WrongElementType { selector: selector.to_owned(), expected: "HTML element" })
}

// =============================================================
// Controllers
// =============================================================

fn mount_theme(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Shared<ThemeController<LocalStore, DomThemeSurface>>, HostError> {
    let toggle = qs(document, "#theme-toggle")?;
    let root = document
        .document_element()
        .ok_or_else(|| HostError::MissingElement("html".to_owned()))?;

    let storage = match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    };
    let prefers_dark = match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => query.matches(),
        Ok(None) | Err(_) => false,
    };

    let surface = DomThemeSurface { root, toggle: toggle.clone() };
    let controller = Rc::new(RefCell::new(ThemeController::initialize(
        LocalStore(storage),
        surface,
        config.theme_storage_key.clone(),
        prefers_dark,
    )));

    let handle = Rc::clone(&controller);
    listen(&toggle, "click", move |_| {
        handle.borrow_mut().toggle();
    })?;
    Ok(controller)
}

fn mount_scroll_spy(
    document: &Document,
    config: &SiteConfig,
) -> Result<(Shared<ScrollSpy<DomNavLink>>, IntersectionObserver), HostError> {
    let links = qsa(document, ".nav-link").into_iter().map(DomNavLink).collect();
    let spy = Rc::new(RefCell::new(ScrollSpy::new(config.sections.clone(), links)));

    let handle = Rc::clone(&spy);
    let observer = observer::create(&config.scroll_spy, move |batch, _| {
        let changes: Vec<VisibilityChange<String>> = observer::entries(&batch)
            .iter()
            .map(|entry| VisibilityChange { target: entry.target().id(), is_intersecting: entry.is_intersecting() })
            .collect();
        handle.borrow_mut().on_intersections(&changes);
    })?;

    for id in spy.borrow().sections() {
        if let Some(section) = document.get_element_by_id(id) {
            observer.observe(&section);
        } else {
            log::warn!("scroll-spy section #{id} not found");
        }
    }
    Ok((spy, observer))
}

fn mount_reveal(
    document: &Document,
    config: &SiteConfig,
) -> Result<(Shared<RevealController<DomRevealTarget>>, IntersectionObserver), HostError> {
    let elements = Rc::new(qsa(document, ".reveal"));
    let targets = elements.iter().cloned().map(DomRevealTarget).collect();
    let reveal = Rc::new(RefCell::new(RevealController::new(targets)));

    let handle = Rc::clone(&reveal);
    let tracked = Rc::clone(&elements);
    let observer = observer::create(&config.reveal, move |batch, live| {
        let mut bound = IndexedObserver { observer: live, elements: Rc::clone(&tracked) };
        let changes: Vec<VisibilityChange<RevealId>> = observer::entries(&batch)
            .iter()
            .filter_map(|entry| {
                bound
                    .id_of(&entry.target())
                    .map(|id| VisibilityChange { target: id, is_intersecting: entry.is_intersecting() })
            })
            .collect();
        handle.borrow_mut().on_intersections(&changes, &mut bound);
    })?;

    let mut bound = IndexedObserver { observer: observer.clone(), elements };
    reveal.borrow_mut().attach(&mut bound);
    Ok((reveal, observer))
}

fn mount_filter(document: &Document) -> Result<Shared<FilterController<DomChip, DomCard>>, HostError> {
    let chips = qsa(document, ".chip");
    let cards = qsa(document, ".project").into_iter().map(DomCard).collect();
    let controller = Rc::new(RefCell::new(FilterController::new(
        chips.iter().cloned().map(DomChip).collect(),
        cards,
    )));

    for (index, chip) in chips.iter().enumerate() {
        let handle = Rc::clone(&controller);
        listen(chip, "click", move |_| {
            let mut filter = handle.borrow_mut();
            if filter.select(index) {
                log::debug!("filter shows {} cards", filter.visible_cards().len());
            }
        })?;
    }
    Ok(controller)
}

fn mount_preview(document: &Document) -> Result<Shared<PreviewController<DomPreviewDialog>>, HostError> {
    let modal_el = qs(document, "#project-modal")?;
    let dialog = DomPreviewDialog {
        title: qs_in(&modal_el, "#modal-title")?,
        description: qs_in(&modal_el, "#modal-desc")?,
        demo: html_element(qs_in(&modal_el, "#modal-demo")?, "#modal-demo")?,
        code: html_element(qs_in(&modal_el, "#modal-code")?, "#modal-code")?,
        modal: Modal::new(&modal_el).map_err(|_| HostError::Js("bootstrap.Modal"))?,
    };
    let controller = Rc::new(RefCell::new(PreviewController::new(dialog)));

    for button in qsa(document, ".preview-btn") {
        let handle = Rc::clone(&controller);
        let trigger = button.clone();
        listen(&button, "click", move |_| {
            let Ok(Some(card)) = trigger.closest(".project") else {
                log::warn!("preview button is not inside a project card");
                return;
            };
            let request = PreviewRequest::from_card_data(|key| card_data(&card, key));
            handle.borrow_mut().open(&request);
        })?;
    }
    Ok(controller)
}

fn text_field(document: &Document, selector: &str) -> Result<TextField, HostError> {
    TextField::from_element(qs(document, selector)?)
        .ok_or_else(|| HostError::WrongElementType { selector: selector.to_owned(), expected: "text field" })
}

fn mount_contact(
    document: &Document,
    config: &SiteConfig,
) -> Result<Shared<ContactController<DomContactForm>>, HostError> {
    let form: HtmlFormElement = qs_as(document, "#contact-form", "form")?;
    let surface = DomContactForm {
        form: form.clone(),
        name: text_field(document, "#name")?,
        email: text_field(document, "#email")?,
        message: text_field(document, "#message")?,
        honeypot: text_field(document, "#website")?,
        status: qs(document, "#form-status")?,
        live_link: qs(document, "#live-mailto")?,
        toast: Toast::new(&qs(document, "#toast")?).map_err(|_| HostError::Js("bootstrap.Toast"))?,
    };
    let watched: Vec<Element> =
        [&surface.name, &surface.email, &surface.message].iter().map(|f| f.element().clone()).collect();

    let controller = Rc::new(RefCell::new(ContactController::new(surface, ContactSettings::from(config))));

    for field in &watched {
        for event in LIVE_LINK_EVENTS {
            let handle = Rc::clone(&controller);
            listen(field, event, move |_| {
                handle.borrow_mut().refresh_live_link();
            })?;
        }
    }

    let handle = Rc::clone(&controller);
    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let outcome = handle.borrow_mut().submit();
        if let SubmitOutcome::Accepted { reset, .. } = outcome {
            let pending = Rc::downgrade(&handle);
            Timeout::new(reset.delay_ms, move || {
                if let Some(controller) = pending.upgrade() {
                    controller.borrow_mut().complete_reset(reset);
                }
            })
            .forget();
        }
    })?;
    Ok(controller)
}

fn mount_footer(document: &Document) -> Result<(), HostError> {
    let mut slot = DomTextSlot(qs(document, "#year")?);
    render_year(&mut slot, js_sys::Date::new_0().get_full_year());
    Ok(())
}
