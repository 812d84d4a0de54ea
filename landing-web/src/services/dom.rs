//! DOM-backed landing page
//!
//! Every lookup goes through the live document and may come back empty; an absent
//! element turns the operation into a no-op.

use lib_core::countdown::{
    CountdownDisplay, DisplaySlot, TimeUnit, EMPHASIS_TRANSFORM, EMPHASIS_TRANSITION,
    SETTLED_TRANSFORM,
};
use lib_core::effects::{ElementLookup, ElementRole, PageEffects, TOAST_FADE_IN, TOAST_FADE_OUT};
use lib_core::signup::{Acknowledgment, SignupView, Toast};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::utils::constants::{
    ERROR_VISIBLE_CLASS, INPUT_ERROR_CLASS, PRICING_CARD_SELECTOR, TIME_UNIT_SELECTOR,
    TOAST_HEADING_STYLE, TOAST_STYLE,
};

/// Set an inline style property, logging instead of failing.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::debug!("Failed to set style {}: {:?}", property, e);
    }
}

/// Add or remove a class, logging instead of failing.
pub fn set_class(element: &Element, class: &str, present: bool) {
    let class_list = element.class_list();
    let result = if present {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };
    if let Err(e) = result {
        log::debug!("Failed to update class {}: {:?}", class, e);
    }
}

#[derive(Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    /// The page of the current window, if there is one.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn find(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn nth_html(&self, selector: &str, index: usize) -> Option<HtmlElement> {
        let index = u32::try_from(index).ok()?;
        self.document
            .query_selector_all(selector)
            .ok()?
            .item(index)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn count(&self, selector: &str) -> usize {
        self.document
            .query_selector_all(selector)
            .map(|nodes| nodes.length() as usize)
            .unwrap_or(0)
    }

    fn email_input(&self) -> Option<HtmlInputElement> {
        self.find(ElementRole::EmailInput.selector())?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    fn build_toast(&self, acknowledgment: &Acknowledgment) -> Result<HtmlElement, JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let toast = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        toast.set_attribute("style", TOAST_STYLE)?;
        set_style(&toast, "animation", TOAST_FADE_IN);

        let heading = self.document.create_element("h3")?;
        heading.set_attribute("style", TOAST_HEADING_STYLE)?;
        heading.set_text_content(Some(Acknowledgment::HEADING));

        // Text nodes only: the address never goes through HTML parsing.
        let message = self.document.create_element("p")?;
        let address = self.document.create_element("strong")?;
        address.set_text_content(Some(acknowledgment.email.as_str()));
        message.append_with_str_1(Acknowledgment::LEAD)?;
        message.append_child(&address)?;
        message.append_with_str_1(Acknowledgment::TAIL)?;

        toast.append_child(&heading)?;
        toast.append_child(&message)?;
        body.append_child(&toast)?;
        Ok(toast)
    }
}

// region:    --- Countdown

pub struct DomSlot(HtmlElement);

impl DisplaySlot for DomSlot {
    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn emphasize(&self) {
        set_style(&self.0, "transform", EMPHASIS_TRANSFORM);
        set_style(&self.0, "transition", EMPHASIS_TRANSITION);
    }

    fn settle(&self) {
        set_style(&self.0, "transform", SETTLED_TRANSFORM);
    }
}

impl CountdownDisplay for DomPage {
    type Slot = DomSlot;

    fn time_slot(&self, unit: TimeUnit) -> Option<DomSlot> {
        self.document
            .get_element_by_id(unit.element_id())?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(DomSlot)
    }
}

// endregion: --- Countdown

// region:    --- Signup

pub struct DomToast(HtmlElement);

impl Toast for DomToast {
    fn fade_out(&self) {
        set_style(&self.0, "animation", TOAST_FADE_OUT);
    }

    fn remove(&self) {
        self.0.remove();
    }
}

impl SignupView for DomPage {
    type Toast = DomToast;

    fn email_value(&self) -> Option<String> {
        self.email_input().map(|input| input.value())
    }

    fn set_email_value(&self, value: &str) {
        if let Some(input) = self.email_input() {
            input.set_value(value);
        }
    }

    fn show_error(&self, message: &str) {
        if let Some(error) = self.find(ElementRole::ErrorMessage.selector()) {
            error.set_text_content(Some(message));
            set_class(&error, ERROR_VISIBLE_CLASS, true);
        }
        if let Some(input) = self.email_input() {
            set_class(&input, INPUT_ERROR_CLASS, true);
        }
    }

    fn hide_error(&self) {
        if let Some(error) = self.find(ElementRole::ErrorMessage.selector()) {
            set_class(&error, ERROR_VISIBLE_CLASS, false);
        }
        if let Some(input) = self.email_input() {
            set_class(&input, INPUT_ERROR_CLASS, false);
        }
    }

    fn show_acknowledgment(&self, acknowledgment: &Acknowledgment) -> Option<DomToast> {
        match self.build_toast(acknowledgment) {
            Ok(toast) => Some(DomToast(toast)),
            Err(e) => {
                log::warn!("Could not show signup confirmation: {:?}", e);
                None
            }
        }
    }
}

// endregion: --- Signup

// region:    --- Effects

impl PageEffects for DomPage {
    fn card_count(&self) -> usize {
        self.count(PRICING_CARD_SELECTOR)
    }

    fn set_card_style(&self, index: usize, property: &str, value: &str) {
        if let Some(card) = self.nth_html(PRICING_CARD_SELECTOR, index) {
            set_style(&card, property, value);
        }
    }

    fn time_unit_count(&self) -> usize {
        self.count(TIME_UNIT_SELECTOR)
    }

    fn set_time_unit_style(&self, index: usize, property: &str, value: &str) {
        if let Some(unit) = self.nth_html(TIME_UNIT_SELECTOR, index) {
            set_style(&unit, property, value);
        }
    }

    fn scroll_to_signup(&self) {
        if let Some(section) = self.find(ElementRole::SignupSection.selector()) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn focus_email(&self) {
        if let Some(input) = self.email_input() {
            if let Err(e) = input.focus() {
                log::debug!("Failed to focus email input: {:?}", e);
            }
        }
    }

    fn set_email_placeholder(&self, text: &str) {
        if let Some(input) = self.email_input() {
            input.set_placeholder(text);
        }
    }

    fn enable_smooth_scroll(&self) {
        if let Some(root) = self
            .document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            set_style(&root, "scroll-behavior", "smooth");
        }
    }

    fn inject_stylesheet(&self, css: &str) {
        let Some(head) = self.document.head() else {
            log::debug!("Document has no head, stylesheet not injected");
            return;
        };
        match self.document.create_element("style") {
            Ok(style) => {
                style.set_text_content(Some(css));
                if let Err(e) = head.append_child(&style) {
                    log::warn!("Failed to inject stylesheet: {:?}", e);
                }
            }
            Err(e) => log::warn!("Failed to create style element: {:?}", e),
        }
    }
}

impl ElementLookup for DomPage {
    fn is_present(&self, role: ElementRole) -> bool {
        self.find(role.selector()).is_some()
    }
}

// endregion: --- Effects
