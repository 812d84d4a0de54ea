//! Browser hooks that feed the controller: the countdown tick loop, the reveal
//! observer, the page-load listener and the inline configuration block.

use gloo_timers::future::TimeoutFuture;
use js_sys::Array;
use lib_core::{LandingConfig, LandingError, Result, UiEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::services::dom::DomPage;
use crate::state::landing::LandingContext;
use crate::utils::constants::{CARD_INDEX_ATTR, CONFIG_SCRIPT_ID, PRICING_CARD_SELECTOR};

pub fn dom_error(err: JsValue) -> LandingError {
    LandingError::Dom(format!("{:?}", err))
}

/// Read overrides from `<script id="landing-config" type="application/json">`.
///
/// A missing block means defaults; an invalid one is logged and ignored.
pub fn load_config(page: &DomPage) -> LandingConfig {
    let Some(json) = page
        .document()
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
    else {
        return LandingConfig::default();
    };

    LandingConfig::from_json(&json).unwrap_or_else(|e| {
        log::warn!("Ignoring landing configuration: {}", e);
        LandingConfig::default()
    })
}

/// Tick every `interval_ms` until the countdown reports it has finished.
///
/// The first render happens in `start`, so the loop waits before its first tick.
pub fn spawn_tick_loop(landing: LandingContext, interval_ms: u32) {
    leptos::task::spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if !landing.tick().keeps_running() {
                log::debug!("Countdown tick loop stopped");
                break;
            }
        }
    });
}

/// Parse the position stored on a pricing card.
pub fn card_index(attr: Option<&str>) -> Option<usize> {
    attr?.trim().parse().ok()
}

/// Hide-until-visible for pricing cards.
pub fn observe_pricing_cards(landing: LandingContext, page: &DomPage, config: &LandingConfig) -> Result<()> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                match card_index(entry.target().get_attribute(CARD_INDEX_ATTR).as_deref()) {
                    Some(index) => landing.dispatch(UiEvent::CardRevealed(index)),
                    None => log::debug!("Observed card without {}", CARD_INDEX_ATTR),
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(dom_error)?;
    // The observer lives as long as the page.
    callback.forget();

    let cards = page
        .document()
        .query_selector_all(PRICING_CARD_SELECTOR)
        .map_err(dom_error)?;
    for i in 0..cards.length() {
        if let Some(card) = cards.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&card);
        }
    }
    Ok(())
}

/// Fire `PageLoaded` once the document has fully loaded, or right away if it already has.
pub fn on_page_loaded(landing: LandingContext, page: &DomPage) -> Result<()> {
    if page.document().ready_state() == "complete" {
        landing.dispatch(UiEvent::PageLoaded);
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| LandingError::Dom("no window available".to_string()))?;
    let callback = Closure::once_into_js(move || landing.dispatch(UiEvent::PageLoaded));
    window
        .add_event_listener_with_callback("load", callback.unchecked_ref())
        .map_err(dom_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_index() {
        assert_eq!(card_index(Some("0")), Some(0));
        assert_eq!(card_index(Some(" 2 ")), Some(2));
        assert_eq!(card_index(Some("x")), None);
        assert_eq!(card_index(Some("-1")), None);
        assert_eq!(card_index(None), None);
    }
}
