//! DOM access for the delegated remove-control clicks.
//!
//! Cards are mounted from raw markup, so the remove buttons have no Yew
//! callbacks of their own. A single click listener on the list container
//! resolves which participant and which activity a click belongs to from the
//! `data-*` attributes written by `helpers::render_roster_markup`. Ancestors are
//! found with `closest()` and the values read with `get_attribute`, so no
//! selector is ever built from an activity name.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, MouseEvent};

use super::helpers::{BUSY_LABEL, REMOVE_LABEL};

pub struct RemoveTarget {
    pub activity: String,
    pub email: String,
    pub control: HtmlButtonElement,
}

/// Resolves a click inside the list to a remove request.
///
/// Returns `None` (a silent no-op) when the click was not on an idle remove
/// control, or when the participant item, the card, or either attribute is
/// missing or empty.
pub fn resolve_remove_target(event: &MouseEvent) -> Option<RemoveTarget> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let control: HtmlButtonElement = target.closest(".remove-btn").ok()??.dyn_into().ok()?;
    if control.disabled() {
        return None;
    }

    let item = control.closest(".participant-item").ok()??;
    let card = item.closest(".activity-card").ok()??;

    let email = control
        .get_attribute("data-email")
        .filter(|email| !email.is_empty())?;
    let activity = card
        .get_attribute("data-activity-name")
        .filter(|activity| !activity.is_empty())?;

    Some(RemoveTarget {
        activity,
        email,
        control,
    })
}

/// `idle -> busy`: disable the control before its request is issued.
pub fn mark_busy(control: &HtmlButtonElement) {
    control.set_disabled(true);
    control.set_text_content(Some(BUSY_LABEL));
}

/// `busy -> idle` after a failed request.
pub fn mark_idle(control: &HtmlButtonElement) {
    control.set_disabled(false);
    control.set_text_content(Some(REMOVE_LABEL));
}
