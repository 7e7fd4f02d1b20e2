//! View rendering for the activities component.
//!
//! Two panes: the activity cards and the signup form with its status area.
//! Cards come from `helpers::render_roster_markup` and are mounted raw; clicks
//! on their remove controls are handled by one delegated listener on the list.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::dom::{mark_busy, resolve_remove_target};
use super::helpers::{option_label, render_roster_markup};
use super::messages::Msg;
use super::state::ActivitiesComponent;

/// Main view function. Renders the activity list and the signup pane.
pub fn view(component: &ActivitiesComponent, ctx: &Context<ActivitiesComponent>) -> Html {
    let link = ctx.link();

    html! {
        <main class="activities-root">
            { build_activity_list(component, link) }
            { build_signup_pane(component, link) }
        </main>
    }
}

fn build_activity_list(component: &ActivitiesComponent, link: &Scope<ActivitiesComponent>) -> Html {
    let on_click = link.batch_callback(|e: MouseEvent| match resolve_remove_target(&e) {
        Some(target) => {
            mark_busy(&target.control);
            vec![Msg::Unregister {
                activity: target.activity,
                email: target.email,
                control: target.control,
            }]
        }
        None => vec![],
    });

    let content = if component.load_failed {
        html! { <p class="error">{"Unable to load activities."}</p> }
    } else {
        match &component.roster {
            Some(roster) => {
                Html::from_html_unchecked(AttrValue::from(render_roster_markup(roster)))
            }
            None => html! { <p>{"Loading activities..."}</p> },
        }
    };

    html! {
        <section id="activities-container" class="card">
            <h3>{"Available Activities"}</h3>
            <div id="activities-list" onclick={on_click}>
                { content }
            </div>
        </section>
    }
}

fn build_signup_pane(component: &ActivitiesComponent, link: &Scope<ActivitiesComponent>) -> Html {
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_email = link.callback(|e: InputEvent| {
        Msg::UpdateEmail(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_activity = link.callback(|e: Event| {
        Msg::SelectActivity(e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <section id="signup-container" class="card">
            <h3>{"Sign Up for an Activity"}</h3>
            <form id="signup-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="email">{"Student Email:"}</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="your-email@mergington.edu"
                        value={component.email.clone()}
                        oninput={on_email}
                    />
                </div>
                <div class="form-group">
                    <label for="activity">{"Select Activity:"}</label>
                    <select id="activity" ref={component.select_ref.clone()} onchange={on_activity}>
                        <option value="">{"-- Select an activity --"}</option>
                        { build_activity_options(component) }
                    </select>
                </div>
                <button type="submit" disabled={component.submitting}>{"Sign Up"}</button>
            </form>
            { build_status(component) }
        </section>
    }
}

/// One option per activity of the last loaded roster, labelled `name (n/max)`.
fn build_activity_options(component: &ActivitiesComponent) -> Html {
    let Some(roster) = &component.roster else {
        return html! {};
    };
    roster
        .iter()
        .map(|(name, activity)| {
            html! {
                <option
                    key={name.to_string()}
                    value={name.to_string()}
                    selected={component.selected_activity == name}
                >
                    { option_label(name, activity) }
                </option>
            }
        })
        .collect::<Html>()
}

fn build_status(component: &ActivitiesComponent) -> Html {
    let text = component
        .status
        .as_ref()
        .map(|status| status.text.clone())
        .unwrap_or_default();

    html! {
        <div id="message" class={component.status_class()}>{ text }</div>
    }
}
