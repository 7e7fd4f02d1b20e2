//! Update function for the activities component.
//!
//! Elm-style: receives the state, the `Context`, and a `Msg`, mutates the
//! state, and returns whether the view should re-render. Network calls are
//! spawned and report back with a follow-up message.
//!
//! Key behaviors
//! - Loading the roster (`LoadActivities`), on first render and after every
//!   successful mutation. The UI is always reconciled by this full reload.
//! - Signup: validate, show "Signing up...", POST, then reload and reset the form.
//! - Unregister: the control is already busy when the message arrives; DELETE,
//!   then reload, or restore the control on failure.
//! - Transient status messages with a per-generation hide timer.

use yew::platform::spawn_local;
use yew::prelude::*;

use super::api;
use super::dom::mark_idle;
use super::messages::Msg;
use super::state::{ActivitiesComponent, SignupStep};

/// Central update function for the component.
pub fn update(
    component: &mut ActivitiesComponent,
    ctx: &Context<ActivitiesComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::LoadActivities => {
            let link = ctx.link().clone();
            let api_base = ctx.props().api_base.to_string();
            spawn_local(async move {
                match api::fetch_roster(&api_base).await {
                    Ok(roster) => link.send_message(Msg::ActivitiesLoaded(roster)),
                    Err(err) => link.send_message(Msg::ActivitiesFailed(err)),
                }
            });
            false
        }
        Msg::ActivitiesLoaded(roster) => {
            component.roster = Some(roster);
            component.load_failed = false;
            true
        }
        Msg::ActivitiesFailed(err) => {
            gloo_console::error!(format!("Failed to load activities: {}", err));
            component.load_failed = true;
            true
        }
        Msg::UpdateEmail(email) => {
            component.email = email;
            true
        }
        Msg::SelectActivity(activity) => {
            component.selected_activity = activity;
            false
        }
        Msg::Submit => match component.begin_signup() {
            SignupStep::Ignored => false,
            SignupStep::Invalid(generation) => {
                schedule_hide(ctx, generation);
                true
            }
            SignupStep::Started(request) => {
                let link = ctx.link().clone();
                let api_base = ctx.props().api_base.to_string();
                spawn_local(async move {
                    let result = api::sign_up(&api_base, &request.activity, &request.email).await;
                    link.send_message(Msg::SignupFinished(result));
                });
                true
            }
        },
        Msg::SignupFinished(result) => {
            let generation = component.finish_signup(&result);
            schedule_hide(ctx, generation);
            if result.is_ok() {
                ctx.link().send_message(Msg::LoadActivities);
            }
            true
        }
        Msg::Unregister {
            activity,
            email,
            control,
        } => {
            let link = ctx.link().clone();
            let api_base = ctx.props().api_base.to_string();
            spawn_local(async move {
                let result = api::unregister(&api_base, &activity, &email).await;
                link.send_message(Msg::UnregisterFinished { result, control });
            });
            false
        }
        Msg::UnregisterFinished { result, control } => {
            let generation = component.finish_unregister(&result);
            schedule_hide(ctx, generation);
            match result {
                // The reload re-renders the cards and discards the control.
                Ok(_) => ctx.link().send_message(Msg::LoadActivities),
                Err(_) => mark_idle(&control),
            }
            true
        }
        Msg::HideStatus(generation) => component.hide_status(generation),
    }
}

/// Hides the status message shown at `generation` after `status_timeout_ms`,
/// unless a newer message replaced it by then.
fn schedule_hide(ctx: &Context<ActivitiesComponent>, generation: u32) {
    let timeout_ms = ctx.props().status_timeout_ms;
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
        link.send_message(Msg::HideStatus(generation));
    });
}
