//! Activities page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export `Msg`, `ActivitiesProps` and `ActivitiesComponent`.
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, load the roster from the server.

use yew::prelude::*;

mod api;
mod dom;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ActivitiesProps;
pub use state::ActivitiesComponent;

impl Component for ActivitiesComponent {
    type Message = Msg;
    type Properties = ActivitiesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ActivitiesComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::LoadActivities);
        }
    }
}
