use crate::components::activities::ActivitiesComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <header>
                    <h1>{"Mergington High School"}</h1>
                    <h2>{"Extracurricular Activities"}</h2>
                </header>
                <ActivitiesComponent />
            </div>
        }
    }
}
