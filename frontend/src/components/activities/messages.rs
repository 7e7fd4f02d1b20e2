use common::model::roster::Roster;
use web_sys::HtmlButtonElement;

use super::api::ApiError;

pub enum Msg {
    LoadActivities,
    ActivitiesLoaded(Roster),
    ActivitiesFailed(ApiError),
    UpdateEmail(String),
    SelectActivity(String),
    Submit,
    SignupFinished(Result<String, ApiError>),
    /// Sent by the delegated click handler after the control was marked busy.
    Unregister {
        activity: String,
        email: String,
        control: HtmlButtonElement,
    },
    UnregisterFinished {
        result: Result<String, ApiError>,
        control: HtmlButtonElement,
    },
    HideStatus(u32),
}
