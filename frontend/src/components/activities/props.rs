//! Defines the properties for the `ActivitiesComponent`.

use yew::prelude::*;

/// Properties for the `ActivitiesComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ActivitiesProps {
    /// Prefix prepended to every API path. Empty (the default) means the API is
    /// served from the same origin as the page, as the bundled server does.
    #[prop_or_default]
    pub api_base: AttrValue,

    /// How long success and error messages stay visible, in milliseconds.
    /// Info messages stay until replaced.
    #[prop_or(4000)]
    pub status_timeout_ms: u32,
}
