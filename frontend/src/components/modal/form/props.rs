use web_sys::FormData;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectFormProps {
    /// Attached to the `<form>` element so a control outside of it can call
    /// `requestSubmit()`.
    pub form_ref: NodeRef,

    /// An upload started by this form is still running.
    #[prop_or_default]
    pub submitting: bool,

    /// Receives `true` when the form may be submitted, `false` otherwise.
    pub on_ready_change: Callback<bool>,

    /// Receives the validated multipart payload. The owner sends it, so the
    /// upload completes even if the form is gone by then.
    pub on_submit: Callback<FormData>,
}
