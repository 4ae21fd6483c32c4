use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ModalProps {
    /// Raising this flag opens the modal on its gallery screen.
    #[prop_or_default]
    pub open: bool,

    /// Called whenever the modal closes itself (close button, overlay click,
    /// Escape) so the owner can lower `open`.
    pub on_close: Callback<()>,

    /// Called after a project was added or deleted.
    pub on_projects_changed: Callback<()>,
}
