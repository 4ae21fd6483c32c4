use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryProps {
    /// Filter buttons are hidden while an administrator is logged in.
    #[prop_or(true)]
    pub show_filters: bool,

    /// Bumped by the owner to request a refresh of the work list.
    #[prop_or_default]
    pub revision: u64,
}
