//! View-state machine of the admin modal.
//!
//! The modal is either hidden or showing one of two screens. Transitions are
//! explicit calls; what is visible on screen is derived from the state by
//! [`ModalState::layout`] and never stored separately.

mod works;

pub use works::ModalWorks;

pub const GALLERY_TITLE: &str = "Galerie photo";
pub const FORM_TITLE: &str = "Ajout photo";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalView {
    #[default]
    Gallery,
    Form,
}

/// Navigation requests resolved from a click inside the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Close,
    ShowForm,
    ShowGallery,
}

/// Effect of a transition that the caller has to carry out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing to do besides re-rendering.
    None,
    /// The modal became hidden: release the scroll lock, notify the owner.
    Closed,
    /// The form screen was entered: build a fresh form.
    FormEntered,
}

/// Which parts of the modal are visible for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalLayout {
    pub visible: bool,
    pub gallery_visible: bool,
    pub form_visible: bool,
    pub back_visible: bool,
    pub add_visible: bool,
    pub submit_visible: bool,
    pub title: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    visible: bool,
    view: ModalView,
}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn view(&self) -> ModalView {
        self.view
    }

    /// Shows the modal on the gallery screen, whatever was shown last.
    pub fn open(&mut self) {
        self.view = ModalView::Gallery;
        self.visible = true;
    }

    /// Hides the modal and rewinds it to the gallery screen.
    pub fn close(&mut self) -> Transition {
        let was_visible = self.visible;
        self.visible = false;
        self.view = ModalView::Gallery;
        if was_visible {
            Transition::Closed
        } else {
            Transition::None
        }
    }

    pub fn set_view(&mut self, view: ModalView) -> Transition {
        self.view = view;
        match view {
            ModalView::Form => Transition::FormEntered,
            ModalView::Gallery => Transition::None,
        }
    }

    /// A project was added: show the updated list again. Visibility is left
    /// alone, the upload may finish after the modal was closed.
    pub fn project_created(&mut self) -> Transition {
        self.set_view(ModalView::Gallery)
    }

    pub fn apply(&mut self, action: NavAction) -> Transition {
        match action {
            NavAction::Close => self.close(),
            NavAction::ShowForm => self.set_view(ModalView::Form),
            NavAction::ShowGallery => self.set_view(ModalView::Gallery),
        }
    }

    pub fn layout(&self) -> ModalLayout {
        let gallery = self.view == ModalView::Gallery;
        ModalLayout {
            visible: self.visible,
            gallery_visible: gallery,
            form_visible: !gallery,
            back_visible: !gallery,
            add_visible: gallery,
            submit_visible: !gallery,
            title: if gallery { GALLERY_TITLE } else { FORM_TITLE },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_on_the_gallery_screen() {
        let state = ModalState::default();

        assert!(!state.is_visible());
        assert_eq!(state.view(), ModalView::Gallery);
        assert!(!state.layout().visible);
    }

    #[test]
    fn open_always_lands_on_the_gallery() {
        let mut state = ModalState::default();
        state.open();
        state.apply(NavAction::ShowForm);

        state.open();

        assert!(state.is_visible());
        assert_eq!(state.view(), ModalView::Gallery);
    }

    #[test]
    fn close_resets_to_gallery_for_next_open() {
        let mut state = ModalState::default();
        state.open();
        state.apply(NavAction::ShowForm);

        assert_eq!(state.apply(NavAction::Close), Transition::Closed);
        assert!(!state.is_visible());
        assert_eq!(state.view(), ModalView::Gallery);
    }

    #[test]
    fn closing_a_hidden_modal_has_no_effect() {
        let mut state = ModalState::default();

        assert_eq!(state.close(), Transition::None);
    }

    #[test]
    fn entering_the_form_asks_for_a_rebuild_every_time() {
        let mut state = ModalState::default();
        state.open();

        assert_eq!(state.apply(NavAction::ShowForm), Transition::FormEntered);
        assert_eq!(state.apply(NavAction::ShowGallery), Transition::None);
        assert_eq!(state.apply(NavAction::ShowForm), Transition::FormEntered);
    }

    #[test]
    fn adding_a_project_returns_to_the_gallery() {
        let mut state = ModalState::default();
        state.open();
        state.apply(NavAction::ShowForm);

        assert_eq!(state.project_created(), Transition::None);
        assert!(state.is_visible());
        assert_eq!(state.view(), ModalView::Gallery);
        let layout = state.layout();
        assert!(!layout.form_visible);
        assert!(layout.gallery_visible);
        assert_eq!(layout.title, GALLERY_TITLE);
    }

    #[test]
    fn project_added_after_close_keeps_the_modal_hidden() {
        let mut state = ModalState::default();
        state.open();
        state.apply(NavAction::ShowForm);
        state.apply(NavAction::Close);

        assert_eq!(state.project_created(), Transition::None);
        assert!(!state.is_visible());
        assert_eq!(state.view(), ModalView::Gallery);
    }

    #[test]
    fn gallery_layout() {
        let mut state = ModalState::default();
        state.open();

        assert_eq!(
            state.layout(),
            ModalLayout {
                visible: true,
                gallery_visible: true,
                form_visible: false,
                back_visible: false,
                add_visible: true,
                submit_visible: false,
                title: GALLERY_TITLE,
            }
        );
    }

    #[test]
    fn form_layout_is_the_mirror_of_gallery_layout() {
        let mut state = ModalState::default();
        state.open();
        state.set_view(ModalView::Form);

        let layout = state.layout();

        assert!(layout.form_visible && layout.back_visible && layout.submit_visible);
        assert!(!layout.gallery_visible && !layout.add_visible);
        assert_eq!(layout.title, FORM_TITLE);
    }

    #[test]
    fn exactly_one_screen_is_shown() {
        for view in [ModalView::Gallery, ModalView::Form] {
            let mut state = ModalState::default();
            state.open();
            state.set_view(view);
            let layout = state.layout();
            assert_ne!(layout.gallery_visible, layout.form_visible);
        }
    }
}
