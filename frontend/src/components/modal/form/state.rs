use common::model::category::Category;
use common::validation::ProjectDraft;
use gloo_file::ObjectUrl;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum CategoryOptions {
    Loading,
    Loaded(Vec<Category>),
    Failed,
}

/// An accepted image and its preview URL. Dropping it revokes the URL.
pub struct SelectedImage {
    pub file: web_sys::File,
    pub preview: ObjectUrl,
}

pub struct ProjectForm {
    pub categories: CategoryOptions,
    pub title: String,
    /// Value of the selected option, empty for the placeholder.
    pub category: String,
    pub image: Option<SelectedImage>,
    pub file_input_ref: NodeRef,
    /// Last readiness reported to the modal.
    announced: Option<bool>,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self {
            categories: CategoryOptions::Loading,
            title: String::new(),
            category: String::new(),
            image: None,
            file_input_ref: NodeRef::default(),
            announced: None,
        }
    }

    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            has_valid_image: self.image.is_some(),
        }
    }

    pub fn can_submit(&self, submitting: bool) -> bool {
        !submitting && self.draft().is_complete()
    }

    /// Drops the image and its preview and empties the file input so the
    /// same file can be picked again.
    pub fn clear_image(&mut self) {
        self.image = None;
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    /// Emits the submit readiness if it changed since the last report.
    pub fn announce_readiness(&mut self, submitting: bool, on_ready_change: &Callback<bool>) {
        let ready = self.can_submit(submitting);
        if self.announced != Some(ready) {
            self.announced = Some(ready);
            on_ready_change.emit(ready);
        }
    }
}
