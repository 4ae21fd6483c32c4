use common::model::category::Category;

use crate::api::ApiError;

pub enum Msg {
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
    TitleChanged(String),
    CategoryChanged(String),
    /// The file input changed; `None` when the selection was cleared.
    ImageSelected(Option<web_sys::File>),
    Submit,
}
