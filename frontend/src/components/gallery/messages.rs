use common::gallery::Filter;
use common::model::category::Category;
use common::model::work::Work;

use crate::api::ApiError;

pub enum Msg {
    Refresh,
    WorksLoaded {
        ticket: u64,
        result: Result<Vec<Work>, ApiError>,
    },
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
    SelectFilter(Filter),
}
