use common::modal::NavAction;
use common::model::work::Work;
use web_sys::FormData;

use crate::api::ApiError;

pub enum Msg {
    Open,
    Close,
    Navigate(NavAction),
    LoadWorks,
    WorksLoaded(Result<Vec<Work>, ApiError>),
    DeleteRequested(u32),
    DeleteFinished { id: u32, result: Result<(), ApiError> },
    SubmitReady(bool),
    /// The "Valider" button outside the form was pressed.
    TriggerSubmit,
    /// The form validated its fields and built the upload payload.
    CreateProject(FormData),
    CreateFinished(Result<Work, ApiError>),
}
