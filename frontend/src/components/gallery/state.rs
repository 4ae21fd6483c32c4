use common::gallery::{Filter, WorkCache};
use common::model::category::Category;

pub const LOAD_ERROR: &str = "Impossible de charger les projets. Veuillez réessayer plus tard.";

pub struct GalleryComponent {
    /// Last successful `GET /works`, in server order.
    pub cache: WorkCache,

    /// Categories backing the filter bar; empty until loaded or on failure.
    pub categories: Vec<Category>,

    /// Filter button currently marked active.
    pub active: Filter,

    /// Message shown in place of the tiles when the latest fetch failed.
    pub load_error: Option<&'static str>,
}

impl GalleryComponent {
    pub fn new() -> Self {
        Self {
            cache: WorkCache::default(),
            categories: Vec::new(),
            active: Filter::All,
            load_error: None,
        }
    }

    /// Filter actually applied to the tiles: with the bar hidden there is no
    /// way to change it, so everything is shown.
    pub fn effective_filter(&self, show_filters: bool) -> Filter {
        if show_filters {
            self.active
        } else {
            Filter::All
        }
    }
}
