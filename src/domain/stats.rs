/// Dashboard headline counters.
///
/// `sales` and `earning` are computed from the order collection whenever a
/// `Stats` value is produced; only `page_views` and `comments` are stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub page_views: u64,
    pub sales: u64,
    pub comments: u64,
    pub earning: f64,
}

/// The counters the store keeps independently of orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub page_views: u64,
    pub comments: u64,
}

/// Partial update for [`Counters`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterPatch {
    pub page_views: Option<u64>,
    pub comments: Option<u64>,
}

impl Counters {
    pub fn apply(&mut self, patch: CounterPatch) {
        if let Some(page_views) = patch.page_views {
            self.page_views = page_views;
        }
        if let Some(comments) = patch.comments {
            self.comments = comments;
        }
    }
}
