use std::sync::Arc;

use tokio::sync::watch;

use super::data::StoreData;
use crate::error::ErrorKind;

type Projection<T> = Box<dyn Fn(&StoreData) -> Result<T, ErrorKind> + Send + Sync>;

/// Live view of one slice of the store.
///
/// The first call to [`next`](Self::next) yields the current value. Every
/// later call waits for the next committed change. The sequence ends only
/// when the store is dropped.
pub struct Subscription<T> {
    source: watch::Receiver<Arc<StoreData>>,
    project: Projection<T>,
    primed: bool,
}

impl<T> Subscription<T> {
    pub fn new<F>(source: watch::Receiver<Arc<StoreData>>, project: F) -> Self
    where
        F: Fn(&StoreData) -> Result<T, ErrorKind> + Send + Sync + 'static,
    {
        Self {
            source,
            project: Box::new(project),
            primed: false,
        }
    }

    pub async fn next(&mut self) -> Option<Result<T, ErrorKind>> {
        if self.primed && self.source.changed().await.is_err() {
            return None;
        }
        self.primed = true;
        let data = Arc::clone(&self.source.borrow_and_update());
        Some((self.project)(&data))
    }
}
