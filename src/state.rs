use crate::calendar::date_key;
use crate::models::{Category, Store};
use crate::storage::Storage;
use crate::summary::{build_summary, DaySummary};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, error};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
    pub storage: Arc<dyn Storage>,
    pub today: watch::Receiver<NaiveDate>,
}

impl AppState {
    pub fn new(store: Store, storage: Arc<dyn Storage>, today: watch::Receiver<NaiveDate>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            storage,
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        *self.today.borrow()
    }

    pub async fn summary_for(&self, date: NaiveDate) -> DaySummary {
        let store = self.store.lock().await;
        build_summary(date, &store)
    }

    pub async fn today_summary(&self) -> DaySummary {
        self.summary_for(self.today()).await
    }

    // a failed write is logged, the in-memory change is kept
    pub async fn toggle_today(&self, category: Category, item_id: &str) -> DaySummary {
        let date = self.today();
        let key = date_key(date);
        let mut store = self.store.lock().await;
        let done = store.toggle(&key, category, item_id);
        debug!(date = %key, category = category.as_str(), item_id, done, "toggled item");

        if let Err(err) = self.storage.save(&store).await {
            error!("failed to persist data: {err}");
        }

        build_summary(date, &store)
    }
}
