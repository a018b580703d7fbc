use crate::errors::StorageError;
use crate::models::Store;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::error;

// load never fails, anything unreadable degrades to an empty store
#[async_trait]
pub trait Storage: Send + Sync {
    async fn load(&self) -> Store;
    async fn save(&self, store: &Store) -> Result<(), StorageError>;
}

#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn load(&self) -> Store {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(store) => store,
                Err(err) => {
                    error!("failed to parse data file: {err}");
                    Store::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Store::default(),
            Err(err) => {
                error!("failed to read data file: {err}");
                Store::default()
            }
        }
    }

    async fn save(&self, store: &Store) -> Result<(), StorageError> {
        let payload = serde_json::to_vec_pretty(store)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let temp = self.temp_path();
        fs::write(&temp, payload).await?;
        if let Err(err) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Debug, Default)]
    pub(crate) struct MemoryStorage {
        inner: Mutex<MemorySlot>,
    }

    #[derive(Debug, Default)]
    struct MemorySlot {
        payload: Option<String>,
        writes: usize,
    }

    impl MemoryStorage {
        pub(crate) fn with_payload(payload: impl Into<String>) -> Self {
            Self {
                inner: Mutex::new(MemorySlot {
                    payload: Some(payload.into()),
                    writes: 0,
                }),
            }
        }

        pub(crate) fn writes(&self) -> usize {
            self.slot().writes
        }

        fn slot(&self) -> MutexGuard<'_, MemorySlot> {
            self.inner.lock().unwrap()
        }
    }

    #[async_trait]
    impl Storage for MemoryStorage {
        async fn load(&self) -> Store {
            let payload = self.slot().payload.clone();
            payload
                .and_then(|payload| serde_json::from_str(&payload).ok())
                .unwrap_or_default()
        }

        async fn save(&self, store: &Store) -> Result<(), StorageError> {
            let payload = serde_json::to_string(store)?;
            let mut slot = self.slot();
            slot.payload = Some(payload);
            slot.writes += 1;
            Ok(())
        }
    }
}
