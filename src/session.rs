//! Client-side presence gate. A stored token means "signed in"; nothing about
//! the token is checked, it never expires, and no server ever sees it.

use crate::errors::AppError;
use crate::notify::{Notices, Notification};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::{fs, sync::Mutex};
use tracing::{error, info};

#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn read(&self) -> Option<String>;
    async fn write(&self, token: &str) -> Result<(), AppError>;
    async fn remove(&self) -> Result<(), AppError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Keeps the token in a small JSON file so it survives restarts.
pub struct FileTokenStore {
    path: PathBuf,
    io: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn read(&self) -> Option<String> {
        let _guard = self.io.lock().await;
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<StoredSession>(&bytes) {
                Ok(stored) => Some(stored.token),
                Err(err) => {
                    error!("failed to parse session file: {err}");
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read session file: {err}");
                None
            }
        }
    }

    async fn write(&self, token: &str) -> Result<(), AppError> {
        let _guard = self.io.lock().await;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec_pretty(&StoredSession {
            token: token.to_string(),
        })
        .map_err(AppError::internal)?;
        fs::write(&self.path, payload).await?;
        Ok(())
    }

    async fn remove(&self) -> Result<(), AppError> {
        let _guard = self.io.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn read(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    async fn write(&self, token: &str) -> Result<(), AppError> {
        *self.token.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn remove(&self) -> Result<(), AppError> {
        self.token.lock().await.take();
        Ok(())
    }
}

#[derive(Clone)]
pub struct SessionGate {
    store: Arc<dyn TokenStore>,
    notices: Notices,
}

impl SessionGate {
    pub fn new(store: Arc<dyn TokenStore>, notices: Notices) -> Self {
        Self { store, notices }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.store
            .read()
            .await
            .is_some_and(|token| !token.trim().is_empty())
    }

    pub async fn login(&self, token: &str) -> Result<(), AppError> {
        self.store.write(token).await?;
        info!("session opened");
        Ok(())
    }

    /// Drops the token and queues the sign-out confirmation. The caller is
    /// expected to send the user to the auth entry page next.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.store.remove().await?;
        self.notices.push(Notification::logged_out()).await;
        info!("session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_session_path() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("sales_dashboard_session_{}_{}", std::process::id(), nanos));
        path.push("session.json");
        path
    }

    #[tokio::test]
    async fn login_then_logout_with_memory_store() {
        let notices = Notices::new();
        let gate = SessionGate::new(Arc::new(MemoryTokenStore::default()), notices.clone());

        assert!(!gate.is_authenticated().await);

        gate.login("tok1").await.unwrap();
        assert!(gate.is_authenticated().await);
        assert!(notices.drain().await.is_empty());

        gate.logout().await.unwrap();
        assert!(!gate.is_authenticated().await);
        assert_eq!(notices.drain().await, vec![Notification::logged_out()]);
    }

    #[tokio::test]
    async fn file_store_survives_a_new_gate() {
        let path = unique_session_path();
        let gate = SessionGate::new(Arc::new(FileTokenStore::new(&path)), Notices::new());
        gate.login("tok1").await.unwrap();

        let reopened = SessionGate::new(Arc::new(FileTokenStore::new(&path)), Notices::new());
        assert!(reopened.is_authenticated().await);

        reopened.logout().await.unwrap();
        assert!(!gate.is_authenticated().await);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn logout_without_session_still_confirms_once() {
        let notices = Notices::new();
        let gate = SessionGate::new(Arc::new(FileTokenStore::new(unique_session_path())), notices.clone());

        gate.logout().await.unwrap();
        assert_eq!(notices.drain().await.len(), 1);
    }

    #[tokio::test]
    async fn blank_or_corrupt_tokens_are_not_sessions() {
        let path = unique_session_path();
        let store = FileTokenStore::new(&path);
        let gate = SessionGate::new(Arc::new(FileTokenStore::new(&path)), Notices::new());

        store.write("   ").await.unwrap();
        assert!(!gate.is_authenticated().await);

        tokio::fs::write(store.path(), b"not json").await.unwrap();
        assert!(!gate.is_authenticated().await);
    }
}
