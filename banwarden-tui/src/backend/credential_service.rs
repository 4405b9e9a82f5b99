//! 会话 token 存储
//!
//! 使用系统钥匙串保存后端签发的 JWT
//! 实现 banwarden-core 的 TokenStore trait

use std::sync::Mutex;

use async_trait::async_trait;
use banwarden_core::{CoreError, CoreResult, TokenStore};
use keyring::Entry;

const SERVICE_NAME: &str = "banwarden";
const TOKEN_KEY: &str = "access_token";

/// 基于系统钥匙串的 token 存储
///
/// 使用 keyring crate 将 token 存储到：
/// - Windows: Credential Manager
/// - macOS: Keychain
/// - Linux: Secret Service (GNOME Keyring / KWallet)
pub struct KeyringTokenStore {
    /// 内存缓存，避免每个请求都访问钥匙串
    cache: Mutex<Option<String>>,
}

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    fn entry() -> CoreResult<Entry> {
        Entry::new(SERVICE_NAME, TOKEN_KEY)
            .map_err(|e| CoreError::StorageError(format!("Failed to create entry: {e}")))
    }

    fn cached(&self) -> Option<String> {
        self.cache.lock().ok().and_then(|cache| cache.clone())
    }

    fn update_cache(&self, token: Option<String>) {
        if let Ok(mut cache) = self.cache.lock() {
            *cache = token;
        }
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for KeyringTokenStore {
    async fn get(&self) -> CoreResult<Option<String>> {
        if let Some(token) = self.cached() {
            return Ok(Some(token));
        }

        match Self::entry()?.get_password() {
            Ok(token) => {
                self.update_cache(Some(token.clone()));
                Ok(Some(token))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CoreError::StorageError(format!("Failed to load: {e}"))),
        }
    }

    async fn set(&self, token: &str) -> CoreResult<()> {
        Self::entry()?
            .set_password(token)
            .map_err(|e| CoreError::StorageError(format!("Failed to save: {e}")))?;

        self.update_cache(Some(token.to_string()));
        Ok(())
    }

    async fn remove(&self) -> CoreResult<()> {
        self.update_cache(None);

        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(CoreError::StorageError(format!("Failed to delete: {e}"))),
        }
    }
}
