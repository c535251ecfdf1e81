use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::ConfigError;

/// Contract for configuration that is stored in a YAML file.
pub trait Persistable<T: Serialize + DeserializeOwned + Default + Send + Sync> {
    /// Returns the default file path.
    fn default_path() -> PathBuf;

    /// Loads configuration from the file.
    fn load(path: &Path) -> impl Future<Output = Result<T, ConfigError>> + Send {
        async move {
            let mut file = File::open(path).await?;

            let mut content = String::new();
            file.read_to_string(&mut content).await?;

            Ok(serde_yaml::from_str::<T>(&content)?)
        }
    }

    /// Saves configuration to the file.\
    /// **Note** that missing parent directories are created.
    fn save(&self, path: &Path) -> impl Future<Output = Result<(), ConfigError>> + Send
    where
        Self: Serialize + Sync,
    {
        async move {
            let content = serde_yaml::to_string(self)?;

            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let mut file = File::create(path).await?;
            file.write_all(content.as_bytes()).await?;
            file.flush().await?;

            Ok(())
        }
    }
}

/// Loads configuration from the `path` or creates a default one if the file cannot be read.\
/// **Note** that a file that cannot be deserialized is left untouched and defaults are used instead.
pub async fn load_or_create_default<T>(path: &Path) -> Result<T, ConfigError>
where
    T: Persistable<T> + Serialize + DeserializeOwned + Default + Send + Sync,
{
    match T::load(path).await {
        Ok(configuration) => Ok(configuration),
        Err(ConfigError::SerializationError(error)) => {
            tracing::error!("Cannot deserialize config: {}", error);
            Ok(T::default())
        },
        Err(error) => {
            tracing::warn!("Cannot load config, creating default one: {}", error);
            let configuration = T::default();
            configuration.save(path).await?;
            Ok(configuration)
        },
    }
}
