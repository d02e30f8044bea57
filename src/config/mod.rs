mod loader;
mod model;

#[cfg(test)]
pub(crate) mod mock_fs;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem, read_optional,
};
pub use model::{CONFIG_VERSION, ChecksConfig, Config, ReferencesConfig};
