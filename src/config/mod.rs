mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{CONFIG_VERSION, ChartConfig, Config, DEFAULT_RADIUS, LayoutConfig};
pub use validation::{validate_config_semantics, validate_layout};
