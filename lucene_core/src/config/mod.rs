pub mod settings;

pub use settings::{AppConfig, CorsConfig, SearchConfig, ServerConfig};
