pub mod demo_data;
pub mod settings;

pub use settings::AppConfig;
