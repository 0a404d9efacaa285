mod check_api;
mod config_gen;

pub use check_api::check_api;
pub use config_gen::config_generate;
