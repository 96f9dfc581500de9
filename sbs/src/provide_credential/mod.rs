mod config;
pub use config::ConfigCredentialProvider;

mod config_file;
pub use config_file::ConfigFileCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod r#static;
pub use r#static::StaticCredentialProvider;
