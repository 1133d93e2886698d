//! Configuration module

mod site;

pub use site::BackendConfig;
pub use site::BlogConfig;
pub use site::ServerConfig;
pub use site::SiteConfig;
