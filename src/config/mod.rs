//! Configuration module

mod site;

pub use site::FooterConfig;
pub use site::HomeConfig;
pub use site::SiteConfig;
