pub mod http_client;
pub mod urls;
mod core;
mod fetch_utils;

pub use self::core::*;
pub use http_client::*;
pub use urls::*;
