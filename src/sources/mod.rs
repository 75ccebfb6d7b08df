pub mod file;
pub mod http;
pub mod traits;
pub mod types;

pub use file::JsonFileSource;
pub use http::HttpSource;
pub use traits::CatalogSource;
pub use types::Catalog;
