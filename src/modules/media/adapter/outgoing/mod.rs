pub mod storage_http;

pub use storage_http::HttpObjectStorage;
