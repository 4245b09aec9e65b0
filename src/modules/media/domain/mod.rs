pub mod carousel;
pub mod storage_key;
pub mod upload_policy;
pub mod youtube;
