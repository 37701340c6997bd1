pub mod api;
pub mod context;
pub mod jwt;
pub mod storage;
