pub mod api_utils;
pub mod concurrency;
pub mod error;
pub mod icons;
pub mod lifetime;
pub mod numeric;
pub mod url_utils;
