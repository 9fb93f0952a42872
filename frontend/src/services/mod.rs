pub mod api;
pub mod date_utils;
pub mod logging;
pub mod router;
pub mod storage;
