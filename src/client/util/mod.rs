#[cfg(feature = "web")]
mod get_api_status;

#[cfg(feature = "web")]
pub use get_api_status::get_api_status;
