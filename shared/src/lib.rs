pub mod protocol;
pub mod status;

pub use protocol::*;
pub use status::*;

/// Backend address used when `API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Version reported by the development backend
pub const API_VERSION: &str = "1.0.0";
