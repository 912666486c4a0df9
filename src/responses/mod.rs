pub mod errors;
pub mod html;
pub mod json;
pub mod static_files;

pub use errors::{json_error_response, ResultResp};

pub use html::html_response;
pub use json::json_response;
pub use static_files::static_file_response;
