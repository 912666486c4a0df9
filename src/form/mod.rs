pub mod controller;
pub mod registry;

pub use controller::{
    FormSnapshot, Notice, NoticeVariant, Status, SubmissionController,
    SubmitOutcome,
};
pub use registry::{visitor_from_cookie_header, FormRegistry, VISITOR_COOKIE};
