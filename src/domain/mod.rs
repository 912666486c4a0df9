pub mod logic;
pub mod prediction;
pub mod property;

pub use logic::{format_confidence, format_price, is_complete, missing_fields};
pub use prediction::PredictionResult;
pub use property::{FieldName, PropertyFeatures};
