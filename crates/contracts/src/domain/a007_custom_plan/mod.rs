pub mod aggregate;

pub use aggregate::{CustomPlanDraft, CustomPlanRequest, CustomPlanResponse, MAX_LIMITATION_LEN};
