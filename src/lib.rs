//! Leave accounting for the HRM front end.
//!
//! Working-day counting, date-range and balance validation, per-type policy
//! checks and the advisory request lifecycle, plus payload preparation for the
//! remote Leave Service. All engine functions are pure and synchronous.

pub mod api;
pub mod auth;
pub mod config;
pub mod docs;
pub mod engine;
pub mod error;
pub mod model;
pub mod telemetry;
pub mod utils;

pub use api::leave_request::{LeaveActions, LeaveService, RejectLeave, SubmitLeave};
pub use auth::session::SessionContext;
pub use config::Config;
pub use engine::{LeaveAccountingEngine, LeaveAssessment, Violation};
pub use error::{ActionError, EngineError};
pub use model::{
    LeaveBalance, LeaveDraft, LeavePolicy, LeaveRequest, LeaveStatus, LeaveType, LeaveTypeRule,
    Role,
};
