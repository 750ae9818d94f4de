use utoipa::OpenApi;

use crate::api::leave_request::{RejectLeave, SubmitLeave};
use crate::engine::{
    Eligibility, EligibilityViolation, LeaveAction, LeaveDuration, RangeCheck, RangeViolation,
    Urgency, UrgencyTag,
};
use crate::model::{
    LeaveBalance, LeaveDraft, LeaveRequest, LeaveStatus, LeaveType, LeaveTypeRule,
};
use crate::utils::listing::{LeaveFilter, LeavePage};

/// Schemas of the data exchanged between the host application and the engine.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Leave Engine",
        version = "0.1.0",
        description = r#"
## Leave accounting

Types consumed and produced by the leave engine:

- **Inputs**: leave request and balance snapshots read from the Leave Service
- **Outputs**: range checks, eligibility, durations and urgency tags
- **Actions**: payloads prepared for create and reject calls

Business outcomes carry stable tags (`START_IN_PAST`, `INSUFFICIENT_BALANCE`, ...)
and structured data only; wording belongs to the UI.
"#,
    ),
    components(
        schemas(
            LeaveRequest,
            LeaveDraft,
            LeaveBalance,
            LeaveTypeRule,
            LeaveType,
            LeaveStatus,
            LeaveAction,
            RangeCheck,
            RangeViolation,
            Eligibility,
            EligibilityViolation,
            LeaveDuration,
            Urgency,
            UrgencyTag,
            LeaveFilter,
            LeavePage,
            SubmitLeave,
            RejectLeave
        )
    ),
    tags(
        (name = "Leave", description = "Leave accounting types"),
    )
)]
pub struct LeaveSchemas;
