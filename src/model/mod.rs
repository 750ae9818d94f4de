pub mod leave_balance;
pub mod leave_request;
pub mod leave_type_rule;
pub mod role;

pub use leave_balance::LeaveBalance;
pub use leave_request::{LeaveDraft, LeaveRequest, LeaveStatus, LeaveType};
pub use leave_type_rule::{LeavePolicy, LeaveTypeRule};
pub use role::Role;
