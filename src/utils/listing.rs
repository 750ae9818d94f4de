use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::engine::{Urgency, classify_urgency};
use crate::model::{LeaveRequest, LeaveStatus, LeaveType};

const DEFAULT_PER_PAGE: u64 = 10;
const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveFilter {
    #[schema(example = 123)]
    /// Filter by employee ID
    pub employee_id: Option<u64>,
    #[schema(example = "pending")]
    /// Filter by leave status
    pub status: Option<LeaveStatus>,
    #[schema(example = "paid")]
    /// Filter by leave type
    pub leave_type: Option<LeaveType>,
    #[schema(example = 1)]
    /// Pagination page number (start with 1)
    pub page: Option<u64>, // 1-based
    #[schema(example = 10)]
    /// Pagination per page number
    pub per_page: Option<u64>,
}

impl LeaveFilter {
    pub fn matches(&self, request: &LeaveRequest) -> bool {
        self.employee_id.is_none_or(|id| request.employee_id == id)
            && self.status.is_none_or(|status| request.status == status)
            && self.leave_type.is_none_or(|t| request.leave_type == t)
    }

    /// `(page, per_page)` after defaults and clamping.
    pub fn pagination(&self) -> (u64, u64) {
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
        let page = self.page.unwrap_or(1).max(1);
        (page, per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeavePage {
    pub data: Vec<LeaveRequest>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 10)]
    pub per_page: u32,
    #[schema(example = 1)]
    pub total: u64,
}

/// Filters, orders newest first and slices one page out of `requests`.
pub fn list_leaves(requests: &[LeaveRequest], filter: &LeaveFilter) -> LeavePage {
    let (page, per_page) = filter.pagination();

    let mut matching: Vec<&LeaveRequest> =
        requests.iter().filter(|r| filter.matches(r)).collect();
    // `None` sorts before `Some`, so reversing puts undated records last.
    matching.sort_by_key(|r| (Reverse(r.created_at), Reverse(r.id)));

    let total = matching.len() as u64;
    let offset = (page - 1).saturating_mul(per_page);
    let data = matching
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(per_page as usize)
        .cloned()
        .collect();

    LeavePage {
        data,
        page: u32::try_from(page).unwrap_or(u32::MAX),
        per_page: per_page as u32,
        total,
    }
}

/// Pending requests with their urgency, soonest start first.
pub fn sort_by_urgency(
    requests: &[LeaveRequest],
    today: NaiveDate,
) -> Vec<(&LeaveRequest, Urgency)> {
    let mut pending: Vec<_> = requests
        .iter()
        .filter_map(|r| classify_urgency(r, today).map(|urgency| (r, urgency)))
        .collect();
    pending.sort_by_key(|(r, urgency)| (urgency.days_until_start, r.id));
    pending
}
