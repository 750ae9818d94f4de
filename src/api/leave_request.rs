use std::future::Future;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;

use crate::auth::session::SessionContext;
use crate::engine::{LeaveAccountingEngine, LeaveAction, check_transition};
use crate::error::ActionError;
use crate::model::{LeaveBalance, LeaveDraft, LeaveRequest, LeaveType};

/// Payload for creating a leave request on the Leave Service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeave {
    #[schema(example = 1000)]
    pub employee_id: u64,
    #[serde(rename = "type")]
    #[schema(example = "paid")]
    pub leave_type: LeaveType,
    #[schema(example = "2026-01-05")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-09")]
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    /// Chargeable days as counted by the engine
    #[schema(example = 5)]
    pub working_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectLeave {
    #[schema(example = 1)]
    pub leave_id: u64,
    #[schema(example = "Team already at minimum staffing")]
    pub reason: String,
}

/// Remote Leave Service; authoritative for all request and balance state.
pub trait LeaveService {
    /// Returns the id of the created request.
    fn submit_leave(&self, payload: SubmitLeave)
    -> impl Future<Output = anyhow::Result<u64>> + Send;

    fn approve_leave(&self, leave_id: u64) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn reject_leave(&self, payload: RejectLeave)
    -> impl Future<Output = anyhow::Result<()>> + Send;

    fn cancel_leave(&self, leave_id: u64) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Validates leave actions locally, then forwards them to a [`LeaveService`].
pub struct LeaveActions<S> {
    engine: LeaveAccountingEngine,
    service: S,
}

impl<S: LeaveService> LeaveActions<S> {
    pub fn new(engine: LeaveAccountingEngine, service: S) -> Self {
        Self { engine, service }
    }

    pub fn engine(&self) -> &LeaveAccountingEngine {
        &self.engine
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /* =========================
    Create leave request
    ========================= */

    /// Builds the create payload, refusing drafts the engine rejects.
    pub fn prepare_submission(
        &self,
        employee_id: u64,
        draft: LeaveDraft,
        balance: &LeaveBalance,
        today: NaiveDate,
    ) -> Result<SubmitLeave, ActionError> {
        if balance.employee_id != employee_id {
            return Err(ActionError::Forbidden("Balance belongs to another employee"));
        }

        let assessment = self.engine.assess(&draft, balance, today);
        if !assessment.is_acceptable() {
            return Err(ActionError::Rejected(assessment.violations));
        }

        Ok(SubmitLeave {
            employee_id,
            leave_type: draft.leave_type,
            start_date: draft.start_date,
            end_date: draft.end_date,
            reason: draft.reason,
            documents: draft.documents,
            working_days: assessment.working_days,
        })
    }

    #[instrument(
        name = "leave_create",
        skip(self, ctx, draft, balance),
        fields(user_id = ctx.user_id, leave_type = %draft.leave_type)
    )]
    pub async fn create(
        &self,
        ctx: &SessionContext,
        draft: LeaveDraft,
        balance: &LeaveBalance,
        today: NaiveDate,
    ) -> Result<u64, ActionError> {
        let employee_id = ctx.require_employee_profile()?;

        let payload = self
            .prepare_submission(employee_id, draft, balance, today)
            .inspect_err(|e| warn!(error = %e, employee_id, "Leave request refused locally"))?;

        let leave_id = self.service.submit_leave(payload).await.map_err(|e| {
            error!(error = %e, employee_id, "Failed to create leave request");
            ActionError::Remote(e)
        })?;

        info!(leave_id, employee_id, "Leave request submitted");
        Ok(leave_id)
    }

    /* =========================
    Approve leave (HR/Admin)
    ========================= */
    #[instrument(
        name = "leave_approve",
        skip(self, ctx, request),
        fields(user_id = ctx.user_id, leave_id = request.id)
    )]
    pub async fn approve(
        &self,
        ctx: &SessionContext,
        request: &LeaveRequest,
    ) -> Result<(), ActionError> {
        ctx.require_hr_or_admin()?;
        check_transition(request.status, LeaveAction::Approve)?;

        self.service.approve_leave(request.id).await.map_err(|e| {
            error!(error = %e, leave_id = request.id, "Approve leave failed");
            ActionError::Remote(e)
        })?;

        info!(leave_id = request.id, "Leave approved");
        Ok(())
    }

    /* =========================
    Reject leave (HR/Admin)
    ========================= */
    #[instrument(
        name = "leave_reject",
        skip(self, ctx, request, reason),
        fields(user_id = ctx.user_id, leave_id = request.id)
    )]
    pub async fn reject(
        &self,
        ctx: &SessionContext,
        request: &LeaveRequest,
        reason: &str,
    ) -> Result<(), ActionError> {
        ctx.require_hr_or_admin()?;

        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ActionError::MissingRejectionReason);
        }
        check_transition(request.status, LeaveAction::Reject)?;

        let payload = RejectLeave {
            leave_id: request.id,
            reason: reason.to_string(),
        };
        self.service.reject_leave(payload).await.map_err(|e| {
            error!(error = %e, leave_id = request.id, "Reject leave failed");
            ActionError::Remote(e)
        })?;

        info!(leave_id = request.id, "Leave rejected");
        Ok(())
    }

    /* =========================
    Cancel leave (owner)
    ========================= */
    #[instrument(
        name = "leave_cancel",
        skip(self, ctx, request),
        fields(user_id = ctx.user_id, leave_id = request.id)
    )]
    pub async fn cancel(
        &self,
        ctx: &SessionContext,
        request: &LeaveRequest,
    ) -> Result<(), ActionError> {
        ctx.require_employee_profile()?;
        if !ctx.owns(request) {
            return Err(ActionError::Forbidden("Only the requesting employee may cancel"));
        }
        check_transition(request.status, LeaveAction::Cancel)?;

        self.service.cancel_leave(request.id).await.map_err(|e| {
            error!(error = %e, leave_id = request.id, "Cancel leave failed");
            ActionError::Remote(e)
        })?;

        info!(leave_id = request.id, "Leave cancelled");
        Ok(())
    }
}
