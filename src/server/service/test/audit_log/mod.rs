use crate::server::{
    error::AppError, model::audit_log::GetAuditLogsParam, service::audit_log::AuditLogService,
};
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
