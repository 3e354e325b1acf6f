//! Health checks for `batch/v1` kinds, via schema-checked decode into the
//! typed API objects.

use k8s_openapi::api::batch::v1::{CronJob, Job};
use serde_json::Value;

use super::decode;

/// A Job is ready once it reports Complete. Failed or Suspended rule it
/// out; anything else is still progressing.
pub fn job_ready(obj: &Value) -> bool {
    let Some(job) = decode::<Job>(obj) else {
        return false;
    };

    for c in job.status.and_then(|s| s.conditions).unwrap_or_default() {
        match c.type_.as_str() {
            "Failed" | "Suspended" if c.status == "True" => return false,
            "Complete" if c.status == "True" => return true,
            _ => {}
        }
    }
    false
}

/// CronJob readiness mirrors its schedule history: suspended counts as
/// ready, so does an active run; otherwise the most recently scheduled run
/// must have completed successfully.
pub fn cron_job_ready(obj: &Value) -> bool {
    let Some(cron_job) = decode::<CronJob>(obj) else {
        return false;
    };

    if cron_job.spec.as_ref().and_then(|s| s.suspend) == Some(true) {
        return true;
    }

    let Some(status) = cron_job.status else {
        return false;
    };
    // Nothing scheduled yet: still progressing.
    let Some(last_schedule) = status.last_schedule_time else {
        return false;
    };
    if !status.active.unwrap_or_default().is_empty() {
        return true;
    }
    match status.last_successful_time {
        Some(last_success) => last_success.0 >= last_schedule.0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_ready_when_complete() {
        let obj = json!({"status": {"conditions": [
            {"type": "Complete", "status": "True"},
        ]}});
        assert!(job_ready(&obj));
    }

    #[test]
    fn job_not_ready_when_failed_or_suspended() {
        let failed = json!({"status": {"conditions": [
            {"type": "Failed", "status": "True"},
        ]}});
        let suspended = json!({"status": {"conditions": [
            {"type": "Suspended", "status": "True"},
        ]}});
        assert!(!job_ready(&failed));
        assert!(!job_ready(&suspended));
    }

    #[test]
    fn job_without_conditions_is_progressing() {
        assert!(!job_ready(&json!({"status": {"active": 1}})));
        assert!(!job_ready(&json!({})));
    }

    #[test]
    fn job_with_mistyped_status_is_not_ready() {
        assert!(!job_ready(&json!({"status": {"conditions": 42}})));
    }

    #[test]
    fn cron_job_ready_when_suspended() {
        let obj = json!({"spec": {"suspend": true}});
        assert!(cron_job_ready(&obj));
    }

    #[test]
    fn cron_job_ready_when_last_run_succeeded() {
        let obj = json!({"status": {
            "lastScheduleTime": "2024-01-01T10:00:00Z",
            "lastSuccessfulTime": "2024-01-01T10:05:00Z",
        }});
        assert!(cron_job_ready(&obj));
    }

    #[test]
    fn cron_job_ready_while_a_run_is_active() {
        let obj = json!({"status": {
            "lastScheduleTime": "2024-01-01T10:00:00Z",
            "active": [{"name": "job-1"}],
        }});
        assert!(cron_job_ready(&obj));
    }

    #[test]
    fn cron_job_not_ready_when_last_run_failed() {
        let obj = json!({"status": {
            "lastScheduleTime": "2024-01-01T11:00:00Z",
            "lastSuccessfulTime": "2024-01-01T10:05:00Z",
        }});
        assert!(!cron_job_ready(&obj));
    }

    #[test]
    fn cron_job_not_ready_before_first_schedule() {
        assert!(!cron_job_ready(&json!({"status": {}})));
        assert!(!cron_job_ready(&json!({})));
    }
}
