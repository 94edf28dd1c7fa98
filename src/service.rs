//! Transition handlers.
//!
//! One handler per lifecycle operation, each a thin orchestration over the
//! rule engine: reject an absent request body, run field validation before
//! any I/O, load the employee, apply the transition, persist the result with
//! a single replace write. Rule-engine errors propagate to the caller
//! unchanged, and no write happens on any failure path.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::LifecyclePolicy;
use crate::error::{LifecycleError, LifecycleResult};
use crate::lifecycle::{apply_hire, apply_rehire, apply_termination, build_status};
use crate::models::{HireCommand, LifecycleStatus, RehireCommand, TerminateCommand};
use crate::repository::EmployeeRepository;
use crate::validation::Validate;

/// Orchestrates lifecycle transitions over an employee record store.
pub struct LifecycleService {
    repository: Arc<dyn EmployeeRepository>,
    policy: LifecyclePolicy,
}

impl LifecycleService {
    /// Creates a service over the given store and policy.
    pub fn new(repository: Arc<dyn EmployeeRepository>, policy: LifecyclePolicy) -> Self {
        Self { repository, policy }
    }

    /// Hires an inactive employee. Returns the employee id on success.
    pub async fn hire(&self, command: HireCommand) -> LifecycleResult<i32> {
        let request = command
            .request
            .ok_or_else(|| LifecycleError::InvalidArgument {
                message: "hire command has no request body".to_string(),
            })?;

        let errors = request.validate();
        if !errors.is_empty() {
            return Err(LifecycleError::ValidationFailed { errors });
        }

        let employee = self
            .repository
            .load_by_id(request.employee_id)
            .await?
            .ok_or(LifecycleError::NotFound {
                employee_id: request.employee_id,
            })?;

        let updated = apply_hire(&employee, &request, command.received_at)?;
        self.repository.replace(updated).await?;

        info!(
            employee_id = request.employee_id,
            hire_date = %request.hire_date,
            department_id = request.department_id,
            "employee hired"
        );
        Ok(request.employee_id)
    }

    /// Terminates an active employee.
    pub async fn terminate(&self, command: TerminateCommand) -> LifecycleResult<()> {
        let request = command
            .request
            .ok_or_else(|| LifecycleError::InvalidArgument {
                message: "terminate command has no request body".to_string(),
            })?;

        let errors = request.validate();
        if !errors.is_empty() {
            return Err(LifecycleError::ValidationFailed { errors });
        }

        let employee = self
            .repository
            .load_by_id_with_history(request.employee_id)
            .await?
            .ok_or(LifecycleError::NotFound {
                employee_id: request.employee_id,
            })?;

        let updated = apply_termination(&employee, &request, command.received_at)?;
        self.repository.replace(updated).await?;

        info!(
            employee_id = request.employee_id,
            termination_date = %request.termination_date,
            payout_pto = request.payout_pto,
            "employee terminated"
        );
        Ok(())
    }

    /// Rehires a previously terminated employee. Returns the employee id on
    /// success.
    pub async fn rehire(&self, command: RehireCommand) -> LifecycleResult<i32> {
        let request = command
            .request
            .ok_or_else(|| LifecycleError::InvalidArgument {
                message: "rehire command has no request body".to_string(),
            })?;

        let errors = request.validate();
        if !errors.is_empty() {
            return Err(LifecycleError::ValidationFailed { errors });
        }

        let employee = self
            .repository
            .load_by_id_with_history(request.employee_id)
            .await?
            .ok_or(LifecycleError::NotFound {
                employee_id: request.employee_id,
            })?;

        let updated = apply_rehire(&employee, &request, &self.policy, command.received_at)?;
        self.repository.replace(updated).await?;

        info!(
            employee_id = request.employee_id,
            rehire_date = %request.rehire_date,
            restore_seniority = request.restore_seniority,
            "employee rehired"
        );
        Ok(request.employee_id)
    }

    /// Reconstructs the lifecycle status for an employee. `Ok(None)` when the
    /// id is unknown — a missing employee is not an error for a read.
    pub async fn read_status(
        &self,
        employee_id: i32,
        now: DateTime<Utc>,
    ) -> LifecycleResult<Option<LifecycleStatus>> {
        let employee = self.repository.load_by_id_with_history(employee_id).await?;
        Ok(employee.map(|e| build_status(&e, now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DepartmentAssignment, Employee, EmploymentStatus, HireRequest, PayAssignment, PayFrequency,
        RehireRequest, TerminateRequest,
    };
    use crate::repository::InMemoryEmployeeRepository;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn blank_employee(id: i32) -> Employee {
        Employee {
            id,
            is_active: false,
            hire_date: date(2019, 1, 1),
            vacation_hours: Decimal::ZERO,
            sick_leave_hours: Decimal::ZERO,
            department_history: vec![],
            pay_history: vec![],
            modified_date: Utc::now(),
        }
    }

    fn active_employee(id: i32) -> Employee {
        Employee {
            id,
            is_active: true,
            hire_date: date(2020, 1, 10),
            vacation_hours: Decimal::new(120, 0),
            sick_leave_hours: Decimal::new(60, 0),
            department_history: vec![DepartmentAssignment {
                department_id: 3,
                shift_id: 1,
                start_date: date(2020, 1, 10),
                end_date: None,
            }],
            pay_history: vec![PayAssignment {
                rate_change_date: date(2020, 1, 10),
                rate: Decimal::new(1425, 2),
                pay_frequency: PayFrequency::Biweekly,
            }],
            modified_date: Utc::now(),
        }
    }

    fn hire_request(employee_id: i32) -> HireRequest {
        HireRequest {
            employee_id,
            hire_date: date(2020, 1, 10),
            department_id: 3,
            shift_id: 1,
            initial_pay_rate: Decimal::new(1425, 2),
            pay_frequency: PayFrequency::Biweekly,
            initial_vacation_hours: None,
            initial_sick_leave_hours: None,
        }
    }

    async fn service_with(
        employees: Vec<Employee>,
    ) -> (LifecycleService, Arc<InMemoryEmployeeRepository>) {
        let repository = Arc::new(InMemoryEmployeeRepository::new());
        for employee in employees {
            repository.insert(employee).await;
        }
        let service =
            LifecycleService::new(repository.clone(), LifecyclePolicy::default());
        (service, repository)
    }

    #[tokio::test]
    async fn test_hire_persists_activated_employee() {
        let (service, repository) = service_with(vec![blank_employee(290)]).await;
        let command = HireCommand {
            request: Some(hire_request(290)),
            received_at: Utc::now(),
        };

        let id = service.hire(command).await.unwrap();

        assert_eq!(id, 290);
        let stored = repository.load_by_id(290).await.unwrap().unwrap();
        assert!(stored.is_active);
        assert_eq!(stored.department_history.len(), 1);
        assert_eq!(stored.pay_history.len(), 1);
    }

    #[tokio::test]
    async fn test_hire_without_body_fails_invalid_argument() {
        let (service, _) = service_with(vec![]).await;
        let command = HireCommand {
            request: None,
            received_at: Utc::now(),
        };

        let result = service.hire(command).await;

        assert!(matches!(
            result.unwrap_err(),
            LifecycleError::InvalidArgument { .. }
        ));
    }

    #[tokio::test]
    async fn test_hire_unknown_employee_fails_not_found() {
        let (service, _) = service_with(vec![]).await;
        let command = HireCommand {
            request: Some(hire_request(999)),
            received_at: Utc::now(),
        };

        let result = service.hire(command).await;

        match result.unwrap_err() {
            LifecycleError::NotFound { employee_id } => assert_eq!(employee_id, 999),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_hire_validation_runs_before_lookup() {
        // The store is empty; an invalid request must fail on validation,
        // not on the missing employee.
        let (service, _) = service_with(vec![]).await;
        let mut request = hire_request(5);
        request.initial_pay_rate = Decimal::ZERO;
        let command = HireCommand {
            request: Some(request),
            received_at: Utc::now(),
        };

        let result = service.hire(command).await;

        match result.unwrap_err() {
            LifecycleError::ValidationFailed { errors } => {
                assert_eq!(errors[0].field, "initial_pay_rate");
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_hire_leaves_stored_employee_identical() {
        let (service, repository) = service_with(vec![active_employee(290)]).await;
        let before = repository.load_by_id(290).await.unwrap().unwrap();
        let command = HireCommand {
            request: Some(hire_request(290)),
            received_at: Utc::now(),
        };

        let result = service.hire(command).await;

        assert!(matches!(
            result.unwrap_err(),
            LifecycleError::AlreadyActive { .. }
        ));
        let after = repository.load_by_id(290).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_terminate_persists_closed_assignment_and_payout() {
        let (service, repository) = service_with(vec![active_employee(290)]).await;
        let command = TerminateCommand {
            request: Some(TerminateRequest {
                employee_id: 290,
                termination_date: date(2024, 10, 31),
                payout_pto: true,
            }),
            received_at: Utc::now(),
        };

        service.terminate(command).await.unwrap();

        let stored = repository.load_by_id(290).await.unwrap().unwrap();
        assert!(!stored.is_active);
        assert_eq!(
            stored.department_history[0].end_date,
            Some(date(2024, 10, 31))
        );
        assert_eq!(stored.vacation_hours, Decimal::ZERO);
        assert_eq!(stored.sick_leave_hours, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_failed_terminate_leaves_stored_employee_identical() {
        let (service, repository) = service_with(vec![blank_employee(290)]).await;
        let before = repository.load_by_id(290).await.unwrap().unwrap();
        let command = TerminateCommand {
            request: Some(TerminateRequest {
                employee_id: 290,
                termination_date: date(2024, 10, 31),
                payout_pto: true,
            }),
            received_at: Utc::now(),
        };

        let result = service.terminate(command).await;

        assert!(matches!(
            result.unwrap_err(),
            LifecycleError::AlreadyTerminated { .. }
        ));
        let after = repository.load_by_id(290).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_rehire_too_soon_reports_earliest_date_and_writes_nothing() {
        let mut employee = active_employee(290);
        employee.is_active = false;
        employee.department_history[0].end_date = Some(date(2024, 10, 31));
        let (service, repository) = service_with(vec![employee]).await;
        let before = repository.load_by_id(290).await.unwrap().unwrap();

        let command = RehireCommand {
            request: Some(RehireRequest {
                employee_id: 290,
                rehire_date: date(2025, 1, 12),
                department_id: 5,
                shift_id: 2,
                pay_rate: Decimal::new(1600, 2),
                pay_frequency: PayFrequency::Biweekly,
                restore_seniority: false,
            }),
            received_at: Utc::now(),
        };

        let result = service.rehire(command).await;

        match result.unwrap_err() {
            LifecycleError::RehireTooSoon { eligible_on, .. } => {
                assert_eq!(eligible_on, date(2025, 1, 29));
            }
            other => panic!("Expected RehireTooSoon, got {:?}", other),
        }
        let after = repository.load_by_id(290).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_rehire_on_boundary_persists_reactivated_employee() {
        let mut employee = active_employee(290);
        employee.is_active = false;
        employee.department_history[0].end_date = Some(date(2024, 10, 31));
        let (service, repository) = service_with(vec![employee]).await;

        let command = RehireCommand {
            request: Some(RehireRequest {
                employee_id: 290,
                rehire_date: date(2025, 1, 29),
                department_id: 5,
                shift_id: 2,
                pay_rate: Decimal::new(1600, 2),
                pay_frequency: PayFrequency::Biweekly,
                restore_seniority: false,
            }),
            received_at: Utc::now(),
        };

        let id = service.rehire(command).await.unwrap();

        assert_eq!(id, 290);
        let stored = repository.load_by_id(290).await.unwrap().unwrap();
        assert!(stored.is_active);
        assert_eq!(stored.hire_date, date(2025, 1, 29));
        assert_eq!(stored.vacation_hours, Decimal::new(40, 0));
        assert_eq!(stored.sick_leave_hours, Decimal::new(24, 0));
        assert_eq!(stored.closed_assignment_count(), 1);
    }

    #[tokio::test]
    async fn test_read_status_for_active_employee() {
        let (service, _) = service_with(vec![active_employee(290)]).await;
        let now = date(2020, 1, 20).and_hms_opt(12, 0, 0).unwrap().and_utc();

        let status = service.read_status(290, now).await.unwrap().unwrap();

        assert_eq!(status.employment_status, EmploymentStatus::Active);
        assert_eq!(status.days_employed, Some(10));
        assert_eq!(status.current_department_id, Some(3));
        assert_eq!(status.current_pay_rate, Some(Decimal::new(1425, 2)));
    }

    #[tokio::test]
    async fn test_read_status_unknown_employee_is_none_not_error() {
        let (service, _) = service_with(vec![]).await;

        let status = service.read_status(999, Utc::now()).await.unwrap();

        assert!(status.is_none());
    }
}
