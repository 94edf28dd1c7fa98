//! Server entrypoint for the employee lifecycle engine.
//!
//! Serves the lifecycle API over an in-memory employee store seeded with a
//! few inactive records so the transition endpoints can be exercised
//! directly. Employee creation itself belongs to the surrounding HR CRUD
//! system, not to this engine.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lifecycle_engine::api::{AppState, create_router};
use lifecycle_engine::config::LifecyclePolicy;
use lifecycle_engine::models::Employee;
use lifecycle_engine::repository::InMemoryEmployeeRepository;
use lifecycle_engine::service::LifecycleService;

const POLICY_PATH: &str = "./config/lifecycle.yaml";
const BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "lifecycle_engine=info".into()),
        )
        .init();

    let policy = match LifecyclePolicy::load(POLICY_PATH) {
        Ok(policy) => {
            info!(path = POLICY_PATH, "loaded lifecycle policy");
            policy
        }
        Err(err) => {
            warn!(error = %err, "falling back to default lifecycle policy");
            LifecyclePolicy::default()
        }
    };

    let repository = Arc::new(InMemoryEmployeeRepository::new());
    seed_employees(&repository).await;

    let service = Arc::new(LifecycleService::new(repository, policy));
    let router = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!(addr = BIND_ADDR, "lifecycle engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}

/// Seeds a few inactive employee records for demonstration.
async fn seed_employees(repository: &InMemoryEmployeeRepository) {
    let seeded_at = Utc::now();
    for id in [290, 291, 292] {
        repository
            .insert(Employee {
                id,
                is_active: false,
                hire_date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or_default(),
                vacation_hours: Decimal::ZERO,
                sick_leave_hours: Decimal::ZERO,
                department_history: vec![],
                pay_history: vec![],
                modified_date: seeded_at,
            })
            .await;
        info!(employee_id = id, "seeded inactive employee");
    }
}
