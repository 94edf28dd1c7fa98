//! Employee record store contract.
//!
//! The lifecycle engine only ever performs three storage operations: load an
//! employee (plain or with history eagerly attached) and replace the whole
//! aggregate in one write. SQL generation, transactions and indexing belong
//! to the backing store, behind this trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::LifecycleResult;
use crate::models::Employee;

/// Read/write contract for the employee record store.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Loads an employee's core attributes by id. `None` when the id is
    /// unknown.
    async fn load_by_id(&self, id: i32) -> LifecycleResult<Option<Employee>>;

    /// Loads an employee with department and pay history eagerly attached.
    /// `None` when the id is unknown.
    async fn load_by_id_with_history(&self, id: i32) -> LifecycleResult<Option<Employee>>;

    /// Replaces the stored aggregate with the given one, all fields and
    /// history at once.
    async fn replace(&self, employee: Employee) -> LifecycleResult<()>;
}

/// In-memory employee store backing the tests and the demo server.
///
/// Aggregates are stored whole, so both load flavors return full history;
/// the contract split matters for lazy-loading backends. Concurrent
/// transitions on the same id are last-write-wins, as at any storage layer.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<HashMap<i32, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an employee record, replacing any existing one with the same id.
    pub async fn insert(&self, employee: Employee) {
        self.employees.write().await.insert(employee.id, employee);
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn load_by_id(&self, id: i32) -> LifecycleResult<Option<Employee>> {
        Ok(self.employees.read().await.get(&id).cloned())
    }

    async fn load_by_id_with_history(&self, id: i32) -> LifecycleResult<Option<Employee>> {
        Ok(self.employees.read().await.get(&id).cloned())
    }

    async fn replace(&self, employee: Employee) -> LifecycleResult<()> {
        self.employees.write().await.insert(employee.id, employee);
        Ok(())
    }
}
