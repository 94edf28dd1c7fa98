//! Policy type and YAML loading.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LifecycleError, LifecycleResult};

/// Tunable business-rule constants for the lifecycle engine.
///
/// # Example
///
/// ```
/// use lifecycle_engine::config::LifecyclePolicy;
///
/// let policy = LifecyclePolicy::default();
/// assert_eq!(policy.rehire_cooldown_days, 90);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecyclePolicy {
    /// Mandatory waiting period after a termination before a rehire is
    /// accepted, in days. The boundary day itself is eligible.
    pub rehire_cooldown_days: i64,
    /// Vacation balance granted when a rehire does not restore seniority.
    pub new_hire_vacation_hours: Decimal,
    /// Sick-leave balance granted when a rehire does not restore seniority.
    pub new_hire_sick_leave_hours: Decimal,
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            rehire_cooldown_days: 90,
            new_hire_vacation_hours: Decimal::new(40, 0),
            new_hire_sick_leave_hours: Decimal::new(24, 0),
        }
    }
}

impl LifecyclePolicy {
    /// Loads a policy from a YAML file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lifecycle_engine::config::LifecyclePolicy;
    ///
    /// let policy = LifecyclePolicy::load("./config/lifecycle.yaml")?;
    /// # Ok::<(), lifecycle_engine::error::LifecycleError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> LifecycleResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LifecycleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LifecycleError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
