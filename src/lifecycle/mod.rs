//! Lifecycle rule engine.
//!
//! Pure decision logic for the Hired → Active → Terminated → Rehired state
//! machine. Each transition function takes the current employee aggregate,
//! the request and an explicit timestamp, evaluates its guards, and returns a
//! fully mutated copy or a typed error. Nothing here performs I/O or holds
//! state across calls, so every function is deterministic and thread-safe by
//! construction.

mod hire;
mod rehire;
mod status;
mod terminate;

pub use hire::apply_hire;
pub use rehire::apply_rehire;
pub use status::build_status;
pub use terminate::apply_termination;
