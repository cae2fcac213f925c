pub mod incident_handler;

pub use incident_handler::{__path_submit_incident, method_not_allowed, submit_incident};
