/// Content-store document type tag for incident reports
pub const INCIDENT_REPORT_TYPE: &str = "incidentReport";

/// Content-store API version used when none is configured.
/// Pinned rather than "latest" so the wire format stays stable.
pub const DEFAULT_STORE_API_VERSION: &str = "2023-05-03";

/// Generic message returned to callers when the store write fails.
/// Details stay in the server logs only.
pub const STORE_FAILURE_MESSAGE: &str = "Internal Server Error. Please try again.";
