mod incident_report;

pub use incident_report::{AssetRef, AttackType, EvidenceFileRef, IncidentReportDoc, IncidentStatus};
