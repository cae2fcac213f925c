mod submission_client;

pub use submission_client::{
    EvidenceFile, IncidentForm, SubmissionClient, SubmissionError, SubmissionReceipt,
};
