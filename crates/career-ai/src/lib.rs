//! Rule-based career scoring and advisory workflows.
//!
//! The library exposes three scoring engines built on the same
//! lookup-table pattern (automation risk, career immunity, ATS resume
//! scanning), a keyword-matched coaching responder, and the assessment
//! service that ties them to storage and alerting seams.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
