//! Verdict types for circuit compliance
//!
//! Provides Compliant/Warning/NonCompliant verdicts with supporting reasons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compliance status of a circuit, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    #[default]
    Compliant = 0,
    Warning = 1,
    NonCompliant = 2,
}

impl ComplianceStatus {
    /// Wire form, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Warning => "warning",
            ComplianceStatus::NonCompliant => "non-compliant",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "COMPLIANT"),
            ComplianceStatus::Warning => write!(f, "WARNING"),
            ComplianceStatus::NonCompliant => write!(f, "NON-COMPLIANT"),
        }
    }
}

/// A verdict plus the reasons behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CircuitCompliance {
    pub status: ComplianceStatus,
    pub reasons: Vec<String>,
}

impl CircuitCompliance {
    pub fn compliant() -> Self {
        Self::default()
    }

    pub fn warning(reason: impl Into<String>) -> Self {
        Self {
            status: ComplianceStatus::Warning,
            reasons: vec![reason.into()],
        }
    }

    pub fn non_compliant(reason: impl Into<String>) -> Self {
        Self {
            status: ComplianceStatus::NonCompliant,
            reasons: vec![reason.into()],
        }
    }

    /// Add a reason without changing the status
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    /// Add a reason and raise the status to at least `status`
    pub fn escalate(mut self, status: ComplianceStatus, reason: impl Into<String>) -> Self {
        self.status = self.status.max(status);
        self.reasons.push(reason.into());
        self
    }

    /// Combine two verdicts, keeping the more severe status and all reasons
    pub fn combine(mut self, other: CircuitCompliance) -> Self {
        self.status = self.status.max(other.status);
        self.reasons.extend(other.reasons);
        self
    }

    pub fn is_compliant(&self) -> bool {
        self.status == ComplianceStatus::Compliant
    }
}

impl fmt::Display for CircuitCompliance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.status)?;
        if !self.reasons.is_empty() {
            write!(f, " ({})", self.reasons.join("; "))?;
        }
        Ok(())
    }
}
