//! Stored-records JSON read/write.
//!
//! Records JSON is the portable stand-in for the storage collaborator: an
//! array of application rows (input fields + scoring output + workflow
//! status) that the analytics aggregator consumes. The schema is defined by
//! `domain::LoanRecord`.

use std::fs::File;
use std::path::Path;

use crate::domain::LoanRecord;
use crate::error::AppError;

/// Write a records JSON file.
pub fn write_records_json(path: &Path, records: &[LoanRecord]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!(
            "Failed to create records JSON '{}': {e}",
            path.display()
        ))
    })?;
    serde_json::to_writer_pretty(file, records)
        .map_err(|e| AppError::config(format!("Failed to write records JSON: {e}")))?;
    Ok(())
}

/// Read a records JSON file.
pub fn read_records_json(path: &Path) -> Result<Vec<LoanRecord>, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::config(format!(
            "Failed to open records JSON '{}': {e}",
            path.display()
        ))
    })?;
    let records: Vec<LoanRecord> = serde_json::from_reader(file)
        .map_err(|e| AppError::config(format!("Invalid records JSON: {e}")))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ApplicationInput, ApplicationStatus, LoanPurpose, LoanType, Rating, ResidenceType,
        ScoringResult,
    };
    use chrono::NaiveDate;

    #[test]
    fn records_round_trip_through_json() {
        let record = LoanRecord {
            id: "APP-0001".to_string(),
            input: ApplicationInput {
                age: 35,
                income: 75_000.0,
                loan_amount: 200_000.0,
                loan_tenure_months: 60,
                avg_dpd_per_delinquency: 2.0,
                delinquency_ratio: 0.05,
                credit_utilization_ratio: 0.3,
                num_open_accounts: 4,
                residence_type: ResidenceType::Owned,
                loan_purpose: LoanPurpose::Home,
                loan_type: LoanType::Secured,
            },
            result: ScoringResult {
                default_probability: 0.15,
                credit_score: 810,
                rating: Rating::APlus,
                suggestions: vec!["example".to_string()],
            },
            status: ApplicationStatus::Approved,
            disbursed_amount: Some(200_000.0),
            repaid_amount: None,
            created_at: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            decided_at: Some(NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()),
            rejection_reason: None,
        };

        let path = std::env::temp_dir().join(format!(
            "cscore-records-roundtrip-{}.json",
            std::process::id()
        ));
        write_records_json(&path, std::slice::from_ref(&record)).unwrap();
        let loaded = read_records_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, record.id);
        assert_eq!(loaded[0].input, record.input);
        assert_eq!(loaded[0].result, record.result);
        assert_eq!(loaded[0].status, record.status);
        assert_eq!(loaded[0].decided_at, record.decided_at);
    }

    #[test]
    fn rating_serializes_with_plus_sign() {
        let json = serde_json::to_string(&Rating::APlus).unwrap();
        assert_eq!(json, "\"A+\"");
    }
}
