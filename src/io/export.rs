//! Export scored applications to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::LoanRecord;
use crate::error::AppError;

/// Write per-application rows to a CSV file.
pub fn write_records_csv(path: &Path, records: &[LoanRecord]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::config(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    // Header
    writeln!(
        file,
        "id,created_at,status,age,income,loan_amount,loan_tenure_months,\
         avg_dpd_per_delinquency,delinquency_ratio,credit_utilization_ratio,num_open_accounts,\
         residence_type,loan_purpose,loan_type,default_probability,\
         credit_score,rating,disbursed_amount,repaid_amount"
    )
    .map_err(|e| AppError::config(format!("Failed to write export CSV header: {e}")))?;

    for r in records {
        let i = &r.input;
        writeln!(
            file,
            "{},{},{},{},{:.2},{:.2},{},{:.2},{:.4},{:.4},{},{},{},{},{:.6},{},{},{},{}",
            r.id,
            r.created_at,
            r.status.display_name(),
            i.age,
            i.income,
            i.loan_amount,
            i.loan_tenure_months,
            i.avg_dpd_per_delinquency,
            i.delinquency_ratio,
            i.credit_utilization_ratio,
            i.num_open_accounts,
            i.residence_type.display_name(),
            i.loan_purpose.display_name(),
            i.loan_type.display_name(),
            r.result.default_probability,
            r.result.credit_score,
            r.result.rating.display_name(),
            r.disbursed_amount.map(|v| format!("{v:.2}")).unwrap_or_default(),
            r.repaid_amount.map(|v| format!("{v:.2}")).unwrap_or_default(),
        )
        .map_err(|e| AppError::config(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
