//! Sync operation reporting and statistics

use super::SyncResult;

/// Sync operation reporter
pub struct SyncReporter;

impl SyncReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(result: &SyncResult) -> String {
        let mut output = String::new();

        output.push_str("\n=== Sync Summary ===\n");
        output.push_str(&format!("Copied:   {}\n", result.copied));
        output.push_str(&format!("Removed:  {}\n", result.deleted));
        output.push_str(&format!("Pruned:   {}\n", result.directories_removed));

        let failures: Vec<_> = result.failures().collect();
        if !failures.is_empty() {
            output.push_str(&format!("\nErrors ({}):\n", failures.len()));
            for failure in failures {
                let message = failure.error.as_deref().unwrap_or_default();
                output.push_str(&format!("  - {}: {message}\n", failure.action));
            }
        }

        output.push_str(&format!(
            "\nTotal operations: {}\n",
            result.total_operations()
        ));

        if result.aborted {
            output.push_str("Status: ✗ Aborted; destination is partially synced\n");
        } else if result.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}
