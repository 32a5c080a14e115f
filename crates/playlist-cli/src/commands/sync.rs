use std::path::Path;

use anyhow::{Context, bail};
use playlist_core::{FailurePolicy, Reconciler, SyncPlan, SyncReporter};

use super::Settings;
use super::common::plural;

pub struct Sync;

impl Sync {
    pub fn execute(
        playlist: &Path,
        device_path: &Path,
        dry_run: bool,
        on_error: Option<FailurePolicy>,
        settings: &Settings,
    ) -> anyhow::Result<()> {
        let manifest = settings.load_playlist(playlist)?;
        let policy = on_error.unwrap_or(settings.failure_policy);
        let engine = Reconciler::new(settings.scanner(), policy);

        let plan = engine
            .plan(&manifest, device_path)
            .with_context(|| format!("Failed to scan {}", device_path.display()))?;

        Self::print_counts(&plan, device_path);

        if dry_run || settings.dry_run {
            Self::print_preview(&plan);
            return Ok(());
        }

        let result = engine.apply(&plan);
        println!("{}", SyncReporter::generate_summary(&result));

        let failed = result.failures().count();
        if failed > 0 {
            bail!("{failed} sync action{} failed", plural(failed));
        }

        Ok(())
    }

    fn print_counts(plan: &SyncPlan, device_path: &Path) {
        let copies = plan.copies().len();
        let deletions = plan.deletions().len();
        println!(
            "Copying {copies} file{} to {}",
            plural(copies),
            device_path.display()
        );
        println!(
            "Removing {deletions} file{} from {}",
            plural(deletions),
            device_path.display()
        );
    }

    fn print_preview(plan: &SyncPlan) {
        for action in plan.copies().iter().chain(plan.deletions()) {
            println!("[DRY RUN] Would {action}");
        }
    }
}
