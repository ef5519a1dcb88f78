//! Populate a project's selected video track.

use std::path::PathBuf;

use anyhow::Context;
use stillreel_common::config::AppConfig;
use stillreel_host_core::TrackId;
use stillreel_planner::{populate, PopulateOutcome};
use stillreel_project_host::{FsMediaLibrary, ProjectHost, PromptFolderPicker};
use stillreel_project_model::LoadedProject;

pub fn run(
    config: &AppConfig,
    project: PathBuf,
    track: Option<u32>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let mut loaded = LoadedProject::load(&project)
        .with_context(|| format!("Failed to load project {}", project.display()))?;

    if let Some(id) = track {
        loaded.project.select_only(TrackId(id))?;
    }

    let library = FsMediaLibrary::from_config(&config.source);
    let mut picker = PromptFolderPicker::stdio();

    // Nothing is saved unless the whole run succeeds.
    let outcome = {
        let mut host = ProjectHost::new(&mut loaded.project);
        populate(
            &mut host,
            &library,
            &mut picker,
            &config.source,
            &config.placement,
        )?
    };

    match outcome {
        PopulateOutcome::Cancelled => {
            println!("Cancelled; project unchanged.");
        }
        PopulateOutcome::Empty { source_dir } => {
            println!("No stills in {}; project unchanged.", source_dir.display());
        }
        PopulateOutcome::Completed { source_dir, report } => {
            println!(
                "Placed {} still(s) from {} on {} ({:.3}s)",
                report.placements.len(),
                source_dir.display(),
                report.track,
                report.span_secs()
            );
            if dry_run {
                println!("Dry run; project not saved.");
            } else {
                loaded.save()?;
                println!("Saved {}", loaded.path.display());
            }
        }
    }

    Ok(())
}
