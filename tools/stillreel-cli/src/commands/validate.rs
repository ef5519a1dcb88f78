//! Validate a project document.

use std::path::PathBuf;

use anyhow::Context;
use stillreel_host_core::{find_selected_video_track, EditingService};
use stillreel_project_host::ProjectHost;
use stillreel_project_model::LoadedProject;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating project at: {}", path.display());

    let mut loaded = LoadedProject::load(&path)
        .with_context(|| format!("Failed to load project {}", path.display()))?;

    println!("  Name: {}", loaded.project.name);
    println!("  Events: {}", loaded.project.event_count());

    let mut errors = loaded.validate_sources();

    let tracks = ProjectHost::new(&mut loaded.project).list_tracks()?;
    match find_selected_video_track(&tracks) {
        Some(track) => println!("  Populate target: {track}"),
        None => errors.push("No video track is selected".to_string()),
    }

    if errors.is_empty() {
        println!("\nProject is valid.");
    } else {
        println!("\nValidation issues:");
        for error in &errors {
            println!("  - {error}");
        }
        println!(
            "\n{} issue(s) found. Project may not be fully usable.",
            errors.len()
        );
    }

    Ok(())
}
