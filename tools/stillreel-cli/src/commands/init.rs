//! Create a new project document.

use std::path::PathBuf;

use anyhow::Context;
use stillreel_project_model::LoadedProject;

pub fn run(path: PathBuf, name: Option<String>) -> anyhow::Result<()> {
    let name = name.unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "stillreel".to_string())
    });

    let loaded = LoadedProject::create(&path, &name)
        .with_context(|| format!("Failed to create project {}", path.display()))?;

    println!("Created project '{}' at {}", name, loaded.path.display());
    println!("Tracks:");
    for track in &loaded.project.tracks {
        println!(
            "  {} {} ({:?}){}",
            track.id,
            track.name,
            track.media_type,
            if track.selected { " [selected]" } else { "" }
        );
    }
    println!("Transitions: {}", loaded.project.transitions.len());

    Ok(())
}
