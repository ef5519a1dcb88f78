//! Show project information.

use std::path::PathBuf;

use anyhow::Context;
use stillreel_project_model::LoadedProject;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let loaded = LoadedProject::load(&path)
        .with_context(|| format!("Failed to load project {}", path.display()))?;
    let p = &loaded.project;

    println!("Project: {}", p.name);
    println!("  ID: {}", p.id);
    println!("  Created: {}", p.created_at);
    println!("  Modified: {}", p.modified_at);
    println!("  Cursor: {:.3}s", p.cursor_secs);
    println!();

    println!("Tracks:");
    for track in &p.tracks {
        println!(
            "  {} {} ({:?}){}: {} event(s), ends at {:.3}s",
            track.id,
            track.name,
            track.media_type,
            if track.selected { " [selected]" } else { "" },
            track.events.len(),
            track.end_secs()
        );
    }
    println!();

    println!("Transitions ({}):", p.transitions.len());
    for name in &p.transitions {
        println!("  {name}");
    }

    Ok(())
}
