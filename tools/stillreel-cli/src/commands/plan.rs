//! Print placements for a folder without a host.

use std::path::PathBuf;

use anyhow::Context;
use stillreel_common::config::AppConfig;
use stillreel_host_core::MediaLibrary;
use stillreel_planner::{rng_from_seed, SequentialPlanner, StillItem};
use stillreel_project_host::FsMediaLibrary;

pub fn run(config: &AppConfig, dir: Option<PathBuf>, start: f64, json: bool) -> anyhow::Result<()> {
    let dir = dir.unwrap_or_else(|| config.source.stills_dir.clone());
    let planner = SequentialPlanner::new(config.placement.clone())?;

    let library = FsMediaLibrary::from_config(&config.source);
    let items: Vec<StillItem> = library
        .list_files(&dir)
        .with_context(|| format!("Failed to list stills in {}", dir.display()))?
        .into_iter()
        .map(StillItem::from)
        .collect();

    let mut rng = rng_from_seed(config.placement.seed);
    let placements = planner.plan(&items, start, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&placements)?);
        return Ok(());
    }

    println!(
        "{} still(s) from {}, step {:.4}s",
        placements.len(),
        dir.display(),
        planner.step_secs()
    );
    for p in &placements {
        println!(
            "  #{:<4} {:>10.4}s  +{:.4}s  scale {:.3}  rot {:+.4}  move ({:+.0}, {:+.0})  {}  {}",
            p.index,
            p.start_secs,
            p.duration_secs,
            p.transform.scale,
            p.transform.rotation_rad,
            p.transform.translate_x,
            p.transform.translate_y,
            p.transition.as_ref().map_or("-", |t| t.name.as_str()),
            p.path.display()
        );
    }

    Ok(())
}
