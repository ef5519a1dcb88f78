//! End-to-end populate flow: pick the folder, list stills, place them.

use std::path::PathBuf;

use stillreel_common::config::{PlacementConfig, SourceConfig, StartPosition};
use stillreel_host_core::{EditingService, FolderChoice, FolderPicker, MediaLibrary};

use crate::error::PlanError;
use crate::placement::{RunReport, StillItem};
use crate::planner::{rng_from_seed, SequentialPlanner};

/// How a populate run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PopulateOutcome {
    /// Stills were placed.
    Completed {
        source_dir: PathBuf,
        report: RunReport,
    },
    /// The folder had no stills; nothing was inserted.
    Empty { source_dir: PathBuf },
    /// The user dismissed the folder picker; nothing was inserted.
    Cancelled,
}

impl PopulateOutcome {
    /// Number of clips inserted.
    pub fn inserted(&self) -> usize {
        match self {
            Self::Completed { report, .. } => report.placements.len(),
            Self::Empty { .. } | Self::Cancelled => 0,
        }
    }
}

/// Populate the host's selected video track from a folder of stills.
///
/// The configuration is validated before the user is asked for anything.
pub fn populate<S, L, P>(
    service: &mut S,
    library: &L,
    picker: &mut P,
    source: &SourceConfig,
    placement: &PlacementConfig,
) -> Result<PopulateOutcome, PlanError>
where
    S: EditingService + ?Sized,
    L: MediaLibrary + ?Sized,
    P: FolderPicker + ?Sized,
{
    let planner = SequentialPlanner::new(placement.clone())?;

    let source_dir = if source.pick_folder {
        match picker
            .choose_folder(&source.stills_dir)
            .map_err(PlanError::Source)?
        {
            FolderChoice::Chosen(dir) => dir,
            FolderChoice::Cancelled => {
                tracing::info!("Folder selection cancelled");
                return Ok(PopulateOutcome::Cancelled);
            }
        }
    } else {
        source.stills_dir.clone()
    };

    let items: Vec<StillItem> = library
        .list_files(&source_dir)
        .map_err(PlanError::Source)?
        .into_iter()
        .map(StillItem::from)
        .collect();

    if items.is_empty() {
        tracing::info!(dir = %source_dir.display(), "No stills found");
        return Ok(PopulateOutcome::Empty { source_dir });
    }

    let start_secs = match placement.start {
        StartPosition::Zero => 0.0,
        StartPosition::Cursor => service.cursor_position_secs().map_err(PlanError::Cursor)?,
    };

    let mut rng = rng_from_seed(placement.seed);
    let report = planner.run(service, &items, start_secs, &mut rng)?;

    tracing::info!(
        dir = %source_dir.display(),
        inserted = report.placements.len(),
        span_secs = report.span_secs(),
        "Populate complete"
    );

    Ok(PopulateOutcome::Completed { source_dir, report })
}
