use chrono::{DateTime, Utc};
use starfield_chroma::paint_all;
use starfield_domain::{EngineConfig, Instance};
use starfield_orbit::{GalaxyLayout, place_all};
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Which per-record passes to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phases {
    #[default]
    All,
    ColorsOnly,
    PositionsOnly,
}

impl Phases {
    pub const fn colors(self) -> bool {
        matches!(self, Self::All | Self::ColorsOnly)
    }

    pub const fn positions(self) -> bool {
        matches!(self, Self::All | Self::PositionsOnly)
    }
}

/// Runs the color and placement passes over a dataset.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: EngineConfig,
    phases: Phases,
    now: Option<DateTime<Utc>>,
}

/// Output of [`Pipeline::run`].
#[derive(Debug)]
pub struct Processed {
    /// Records in input order.
    pub records: Vec<Instance>,
    /// Aggregate snapshot of the placement pass, when it ran.
    pub layout: Option<GalaxyLayout>,
    pub colors_elapsed: Option<Duration>,
    pub positions_elapsed: Option<Duration>,
}

impl Pipeline {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, phases: Phases::default(), now: None }
    }

    #[must_use]
    pub const fn phases(mut self, phases: Phases) -> Self {
        self.phases = phases;
        self
    }

    /// Pins the instant records are aged against. Defaults to the time [`Pipeline::run`] starts.
    #[must_use]
    pub const fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[instrument(name = "pipeline", skip_all, fields(records = records.len(), phases = ?self.phases))]
    pub fn run(&self, mut records: Vec<Instance>) -> Processed {
        let now = self.now.unwrap_or_else(Utc::now);

        let colors_elapsed = self.phases.colors().then(|| {
            let started = Instant::now();
            paint_all(&mut records, &self.config, now);
            let elapsed = started.elapsed();
            info!(elapsed_ms = elapsed.as_millis(), "Colors calculated");
            elapsed
        });

        let mut layout = None;
        let positions_elapsed = self.phases.positions().then(|| {
            let started = Instant::now();
            layout = Some(place_all(&mut records, &self.config));
            let elapsed = started.elapsed();
            info!(elapsed_ms = elapsed.as_millis(), "Positions calculated");
            elapsed
        });

        Processed { records, layout, colors_elapsed, positions_elapsed }
    }
}
