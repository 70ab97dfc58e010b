use std::time::Instant;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::Config,
    error::Result,
    index::{ColorIndex, fix},
    learner::{LearnStats, Learner},
};

/// Kohonen neural network color quantizer. Reduces a pixel sequence to 256 colors.
///
/// A quantizer holds no state between runs, so one instance can be shared
/// across threads and each `quantize` call trains its own network.
#[derive(Clone, Debug, Default)]
pub struct NeuQuant {
    config: Config,
}

impl NeuQuant {
    /// Fails when the sample factor is outside [1, 30].
    pub fn new(sample_factor: usize) -> Result<Self> {
        Self::with_config(Config::new(sample_factor)?)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Learns a palette from `0xRRGGBB` packed pixels.
    pub fn quantize(&self, pixels: &[u32]) -> Result<Palette> {
        let start = Instant::now();
        let mut learner = Learner::new(pixels, &self.config)?;
        info!(
            pixels = pixels.len(),
            sample_factor = self.config.sample_factor,
            "Training network"
        );

        let stats = learner.run();
        let color_map = fix(learner.network());
        let index = ColorIndex::build(&color_map);

        info!(
            visits = stats.visits,
            cycles = stats.cycles,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Palette ready"
        );

        Ok(Palette {
            colors: color_map.to_vec(),
            sorted: index.sorted.to_vec(),
            net_index: index.net_index.to_vec(),
            stats,
        })
    }
}

/// Result of a quantization run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// The 256 colors in network order
    pub colors: Vec<[u8; 3]>,
    /// `colors` sorted by green
    pub sorted: Vec<[u8; 3]>,
    /// Start positions in `sorted` for each green value
    pub net_index: Vec<usize>,
    pub stats: LearnStats,
}

impl Palette {
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Opaque RGBA entries in network order
    pub fn to_rgba(&self) -> Vec<[u8; 4]> {
        self.colors.iter().map(|&[r, g, b]| [r, g, b, 0xFF]).collect_vec()
    }

    /// Green lookup of a palette, e.g. one read back from JSON. None when the
    /// tables do not have 256 entries.
    pub fn color_index(&self) -> Option<ColorIndex> {
        Some(ColorIndex {
            sorted: self.sorted.as_slice().try_into().ok()?,
            net_index: self.net_index.as_slice().try_into().ok()?,
        })
    }

    /// Number of distinct colors among the entries
    pub fn distinct(&self) -> usize {
        self.colors.iter().unique().count()
    }
}
