use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    color::unpack_rgb,
    config::Config,
    constants::{INIT_ALPHA, INIT_BIAS_RAD, MIN_PIXELS, NUM_CYCLES, PRIMES, RAD_BIAS_SHIFT, RAD_DEC, SPECIALS},
    error::{QuantizeError, Result},
    network::Network,
};

/// Decaying learning rate and neighborhood radius
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Learning rate biased by `ALPHA_BIAS_SHIFT` bits
    pub alpha: usize,
    /// Neighborhood radius biased by `RAD_BIAS_SHIFT` bits
    pub bias_radius: usize,
    /// Unbiased radius; 0 disables neighborhood updates
    pub radius: usize,
    alpha_decay: usize,
}

impl Schedule {
    pub fn new(config: &Config) -> Self {
        Self {
            alpha: INIT_ALPHA,
            bias_radius: INIT_BIAS_RAD,
            radius: calc_radius(INIT_BIAS_RAD),
            alpha_decay: config.alpha_decay(),
        }
    }

    /// Learning rate as a fraction of its initial value
    #[inline]
    pub fn alpha_ratio(&self) -> f64 {
        self.alpha as f64 / INIT_ALPHA as f64
    }

    /// End of cycle decay
    pub fn decay(&mut self) {
        self.alpha -= self.alpha / self.alpha_decay;
        self.bias_radius -= self.bias_radius / RAD_DEC;
        self.radius = calc_radius(self.bias_radius);
    }
}

#[inline]
fn calc_radius(bias_radius: usize) -> usize {
    let rad = bias_radius >> RAD_BIAS_SHIFT;
    if rad <= 1 { 0 } else { rad }
}

/// First candidate prime that does not divide `len`
pub fn traversal_step(len: usize) -> usize {
    PRIMES[..PRIMES.len() - 1]
        .iter()
        .copied()
        .find(|p| len % p != 0)
        .unwrap_or(PRIMES[PRIMES.len() - 1])
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearnStats {
    /// Pixels visited
    pub visits: usize,
    /// Completed decay cycles
    pub cycles: usize,
    /// Traversal step
    pub step: usize,
}

/// Trains a network on a pixel sequence and stores the training state
pub struct Learner<'a> {
    pixels: &'a [u32],
    network: Network,
    schedule: Schedule,
    sample_pixels: usize,
    delta: usize,
    step: usize,
    pos: usize,
    visits: usize,
    cycles: usize,
}

impl<'a> Learner<'a> {
    pub fn new(pixels: &'a [u32], config: &Config) -> Result<Self> {
        config.validate()?;
        if pixels.len() < MIN_PIXELS {
            return Err(QuantizeError::ImageTooSmall {
                pixels: pixels.len(),
                min: MIN_PIXELS,
            });
        }

        let sample_pixels = pixels.len() / config.sample_factor;
        let mut delta = sample_pixels / NUM_CYCLES;
        if delta == 0 {
            warn!(sample_pixels, "Fewer sampled pixels than cycles; decaying after every pixel");
            delta = 1;
        }

        Ok(Self {
            pixels,
            network: Network::new(),
            schedule: Schedule::new(config),
            sample_pixels,
            delta,
            step: traversal_step(pixels.len()),
            pos: 0,
            visits: 0,
            cycles: 0,
        })
    }

    /// Runs until every sampled pixel has been visited.
    pub fn run(&mut self) -> LearnStats {
        while !self.step() {}
        self.stats()
    }

    /// Visits one pixel. Returns true when training is finished.
    pub fn step(&mut self) -> bool {
        if self.visits >= self.sample_pixels {
            return true;
        }

        let color = unpack_rgb(self.pixels[self.pos]);

        if self.visits == 0 {
            self.network.set_background(color);
        }

        let winner = match self.network.special_find(&color) {
            Some(i) => i,
            None => self.network.contest(&color),
        };

        // No learning for the reserved neurons
        if winner >= SPECIALS {
            let alpha = self.schedule.alpha_ratio();
            self.network.alter_single(alpha, winner, &color);
            if self.schedule.radius > 0 {
                self.network.alter_neighbors(alpha, self.schedule.radius, winner, &color);
            }
        }

        self.pos = (self.pos + self.step) % self.pixels.len();
        self.visits += 1;

        if self.visits.is_multiple_of(self.delta) {
            self.schedule.decay();
            self.cycles += 1;
            debug!(
                cycle = self.cycles,
                alpha = self.schedule.alpha,
                radius = self.schedule.radius,
                "Decayed schedule"
            );
        }

        self.visits >= self.sample_pixels
    }

    pub fn stats(&self) -> LearnStats {
        LearnStats {
            visits: self.visits,
            cycles: self.cycles,
            step: self.step,
        }
    }

    #[inline]
    pub fn network(&self) -> &Network {
        &self.network
    }

    #[inline]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    #[inline]
    pub fn visits(&self) -> usize {
        self.visits
    }

    #[inline]
    pub fn sample_pixels(&self) -> usize {
        self.sample_pixels
    }
}
