/// Number of neurons, and so the number of palette entries
pub const NET_SIZE: usize = 256;

/// Number of reserved neurons: black, white and background
pub const SPECIALS: usize = 3;

/// Index of the neuron holding the first sampled color
pub const BG_COLOR: usize = SPECIALS - 1;

/// Index range of the neurons taking part in the contest
pub const LEARN_RNG: std::ops::Range<usize> = SPECIALS..NET_SIZE;

/// Number of decay cycles over the sampled pixels
pub const NUM_CYCLES: usize = 100;

// Radius starts at 32 for 256 colors, biased by 6 bits
pub const INIT_RAD: usize = NET_SIZE / 8;
pub const RAD_BIAS_SHIFT: usize = 6;
pub const RAD_BIAS: usize = 1 << RAD_BIAS_SHIFT;
pub const INIT_BIAS_RAD: usize = INIT_RAD * RAD_BIAS;
/// Radius shrinks by 1/30 each cycle
pub const RAD_DEC: usize = 30;

// Alpha starts at 1, biased by 10 bits
pub const ALPHA_BIAS_SHIFT: usize = 10;
pub const INIT_ALPHA: usize = 1 << ALPHA_BIAS_SHIFT;

/// Frequency leak per contest
pub const BETA: f64 = 1.0 / 1024.0;
pub const GAMMA: f64 = 1024.0;
pub const BETA_GAMMA: f64 = BETA * GAMMA;

/// Candidate traversal steps. No realistic pixel count is divisible by all four.
pub const PRIMES: [usize; 4] = [499, 491, 487, 503];

/// Smallest pixel sequence that can be quantized
pub const MIN_PIXELS: usize = PRIMES[3];

pub const SAMPLE_FACTOR_RNG: std::ops::RangeInclusive<usize> = 1..=30;

/// Tolerance when matching a pixel against a reserved neuron
pub const SPECIAL_EPS: f64 = 1e-5;
