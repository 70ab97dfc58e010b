use crate::constants::{BG_COLOR, LEARN_RNG, NET_SIZE, SPECIALS};

/// The Kohonen network: neuron positions in RGB space plus the
/// frequency and bias accumulators used by the contest.
#[derive(Clone, Debug)]
pub struct Network {
    pub neurons: [[f64; 3]; NET_SIZE],
    pub freq: [f64; NET_SIZE],
    pub bias: [f64; NET_SIZE],
}

impl Network {
    /// Black and white at 0 and 1, a gray ramp over the learning neurons,
    /// uniform frequencies and zero biases.
    pub fn new() -> Self {
        let mut neurons = [[0.0; 3]; NET_SIZE];
        neurons[1] = [255.0; 3];

        let cut_net_size = (NET_SIZE - SPECIALS) as f64;
        for i in LEARN_RNG {
            let v = (255.0 * (i - SPECIALS) as f64) / cut_net_size;
            neurons[i] = [v; 3];
        }

        Self {
            neurons,
            freq: [1.0 / NET_SIZE as f64; NET_SIZE],
            bias: [0.0; NET_SIZE],
        }
    }

    #[inline]
    pub fn set_background(&mut self, color: [f64; 3]) {
        self.neurons[BG_COLOR] = color;
    }

    /// Sum of the frequencies of all neurons
    pub fn freq_mass(&self) -> f64 {
        self.freq.iter().sum()
    }

    /// Sum of the frequencies of the neurons taking part in the contest
    pub fn learning_freq_mass(&self) -> f64 {
        self.freq[LEARN_RNG].iter().sum()
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
