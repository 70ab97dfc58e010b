use crate::{color::round_channel, constants::NET_SIZE, network::Network};

/// Rounded neuron colors
pub type ColorMap = [[u8; 3]; NET_SIZE];

/// Rounds every neuron to an integer color, keeping network order.
pub fn fix(network: &Network) -> ColorMap {
    let mut color_map = [[0u8; 3]; NET_SIZE];
    for (c, p) in color_map.iter_mut().zip(network.neurons.iter()) {
        *c = p.map(round_channel);
    }
    color_map
}

/// Palette sorted by green with a lookup table of where each green value starts
#[derive(Clone, Debug, PartialEq)]
pub struct ColorIndex {
    pub sorted: ColorMap,
    /// Maps a green value to a position in `sorted` to start a nearest color search from
    pub net_index: [usize; 256],
}

impl ColorIndex {
    /// Selection sort by green, building the green lookup table along the way.
    pub fn build(color_map: &ColorMap) -> Self {
        let mut sorted = *color_map;
        let mut net_index = [0usize; 256];
        let max_net_pos = NET_SIZE - 1;
        let mut prev_col = 0usize;
        let mut start_pos = 0usize;

        for i in 0..NET_SIZE {
            let mut small_pos = i;
            let mut small_val = sorted[i][1];

            for (j, c) in sorted.iter().enumerate().skip(i + 1) {
                if c[1] < small_val {
                    small_pos = j;
                    small_val = c[1];
                }
            }

            if i != small_pos {
                sorted.swap(i, small_pos);
            }

            let small_val = small_val as usize;
            if small_val != prev_col {
                net_index[prev_col] = (start_pos + i) >> 1;
                for entry in net_index.iter_mut().take(small_val).skip(prev_col + 1) {
                    *entry = i;
                }
                prev_col = small_val;
                start_pos = i;
            }
        }

        net_index[prev_col] = (start_pos + max_net_pos) >> 1;
        for entry in net_index.iter_mut().skip(prev_col + 1) {
            *entry = max_net_pos;
        }

        Self { sorted, net_index }
    }

    /// Position in `sorted` to start searching from for green value `g`
    #[inline]
    pub fn start(&self, g: u8) -> usize {
        self.net_index[g as usize]
    }
}
