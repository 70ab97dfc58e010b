//! Competitive learning on the network: picking a winning neuron for a color and moving
//! the winner and its index neighbors towards that color.

use crate::{
    constants::{BETA, BETA_GAMMA, LEARN_RNG, NET_SIZE, SPECIAL_EPS, SPECIALS},
    network::Network,
};

impl Network {
    /// Returns the reserved neuron exactly matching `color`, if any.
    pub fn special_find(&self, color: &[f64; 3]) -> Option<usize> {
        self.neurons[..SPECIALS]
            .iter()
            .position(|p| p.iter().zip(color).all(|(a, b)| (a - b).abs() < SPECIAL_EPS))
    }

    /// Finds the learning neuron with the smallest bias-corrected L1 distance to `color`
    /// and returns its index.
    ///
    /// Every learning neuron leaks frequency and gains bias on each call. The neuron with the
    /// smallest raw distance is rewarded with the leaked frequency and pays it back in bias,
    /// so neurons that win often grow less attractive.
    pub fn contest(&mut self, color: &[f64; 3]) -> usize {
        let [r, g, b] = *color;
        let mut best_dist = f64::MAX;
        let mut best_bias_dist = f64::MAX;
        let mut best_pos = SPECIALS;
        let mut best_bias_pos = SPECIALS;

        for i in LEARN_RNG {
            let p = &self.neurons[i];
            let dist = (p[0] - r).abs() + (p[1] - g).abs() + (p[2] - b).abs();
            if dist < best_dist {
                best_dist = dist;
                best_pos = i;
            }

            let bias_dist = dist - self.bias[i];
            if bias_dist < best_bias_dist {
                best_bias_dist = bias_dist;
                best_bias_pos = i;
            }

            self.freq[i] -= BETA * self.freq[i];
            self.bias[i] += BETA_GAMMA * self.freq[i];
        }

        self.freq[best_pos] += BETA;
        self.bias[best_pos] -= BETA_GAMMA;

        best_bias_pos
    }

    /// Moves neuron `i` a fraction `alpha` of the way towards `color`.
    #[inline]
    pub fn alter_single(&mut self, alpha: f64, i: usize, color: &[f64; 3]) {
        move_towards(&mut self.neurons[i], alpha, color);
    }

    /// Moves the neurons within `rad` index positions of `i` towards `color`, with a strength
    /// falling off quadratically with the offset.
    pub fn alter_neighbors(&mut self, alpha: f64, rad: usize, i: usize, color: &[f64; 3]) {
        let rad = rad as isize;
        let i = i as isize;

        // Exclusive bounds. The lower one clamps to the background index, which the strict
        // comparison below never reaches.
        let mut lo = i - rad;
        if lo < SPECIALS as isize {
            lo = SPECIALS as isize - 1;
        }
        let hi = (i + rad).min(NET_SIZE as isize);

        let rad_sq = (rad * rad) as f64;
        let mut j = i + 1;
        let mut k = i - 1;
        let mut c: isize = 0;

        while j < hi || k > lo {
            let a = (alpha * (rad_sq - (c * c) as f64)) / rad_sq;
            c += 1;

            if j < hi {
                move_towards(&mut self.neurons[j as usize], a, color);
                j += 1;
            }
            if k > lo {
                move_towards(&mut self.neurons[k as usize], a, color);
                k -= 1;
            }
        }
    }
}

#[inline]
fn move_towards(p: &mut [f64; 3], alpha: f64, color: &[f64; 3]) {
    for (ch, target) in p.iter_mut().zip(color) {
        *ch -= alpha * (*ch - target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BG_COLOR;

    #[test]
    fn test_special_find() {
        let mut net = Network::new();
        net.set_background([12.0, 34.0, 56.0]);

        assert_eq!(net.special_find(&[0.0, 0.0, 0.0]), Some(0));
        assert_eq!(net.special_find(&[255.0, 255.0, 255.0]), Some(1));
        assert_eq!(net.special_find(&[12.0, 34.0, 56.0]), Some(BG_COLOR));
        assert_eq!(net.special_find(&[12.0, 34.0, 57.0]), None);
        assert_eq!(net.special_find(&[12.000001, 34.0, 56.0]), Some(BG_COLOR));
    }

    #[test]
    fn test_contest_picks_closest_without_bias() {
        let mut net = Network::new();
        // Neuron 3 + 100 sits at 255 * 100 / 253
        let v = 255.0 * 100.0 / 253.0;
        let winner = net.contest(&[v, v, v]);
        assert_eq!(winner, 103);
    }

    #[test]
    fn test_contest_never_returns_special() {
        let mut net = Network::new();
        for _ in 0..50 {
            assert!(net.contest(&[0.0, 0.0, 0.0]) >= SPECIALS);
            assert!(net.contest(&[255.0, 255.0, 255.0]) >= SPECIALS);
        }
    }

    #[test]
    fn test_contest_rewards_closest() {
        let mut net = Network::new();
        let before = net.freq[SPECIALS];
        net.contest(&[0.0, 0.0, 0.0]);

        let leaked = before - BETA * before;
        assert!((net.freq[SPECIALS] - (leaked + BETA)).abs() < 1e-15);
        assert!((net.bias[SPECIALS] - (BETA_GAMMA * leaked - BETA_GAMMA)).abs() < 1e-12);
        assert!((net.freq[SPECIALS + 1] - leaked).abs() < 1e-15);
        assert!(net.bias[SPECIALS + 1] > 0.0);
    }

    #[test]
    fn test_frequent_winner_loses_to_bias() {
        let mut net = Network::new();
        // Repeated wins drive the winner's bias negative until a neighbor takes over
        let winners = (0..200).map(|_| net.contest(&[0.0, 0.0, 0.0])).collect::<Vec<_>>();
        assert_eq!(winners[0], SPECIALS);
        assert!(winners.iter().any(|&w| w != SPECIALS));
        assert!(net.bias[SPECIALS] < 0.0);
    }

    #[test]
    fn test_learning_mass_converges_to_one() {
        let mut net = Network::new();
        let mut mass = net.learning_freq_mass();
        let colors = [[10.0, 200.0, 30.0], [250.0, 0.0, 90.0], [128.0, 128.0, 128.0]];

        for n in 0..3000 {
            net.contest(&colors[n % colors.len()]);
            let expected = (1.0 - BETA) * mass + BETA;
            let got = net.learning_freq_mass();
            assert!((got - expected).abs() < 1e-12);
            mass = got;
        }

        // The reserved neurons never leak, so the total stays within their share of 1.0
        let total = net.freq_mass();
        assert!(total >= 1.0 - 1e-12);
        assert!(total <= 1.0 + SPECIALS as f64 / NET_SIZE as f64 + 1e-12);
    }

    #[test]
    fn test_alter_single() {
        let mut net = Network::new();
        net.neurons[10] = [100.0, 100.0, 100.0];
        net.alter_single(0.25, 10, &[200.0, 0.0, 100.0]);
        assert_eq!(net.neurons[10], [125.0, 75.0, 100.0]);

        net.alter_single(1.0, 10, &[1.0, 2.0, 3.0]);
        assert_eq!(net.neurons[10], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_alter_neighbors_falloff() {
        let mut net = Network::new();
        for p in net.neurons[LEARN_RNG].iter_mut() {
            *p = [0.0; 3];
        }
        let target = [100.0, 100.0, 100.0];
        net.alter_neighbors(1.0, 4, 100, &target);

        // Winner untouched, first ring at full strength, then (16 - c^2) / 16
        assert_eq!(net.neurons[100], [0.0; 3]);
        assert_eq!(net.neurons[101][0], 100.0);
        assert_eq!(net.neurons[99][0], 100.0);
        assert_eq!(net.neurons[102][0], 100.0 * 15.0 / 16.0);
        assert_eq!(net.neurons[98][0], 100.0 * 15.0 / 16.0);
        assert_eq!(net.neurons[103][0], 100.0 * 12.0 / 16.0);
        assert_eq!(net.neurons[97][0], 100.0 * 12.0 / 16.0);
        assert_eq!(net.neurons[104], [0.0; 3]);
        assert_eq!(net.neurons[96], [0.0; 3]);
    }

    #[test]
    fn test_alter_neighbors_clamps_to_learning_range() {
        let mut net = Network::new();
        let specials = net.neurons[..SPECIALS].to_vec();
        net.alter_neighbors(1.0, 32, SPECIALS + 1, &[77.0, 77.0, 77.0]);
        assert_eq!(net.neurons[..SPECIALS].to_vec(), specials);
        assert_eq!(net.neurons[SPECIALS], [77.0; 3]);

        let mut net = Network::new();
        net.alter_neighbors(1.0, 32, NET_SIZE - 2, &[77.0, 77.0, 77.0]);
        assert!(net.neurons[NET_SIZE - 1].iter().all(|v| (v - 77.0).abs() < 1e-9));
    }
}
