//! NeuQuant neural-net color quantization.
//!
//! Reduces a true-color pixel sequence to a 256 color palette with a self-organizing
//! Kohonen network, following Anthony Dekker's 1994 algorithm.

pub mod color;
pub mod config;
pub mod constants;
pub mod contest;
pub mod error;
pub mod index;
pub mod learner;
pub mod metrics;
pub mod network;
pub mod pixels;
pub mod quantizer;
pub mod serde_utils;
pub mod utils;

pub use config::Config;
pub use error::{QuantizeError, Result};
pub use quantizer::{NeuQuant, Palette};
