//! Sensor module - serial transport, weight sampling, and event classification
//!
//! This is the noisy edge of the system. Everything in here absorbs its own
//! failures: a missing port, a stalled controller, or a garbled line degrades
//! to "no event this tick", never to a crash of the game loop.

pub mod classifier;
pub mod link;
pub mod sampler;

pub use classifier::EventClassifier;
pub use link::{NullLink, SerialLink, SerialPortLink};
pub use sampler::WeightSampler;
