// frosmo-api: Async Rust client for the Frosmo Graniitti API

pub mod client;
pub mod error;
pub mod models;
pub mod region;
pub mod transport;

pub use client::GraniittiClient;
pub use error::Error;
pub use models::{Segment, SegmentGroup, Site};
pub use region::{Region, base_url};
pub use transport::TransportConfig;
