// gen2phy-rs/gen2phy/src/prelude.rs

pub use crate::profile::ReaderProfile;
pub use crate::receiver::{
    CoarseSync, DcRemoval, EqualizerMask, FineSync, FineSyncKernel, MatchedFilter,
    PreambleTemplate, ReceiverConfig, SearchWindow,
};
pub use crate::timing::{Durations, RfidConfig, RfidConfigBuilder, TxConfig};
pub use crate::{DivideRatio, Error, ReaderCommand, ReaderReceive, Result};

// Re-export the sync helpers for convenience
pub use crate::receiver::{coarse_sync, equalize, estimate_channel_gain, fine_sync};
