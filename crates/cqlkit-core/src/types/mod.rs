mod blob;
mod time_id;

pub use blob::Blob;
pub use time_id::{
    ChaChaEntropy, EntropySource, MAX_TIMESTAMP_MS, TimeId, TimeIdError, TimeIdGenerator,
    extract_timestamp, time_ordered_id,
};
