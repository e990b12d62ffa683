use crate::version::Version;
use derive_more::Display;

///
/// StoreFeature
///
/// Store capability that a generated clause depends on.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum StoreFeature {
    CollectionIndexes,
    Collections,
    Counters,
    KeysIndexes,
}

impl StoreFeature {
    pub const ALL: [Self; 4] = [
        Self::CollectionIndexes,
        Self::Collections,
        Self::Counters,
        Self::KeysIndexes,
    ];

    /// First store release that accepts clauses using this feature.
    #[must_use]
    pub const fn min_version(self) -> Version {
        match self {
            Self::CollectionIndexes | Self::KeysIndexes => Version::new(2, 1, 0),
            Self::Collections => Version::new(1, 2, 0),
            Self::Counters => Version::new(0, 8, 0),
        }
    }
}
