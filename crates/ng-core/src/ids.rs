use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Compact, stable identifier used across the graph model.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
///
/// Graphs allocate IDs from a monotone counter and never reuse them, so an
/// identity stays unique within its owning graph even after removals.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

// IDs serialize as their 0-based index so external consumers never see the
// NonZero offset.
impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u32::deserialize(deserializer)?;
        Ok(Id::from_index(index))
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type VertexId = Id;
pub type EdgeId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn option_id_is_small() {
        // This is a classic reason for NonZero: Option<Id> can be same size as Id.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }

    #[test]
    fn id_serializes_as_index() {
        let id = Id::from_index(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: Id = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn index_round_trip(index in 0_u32..u32::MAX - 1) {
                let id = Id::from_index(index);
                prop_assert_eq!(id.index(), index);
                let text = serde_json::to_string(&id).unwrap();
                let back: Id = serde_json::from_str(&text).unwrap();
                prop_assert_eq!(back, id);
            }
        }
    }
}
