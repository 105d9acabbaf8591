//! Strongly typed identifier wrappers for vehicles, vehicle models, and
//! charging stations.
//!
//! All IDs are `Copy + Ord + Hash` so they can key ordered and hashed maps
//! alike.  Registries in the other `fleet-*` crates store these by value and
//! resolve them back to the owning entity; an unknown id is an ordinary
//! `None`, never a panic.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize`, e.g. for positional lookups.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Globally-unique identifier of an individual vehicle.
    pub struct VehicleId(u32);
}

typed_id! {
    /// Globally-unique identifier of a vehicle model.
    pub struct VehicleModelId(u32);
}

typed_id! {
    /// Globally-unique identifier of a charging station.
    pub struct ChargingStationId(u32);
}
