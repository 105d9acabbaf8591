//! Unit-safe physical quantities.
//!
//! Every physical value in the engine is a [`uom`] quantity in `f64`.  The
//! engine never handles a raw float without a unit tag, except at the single
//! point where an expected fault count (a dimensionless ratio) is handed to
//! the Poisson sampler.
//!
//! Energy per distance has the SI dimension of force (J/m = N), so
//! [`EnergyPerDistance`] is an alias of `uom`'s `Force`.

use uom::si::energy::kilowatt_hour;
use uom::si::frequency::hertz;
use uom::si::length::mile;
use uom::si::time::hour;
use uom::si::velocity::mile_per_hour;

pub use uom::ConstZero;
pub use uom::si::f64::{Energy, Frequency, Length, Power, Ratio, Time, Velocity};

/// Energy consumed per unit distance travelled.
pub type EnergyPerDistance = uom::si::f64::Force;

/// Speed, in the vocabulary of the vehicle catalog.
pub type Speed = Velocity;

// ── Constructors for catalog units ───────────────────────────────────────────

#[inline]
pub fn hours(value: f64) -> Time {
    Time::new::<hour>(value)
}

#[inline]
pub fn miles_per_hour(value: f64) -> Speed {
    Speed::new::<mile_per_hour>(value)
}

#[inline]
pub fn kilowatt_hours(value: f64) -> Energy {
    Energy::new::<kilowatt_hour>(value)
}

/// Energy consumption expressed in kWh per mile.
#[inline]
pub fn kilowatt_hours_per_mile(value: f64) -> EnergyPerDistance {
    kilowatt_hours(value) / Length::new::<mile>(1.0)
}

/// Occurrence rate expressed in events per hour.
#[inline]
pub fn per_hour(value: f64) -> Frequency {
    Frequency::new::<hertz>(value / 3_600.0)
}

// ── Comparison helpers ───────────────────────────────────────────────────────
//
// Quantities over `f64` are only `PartialOrd`.  NaN never enters the engine
// (inputs are clamped at construction), so a plain `<` comparison is total
// in practice.

/// The smaller of two durations.
#[inline]
pub fn min_time(a: Time, b: Time) -> Time {
    if b < a { b } else { a }
}

/// Clamp a quantity-like value to be non-negative, mapping NaN to zero.
#[inline]
pub fn non_negative<Q>(value: Q) -> Q
where
    Q: PartialOrd + ConstZero,
{
    if value > Q::ZERO { value } else { Q::ZERO }
}
