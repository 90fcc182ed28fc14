//! Distance units.
//!
//! The canonical scaling unit for this dimension is [`Meter`] (`Meter::NUM == 1`,
//! `Meter::DEN == 1`). All other distance units are expressed as exact rational
//! ratios to metres.
//!
//! This module provides:
//!
//! - **SI ladder**: metric prefix family for metres from nano- to kilo-.
//! - **Imperial and surveying units**: thou, inch, link, foot, yard, rod, chain,
//!   furlong, (statute) mile, league.
//! - **Nautical units**: Admiralty fathom, cable and nautical mile.
//! - **Astronomy and geodesy**: Earth radius, lunar distance, astronomical unit,
//!   light-year, parsec.
//!
//! Notes on definitions used here:
//!
//! - **Imperial units** follow the international yard and pound agreement: the
//!   foot is exactly `0.3048 m` and every other imperial unit is a rational
//!   multiple of it.
//! - **Nautical units** are the Admiralty definitions: the nautical mile is
//!   `6080 ft`, the cable a tenth of that and the fathom a hundredth of a cable.
//! - **Astronomical unit (AU)** is exactly `149_597_870_700 m` (IAU 2012).
//! - **Light-year (ly)** is the IAU value `9_460_730_472_580_800 m` (one Julian
//!   year at the exact speed of light).
//! - **Parsec (pc)** is `648_000 / π au`, stored as the conventional
//!   `3.08567758146719e16 m` figure.
//!
//! Every ratio is stored as an integer fraction in lowest terms, so chained
//! conversions introduce no rounding beyond the final representation.
//!
//! ```rust
//! use mensura_core::distance::{Feet, Meter};
//!
//! let ft = Feet::new(1250.0);
//! let m = ft.to::<Meter>();
//! assert_eq!(m.value(), 381.0);
//! ```

use crate::{Dimension, Quantity, Unit};
use mensura_derive::Unit;

/// Dimension tag for distance.
pub enum Distance {}
impl Dimension for Distance {}

/// Marker trait for any [`Unit`] whose dimension is [`Distance`].
pub trait DistanceUnit: Unit<Dim = Distance> {}
impl<T: Unit<Dim = Distance>> DistanceUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// SI base unit and metric ladder
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Distance, num = 1)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// British spelling of [`Meters`].
pub type Metres = Meters;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Distance, num = 1_000)]
pub struct Kilometer;
/// Type alias shorthand for [`Kilometer`].
pub type Km = Kilometer;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Km>;
/// British spelling of [`Kilometers`].
pub type Kilometres = Kilometers;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Decimetre (`1/10 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dm", dimension = Distance, num = 1, den = 10)]
pub struct Decimeter;
/// A quantity measured in decimetres.
pub type Decimeters = Quantity<Decimeter>;
/// British spelling of [`Decimeters`].
pub type Decimetres = Decimeters;
/// One decimetre.
pub const DM: Decimeters = Decimeters::new(1.0);

/// Centimetre (`1/100 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", dimension = Distance, num = 1, den = 100)]
pub struct Centimeter;
/// Type alias shorthand for [`Centimeter`].
pub type Cm = Centimeter;
/// A quantity measured in centimetres.
pub type Centimeters = Quantity<Cm>;
/// British spelling of [`Centimeters`].
pub type Centimetres = Centimeters;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Millimetre (`1/1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", dimension = Distance, num = 1, den = 1_000)]
pub struct Millimeter;
/// Type alias shorthand for [`Millimeter`].
pub type Mm = Millimeter;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Mm>;
/// British spelling of [`Millimeters`].
pub type Millimetres = Millimeters;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Micrometre (`1/1_000_000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "um", dimension = Distance, num = 1, den = 1_000_000)]
pub struct Micrometer;
/// Type alias shorthand for [`Micrometer`].
pub type Um = Micrometer;
/// A quantity measured in micrometres.
pub type Micrometers = Quantity<Um>;
/// British spelling of [`Micrometers`].
pub type Micrometres = Micrometers;
/// One micrometre.
pub const UM: Micrometers = Micrometers::new(1.0);

/// Nanometre (`1/1_000_000_000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm", dimension = Distance, num = 1, den = 1_000_000_000)]
pub struct Nanometer;
/// Type alias shorthand for [`Nanometer`].
pub type Nm = Nanometer;
/// A quantity measured in nanometres.
pub type Nanometers = Quantity<Nm>;
/// British spelling of [`Nanometers`].
pub type Nanometres = Nanometers;
/// One nanometre.
pub const NM: Nanometers = Nanometers::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Imperial and surveying units
// ─────────────────────────────────────────────────────────────────────────────

/// Thou (`1/12000 ft`, i.e. one thousandth of an inch).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "th", dimension = Distance, num = 3_048, den = 10_000 * 12_000)]
pub struct Thou;
/// A quantity measured in thous.
pub type Thous = Quantity<Thou>;
/// One thou.
pub const TH: Thous = Thous::new(1.0);

/// Inch (`0.0254 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Distance, num = 254, den = 10_000)]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;
/// One inch.
pub const INCH: Inches = Inches::new(1.0);

/// Link (`1/100 of a chain`, i.e. `0.66 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "li", dimension = Distance, num = 66 * 3_048, den = 100 * 10_000)]
pub struct Link;
/// A quantity measured in links.
pub type Links = Quantity<Link>;
/// One link.
pub const LINK: Links = Links::new(1.0);

/// Foot (`0.3048 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Distance, num = 3_048, den = 10_000)]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// Yard (`3 ft`, i.e. `0.9144 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", dimension = Distance, num = 3 * 3_048, den = 10_000)]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards = Quantity<Yard>;
/// One yard.
pub const YD: Yards = Yards::new(1.0);

/// Rod / pole / perch (`16.5 ft` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rd", dimension = Distance, num = 33 * 3_048, den = 2 * 10_000)]
pub struct Rod;
/// A quantity measured in rods/poles/perches.
pub type Rods = Quantity<Rod>;
/// One rod.
pub const ROD: Rods = Rods::new(1.0);

/// Chain (`66 ft` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ch", dimension = Distance, num = 66 * 3_048, den = 10_000)]
pub struct Chain;
/// A quantity measured in chains.
pub type Chains = Quantity<Chain>;
/// One chain.
pub const CHAIN: Chains = Chains::new(1.0);

/// Furlong (`660 ft`, i.e. ten chains).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "fur", dimension = Distance, num = 660 * 3_048, den = 10_000)]
pub struct Furlong;
/// A quantity measured in furlongs.
pub type Furlongs = Quantity<Furlong>;
/// One furlong.
pub const FUR: Furlongs = Furlongs::new(1.0);

/// (Statute) mile (`5280 ft`, i.e. `1609.344 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", dimension = Distance, num = 5_280 * 3_048, den = 10_000)]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles = Quantity<Mile>;
/// One mile.
pub const MI: Miles = Miles::new(1.0);

/// League (`3 mi` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lea", dimension = Distance, num = 15_840 * 3_048, den = 10_000)]
pub struct League;
/// A quantity measured in leagues.
pub type Leagues = Quantity<League>;
/// One league.
pub const LEA: Leagues = Leagues::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Nautical units (Admiralty definitions)
// ─────────────────────────────────────────────────────────────────────────────

/// Fathom (`6.08 ft`, one hundredth of an Admiralty cable).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ftm", dimension = Distance, num = 608 * 3_048, den = 100 * 10_000)]
pub struct Fathom;
/// A quantity measured in fathoms.
pub type Fathoms = Quantity<Fathom>;
/// One fathom.
pub const FTM: Fathoms = Fathoms::new(1.0);

/// Cable (`608 ft`, one tenth of an Admiralty nautical mile).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cb", dimension = Distance, num = 608 * 3_048, den = 10_000)]
pub struct Cable;
/// A quantity measured in cables.
pub type Cables = Quantity<Cable>;
/// One cable.
pub const CABLE: Cables = Cables::new(1.0);

/// Admiralty nautical mile (`6080 ft` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nmi", dimension = Distance, num = 6_080 * 3_048, den = 10_000)]
pub struct NauticalMile;
/// A quantity measured in nautical miles.
pub type NauticalMiles = Quantity<NauticalMile>;
/// One nautical mile.
pub const NMI: NauticalMiles = NauticalMiles::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Astronomy and geodesy
// ─────────────────────────────────────────────────────────────────────────────

/// Earth mean radius (nominal, `6371 km`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "R", dimension = Distance, num = 6_371 * 1_000)]
pub struct EarthRadius;
/// A quantity measured in Earth radii.
pub type EarthRadii = Quantity<EarthRadius>;
/// One Earth radius (mean).
pub const R_EARTH: EarthRadii = EarthRadii::new(1.0);

/// Lunar distance (Earth-Moon mean distance, `384_402 km`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "LD", dimension = Distance, num = 384_402 * 1_000)]
pub struct LunarDistance;
/// A quantity measured in lunar distances.
pub type LunarDistances = Quantity<LunarDistance>;
/// One lunar distance.
pub const LD: LunarDistances = LunarDistances::new(1.0);

/// Astronomical unit. Exact (IAU 2012): metres per AU.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "AU", dimension = Distance, num = 149_597_870_700)]
pub struct AstronomicalUnit;
/// Type alias shorthand for [`AstronomicalUnit`].
pub type Au = AstronomicalUnit;
/// A quantity measured in astronomical units.
pub type AstronomicalUnits = Quantity<Au>;
/// One astronomical unit.
pub const AU: AstronomicalUnits = AstronomicalUnits::new(1.0);

/// Light-year: one Julian year (`365.25 d`) at `c = 299_792_458 m/s`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ly", dimension = Distance, num = 94_607_304_725_808 * 100)]
pub struct LightYear;
/// Type alias shorthand for [`LightYear`].
pub type Ly = LightYear;
/// A quantity measured in light-years.
pub type LightYears = Quantity<Ly>;
/// One light-year.
pub const LY: LightYears = LightYears::new(1.0);

/// Parsec (`648_000 / π au`, stored as the conventional `3.08567758146719e16 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pc", dimension = Distance, num = 308_567_758_146_719 * 100)]
pub struct Parsec;
/// Type alias shorthand for [`Parsec`].
pub type Pc = Parsec;
/// A quantity measured in parsecs.
pub type Parsecs = Quantity<Pc>;
/// One parsec.
pub const PC: Parsecs = Parsecs::new(1.0);

// Generate all bidirectional From implementations between distance units.
//
// This single invocation ensures that any quantity measured in one distance
// unit can be converted into any other via `From`/`Into`, for any pair of
// representation types.
crate::impl_unit_conversions!(
    Meter,
    Kilometer,
    Decimeter,
    Centimeter,
    Millimeter,
    Micrometer,
    Nanometer,
    Thou,
    Inch,
    Link,
    Foot,
    Yard,
    Rod,
    Chain,
    Furlong,
    Mile,
    League,
    Fathom,
    Cable,
    NauticalMile,
    EarthRadius,
    LunarDistance,
    AstronomicalUnit,
    LightYear,
    Parsec
);
