//! Flavour axes and the fixed-dimension flavour vector describing a dish.
//!
//! # Examples
//! ```
//! use palate_core::{FlavourAxis, FlavourVector};
//!
//! let vector = FlavourVector::new([0.4, 0.0, 0.1, 0.2, 0.9]).expect("finite components");
//! assert_eq!(vector.get(FlavourAxis::Umami), 0.9);
//! assert_eq!(FlavourAxis::Salty.to_string(), "salty");
//! ```

use thiserror::Error;

/// Number of flavour axes carried by every [`FlavourVector`].
pub const FLAVOUR_DIMENSIONS: usize = 5;

/// A named taste axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlavourAxis {
    /// Saltiness.
    Salty,
    /// Bitterness.
    Bitter,
    /// Sweetness.
    Sweet,
    /// Sourness.
    Sour,
    /// Savoury depth.
    Umami,
}

impl FlavourAxis {
    /// Every axis in vector order.
    pub const ALL: [Self; FLAVOUR_DIMENSIONS] = [
        Self::Salty,
        Self::Bitter,
        Self::Sweet,
        Self::Sour,
        Self::Umami,
    ];

    /// Return the axis as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use palate_core::FlavourAxis;
    ///
    /// assert_eq!(FlavourAxis::Sour.as_str(), "sour");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salty => "salty",
            Self::Bitter => "bitter",
            Self::Sweet => "sweet",
            Self::Sour => "sour",
            Self::Umami => "umami",
        }
    }

    /// Position of the axis inside a [`FlavourVector`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Salty => 0,
            Self::Bitter => 1,
            Self::Sweet => 2,
            Self::Sour => 3,
            Self::Umami => 4,
        }
    }
}

impl std::fmt::Display for FlavourAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FlavourAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "salty" => Ok(Self::Salty),
            "bitter" => Ok(Self::Bitter),
            "sweet" => Ok(Self::Sweet),
            "sour" => Ok(Self::Sour),
            "umami" => Ok(Self::Umami),
            _ => Err(format!("unknown flavour axis '{s}'")),
        }
    }
}

/// Errors returned by [`FlavourVector::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FlavourVectorError {
    /// A component was NaN or infinite.
    #[error("{axis} component must be finite, found {value}")]
    NonFinite {
        /// Axis carrying the bad value.
        axis: FlavourAxis,
        /// Offending value.
        value: f64,
    },
}

/// Taste profile of a dish across every [`FlavourAxis`].
///
/// Components are always finite. They are expected to be non-negative
/// intensities, but negative values are accepted so externally normalised
/// data can be loaded unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlavourVector([f64; FLAVOUR_DIMENSIONS]);

impl FlavourVector {
    /// Validate and construct a vector from components in [`FlavourAxis::ALL`]
    /// order.
    ///
    /// # Errors
    /// Returns [`FlavourVectorError::NonFinite`] when any component is NaN or
    /// infinite.
    pub fn new(components: [f64; FLAVOUR_DIMENSIONS]) -> Result<Self, FlavourVectorError> {
        for (axis, value) in FlavourAxis::ALL.into_iter().zip(components) {
            if !value.is_finite() {
                return Err(FlavourVectorError::NonFinite { axis, value });
            }
        }
        Ok(Self(components))
    }

    /// Return the component for `axis`.
    #[must_use]
    pub fn get(&self, axis: FlavourAxis) -> f64 {
        self.0.get(axis.index()).copied().unwrap_or_default()
    }

    /// Borrow the raw components in axis order.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; FLAVOUR_DIMENSIONS] {
        &self.0
    }

    /// Iterate `(axis, value)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (FlavourAxis, f64)> + '_ {
        FlavourAxis::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl TryFrom<[f64; FLAVOUR_DIMENSIONS]> for FlavourVector {
    type Error = FlavourVectorError;

    fn try_from(components: [f64; FLAVOUR_DIMENSIONS]) -> Result<Self, Self::Error> {
        Self::new(components)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    //! Flavour vectors travel as objects keyed by axis name.

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{FlavourVector, FlavourVectorError};

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct FlavourRecord {
        salty: f64,
        bitter: f64,
        sweet: f64,
        sour: f64,
        umami: f64,
    }

    impl TryFrom<FlavourRecord> for FlavourVector {
        type Error = FlavourVectorError;

        fn try_from(record: FlavourRecord) -> Result<Self, Self::Error> {
            Self::new([
                record.salty,
                record.bitter,
                record.sweet,
                record.sour,
                record.umami,
            ])
        }
    }

    impl From<&FlavourVector> for FlavourRecord {
        fn from(vector: &FlavourVector) -> Self {
            let [salty, bitter, sweet, sour, umami] = *vector.as_array();
            Self {
                salty,
                bitter,
                sweet,
                sour,
                umami,
            }
        }
    }

    impl Serialize for FlavourVector {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            FlavourRecord::from(self).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for FlavourVector {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let record = FlavourRecord::deserialize(deserializer)?;
            Self::try_from(record).map_err(serde::de::Error::custom)
        }
    }
}
