use {
    crate::error::Error,
    serde::{Deserialize, Serialize},
};

/// Denominator of every fee value: a fee of `FEE_PRECISION` is 100%.
pub const FEE_PRECISION: u32 = 100_000;

/// Upper bound for default and custom swap fees (10%).
pub const MAX_SWAP_FEE: Fee = Fee(10_000);

/// Upper bound for the protocol fee share (100%).
pub const MAX_PROTOCOL_FEE: Fee = Fee(FEE_PRECISION);

/// Raw custom fee value meaning "charge no fee at all". It is the largest
/// value of a 24 bit fee field and can never be a legitimate fee.
pub const SENTINEL_ZERO_FEE: u32 = 0xff_ffff;

/// A fee in units of 1/100,000.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct Fee(pub u32);

impl Fee {
    pub const ZERO: Self = Self(0);

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the fee if it does not exceed `max`.
    pub fn bounded(self, max: Fee) -> Result<Self, Error> {
        if self > max {
            return Err(Error::InvalidFee { fee: self.0, max: max.0 });
        }
        Ok(self)
    }
}

/// Per pool override of the swap fee.
///
/// The override used to be a single integer where `0` meant "no override"
/// and [`SENTINEL_ZERO_FEE`] meant "no fee". Both intents are explicit
/// variants here; [`CustomSwapFee::from_raw`] and [`CustomSwapFee::to_raw`]
/// convert from and to that single field encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CustomSwapFee {
    /// Use the default swap fee of the pool's type.
    #[default]
    Unset,
    /// Charge no swap fee regardless of the type default.
    Zero,
    /// Charge exactly this fee.
    Fixed(Fee),
}

impl CustomSwapFee {
    pub fn from_raw(raw: u32) -> Result<Self, Error> {
        match raw {
            0 => Ok(Self::Unset),
            SENTINEL_ZERO_FEE => Ok(Self::Zero),
            fee => Fee(fee).bounded(MAX_SWAP_FEE).map(Self::Fixed),
        }
    }

    pub fn to_raw(self) -> u32 {
        match self {
            Self::Unset => 0,
            Self::Zero => SENTINEL_ZERO_FEE,
            Self::Fixed(fee) => fee.0,
        }
    }

    /// Checks the override against [`MAX_SWAP_FEE`]. `Fixed(0)` collapses to
    /// `Unset`, like storing a raw zero does.
    pub fn validated(self) -> Result<Self, Error> {
        match self {
            Self::Fixed(fee) if fee.is_zero() => Ok(Self::Unset),
            Self::Fixed(fee) => fee.bounded(MAX_SWAP_FEE).map(Self::Fixed),
            other => Ok(other),
        }
    }
}

impl std::fmt::Display for CustomSwapFee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Zero => f.write_str("zero"),
            Self::Fixed(fee) => write!(f, "{fee}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest]
    #[case(0, CustomSwapFee::Unset)]
    #[case(1, CustomSwapFee::Fixed(Fee(1)))]
    #[case(10_000, CustomSwapFee::Fixed(Fee(10_000)))]
    #[case(SENTINEL_ZERO_FEE, CustomSwapFee::Zero)]
    fn decodes_raw_custom_fee(#[case] raw: u32, #[case] expected: CustomSwapFee) {
        assert_eq!(CustomSwapFee::from_raw(raw).unwrap(), expected);
        assert_eq!(expected.to_raw(), raw);
    }

    #[rstest]
    #[case(10_001)]
    #[case(SENTINEL_ZERO_FEE - 1)]
    #[case(u32::MAX)]
    fn rejects_raw_fees_above_bound(#[case] raw: u32) {
        assert!(matches!(
            CustomSwapFee::from_raw(raw),
            Err(Error::InvalidFee { fee, max: 10_000 }) if fee == raw
        ));
    }

    #[test]
    fn fixed_zero_collapses_to_unset() {
        assert_eq!(
            CustomSwapFee::Fixed(Fee::ZERO).validated().unwrap(),
            CustomSwapFee::Unset
        );
    }

    #[test]
    fn sentinel_is_exempt_from_bound() {
        assert_eq!(
            CustomSwapFee::Zero.validated().unwrap(),
            CustomSwapFee::Zero
        );
        assert!(CustomSwapFee::Fixed(Fee(10_001)).validated().is_err());
    }
}
