use std::fmt;

/// Exact rational value with a positive denominator, always in lowest terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };

    pub fn from_integer(value: i64) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    /// Returns `None` for a zero denominator or when normalising overflows.
    pub fn new(numer: i64, denom: i64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let divisor = i64::try_from(gcd(numer, denom)).ok()?;
        let (mut numer, mut denom) = (numer / divisor, denom / divisor);
        if denom < 0 {
            numer = numer.checked_neg()?;
            denom = denom.checked_neg()?;
        }
        Some(Self { numer, denom })
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// The integer value, if the fraction is whole
    pub fn to_integer(&self) -> Option<i64> {
        self.is_integer().then_some(self.numer)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let numer = self
            .numer
            .checked_mul(rhs.denom)?
            .checked_add(rhs.numer.checked_mul(self.denom)?)?;
        Self::new(numer, self.denom.checked_mul(rhs.denom)?)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        let numer = self
            .numer
            .checked_mul(rhs.denom)?
            .checked_sub(rhs.numer.checked_mul(self.denom)?)?;
        Self::new(numer, self.denom.checked_mul(rhs.denom)?)
    }

    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        Self::new(
            self.numer.checked_mul(rhs.numer)?,
            self.denom.checked_mul(rhs.denom)?,
        )
    }

    /// `None` when `rhs` is zero or the result overflows
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        Self::new(
            self.numer.checked_mul(rhs.denom)?,
            self.denom.checked_mul(rhs.numer)?,
        )
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
