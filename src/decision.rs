//! Decision providers for the `Bass` branch.
use std::{cell::RefCell, fmt::Display, str::FromStr};

use log::trace;
use rand::{rngs::StdRng, rngs::ThreadRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Outcome of a single decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Return the value's own field.
    Own,
    /// Fall back to the base behavior.
    Delegate,
}

/// Anything that can pick a branch for [`Bass::do_something`](crate::Bass).
pub trait Decide {
    fn decide(&self) -> Decision;
}

impl<D: Decide + ?Sized> Decide for Box<D> {
    fn decide(&self) -> Decision {
        (**self).decide()
    }
}

impl<D: Decide + ?Sized> Decide for &D {
    fn decide(&self) -> Decision {
        (**self).decide()
    }
}

/// Always answers with the same decision.
#[derive(Copy, Clone, Debug)]
pub struct Always(pub Decision);

impl Decide for Always {
    fn decide(&self) -> Decision {
        self.0
    }
}

/// Answers [`Decision::Own`] when the next random `u32` is divisible by 3.
///
/// The generator sits behind a `RefCell` so deciding only needs `&self`; the
/// provider is not meant to be shared across threads.
#[derive(Debug)]
pub struct RandomModulo<R> {
    rng: RefCell<R>,
}

impl<R: RngCore> RandomModulo<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl RandomModulo<ThreadRng> {
    /// Backed by the thread local generator.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomModulo<StdRng> {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Decide for RandomModulo<R> {
    fn decide(&self) -> Decision {
        let value = self.rng.borrow_mut().next_u32();
        let decision = if value % 3 == 0 {
            Decision::Own
        } else {
            Decision::Delegate
        };
        trace!("random value {} -> {:?}", value, decision);
        decision
    }
}

/// Serializable description of a decision provider.
///
/// Parsed from `own`, `delegate`, `random` or `seeded:<n>`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Own,
    Delegate,
    #[default]
    Random,
    Seeded(u64),
}

impl Strategy {
    /// Build the provider this strategy describes.
    pub fn provider(self) -> Box<dyn Decide> {
        match self {
            Strategy::Own => Box::new(Always(Decision::Own)),
            Strategy::Delegate => Box::new(Always(Decision::Delegate)),
            Strategy::Random => Box::new(RandomModulo::thread()),
            Strategy::Seeded(seed) => Box::new(RandomModulo::seeded(seed)),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "own" => Ok(Strategy::Own),
            "delegate" => Ok(Strategy::Delegate),
            "random" => Ok(Strategy::Random),
            other => other
                .strip_prefix("seeded:")
                .and_then(|seed| seed.parse().ok())
                .map(Strategy::Seeded)
                .ok_or_else(|| Error::InvalidStrategy(s.to_string())),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Own => write!(f, "own"),
            Strategy::Delegate => write!(f, "delegate"),
            Strategy::Random => write!(f, "random"),
            Strategy::Seeded(seed) => write!(f, "seeded:{}", seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn modulo_picks_own_on_multiples_of_three() {
        // 0, 1, 2, 3, 4, 5, 6
        let provider = RandomModulo::new(StepRng::new(0, 1));
        let decisions: Vec<_> = (0..7).map(|_| provider.decide()).collect();
        assert_eq!(
            decisions,
            vec![
                Decision::Own,
                Decision::Delegate,
                Decision::Delegate,
                Decision::Own,
                Decision::Delegate,
                Decision::Delegate,
                Decision::Own,
            ]
        );
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = RandomModulo::seeded(42);
        let b = RandomModulo::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.decide(), b.decide());
        }
    }

    #[test]
    fn parse_strategies() {
        assert_eq!("own".parse::<Strategy>().unwrap(), Strategy::Own);
        assert_eq!(" Delegate ".parse::<Strategy>().unwrap(), Strategy::Delegate);
        assert_eq!("random".parse::<Strategy>().unwrap(), Strategy::Random);
        assert_eq!("seeded:7".parse::<Strategy>().unwrap(), Strategy::Seeded(7));
        assert!(matches!(
            "seeded:x".parse::<Strategy>(),
            Err(Error::InvalidStrategy(s)) if s == "seeded:x"
        ));
        assert!("sometimes".parse::<Strategy>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for strategy in [
            Strategy::Own,
            Strategy::Delegate,
            Strategy::Random,
            Strategy::Seeded(3),
        ] {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn fixed_providers() {
        assert_eq!(Strategy::Own.provider().decide(), Decision::Own);
        assert_eq!(Strategy::Delegate.provider().decide(), Decision::Delegate);
    }
}
