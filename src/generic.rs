//! The generic helper wrapping any [`Base`] value.
use log::trace;

use crate::base::Base;

/// Literal the helper starts from.
pub const PREFIX: &str = "A B C";

/// Owns exactly one value implementing [`Base`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestGeneric<T: Base> {
    base: T,
}

impl<T: Base> TestGeneric<T> {
    pub fn new(base: T) -> Self {
        Self { base }
    }

    /// Appends the wrapped value's output to [`PREFIX`] and replaces every `B`
    /// with `C`.
    pub fn do_something_useful(&self) -> String {
        let s = format!("{}{}", PREFIX, self.base.do_something());
        let useful = s.replace('B', "C");
        trace!("{:?} -> {:?}", s, useful);
        useful
    }

    pub fn get_ref(&self) -> &T {
        &self.base
    }

    pub fn into_inner(self) -> T {
        self.base
    }
}

/// Wraps `base` and runs [`TestGeneric::do_something_useful`] once.
pub fn do_generic<T: Base>(base: T) -> String {
    TestGeneric::new(base).do_something_useful()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Plain;

    #[test]
    fn replaces_every_occurrence() {
        let generic = TestGeneric::new(Plain::new("BBaB"));
        assert_eq!(generic.do_something_useful(), "A C CCCaC");
    }

    #[test]
    fn wrapper_gives_the_value_back() {
        let generic = TestGeneric::new(Plain::new("x"));
        assert_eq!(generic.get_ref().base_text(), "x");
        assert_eq!(generic.into_inner(), Plain::new("x"));
    }
}
