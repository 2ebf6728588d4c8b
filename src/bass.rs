use crate::{
    base::{base_do_something, Base, DEFAULT_BASE_TEXT},
    decision::{Decide, Decision, RandomModulo},
};

/// Field value a `Bass` carries unless configured otherwise.
pub const DEFAULT_BASS: &str = "Pump";

/// The derived variant.
///
/// Depending on its decision provider it either returns its own field or
/// delegates to the base behavior. Providers are injected so both branches can
/// be forced.
pub struct Bass<D = Box<dyn Decide>> {
    bass: String,
    base_text: String,
    decider: D,
}

impl<D: Decide> Bass<D> {
    pub fn new(bass: impl Into<String>, base_text: impl Into<String>, decider: D) -> Self {
        Self {
            bass: bass.into(),
            base_text: base_text.into(),
            decider,
        }
    }

    /// Default field and base text with the given provider.
    pub fn with_decider(decider: D) -> Self {
        Self::new(DEFAULT_BASS, DEFAULT_BASE_TEXT, decider)
    }

    pub fn bass(&self) -> &str {
        &self.bass
    }

    pub fn decider(&self) -> &D {
        &self.decider
    }
}

impl Default for Bass {
    fn default() -> Self {
        Self::with_decider(Box::new(RandomModulo::thread()))
    }
}

impl<D: Decide> Base for Bass<D> {
    fn base_text(&self) -> &str {
        &self.base_text
    }

    fn do_something(&self) -> String {
        match self.decider.decide() {
            Decision::Own => self.bass.clone(),
            Decision::Delegate => base_do_something(self),
        }
    }
}

impl<D> std::fmt::Debug for Bass<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bass")
            .field("bass", &self.bass)
            .field("base_text", &self.base_text)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::decision::Always;

    #[test]
    fn own_branch_returns_field() {
        let bass = Bass::with_decider(Always(Decision::Own));
        assert_eq!(bass.do_something(), "Pump");
        assert_eq!(bass.decider().decide(), Decision::Own);
    }

    #[test]
    fn default_uses_default_texts() {
        let bass = Bass::default();
        assert_eq!(bass.bass(), DEFAULT_BASS);
        assert_eq!(bass.base_text(), DEFAULT_BASE_TEXT);
        let text = bass.do_something();
        assert!(text == "Pump" || text == "Base", "{}", text);
    }

    #[test]
    fn delegate_branch_returns_base_text() {
        let bass = Bass::new("Pump", "below", Always(Decision::Delegate));
        assert_eq!(bass.do_something(), "below");
    }

    #[test]
    fn follows_the_random_source() {
        // 3 -> own, 4 -> delegate, 5 -> delegate, 6 -> own
        let bass = Bass::new("Pump", "Base", RandomModulo::new(StepRng::new(3, 1)));
        let results: Vec<_> = (0..4).map(|_| bass.do_something()).collect();
        assert_eq!(results, vec!["Pump", "Base", "Base", "Pump"]);
    }
}
