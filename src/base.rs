/// Text returned by the base behavior unless configured otherwise.
pub const DEFAULT_BASE_TEXT: &str = "Base";

/// The base capability.
///
/// Implementers provide the text the default behavior returns. Overriding
/// [`Base::do_something`] is how a variant specializes the behavior, and
/// [`base_do_something`] is how an override reaches the default again.
pub trait Base {
    /// Text produced by the base behavior.
    fn base_text(&self) -> &str;

    fn do_something(&self) -> String {
        base_do_something(self)
    }
}

/// The default behavior of [`Base::do_something`], callable from overrides.
pub fn base_do_something<B: Base + ?Sized>(base: &B) -> String {
    base.base_text().to_owned()
}

impl<B: Base + ?Sized> Base for Box<B> {
    fn base_text(&self) -> &str {
        (**self).base_text()
    }

    fn do_something(&self) -> String {
        (**self).do_something()
    }
}

/// A value that only has the base behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plain {
    text: String,
}

impl Plain {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for Plain {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_TEXT)
    }
}

impl Base for Plain {
    fn base_text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_behavior_returns_base_text() {
        assert_eq!(Plain::default().do_something(), "Base");
        assert_eq!(Plain::new("elsewhere").do_something(), "elsewhere");
    }

    #[test]
    fn boxed_values_dispatch_dynamically() {
        let boxed: Box<dyn Base> = Box::new(Plain::new("dyn"));
        assert_eq!(boxed.do_something(), "dyn");
        assert_eq!(base_do_something(&boxed), "dyn");
    }
}
