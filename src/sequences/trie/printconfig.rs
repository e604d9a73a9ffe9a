use typed_builder::TypedBuilder;

/// Which annotation, if any, follows each leaf in a dump.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Annotation {
    None,
    Length,
    Stats,
}

#[derive(TypedBuilder, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PrintOptions {
    #[builder(default)]
    pub lengths: bool,
    #[builder(default)]
    pub stats: bool,
}

impl PrintOptions {
    /// Stats win when both annotations are requested.
    pub fn annotation(&self) -> Annotation {
        if self.stats {
            Annotation::Stats
        } else if self.lengths {
            Annotation::Length
        } else {
            Annotation::None
        }
    }
}
