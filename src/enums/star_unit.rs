#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarUnit {
    Full,
    Half,
    Empty,
}

impl StarUnit {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Full => "★",
            Self::Half => "⯪",
            Self::Empty => "☆",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Full => "fas fa-star",
            Self::Half => "fas fa-star-half-alt",
            Self::Empty => "far fa-star",
        }
    }
}
