//! Lookup keys for the catalog's bucketed tables.
//!
//! Profile values arrive as free-form strings. Each key type resolves a raw
//! string to a known bucket, falling back to a designated default so lookups
//! stay total no matter what the profile contains. Matching is exact; the
//! intake forms submit the canonical capitalized values.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Resolve a raw profile value. Unrecognized values map to `Other`.
    #[must_use]
    pub fn from_key(raw: &str) -> Self {
        match raw {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceShape {
    Round,
    Square,
    Oval,
    Heart,
}

impl FaceShape {
    /// Resolve a raw profile value. Unrecognized values map to `Oval`.
    #[must_use]
    pub fn from_key(raw: &str) -> Self {
        match raw {
            "Round" => FaceShape::Round,
            "Square" => FaceShape::Square,
            "Heart" => FaceShape::Heart,
            _ => FaceShape::Oval,
        }
    }
}

/// Which care-product table a suggestion request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Skin,
    Hair,
}

impl ProductKind {
    /// Resolve a raw request value. Unrecognized values map to `Skin`, the
    /// first available table.
    #[must_use]
    pub fn from_key(raw: &str) -> Self {
        match raw {
            "hair" => ProductKind::Hair,
            _ => ProductKind::Skin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_resolves_known_values() {
        assert_eq!(Gender::from_key("Male"), Gender::Male);
        assert_eq!(Gender::from_key("Female"), Gender::Female);
        assert_eq!(Gender::from_key("Other"), Gender::Other);
    }

    #[test]
    fn gender_defaults_to_other() {
        assert_eq!(Gender::from_key("male"), Gender::Other);
        assert_eq!(Gender::from_key("Nonbinary"), Gender::Other);
        assert_eq!(Gender::from_key(""), Gender::Other);
    }

    #[test]
    fn face_shape_defaults_to_oval() {
        assert_eq!(FaceShape::from_key("Round"), FaceShape::Round);
        assert_eq!(FaceShape::from_key("Triangle"), FaceShape::Oval);
        assert_eq!(FaceShape::from_key("oval"), FaceShape::Oval);
    }

    #[test]
    fn product_kind_defaults_to_skin() {
        assert_eq!(ProductKind::from_key("skin"), ProductKind::Skin);
        assert_eq!(ProductKind::from_key("hair"), ProductKind::Hair);
        assert_eq!(ProductKind::from_key("nails"), ProductKind::Skin);
    }
}
