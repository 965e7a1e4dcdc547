use crate::structs::star_rating::StarRating;

/// Icon classes for the ten star units of `rating`.
pub fn star_classes(rating: f64) -> Vec<&'static str> {
    StarRating::from_rating(rating)
        .units()
        .iter()
        .map(|unit| unit.css_class())
        .collect()
}

/// Ten-character star bar for terminals.
pub fn generate_star_text(rating: f64) -> String {
    StarRating::from_rating(rating)
        .units()
        .iter()
        .map(|unit| unit.glyph())
        .collect()
}

pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.0}", rating)
    } else {
        format!("{}", rating)
    }
}
