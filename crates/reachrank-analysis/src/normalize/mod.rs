//! Per-platform normalizers.
//!
//! Each platform resolves its provider context once per analysis; the four
//! category normalizers share it. Provider failures never propagate: every
//! normalizer returns a structurally valid record whose source label embeds
//! the failure note.

pub(crate) mod instagram;
pub(crate) mod youtube;

use crate::records::PersonaType;

/// Infer the account archetype from bio keywords. This is keyword matching,
/// not semantic analysis.
pub(crate) fn infer_persona_type(bio: &str) -> PersonaType {
    let bio = bio.to_lowercase();
    if bio.contains("motivation") {
        PersonaType::ThoughtLeader
    } else if bio.contains("entertainment") {
        PersonaType::Entertainer
    } else {
        PersonaType::Creator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motivation_bio_is_thought_leader() {
        assert_eq!(
            infer_persona_type("Daily Motivation and mindset"),
            PersonaType::ThoughtLeader
        );
    }

    #[test]
    fn entertainment_bio_is_entertainer() {
        assert_eq!(
            infer_persona_type("pure ENTERTAINMENT channel"),
            PersonaType::Entertainer
        );
    }

    #[test]
    fn other_bios_default_to_creator() {
        assert_eq!(infer_persona_type("cooking videos"), PersonaType::Creator);
        assert_eq!(infer_persona_type(""), PersonaType::Creator);
    }
}
