//! Client-side checks for the "add project" form.
//!
//! Nothing here touches the DOM: the form feeds the current field values in
//! and reads back whether the submit control may be enabled.

use thiserror::Error;

/// MIME types accepted for a project image.
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Largest accepted image, in bytes (4 MiB, inclusive).
pub const MAX_IMAGE_BYTES: u64 = 4 * 1024 * 1024;

/// Why a selected file cannot be used as a project image.
///
/// The `Display` text is shown to the user as is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageRejection {
    #[error("Format invalide. Veuillez sélectionner un fichier JPG ou PNG.")]
    UnsupportedType(String),
    #[error("L'image est trop volumineuse. La taille ne doit pas dépasser 4Mo.")]
    TooLarge(u64),
}

/// Checks the type first, then the size.
pub fn validate_image(mime_type: &str, size: u64) -> Result<(), ImageRejection> {
    if !ACCEPTED_IMAGE_TYPES.contains(&mime_type) {
        return Err(ImageRejection::UnsupportedType(mime_type.to_string()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ImageRejection::TooLarge(size));
    }
    Ok(())
}

/// Snapshot of the add-project form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    /// Value of the selected `<option>`; empty while the placeholder is selected.
    pub category: String,
    /// `true` once a file has been selected and accepted by [`validate_image`].
    pub has_valid_image: bool,
}

impl ProjectDraft {
    pub fn trimmed_title(&self) -> &str {
        self.title.trim()
    }

    pub fn is_complete(&self) -> bool {
        !self.trimmed_title().is_empty() && !self.category.is_empty() && self.has_valid_image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gif_is_rejected_whatever_its_size() {
        for size in [0, 1, 1024, MAX_IMAGE_BYTES, MAX_IMAGE_BYTES + 1] {
            assert_eq!(
                validate_image("image/gif", size),
                Err(ImageRejection::UnsupportedType("image/gif".into()))
            );
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert_eq!(validate_image("image/png", MAX_IMAGE_BYTES), Ok(()));
        assert_eq!(validate_image("image/jpeg", MAX_IMAGE_BYTES), Ok(()));
        assert_eq!(
            validate_image("image/png", MAX_IMAGE_BYTES + 1),
            Err(ImageRejection::TooLarge(MAX_IMAGE_BYTES + 1))
        );
    }

    #[test]
    fn type_must_match_exactly() {
        assert!(validate_image("image/jpg", 10).is_err());
        assert!(validate_image("IMAGE/PNG", 10).is_err());
        assert!(validate_image("", 10).is_err());
    }

    #[test]
    fn submit_is_enabled_only_when_every_field_is_filled() {
        for mask in 0u8..8 {
            let draft = ProjectDraft {
                title: if mask & 1 != 0 { "Villa".into() } else { String::new() },
                category: if mask & 2 != 0 { "2".into() } else { String::new() },
                has_valid_image: mask & 4 != 0,
            };
            assert_eq!(draft.is_complete(), mask == 7, "combination {mask:03b}");
        }
    }

    #[test]
    fn blank_title_does_not_count() {
        let draft = ProjectDraft {
            title: "   \t ".into(),
            category: "1".into(),
            has_valid_image: true,
        };

        assert!(!draft.is_complete());
        assert_eq!(draft.trimmed_title(), "");
    }

    #[test]
    fn title_is_trimmed_for_submission() {
        let draft = ProjectDraft {
            title: "  Abajour Tahina ".into(),
            ..ProjectDraft::default()
        };

        assert_eq!(draft.trimmed_title(), "Abajour Tahina");
    }
}
