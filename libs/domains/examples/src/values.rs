use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use uuid::{Uuid, Version};

use crate::error::{ExampleError, ExampleResult};

/// Letters and digits only, no interior whitespace or punctuation.
static DISPLAY_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

const DISPLAY_NAME_MIN_LENGTH: usize = 2;
const DISPLAY_NAME_MAX_LENGTH: usize = 50;

/// A validated version 4 UUID.
///
/// Existence of a value is proof of validity: the only constructors are
/// [`UniqueId::create`] and [`UniqueId::generate`], and both enforce the
/// version. Identifiers of other UUID versions are rejected even when they
/// parse, so anything that reaches the repositories is uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniqueId(Uuid);

impl UniqueId {
    /// Validate a raw string into an identifier. Fails with `UID_INVALID`
    /// when it does not parse or is not version 4.
    pub fn create(raw: &str) -> ExampleResult<Self> {
        let parsed = Uuid::parse_str(raw).map_err(|_| ExampleError::UidInvalid)?;
        Self::from_uuid(parsed)
    }

    /// Wrap an already-parsed UUID, applying the same version check.
    pub fn from_uuid(id: Uuid) -> ExampleResult<Self> {
        if id.get_version() != Some(Version::Random) {
            return Err(ExampleError::UidInvalid);
        }
        Ok(Self(id))
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated display name.
///
/// Input is trimmed, then required to be 2 to 50 characters of ASCII
/// letters and digits. The stored value is the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    /// Trim and validate a raw string. Fails with `NAME_INVALID`.
    pub fn create(raw: &str) -> ExampleResult<Self> {
        let trimmed = raw.trim();

        let length = trimmed.chars().count();
        if !(DISPLAY_NAME_MIN_LENGTH..=DISPLAY_NAME_MAX_LENGTH).contains(&length) {
            return Err(ExampleError::NameInvalid);
        }
        if !DISPLAY_NAME_PATTERN.is_match(trimmed) {
            return Err(ExampleError::NameInvalid);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_id_accepts_v4() {
        let raw = "a8098c1a-f86e-4a4a-8b6f-9476f3a87a0e";

        let id = UniqueId::create(raw).unwrap();

        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn test_unique_id_rejects_other_versions() {
        // Version nibble says v1
        let v1 = "f47ac10b-58cc-1372-a567-0e02b2c3d479";

        assert_eq!(UniqueId::create(v1), Err(ExampleError::UidInvalid));
    }

    #[test]
    fn test_unique_id_rejects_garbage() {
        assert_eq!(UniqueId::create("not-a-uuid"), Err(ExampleError::UidInvalid));
        assert_eq!(UniqueId::create(""), Err(ExampleError::UidInvalid));
    }

    #[test]
    fn test_generated_ids_pass_their_own_validation() {
        let id = UniqueId::generate();

        assert!(UniqueId::create(&id.to_string()).is_ok());
        assert!(UniqueId::from_uuid(id.value()).is_ok());
    }

    #[test]
    fn test_display_name_trims_whitespace() {
        let name = DisplayName::create("  Soup  ").unwrap();

        assert_eq!(name.value(), "Soup");
    }

    #[test]
    fn test_display_name_accepts_boundary_lengths() {
        assert!(DisplayName::create("ab").is_ok());
        assert!(DisplayName::create(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_display_name_rejects_out_of_range_lengths() {
        assert_eq!(DisplayName::create("a"), Err(ExampleError::NameInvalid));
        assert_eq!(
            DisplayName::create(&"a".repeat(51)),
            Err(ExampleError::NameInvalid)
        );
        // Whitespace-only trims to empty
        assert_eq!(DisplayName::create("   "), Err(ExampleError::NameInvalid));
    }

    #[test]
    fn test_display_name_rejects_non_alphanumeric() {
        assert_eq!(DisplayName::create("So up"), Err(ExampleError::NameInvalid));
        assert_eq!(DisplayName::create("Soup!"), Err(ExampleError::NameInvalid));
        assert_eq!(DisplayName::create("Sou_p"), Err(ExampleError::NameInvalid));
        assert_eq!(DisplayName::create("Sσup"), Err(ExampleError::NameInvalid));
    }
}
