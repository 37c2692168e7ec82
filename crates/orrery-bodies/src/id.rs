//! Body handles and instance labels.

use std::fmt;

use uuid::Uuid;

use crate::BodyKind;

/// Handle to a body inside a [`CelestialSystem`](crate::CelestialSystem).
///
/// Handles are arena indices: they are only meaningful for the system that
/// issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    /// The synthetic root of every system.
    pub const ROOT: BodyId = BodyId(0);

    /// Arena index of this body.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Generate a unique instance label of the form `<kind>-<uuid v4>`.
pub fn generate_self_id(kind: BodyKind) -> String {
    format!("{}-{}", kind.tag(), Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_self_id_has_kind_prefix() {
        assert!(generate_self_id(BodyKind::Star).starts_with("star-"));
        assert!(generate_self_id(BodyKind::Planet).starts_with("planet-"));
        assert!(generate_self_id(BodyKind::Moon).starts_with("moon-"));
    }

    #[test]
    fn test_self_id_suffix_is_uuid_v4() {
        let id = generate_self_id(BodyKind::Moon);
        let suffix = id.strip_prefix("moon-").unwrap();
        let uuid = Uuid::parse_str(suffix).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_self_ids_are_unique() {
        let ids: HashSet<String> = (0..1000)
            .map(|_| generate_self_id(BodyKind::Planet))
            .collect();
        assert_eq!(ids.len(), 1000);
    }
}
