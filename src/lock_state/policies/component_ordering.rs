use crate::lock_state::domain::{ComponentId, ComponentIdentifier, ComponentKind};
use std::cmp::Ordering;

/// ComponentOrdering policy: the total order lock-state lines are printed in
///
/// Priority order:
/// 1. Projects, then modules, then any other identifier
/// 2. Projects by path; modules by group, module, then version; others by display name
/// 3. Display name as the final tie-break, so distinct identifiers never compare equal
///
/// Injected into `Dependents::sorted_by` as a plain comparison function.
pub struct ComponentOrdering;

/// Non-numeric qualifiers with a fixed rank; any other qualifier ranks between
/// `dev` and `rc` and compares alphabetically with its peers.
const SPECIAL_QUALIFIERS: [&str; 6] = ["rc", "snapshot", "final", "ga", "release", "sp"];

#[derive(Debug, PartialEq, Eq)]
enum VersionPart<'a> {
    Numeric(&'a str),
    Qualifier(String),
}

impl ComponentOrdering {
    /// Compares two component identifiers
    pub fn compare(a: &ComponentId, b: &ComponentId) -> Ordering {
        Self::kind_rank(a.kind())
            .cmp(&Self::kind_rank(b.kind()))
            .then_with(|| match (a.kind(), b.kind()) {
                (ComponentKind::Project { path: pa }, ComponentKind::Project { path: pb }) => {
                    pa.cmp(pb)
                }
                (
                    ComponentKind::Module {
                        group: ga,
                        module: ma,
                        version: va,
                    },
                    ComponentKind::Module {
                        group: gb,
                        module: mb,
                        version: vb,
                    },
                ) => ga
                    .cmp(gb)
                    .then_with(|| ma.cmp(mb))
                    .then_with(|| Self::compare_versions(va, vb)),
                _ => Ordering::Equal,
            })
            .then_with(|| a.display_name().cmp(b.display_name()))
    }

    /// Compares two version strings.
    ///
    /// Versions are split on `.`, `-`, `_`, `+` and at digit/letter boundaries.
    /// Numeric parts compare numerically and beat qualifiers; qualifiers compare
    /// case-insensitively with `dev` lowest and the special qualifiers above the rest.
    /// When one version is a prefix of the other, an extra numeric part sorts
    /// higher and an extra qualifier sorts lower: `1.0-rc1 < 1.0 < 1.0.1`.
    pub fn compare_versions(a: &str, b: &str) -> Ordering {
        let parts_a = Self::split_version(a);
        let parts_b = Self::split_version(b);

        for (pa, pb) in parts_a.iter().zip(parts_b.iter()) {
            let ordering = Self::compare_parts(pa, pb);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        match parts_a.len().cmp(&parts_b.len()) {
            Ordering::Equal => Ordering::Equal,
            Ordering::Greater => Self::extra_part_ordering(&parts_a[parts_b.len()]),
            Ordering::Less => Self::extra_part_ordering(&parts_b[parts_a.len()]).reverse(),
        }
    }

    fn kind_rank(kind: &ComponentKind) -> u8 {
        match kind {
            ComponentKind::Project { .. } => 0,
            ComponentKind::Module { .. } => 1,
            ComponentKind::Other => 2,
        }
    }

    /// How the longer version compares when its extra part is `part`
    fn extra_part_ordering(part: &VersionPart<'_>) -> Ordering {
        match part {
            VersionPart::Numeric(_) => Ordering::Greater,
            VersionPart::Qualifier(_) => Ordering::Less,
        }
    }

    fn compare_parts(a: &VersionPart<'_>, b: &VersionPart<'_>) -> Ordering {
        match (a, b) {
            (VersionPart::Numeric(na), VersionPart::Numeric(nb)) => Self::compare_numeric(na, nb),
            (VersionPart::Numeric(_), VersionPart::Qualifier(_)) => Ordering::Greater,
            (VersionPart::Qualifier(_), VersionPart::Numeric(_)) => Ordering::Less,
            (VersionPart::Qualifier(qa), VersionPart::Qualifier(qb)) => Self::qualifier_rank(qa)
                .cmp(&Self::qualifier_rank(qb))
                .then_with(|| qa.cmp(qb)),
        }
    }

    /// Numeric comparison on digit strings without parsing, so long build
    /// numbers never overflow
    fn compare_numeric(a: &str, b: &str) -> Ordering {
        let a = a.trim_start_matches('0');
        let b = b.trim_start_matches('0');
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }

    fn qualifier_rank(qualifier: &str) -> usize {
        if qualifier == "dev" {
            return 0;
        }
        SPECIAL_QUALIFIERS
            .iter()
            .position(|special| *special == qualifier)
            .map_or(1, |index| index + 2)
    }

    fn split_version(version: &str) -> Vec<VersionPart<'_>> {
        let mut parts = Vec::new();
        for segment in version.split(['.', '-', '_', '+']) {
            let mut start = 0;
            let bytes = segment.as_bytes();
            for i in 1..=bytes.len() {
                let boundary = i == bytes.len()
                    || bytes[i].is_ascii_digit() != bytes[i - 1].is_ascii_digit();
                if boundary {
                    parts.push(Self::classify(&segment[start..i]));
                    start = i;
                }
            }
        }
        parts
    }

    fn classify(part: &str) -> VersionPart<'_> {
        if part.bytes().all(|b| b.is_ascii_digit()) {
            VersionPart::Numeric(part)
        } else {
            VersionPart::Qualifier(part.to_lowercase())
        }
    }
}
