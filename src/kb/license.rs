//! License-permission ordinal table used by the value comparator (C4)
//! for `LICENSE_PERMS*` variables.

/// Relative order for `LICENSE_PERMS`, `_LICENSE_LIST_PERMS`, and
/// `LICENSE_PERMS_<LIC>`, transcribed from the upstream
/// `license_perms_rel` table.
pub const LICENSE_PERMS_ORDER: &[&str] = &[
    "dist-mirror",
    "no-dist-mirror",
    "dist-sell",
    "no-dist-sell",
    "pkg-mirror",
    "no-pkg-mirror",
    "pkg-sell",
    "no-pkg-sell",
    "auto-accept",
    "no-auto-accept",
    "none",
];

pub fn license_perms_ordinal(value: &str) -> Option<usize> {
    LICENSE_PERMS_ORDER.iter().position(|&v| v == value)
}

pub fn is_license_perms_variable(name: &str) -> bool {
    name == "LICENSE_PERMS"
        || name == "_LICENSE_LIST_PERMS"
        || name
            .strip_prefix("LICENSE_PERMS_")
            .map(super::is_valid_license)
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_mirror_sorts_before_no_dist_mirror() {
        assert!(license_perms_ordinal("dist-mirror") < license_perms_ordinal("no-dist-mirror"));
    }

    #[test]
    fn unknown_permission_has_no_ordinal() {
        assert_eq!(license_perms_ordinal("made-up-perm"), None);
    }

    #[test]
    fn bare_license_perms_is_recognized() {
        assert!(is_license_perms_variable("LICENSE_PERMS"));
    }
}
