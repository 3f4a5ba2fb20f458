//! Known-target table, special sources/targets, and the shebang helper
//! constant list, transcribed from the upstream `target_order_`,
//! `special_sources_` and `special_targets_` tables.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// `(name, opthelper)` — `opthelper != 0` means the target may carry an
/// `-on`/`-off` option suffix (e.g. `post-patch-SOME_OPTION-on`).
pub type TargetEntry = (&'static str, u8);

pub static TARGET_TABLE: &[TargetEntry] = &[
("all", 0),
("post-chroot", 0),
("pre-everything", 0),
("fetch", 0),
("fetch-list", 0),
("fetch-recursive-list", 0),
("fetch-recursive", 0),
("fetch-required-list", 0),
("fetch-required", 0),
("fetch-specials", 0),
("fetch-url-list-int", 0),
("fetch-url-list", 0),
("fetch-urlall-list", 0),
("pre-fetch", 1),
("pre-fetch-script", 0),
("do-fetch", 1),
("post-fetch", 1),
("post-fetch-script", 0),
("checksum", 0),
("checksum-recursive", 0),
("extract", 0),
("pre-extract", 1),
("pre-extract-script", 0),
("do-extract", 1),
("post-extract", 1),
("post-extract-script", 0),
("patch", 0),
("pre-patch", 1),
("pre-patch-script", 0),
("do-patch", 1),
("post-patch", 1),
("post-patch-script", 0),
("configure", 0),
("pre-configure", 1),
("pre-configure-script", 0),
("do-configure", 1),
("post-configure", 1),
("post-configure-script", 0),
("build", 0),
("pre-build", 1),
("pre-build-script", 0),
("do-build", 1),
("post-build", 1),
("post-build-script", 0),
("install", 0),
("install-desktop-entries", 0),
("install-ldconfig-file", 0),
("install-mtree", 0),
("install-package", 0),
("install-rc-script", 0),
("pre-install", 1),
("pre-install-script", 0),
("pre-su-install", 0),
("do-install", 1),
("post-install", 1),
("post-install-script", 0),
("stage", 0),
("post-stage", 1),
("test", 0),
("pre-test", 1),
("do-test", 1),
("post-test", 1),
("package-name", 0),
("package-noinstall", 0),
("pre-package", 1),
("pre-package-script", 0),
("do-package", 1),
("post-package", 1),
("post-package-script", 0),
("pre-pkg-script", 0),
("pkg", 0),
("post-pkg-script", 0),
("clean", 0),
("pre-clean", 0),
("do-clean", 0),
("post-clean", 0),
("add-plist-data", 0),
("add-plist-docs", 0),
("add-plist-examples", 0),
("add-plist-info", 0),
("add-plist-post", 0),
("apply-slist", 0),
("check-already-installed", 0),
("check-build-conflicts", 0),
("check-config", 0),
("check-conflicts", 0),
("check-deprecated", 0),
("check-install-conflicts", 0),
("check-man", 0),
("check-orphans", 0),
("check-plist", 0),
("check-sanity", 0),
("check-umask", 0),
("checkpatch", 0),
("clean-depends", 0),
("compress-man", 0),
("config-conditional", 0),
("config-recursive", 0),
("config", 0),
("create-binary-alias", 0),
("create-binary-wrappers", 0),
("create-users-groups", 0),
("deinstall-all", 0),
("deinstall-depends", 0),
("deinstall", 0),
("delete-distfiles-list", 0),
("delete-distfiles", 0),
("delete-package-list", 0),
("delete-package", 0),
("depends", 0),
("describe", 0),
("distclean", 0),
("fake-pkg", 0),
("fix-shebang", 0),
("fixup-lib-pkgconfig", 0),
("generate-plist", 0),
("identify-install-conflicts", 0),
("limited-clean-depends", 0),
("maintainer", 0),
("makepatch", 0),
("makeplist", 0),
("makesum", 0),
("post-check-sanity-script", 0),
("pre-check-config", 0),
("pre-check-sanity-script", 0),
("pre-config", 0),
("pretty-print-build-depends-list", 0),
("pretty-print-config", 0),
("pretty-print-run-depends-list", 0),
("pretty-print-www-site", 0),
("readme", 0),
("readmes", 0),
("reinstall", 0),
("repackage", 0),
("restage", 0),
("rmconfig-recursive", 0),
("rmconfig", 0),
("run-autotools-fixup", 0),
("sanity-config", 0),
("security-check", 0),
("showconfig-recursive", 0),
("showconfig", 0),
("stage-dir", 0),
("stage-qa", 0),
];

/// Sources accepted on the left of a dependency line that are not
/// themselves targets, e.g. `.PHONY: clean`.
pub const SPECIAL_SOURCES: &[&str] = &[
    ".EXEC",
    ".IGNORE",
    ".MADE",
    ".MAKE",
    ".META",
    ".NOMETA",
    ".NOMETA_CMP",
    ".NOPATH",
    ".NOTMAIN",
    ".OPTIONAL",
    ".PHONY",
    ".PRECIOUS",
    ".RECURSIVE",
    ".SILENT",
    ".USE",
    ".USEBEFORE",
    ".WAIT",
];

/// Pseudo-targets with special meaning to `make(1)` itself.
pub const SPECIAL_TARGETS: &[&str] = &[
    ".BEGIN",
    ".DEFAULT",
    ".DELETE_ON_ERROR",
    ".END",
    ".ERROR",
    ".EXEC",
    ".IGNORE",
    ".INTERRUPT",
    ".MADE",
    ".MAIN",
    ".MAKE",
    ".MAKEFLAGS",
    ".META",
    ".NOMETA",
    ".NOMETA_CMP",
    ".NOPATH",
    ".NOTPARALLEL",
    ".OBJDIR",
    ".ORDER",
    ".PATH",
    ".PHONY",
    ".PRECIOUS",
    ".RECURSIVE",
    ".SHELL",
    ".SILENT",
    ".SINGLESHELL",
    ".STALE",
    ".SUFFIXES",
    ".USE",
    ".USEBEFORE",
    ".WAIT",
];

static BY_NAME: Lazy<HashMap<&'static str, u8>> =
    Lazy::new(|| TARGET_TABLE.iter().copied().collect());

pub fn is_known_target(name: &str) -> bool {
    BY_NAME.contains_key(name) || is_known_target_with_option_suffix(name)
}

/// A known target may carry a trailing `-<OPTION>-on`/`-off` suffix when
/// its table entry has `opthelper != 0`.
pub fn is_known_target_with_option_suffix(name: &str) -> bool {
    for suffix in ["-on", "-off"] {
        if let Some(stripped) = name.strip_suffix(suffix) {
            if let Some(dash) = stripped.rfind('-') {
                let (base, _option) = stripped.split_at(dash);
                if let Some(&opthelper) = BY_NAME.get(base) {
                    if opthelper != 0 {
                        return true;
                    }
                }
            }
        }
    }
    false
}

pub fn is_special_source(name: &str) -> bool {
    SPECIAL_SOURCES.contains(&name)
}

pub fn is_special_target(name: &str) -> bool {
    SPECIAL_TARGETS.contains(&name)
}

pub fn target_order_index(name: &str) -> Option<usize> {
    TARGET_TABLE.iter().position(|&(n, _)| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_target_is_known() {
        assert!(is_known_target("all"));
    }

    #[test]
    fn phony_is_a_special_source_and_target() {
        assert!(is_special_source(".PHONY"));
        assert!(is_special_target(".PHONY"));
    }

    #[test]
    fn pre_fetch_accepts_option_suffix() {
        assert!(is_known_target("pre-fetch"));
        assert!(is_known_target("pre-fetch-DOCS-on"));
    }

    #[test]
    fn unknown_target_is_rejected() {
        assert!(!is_known_target("totally-made-up-target"));
    }
}
