//! Pure string-matching recognizers for option/flavor/shebang/cabal
//! helper variables (§4.3). Each takes the variable name plus whatever
//! port metadata it needs to validate against (options, flavors,
//! licenses); metadata is supplied by the caller (C7) rather than owned
//! here, since the knowledge base itself is static and parse-independent.

use super::STATIC_SHEBANG_LANGS;

const OPTION_HELPER_SUFFIXES: &[&str] = &[
    "DESC",
    "USES",
    "USES_OFF",
    "VARS",
    "VARS_OFF",
    "CMAKE_ON",
    "CMAKE_OFF",
    "CONFIGURE_ON",
    "CONFIGURE_OFF",
    "CONFIGURE_ENABLE",
    "CONFIGURE_WITH",
    "MESON_ON",
    "MESON_OFF",
    "MESON_TRUE",
    "MESON_FALSE",
    "EXTRA_PATCHES",
    "IMPLIES",
    "PREVENTS",
    "PREVENTS_MSG",
    "CFLAGS",
    "CFLAGS_OFF",
    "CXXFLAGS",
    "CXXFLAGS_OFF",
    "LDFLAGS",
    "LDFLAGS_OFF",
    "CPPFLAGS",
    "CPPFLAGS_OFF",
    "MAKE_ENV",
    "MAKE_ENV_OFF",
    "MAKE_ARGS",
    "MAKE_ARGS_OFF",
    "PKG_DEPENDS",
    "EXTRACT_DEPENDS",
    "PATCH_DEPENDS",
    "FETCH_DEPENDS",
    "BUILD_DEPENDS",
    "RUN_DEPENDS",
    "TEST_DEPENDS",
    "LIB_DEPENDS",
    "DISTFILES",
    "PLIST_FILES",
    "PLIST_FILES_OFF",
    "PLIST_DIRS",
    "PLIST_DIRS_OFF",
    "PLIST_SUB",
    "PLIST_SUB_OFF",
    "PORTDOCS",
    "PORTDOCS_OFF",
    "PORTEXAMPLES",
    "PORTEXAMPLES_OFF",
];

const FLAVOR_HELPER_SUFFIXES: &[&str] = &[
    "DESC", "PKGNAMEPREFIX", "PKGNAMESUFFIX", "PLIST_FILES", "PLIST_SUB", "CONFLICTS",
    "DEPENDS",
];

fn is_valid_identifier_component(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// `<OPT>_<HELPER>[.<subpkg>]` where `HELPER` is a known suffix and
/// `<OPT>` is in `options` (fuzzy-matches `[-_A-Z0-9]+` when `options` is
/// empty, matching the "no OPTIONS metadata available" case).
pub fn is_options_helper<'a>(
    name: &'a str,
    options: &[String],
) -> Option<(&'a str, &'a str, Option<&'a str>)> {
    let (base, subpkg) = match name.split_once('.') {
        Some((b, s)) => (b, Some(s)),
        None => (name, None),
    };
    for &suffix in OPTION_HELPER_SUFFIXES {
        if let Some(opt) = base.strip_suffix(suffix) {
            let opt = opt.strip_suffix('_')?;
            let matches = if options.is_empty() {
                is_valid_identifier_component(opt)
            } else {
                options.iter().any(|o| o == opt)
            };
            if matches {
                return Some((opt, suffix, subpkg));
            }
        }
    }
    None
}

/// `<FLAVOR>_<HELPER>` analogous to [`is_options_helper`].
pub fn is_flavors_helper<'a>(name: &'a str, flavors: &[String]) -> Option<(&'a str, &'a str)> {
    for &suffix in FLAVOR_HELPER_SUFFIXES {
        if let Some(flavor) = name.strip_suffix(suffix) {
            let flavor = flavor.strip_suffix('_')?;
            let matches = if flavors.is_empty() {
                is_valid_identifier_component(flavor)
            } else {
                flavors.iter().any(|f| f == flavor)
            };
            if matches {
                return Some((flavor, suffix));
            }
        }
    }
    None
}

/// `<LANG>_CMD` / `<LANG>_OLD_CMD` where `LANG` is in the static shebang
/// language set or the port's own `SHEBANG_LANG`.
pub fn is_shebang_lang<'a>(name: &'a str, shebang_langs: &[String]) -> Option<(&'a str, &'a str)> {
    for suffix in ["_OLD_CMD", "_CMD"] {
        if let Some(lang) = name.strip_suffix(suffix) {
            let lang_lower = lang.to_ascii_lowercase();
            let known = STATIC_SHEBANG_LANGS.contains(&lang_lower.as_str())
                || shebang_langs.iter().any(|l| l.eq_ignore_ascii_case(lang));
            if known {
                return Some((lang, suffix));
            }
        }
    }
    None
}

/// `<EXE>_DATADIR_VARS`, recognized only when `cabal` is in USES.
pub fn is_cabal_datadir_vars<'a>(name: &'a str, uses: &[String]) -> Option<&'a str> {
    if !uses.iter().any(|u| u == "cabal") {
        return None;
    }
    name.strip_suffix("_DATADIR_VARS")
}

/// `_?OPTIONS_(GROUP|MULTI|RADIO|SINGLE)_<G>` where `<G>` is one of the
/// port's declared option groups.
pub fn matches_options_group<'a>(name: &'a str, groups: &[String]) -> Option<&'a str> {
    let stripped = name.strip_prefix('_').unwrap_or(name);
    for kind in ["OPTIONS_GROUP_", "OPTIONS_MULTI_", "OPTIONS_RADIO_", "OPTIONS_SINGLE_"] {
        if let Some(group) = stripped.strip_prefix(kind) {
            if groups.is_empty() || groups.iter().any(|g| g == group) {
                return Some(group);
            }
        }
    }
    None
}

/// Is `name` one of the port's declared licenses (fuzzy-matches a bare
/// license identifier when `licenses` is empty).
pub fn is_valid_license(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_cmake_on_option_helper() {
        let options = vec!["DOCS".to_string()];
        let (opt, helper, subpkg) = is_options_helper("DOCS_CMAKE_ON", &options).unwrap();
        assert_eq!(opt, "DOCS");
        assert_eq!(helper, "CMAKE_ON");
        assert_eq!(subpkg, None);
    }

    #[test]
    fn recognizes_option_helper_with_subpkg() {
        let options = vec!["DOCS".to_string()];
        let (opt, _helper, subpkg) = is_options_helper("DOCS_DESC.foo", &options).unwrap();
        assert_eq!(opt, "DOCS");
        assert_eq!(subpkg, Some("foo"));
    }

    #[test]
    fn rejects_unknown_option() {
        let options = vec!["DOCS".to_string()];
        assert!(is_options_helper("EXAMPLES_CMAKE_ON", &options).is_none());
    }

    #[test]
    fn recognizes_python_shebang_lang() {
        let (lang, suffix) = is_shebang_lang("PYTHON_CMD", &[]).unwrap();
        assert_eq!(lang, "PYTHON");
        assert_eq!(suffix, "_CMD");
    }

    #[test]
    fn cabal_datadir_requires_cabal_in_uses() {
        assert!(is_cabal_datadir_vars("MYEXE_DATADIR_VARS", &[]).is_none());
        let uses = vec!["cabal".to_string()];
        assert_eq!(
            is_cabal_datadir_vars("MYEXE_DATADIR_VARS", &uses),
            Some("MYEXE")
        );
    }

    #[test]
    fn matches_options_group_checks_prefix() {
        let groups = vec!["BACKEND".to_string()];
        assert_eq!(
            matches_options_group("OPTIONS_GROUP_BACKEND", &groups),
            Some("BACKEND")
        );
        assert_eq!(matches_options_group("OPTIONS_GROUP_OTHER", &groups), None);
    }
}
