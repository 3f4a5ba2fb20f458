//! Ports knowledge base (C1): static tables describing the canonical
//! block/variable order, per-variable formatting flags, known targets,
//! and the option/flavor/shebang/cabal helper recognizers.
//!
//! The variable, expansion and target tables are transcribed verbatim
//! from the upstream ports-framework tables (`rules.c` in the original
//! sources); see DESIGN.md for the transcription method.

mod helpers;
mod license;
mod modules;
mod targets;
mod variables;

pub use helpers::*;
pub use license::*;
pub use modules::*;
pub use targets::*;
pub use variables::*;

use bitflags::bitflags;

/// Canonical block order. Order is significant: it drives both the
/// reformatter's vertical layout and the merge pass's insertion point
/// search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Block {
    PortName,
    PatchFiles,
    Maintainer,
    License,
    LicenseOld,
    Broken,
    Depends,
    Flavors,
    FlavorsHelper,
    SubPackages,
    Uses,
    ShebangFix,
    UniqueFiles,
    Apache,
    Elixir,
    Emacs,
    Erlang,
    Cmake,
    Configure,
    Qmake,
    Meson,
    SCons,
    Cabal,
    Cargo,
    Go,
    Lazarus,
    Linux,
    Nuget,
    Make,
    CFlags,
    Conflicts,
    Standard,
    WrkSrc,
    Users,
    Plist,
    OptDef,
    OptDesc,
    OptHelper,
    Unknown,
}

bitflags! {
    /// Per-variable formatting behavior. Named `VarFlags` instead of the
    /// upstream `VAR_*` macro names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VarFlags: u16 {
        const DEFAULT              = 0;
        const CASE_SENSITIVE_SORT  = 1 << 0;
        const IGNORE_WRAP_COL      = 1 << 1;
        const LEAVE_UNFORMATTED    = 1 << 2;
        const NOT_COMPARABLE       = 1 << 3;
        const PRINT_AS_NEWLINES    = 1 << 4;
        const SKIP_GOAL_COL        = 1 << 5;
        const SORTED               = 1 << 6;
        const SUBPKG_HELPER        = 1 << 7;
        const DEDUP                = 1 << 8;
    }
}

impl VarFlags {
    pub fn sorted(self) -> bool {
        self.contains(VarFlags::SORTED)
    }

    pub fn skip_goal_col(self) -> bool {
        self.contains(VarFlags::SKIP_GOAL_COL)
    }

    pub fn case_sensitive(self) -> bool {
        self.contains(VarFlags::CASE_SENSITIVE_SORT)
    }
}

/// Architectures recognized by `VAR_FOR_EACH_ARCH` expansion.
///
/// The upstream `known_architectures` list was not present in the
/// retrieved source filter; this is the set FreeBSD's ports framework
/// has shipped under `bsd.port.mk` for Tier-1/Tier-2 architectures.
pub const ARCHITECTURES: &[&str] = &[
    "aarch64",
    "amd64",
    "armv6",
    "armv7",
    "i386",
    "mips",
    "mips64",
    "powerpc",
    "powerpc64",
    "powerpc64le",
    "riscv64",
    "sparc64",
];

/// FreeBSD major versions recognized by `VAR_FOR_EACH_FREEBSD_VERSION`.
///
/// Same provenance note as [`ARCHITECTURES`]: the upstream
/// `freebsd_versions` table was outside the retrieved source filter.
pub const FREEBSD_VERSIONS: &[u32] = &[11, 12, 13, 14];

/// SSL implementations recognized by `VAR_FOR_EACH_SSL`.
pub const SSL_IMPLS: &[&str] = &["base", "libressl", "libressl-devel", "openssl", "openssl111"];

/// Languages recognized by `is_shebang_lang` independent of the port's
/// own `SHEBANG_LANG`.
pub const STATIC_SHEBANG_LANGS: &[&str] =
    &["lua", "perl", "php", "python", "ruby", "tcl", "zsh"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandKind {
    Arch,
    FreebsdVersionAndArch,
    Ssl,
    FreebsdVersion,
}

/// [`lookup_variable`], but resolving `<OPT>_<HELPER>`/`<FLAVOR>_<HELPER>`
/// names to their helper-suffix table entry first (§4.3). Every call site
/// that looks up a variable's formatting flags should go through this
/// instead of `lookup_variable` directly, or option/flavor helper forms
/// like `DOCS_USES`/`py39_PLIST_FILES` silently fall back to
/// `Block::Unknown` with no sort/dedup/print-as-newlines behavior.
pub fn lookup_variable_resolved(name: &str) -> (Block, VarFlags, &'static [&'static str]) {
    if let Some((_, suffix, _)) = is_options_helper(name, &[]) {
        return lookup_variable(suffix);
    }
    if let Some((_, suffix)) = is_flavors_helper(name, &[]) {
        return lookup_variable(suffix);
    }
    lookup_variable(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_order_places_portname_first() {
        assert!(Block::PortName < Block::Maintainer);
        assert!(Block::Maintainer < Block::License);
        assert!(Block::OptHelper < Block::Unknown);
    }

    #[test]
    fn varflags_union_combines_bits() {
        let f = VarFlags::SORTED.union(VarFlags::SKIP_GOAL_COL);
        assert!(f.sorted());
        assert!(f.skip_goal_col());
        assert!(!f.case_sensitive());
    }

    #[test]
    fn resolved_lookup_follows_option_helper_suffix() {
        let (block, flags, _) = lookup_variable_resolved("DOCS_CMAKE_ON");
        assert_eq!(block, Block::OptHelper);
        assert!(flags.sorted());
    }

    #[test]
    fn resolved_lookup_follows_flavor_helper_suffix() {
        let (_, flags, _) = lookup_variable_resolved("py39_PLIST_FILES");
        assert!(flags.sorted());
    }

    #[test]
    fn resolved_lookup_falls_back_to_plain_lookup() {
        let (block, _, _) = lookup_variable_resolved("PORTNAME");
        assert_eq!(block, Block::PortName);
    }
}
