//! Static variable and expansion-template tables, transcribed from the
//! upstream ports-framework `variable_order_` table.

use super::{Block, ExpandKind, VarFlags};
use once_cell::sync::Lazy;
use phf::phf_map;
use std::collections::HashMap;

/// One entry of the ~500-row canonical variable table:
/// `(block, name, flags, required_uses)`.
pub type VariableEntry = (Block, &'static str, VarFlags, &'static [&'static str]);

/// One entry of the arch/version/ssl expansion template table:
/// `(block, name_prefix, flags, expand_kind, required_uses)`.
pub type ExpandEntry = (Block, &'static str, VarFlags, ExpandKind, &'static [&'static str]);

pub static VARIABLE_TABLE: &[VariableEntry] = &[
    (Block::PortName, "PORTNAME", VarFlags::DEFAULT, &[]),
    (Block::PortName, "PORTVERSION", VarFlags::DEFAULT, &[]),
    (Block::PortName, "DISTVERSIONPREFIX", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::PortName, "DISTVERSION", VarFlags::DEFAULT, &[]),
    (Block::PortName, "DISTVERSIONSUFFIX", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::PortName, "SPELLVERSION", VarFlags::DEFAULT, &[]),
    (Block::PortName, "PORTREVISION", VarFlags::DEFAULT, &[]),
    (Block::PortName, "PORTEPOCH", VarFlags::DEFAULT, &[]),
    (Block::PortName, "CATEGORIES", VarFlags::DEFAULT, &[]),
    (Block::PortName, "MASTER_SITES", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES), &[]),
    (Block::PortName, "MASTER_SITE_SUBDIR", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::PortName, "PKGNAMEPREFIX", VarFlags::DEFAULT, &[]),
    (Block::PortName, "PKGNAMESUFFIX", VarFlags::DEFAULT, &[]),
    (Block::PortName, "DISTNAME", VarFlags::DEFAULT, &[]),
    (Block::PortName, "DISTNAME_aarch64", VarFlags::SKIP_GOAL_COL, &["linux"]),
    (Block::PortName, "DISTNAME_amd64", VarFlags::SKIP_GOAL_COL, &["linux"]),
    (Block::PortName, "DISTNAME_i386", VarFlags::SKIP_GOAL_COL, &["linux"]),
    (Block::PortName, "EXTRACT_SUFX", VarFlags::DEFAULT, &[]),
    (Block::PortName, "DISTFILES", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES), &[]),
    (Block::PortName, "DISTFILES_aarch64", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::SKIP_GOAL_COL), &["linux"]),
    (Block::PortName, "DISTFILES_amd64", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::SKIP_GOAL_COL), &["linux"]),
    (Block::PortName, "DISTFILES_i386", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::SKIP_GOAL_COL), &["linux"]),
    (Block::PortName, "DIST_SUBDIR", VarFlags::DEFAULT, &[]),
    (Block::PortName, "EXTRACT_ONLY", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES), &[]),
    (Block::PortName, "EXTRACT_ONLY_7z", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::PatchFiles, "PATCH_SITES", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES), &[]),
    (Block::PatchFiles, "PATCH_SITE_SUBDIR", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::PatchFiles, "PATCHFILES", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES), &[]),
    (Block::PatchFiles, "PATCH_DIST_STRIP", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Maintainer, "MAINTAINER", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::Maintainer, "COMMENT", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SUBPKG_HELPER), &[]),
    (Block::License, "LICENSE", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &[]),
    (Block::License, "LICENSE_COMB", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &[]),
    (Block::License, "LICENSE_GROUPS", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &[]),
    (Block::License, "LICENSE_NAME", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::License, "LICENSE_TEXT", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::License, "LICENSE_FILE", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::License, "LICENSE_PERMS", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &[]),
    (Block::License, "LICENSE_DISTFILES", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::LicenseOld, "RESTRICTED", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::LicenseOld, "RESTRICTED_FILES", VarFlags::DEFAULT, &[]),
    (Block::LicenseOld, "NO_CDROM", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::LicenseOld, "NO_PACKAGE", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::LicenseOld, "LEGAL_PACKAGE", VarFlags::DEFAULT, &[]),
    (Block::LicenseOld, "LEGAL_TEXT", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::Broken, "DEPRECATED", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::Broken, "EXPIRATION_DATE", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Broken, "FORBIDDEN", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::Broken, "MANUAL_PACKAGE_BUILD", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::Broken, "BROKEN", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::Broken, "BROKEN_DragonFly", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::Broken, "IGNORE", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::Broken, "IGNORE_DragonFly", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::Broken, "ONLY_FOR_ARCHS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Broken, "ONLY_FOR_ARCHS_REASON", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::Broken, "NOT_FOR_ARCHS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Broken, "NOT_FOR_ARCHS_REASON", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::Depends, "FETCH_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Depends, "EXTRACT_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Depends, "PATCH_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Depends, "CRAN_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Depends, "BUILD_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Depends, "LIB_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Depends, "RUN_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Depends, "TEST_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Depends, "SELF_DEPENDS", VarFlags::SUBPKG_HELPER.union(VarFlags::SORTED), &[]),
    (Block::Flavors, "FLAVORS", VarFlags::DEFAULT, &[]),
    (Block::Flavors, "FLAVOR", VarFlags::DEFAULT, &[]),
    (Block::Flavors, "FLAVORS_SUB", VarFlags::DEFAULT, &[]),
    (Block::SubPackages, "SUBPACKAGES", VarFlags::SORTED, &[]),
    (Block::FlavorsHelper, "PKGNAMEPREFIX", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "PKGNAMESUFFIX", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "PKG_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "EXTRACT_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "PATCH_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "FETCH_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "BUILD_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "LIB_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "RUN_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "TEST_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "CONFLICTS", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "CONFLICTS_BUILD", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "CONFLICTS_INSTALL", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::FlavorsHelper, "DESCR", VarFlags::NOT_COMPARABLE, &[]),
    (Block::FlavorsHelper, "PLIST", VarFlags::NOT_COMPARABLE, &[]),
    (Block::Uses, "USES", VarFlags::SORTED, &[]),
    (Block::Uses, "BROKEN_SSL", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SORTED), &["ssl"]),
    (Block::Uses, "BROKEN_SSL_REASON", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), &["ssl"]),
    (Block::Uses, "IGNORE_SSL", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SORTED), &["ssl"]),
    (Block::Uses, "IGNORE_SSL_REASON", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), &["ssl"]),
    (Block::Uses, "IGNORE_WITH_MYSQL", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &["mysql"]),
    (Block::Uses, "ANSIBLE_CMD", VarFlags::SKIP_GOAL_COL, &["ansible"]),
    (Block::Uses, "ANSIBLE_DOC_CMD", VarFlags::SKIP_GOAL_COL, &["ansible"]),
    (Block::Uses, "ANSIBLE_RUN_DEPENDS", VarFlags::SKIP_GOAL_COL, &["ansible"]),
    (Block::Uses, "ANSIBLE_DATADIR", VarFlags::SKIP_GOAL_COL, &["ansible"]),
    (Block::Uses, "ANSIBLE_ETCDIR", VarFlags::SKIP_GOAL_COL, &["ansible"]),
    (Block::Uses, "ANSIBLE_PLUGINS_PREFIX", VarFlags::SKIP_GOAL_COL, &["ansible"]),
    (Block::Uses, "ANSIBLE_MODULESDIR", VarFlags::SKIP_GOAL_COL, &["ansible"]),
    (Block::Uses, "ANSIBLE_PLUGINSDIR", VarFlags::SKIP_GOAL_COL, &["ansible"]),
    (Block::Uses, "ANSIBLE_PLUGIN_TYPE", VarFlags::SKIP_GOAL_COL, &["ansible"]),
    (Block::Uses, "INVALID_BDB_VER", VarFlags::SKIP_GOAL_COL, &["bdb"]),
    (Block::Uses, "OBSOLETE_BDB_VAR", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &["bdb"]),
    (Block::Uses, "WITH_BDB_HIGHEST", VarFlags::SKIP_GOAL_COL, &["bdb"]),
    (Block::Uses, "WITH_BDB6_PERMITTED", VarFlags::SKIP_GOAL_COL, &["bdb"]),
    (Block::Uses, "CHARSETFIX_MAKEFILEIN", VarFlags::SKIP_GOAL_COL, &["charsetfix"]),
    (Block::Uses, "CPE_PART", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_VENDOR", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_PRODUCT", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_VERSION", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_UPDATE", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_EDITION", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_LANG", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_SW_EDITION", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_TARGET_SW", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_TARGET_HW", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "CPE_OTHER", VarFlags::DEFAULT, &["cpe"]),
    (Block::Uses, "DOS2UNIX_REGEX", VarFlags::SORTED, &["dos2unix"]),
    (Block::Uses, "DOS2UNIX_FILES", VarFlags::SORTED, &["dos2unix"]),
    (Block::Uses, "DOS2UNIX_GLOB", VarFlags::SORTED, &["dos2unix"]),
    (Block::Uses, "DOS2UNIX_WRKSRC", VarFlags::DEFAULT, &["dos2unix"]),
    (Block::Uses, "FONTNAME", VarFlags::DEFAULT, &["fonts", "xorg-cat" /* :fonts */]),
    (Block::Uses, "FONTSDIR", VarFlags::DEFAULT, &["fonts", "xorg-cat" /* :fonts */]),
    (Block::Uses, "FONTPATHD", VarFlags::DEFAULT, &["fonts", "xorg-cat", /* :fonts */]),
    (Block::Uses, "FONTPATHSPEC", VarFlags::DEFAULT, &["fonts", "xorg-cat", /* :fonts */]),
    (Block::Uses, "KMODDIR", VarFlags::DEFAULT, &["kmod"]),
    (Block::Uses, "KERN_DEBUGDIR", VarFlags::DEFAULT, &["kmod"]),
    (Block::Uses, "NCURSES_IMPL", VarFlags::DEFAULT, &["ncurses"]),
    (Block::Uses, "NOFONT", VarFlags::DEFAULT, &["xorg-cat"]),
    (Block::Uses, "PATHFIX_CMAKELISTSTXT", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &["pathfix"]),
    (Block::Uses, "PATHFIX_MAKEFILEIN", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &["pathfix"]),
    (Block::Uses, "PATHFIX_WRKSRC", VarFlags::DEFAULT, &["pathfix"]),
    (Block::Uses, "QMAIL_PREFIX", VarFlags::DEFAULT, &["qmail"]),
    (Block::Uses, "QMAIL_SLAVEPORT", VarFlags::DEFAULT, &["qmail"]),
    (Block::Uses, "TCL_PKG", VarFlags::DEFAULT, &["tcl", "tk"]),
    (Block::Uses, "WANT_PGSQL", VarFlags::SORTED, &["pgsql"]),
    (Block::Uses, "USE_ANT", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_ASDF", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_ASDF_FASL", VarFlags::DEFAULT, &[]),
    (Block::Uses, "FASL_BUILD", VarFlags::DEFAULT, &[]),
    (Block::Uses, "ASDF_MODULES", VarFlags::SORTED, &[]),
    (Block::Uses, "USE_BINUTILS", VarFlags::SORTED, &[]),
    (Block::Uses, "DISABLE_BINUTILS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_CLISP", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_CSTD", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_CXXSTD", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_FPC", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_GCC", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_GECKO", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_GENERIC_PKGMESSAGE", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_GITHUB", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GH_ACCOUNT", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GH_PROJECT", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GH_SUBDIR", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GH_TAGNAME", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GH_TUPLE", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES), &[]),
    (Block::Uses, "USE_GITLAB", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GL_SITE", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GL_ACCOUNT", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GL_PROJECT", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GL_COMMIT", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GL_SUBDIR", VarFlags::DEFAULT, &[]),
    (Block::Uses, "GL_TUPLE", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES), &[]),
    (Block::Uses, "USE_GL", VarFlags::SORTED, &["gl"]),
    (Block::Uses, "USE_GNOME", VarFlags::SORTED, &["gnome"]),
    (Block::Uses, "USE_GNOME_SUBR", VarFlags::DEFAULT, &["gnome"]),
    (Block::Uses, "GCONF_CONFIG_OPTIONS", VarFlags::SKIP_GOAL_COL, &["gnome"]),
    (Block::Uses, "GCONF_CONFIG_DIRECTORY", VarFlags::SKIP_GOAL_COL, &["gnome"]),
    (Block::Uses, "GCONF_CONFIG_SOURCE", VarFlags::SKIP_GOAL_COL, &["gnome"]),
    (Block::Uses, "GCONF_SCHEMAS", VarFlags::SORTED, &["gnome"]),
    (Block::Uses, "GLIB_SCHEMAS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &["gnome"]),
    (Block::Uses, "GNOME_HTML_DIR", VarFlags::DEFAULT, &["gnome"]),
    (Block::Uses, "GNOME_LOCALSTATEDIR", VarFlags::SKIP_GOAL_COL, &["gnome"]),
    (Block::Uses, "GNOME_MAKEFILEIN", VarFlags::SKIP_GOAL_COL, &["gnome"]),
    (Block::Uses, "INSTALLS_OMF", VarFlags::DEFAULT, &["gnome"]),
    (Block::Uses, "USE_GNUSTEP", VarFlags::SORTED, &["gnustep"]),
    (Block::Uses, "GNUSTEP_PREFIX", VarFlags::DEFAULT, &["gnustep"]),
    (Block::Uses, "DEFAULT_LIBVERSION", VarFlags::DEFAULT, &["gnustep"]),
    (Block::Uses, "ADDITIONAL_CFLAGS", VarFlags::DEFAULT, &["gnustep"]),
    (Block::Uses, "ADDITIONAL_CPPFLAGS", VarFlags::DEFAULT, &["gnustep"]),
    (Block::Uses, "ADDITIONAL_CXXFLAGS", VarFlags::DEFAULT, &["gnustep"]),
    (Block::Uses, "ADDITIONAL_OBJCCFLAGS", VarFlags::DEFAULT, &["gnustep"]),
    (Block::Uses, "ADDITIONAL_OBJCFLAGS", VarFlags::DEFAULT, &["gnustep"]),
    (Block::Uses, "ADDITIONAL_LDFLAGS", VarFlags::DEFAULT, &["gnustep"]),
    (Block::Uses, "ADDITIONAL_FLAGS", VarFlags::DEFAULT, &["gnustep"]),
    (Block::Uses, "ADDITIONAL_INCLUDE_DIRS", VarFlags::SORTED, &["gnustep"]),
    (Block::Uses, "ADDITIONAL_LIB_DIRS", VarFlags::SORTED, &["gnustep"]),
    (Block::Uses, "USE_GSTREAMER", VarFlags::SORTED, &[]),
    (Block::Uses, "USE_GSTREAMER1", VarFlags::SORTED, &[]),
    (Block::Uses, "USE_HORDE_BUILD", VarFlags::SKIP_GOAL_COL, &["horde"]),
    (Block::Uses, "USE_HORDE_RUN", VarFlags::DEFAULT, &["horde"]),
    (Block::Uses, "HORDE_DIR", VarFlags::DEFAULT, &["horde"]),
    (Block::Uses, "USE_JAVA", VarFlags::DEFAULT, &[]),
    (Block::Uses, "JAVA_VERSION", VarFlags::DEFAULT, &[]),
    (Block::Uses, "JAVA_OS", VarFlags::DEFAULT, &[]),
    (Block::Uses, "JAVA_VENDOR", VarFlags::DEFAULT, &[]),
    (Block::Uses, "JAVA_EXTRACT", VarFlags::DEFAULT, &[]),
    (Block::Uses, "JAVA_BUILD", VarFlags::DEFAULT, &[]),
    (Block::Uses, "JAVA_RUN", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_KDE", VarFlags::SORTED, &["kde"]),
    (Block::Uses, "KDE_INVENT", VarFlags::DEFAULT, &["kde"]),
    (Block::Uses, "KDE_PLASMA_VERSION", VarFlags::SKIP_GOAL_COL, &["kde"]),
    (Block::Uses, "KDE_PLASMA_BRANCH", VarFlags::SKIP_GOAL_COL, &["kde"]),
    (Block::Uses, "KDE_FRAMEWORKS_VERSION", VarFlags::SKIP_GOAL_COL, &["kde"]),
    (Block::Uses, "KDE_FRAMEWORKS_BRANCH", VarFlags::SKIP_GOAL_COL, &["kde"]),
    (Block::Uses, "KDE_APPLICATIONS_VERSION", VarFlags::SKIP_GOAL_COL, &["kde"]),
    (Block::Uses, "KDE_APPLICATIONS_SHLIB_VER", VarFlags::SKIP_GOAL_COL, &["kde"]),
    (Block::Uses, "KDE_APPLICATIONS_BRANCH", VarFlags::SKIP_GOAL_COL, &["kde"]),
    (Block::Uses, "CALLIGRA_VERSION", VarFlags::SKIP_GOAL_COL, &["kde"]),
    (Block::Uses, "CALLIGRA_BRANCH", VarFlags::SKIP_GOAL_COL, &["kde"]),
    (Block::Uses, "USE_LDCONFIG", VarFlags::SORTED, &[]),
    (Block::Uses, "USE_LDCONFIG32", VarFlags::SORTED, &[]),
    (Block::Uses, "USE_LINUX", VarFlags::SORTED, &["linux"]),
    (Block::Uses, "USE_LINUX_PREFIX", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_LINUX_RPM", VarFlags::SKIP_GOAL_COL, &["linux"]),
    (Block::Uses, "USE_LINUX_RPM_BAD_PERMS", VarFlags::SKIP_GOAL_COL, &["linux"]),
    (Block::Uses, "USE_LOCALE", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_LXQT", VarFlags::SORTED, &["lxqt"]),
    (Block::Uses, "USE_MATE", VarFlags::SORTED, &["mate"]),
    (Block::Uses, "USE_MOZILLA", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_MYSQL", VarFlags::DEFAULT, &["mysql"]),
    (Block::Uses, "USE_OCAML", VarFlags::DEFAULT, &[]),
    (Block::Uses, "NO_OCAML_BUILDDEPENDS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "NO_OCAML_RUNDEPENDS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_OCAML_FINDLIB", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_OCAML_CAMLP4", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_OCAML_TK", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "NO_OCAMLTK_BUILDDEPENDS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "NO_OCAMLTK_RUNDEPENDS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_OCAML_LDCONFIG", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_OCAMLFIND_PLIST", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_OCAML_WASH", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "OCAML_PKGDIRS", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &[]),
    (Block::Uses, "OCAML_LDLIBS", VarFlags::SORTED, &[]),
    (Block::Uses, "OCAMLFIND", VarFlags::DEFAULT, &[]),
    (Block::Uses, "OCAMLFIND_DEPEND", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "OCAMLFIND_DESTDIR", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "OCAMLFIND_LDCONF", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "OCAMLFIND_PORT", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_OPENLDAP", VarFlags::DEFAULT, &[]),
    (Block::Uses, "WANT_OPENLDAP_SASL", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "WANT_OPENLDAP_VER", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_PERL5", VarFlags::SORTED, &["perl5"]),
    (Block::Uses, "PL_BUILD", VarFlags::DEFAULT, &["perl5"]),
    (Block::Uses, "USE_PHP", VarFlags::SORTED, &["pear", "php"]),
    (Block::Uses, "IGNORE_WITH_PHP", VarFlags::SKIP_GOAL_COL, &["pear", "php"]),
    (Block::Uses, "PHP_MODNAME", VarFlags::DEFAULT, &["pear", "php"]),
    (Block::Uses, "PHP_MOD_PRIO", VarFlags::DEFAULT, &["pear", "php"]),
    (Block::Uses, "PEAR_CHANNEL", VarFlags::DEFAULT, &["pear"]),
    (Block::Uses, "PEAR_CHANNEL_VER", VarFlags::SKIP_GOAL_COL, &["pear"]),
    (Block::Uses, "USE_PYQT", VarFlags::SORTED, &["pyqt"]),
    (Block::Uses, "PYQT_DIST", VarFlags::DEFAULT, &["pyqt"]),
    (Block::Uses, "PYQT_SIPDIR", VarFlags::DEFAULT, &["pyqt"]),
    (Block::Uses, "USE_PYTHON", VarFlags::SORTED, &["python", "waf"]),
    (Block::Uses, "PYTHON_NO_DEPENDS", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYTHON_CMD", VarFlags::DEFAULT, &["python", "waf"]),
    (Block::Uses, "PYSETUP", VarFlags::DEFAULT, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_SETUP", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_CONFIGURE_TARGET", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_BUILD_TARGET", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_INSTALL_TARGET", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_CONFIGUREARGS", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_BUILDARGS", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_INSTALLARGS", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_INSTALLNOSINGLE", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_PKGNAME", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_PKGVERSION", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_EGGINFO", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "PYDISTUTILS_EGGINFODIR", VarFlags::SKIP_GOAL_COL, &["python", "waf"]),
    (Block::Uses, "USE_QT", VarFlags::SORTED, &["qt", "qt-dist"]),
    (Block::Uses, "QT_BINARIES", VarFlags::DEFAULT, &["qt", "qt-dist"]),
    (Block::Uses, "QT_CONFIG", VarFlags::DEFAULT, &["qt", "qt-dist"]),
    (Block::Uses, "QT_DEFINES", VarFlags::DEFAULT, &["qt", "qt-dist"]),
    (Block::Uses, "QT5_VERSION", VarFlags::DEFAULT, &["qt", "qt-dist"]),
    (Block::Uses, "USE_RC_SUBR", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_RUBY", VarFlags::DEFAULT, &[]),
    (Block::Uses, "RUBY_MODNAME", VarFlags::DEFAULT, &[]),
    (Block::Uses, "RUBY_MODDOCDIR", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "RUBY_MODEXAMPLESDIR", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "RUBY_NO_BUILD_DEPENDS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "RUBY_NO_RUN_DEPENDS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_RUBY_EXTCONF", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "RUBY_EXTCONF", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "RUBY_EXTCONF_SUBDIRS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_RUBY_SETUP", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "RUBY_SETUP", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_RUBY_RDOC", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "RUBY_REQUIRE", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "USE_RUBYGEMS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Uses, "GEM_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Uses, "USE_SBCL", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_SDL", VarFlags::SORTED, &["sdl"]),
    (Block::Uses, "USE_SM_COMPAT", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_SUBMAKE", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_TEX", VarFlags::SORTED, &[]),
    (Block::Uses, "USE_WX", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_WX_NOT", VarFlags::DEFAULT, &[]),
    (Block::Uses, "WANT_WX", VarFlags::DEFAULT, &[]),
    (Block::Uses, "WANT_WX_VER", VarFlags::DEFAULT, &[]),
    (Block::Uses, "WANT_WXGTK_VER", VarFlags::DEFAULT, &[]),
    (Block::Uses, "WITH_WX_VER", VarFlags::DEFAULT, &[]),
    (Block::Uses, "WX_COMPS", VarFlags::SORTED, &[]),
    (Block::Uses, "WX_CONF_ARGS", VarFlags::DEFAULT, &[]),
    (Block::Uses, "WX_PREMK", VarFlags::DEFAULT, &[]),
    (Block::Uses, "USE_XFCE", VarFlags::SORTED, &["xfce"]),
    (Block::Uses, "USE_XORG", VarFlags::SORTED, &["xorg", "motif"]),
    (Block::Uses, "WAF_CMD", VarFlags::DEFAULT, &["waf"]),
    (Block::Uses, "WEBPLUGIN_NAME", VarFlags::SKIP_GOAL_COL, &["webplugin"]),
    (Block::Uses, "WEBPLUGIN_FILES", VarFlags::SKIP_GOAL_COL, &["webplugin"]),
    (Block::Uses, "WEBPLUGIN_DIR", VarFlags::SKIP_GOAL_COL, &["webplugin"]),
    (Block::Uses, "XMKMF_ARGS", VarFlags::DEFAULT, &["imake"]),
    (Block::ShebangFix, "SHEBANG_FILES", VarFlags::SORTED, &["shebangfix"]),
    (Block::ShebangFix, "SHEBANG_GLOB", VarFlags::SORTED, &["shebangfix"]),
    (Block::ShebangFix, "SHEBANG_REGEX", VarFlags::SORTED, &["shebangfix"]),
    (Block::ShebangFix, "SHEBANG_LANG", VarFlags::SORTED, &["shebangfix"]),
    (Block::ShebangFix, "OLD_CMD", VarFlags::NOT_COMPARABLE, &["shebangfix"]),
    (Block::ShebangFix, "CMD", VarFlags::NOT_COMPARABLE, &["shebangfix"]),
    (Block::UniqueFiles, "UNIQUE_PREFIX", VarFlags::DEFAULT, &["uniquefiles"]),
    (Block::UniqueFiles, "UNIQUE_PREFIX_FILES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), &["uniquefiles"]),
    (Block::UniqueFiles, "UNIQUE_SUFFIX", VarFlags::DEFAULT, &["uniquefiles"]),
    (Block::UniqueFiles, "UNIQUE_SUFFIX_FILES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), &["uniquefiles"]),
    (Block::Apache, "AP_EXTRAS", VarFlags::DEFAULT, &["apache"]),
    (Block::Apache, "AP_INC", VarFlags::DEFAULT, &["apache"]),
    (Block::Apache, "AP_LIB", VarFlags::DEFAULT, &["apache"]),
    (Block::Apache, "AP_FAST_BUILD", VarFlags::DEFAULT, &["apache"]),
    (Block::Apache, "AP_GENPLIST", VarFlags::DEFAULT, &["apache"]),
    (Block::Apache, "MODULENAME", VarFlags::DEFAULT, &["apache"]),
    (Block::Apache, "SHORTMODNAME", VarFlags::DEFAULT, &["apache"]),
    (Block::Apache, "SRC_FILE", VarFlags::DEFAULT, &["apache"]),
    (Block::Elixir, "ELIXIR_APP_NAME", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "ELIXIR_LIB_ROOT", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "ELIXIR_APP_ROOT", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "ELIXIR_HIDDEN", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "ELIXIR_LOCALE", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_CMD", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_COMPILE", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_REWRITE", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_BUILD_DEPS", VarFlags::SORTED, &["elixir"]),
    (Block::Elixir, "MIX_RUN_DEPS", VarFlags::SORTED, &["elixir"]),
    (Block::Elixir, "MIX_DOC_DIRS", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_DOC_FILES", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_ENV", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_ENV_NAME", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_BUILD_NAME", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_TARGET", VarFlags::DEFAULT, &["elixir"]),
    (Block::Elixir, "MIX_EXTRA_APPS", VarFlags::SORTED, &["elixir"]),
    (Block::Elixir, "MIX_EXTRA_DIRS", VarFlags::SORTED, &["elixir"]),
    (Block::Elixir, "MIX_EXTRA_FILES", VarFlags::SORTED, &["elixir"]),
    (Block::Emacs, "EMACS_FLAVORS_EXCLUDE", VarFlags::DEFAULT, &["emacs"]),
    (Block::Emacs, "EMACS_NO_DEPENDS", VarFlags::DEFAULT, &["emacs"]),
    (Block::Erlang, "ERL_APP_NAME", VarFlags::DEFAULT, &["erlang"]),
    (Block::Erlang, "ERL_APP_ROOT", VarFlags::DEFAULT, &["erlang"]),
    (Block::Erlang, "REBAR_CMD", VarFlags::DEFAULT, &["erlang"]),
    (Block::Erlang, "REBAR3_CMD", VarFlags::DEFAULT, &["erlang"]),
    (Block::Erlang, "REBAR_PROFILE", VarFlags::DEFAULT, &["erlang"]),
    (Block::Erlang, "REBAR_TARGETS", VarFlags::SORTED, &["erlang"]),
    (Block::Erlang, "ERL_BUILD_NAME", VarFlags::DEFAULT, &["erlang"]),
    (Block::Erlang, "ERL_BUILD_DEPS", VarFlags::SORTED, &["erlang"]),
    (Block::Erlang, "ERL_RUN_DEPS", VarFlags::SORTED, &["erlang"]),
    (Block::Erlang, "ERL_DOCS", VarFlags::DEFAULT, &["erlang"]),
    (Block::Cmake, "CMAKE_ARGS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &["cmake"]),
    (Block::Cmake, "CMAKE_ON", VarFlags::SORTED, &["cmake"]),
    (Block::Cmake, "CMAKE_OFF", VarFlags::SORTED, &["cmake"]),
    (Block::Cmake, "CMAKE_TESTING_ARGS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), &["cmake"]),
    (Block::Cmake, "CMAKE_TESTING_ON", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &["cmake"]),
    (Block::Cmake, "CMAKE_TESTING_OFF", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &["cmake"]),
    (Block::Cmake, "CMAKE_TESTING_TARGET", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &["cmake"]),
    (Block::Cmake, "CMAKE_BUILD_TYPE", VarFlags::SKIP_GOAL_COL, &["cmake"]),
    (Block::Cmake, "CMAKE_INSTALL_PREFIX", VarFlags::SKIP_GOAL_COL, &["cmake"]),
    (Block::Cmake, "CMAKE_SOURCE_PATH", VarFlags::SKIP_GOAL_COL, &["cmake"]),
    (Block::Configure, "HAS_CONFIGURE", VarFlags::DEFAULT, &[]),
    (Block::Configure, "GNU_CONFIGURE", VarFlags::DEFAULT, &[]),
    (Block::Configure, "GNU_CONFIGURE_PREFIX", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Configure, "CONFIGURE_CMD", VarFlags::DEFAULT, &[]),
    (Block::Configure, "CONFIGURE_LOG", VarFlags::DEFAULT, &[]),
    (Block::Configure, "CONFIGURE_SCRIPT", VarFlags::DEFAULT, &[]),
    (Block::Configure, "CONFIGURE_SHELL", VarFlags::DEFAULT, &[]),
    (Block::Configure, "CONFIGURE_ARGS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Configure, "CONFIGURE_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Configure, "CONFIGURE_OUTSOURCE", VarFlags::DEFAULT, &[]),
    (Block::Configure, "CONFIGURE_TARGET", VarFlags::DEFAULT, &[]),
    (Block::Configure, "WITHOUT_FBSD10_FIX", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Qmake, "QMAKE_ARGS", VarFlags::SORTED, &["qmake"]),
    (Block::Qmake, "QMAKE_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &["qmake"]),
    (Block::Qmake, "QMAKE_CONFIGURE_ARGS", VarFlags::SORTED, &["qmake"]),
    (Block::Qmake, "QMAKE_SOURCE_PATH", VarFlags::DEFAULT, &["qmake"]),
    (Block::Meson, "MESON_ARGS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &["meson"]),
    (Block::Meson, "MESON_BUILD_DIR", VarFlags::DEFAULT, &["meson"]),
    (Block::SCons, "CCFLAGS", VarFlags::DEFAULT, &["scons"]),
    (Block::SCons, "CPPPATH", VarFlags::SORTED, &["scons"]),
    (Block::SCons, "LINKFLAGS", VarFlags::DEFAULT, &["scons"]),
    (Block::SCons, "LIBPATH", VarFlags::DEFAULT, &["scons"]),
    (Block::Cabal, "USE_CABAL", VarFlags::CASE_SENSITIVE_SORT.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::SORTED), &["cabal"]),
    (Block::Cabal, "CABAL_BOOTSTRAP", VarFlags::SKIP_GOAL_COL, &["cabal"]),
    (Block::Cabal, "CABAL_FLAGS", VarFlags::DEFAULT, &["cabal"]),
    (Block::Cabal, "CABAL_PROJECT", VarFlags::DEFAULT, &["cabal"]),
    (Block::Cabal, "EXECUTABLES", VarFlags::SORTED, &["cabal"]),
    (Block::Cabal, "DATADIR_VARS", VarFlags::NOT_COMPARABLE.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), &["cabal"]),
    (Block::Cabal, "SKIP_CABAL_PLIST", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &["cabal"]),
    (Block::Cargo, "CARGO_CRATES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL), &["cargo"]),
    (Block::Cargo, "CARGO_USE_GITHUB", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_USE_GITLAB", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_GIT_SUBDIR", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &["cargo"]),
    (Block::Cargo, "CARGO_CARGOLOCK", VarFlags::SORTED, &["cargo"]),
    (Block::Cargo, "CARGO_CARGOTOML", VarFlags::SORTED, &["cargo"]),
    (Block::Cargo, "CARGO_FEATURES", VarFlags::SORTED, &["cargo"]),
    (Block::Cargo, "CARGO_BUILDDEP", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_BUILD", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_BUILD_ARGS", VarFlags::SORTED, &["cargo"]),
    (Block::Cargo, "CARGO_BUILD_TARGET", VarFlags::SKIP_GOAL_COL, &["cargo"]),
    (Block::Cargo, "CARGO_INSTALL", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_INSTALL_ARGS", VarFlags::SORTED, &["cargo"]),
    (Block::Cargo, "CARGO_INSTALL_PATH", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_TEST", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_TEST_ARGS", VarFlags::SORTED, &["cargo"]),
    (Block::Cargo, "CARGO_UPDATE_ARGS", VarFlags::SORTED, &["cargo"]),
    (Block::Cargo, "CARGO_CARGO_BIN", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_DIST_SUBDIR", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &["cargo"]),
    (Block::Cargo, "CARGO_TARGET_DIR", VarFlags::DEFAULT, &["cargo"]),
    (Block::Cargo, "CARGO_VENDOR_DIR", VarFlags::DEFAULT, &["cargo"]),
    (Block::Go, "GO_MODULE", VarFlags::DEFAULT, &["go"]),
    (Block::Go, "GO_PKGNAME", VarFlags::DEFAULT, &["go"]),
    (Block::Go, "GO_TARGET", VarFlags::SORTED, &["go"]),
    (Block::Go, "GO_BUILDFLAGS", VarFlags::LEAVE_UNFORMATTED, &["go"]),
    (Block::Go, "GO_TESTTARGET", VarFlags::DEFAULT, &["go"]),
    (Block::Go, "GO_TESTFLAGS", VarFlags::LEAVE_UNFORMATTED, &["go"]),
    (Block::Go, "CGO_ENABLED", VarFlags::DEFAULT, &["go"]),
    (Block::Go, "CGO_CFLAGS", VarFlags::SORTED, &["go"]),
    (Block::Go, "CGO_LDFLAGS", VarFlags::DEFAULT, &["go"]),
    (Block::Lazarus, "NO_LAZBUILD", VarFlags::DEFAULT, &["lazarus"]),
    (Block::Lazarus, "LAZARUS_PROJECT_FILES", VarFlags::DEFAULT, &["lazarus"]),
    (Block::Lazarus, "LAZARUS_DIR", VarFlags::DEFAULT, &["lazarus"]),
    (Block::Lazarus, "LAZBUILD_ARGS", VarFlags::SORTED, &["lazarus"]),
    (Block::Lazarus, "LAZARUS_NO_FLAVORS", VarFlags::DEFAULT, &["lazarus"]),
    (Block::Linux, "BIN_DISTNAMES", VarFlags::DEFAULT, &["linux"]),
    (Block::Linux, "LIB_DISTNAMES", VarFlags::DEFAULT, &["linux"]),
    (Block::Linux, "LIB_DISTNAMES_aarch64", VarFlags::DEFAULT, &["linux"]),
    (Block::Linux, "LIB_DISTNAMES_amd64", VarFlags::DEFAULT, &["linux"]),
    (Block::Linux, "LIB_DISTNAMES_i386", VarFlags::DEFAULT, &["linux"]),
    (Block::Linux, "SHARE_DISTNAMES", VarFlags::DEFAULT, &["linux"]),
    (Block::Linux, "SRC_DISTFILES", VarFlags::DEFAULT, &["linux"]),
    (Block::Nuget, "NUGET_DEPENDS", VarFlags::SORTED, &["mono"]),
    (Block::Nuget, "NUGET_PACKAGEDIR", VarFlags::DEFAULT, &["mono"]),
    (Block::Nuget, "NUGET_LAYOUT", VarFlags::DEFAULT, &["mono"]),
    (Block::Nuget, "NUGET_FEEDS", VarFlags::DEFAULT, &["mono"]),
    (Block::Nuget, "PAKET_PACKAGEDIR", VarFlags::DEFAULT, &["mono"]),
    (Block::Nuget, "PAKET_DEPENDS", VarFlags::SORTED, &["mono"]),
    (Block::Make, "MAKEFILE", VarFlags::DEFAULT, &[]),
    (Block::Make, "MAKE_CMD", VarFlags::DEFAULT, &[]),
    (Block::Make, "MAKE_ARGS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Make, "MAKE_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Make, "SCRIPTS_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Make, "DESTDIRNAME", VarFlags::DEFAULT, &[]),
    (Block::Make, "MAKE_FLAGS", VarFlags::DEFAULT, &[]),
    (Block::Make, "MAKE_JOBS_UNSAFE", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Make, "ALL_TARGET", VarFlags::DEFAULT, &[]),
    (Block::Make, "INSTALL_TARGET", VarFlags::DEFAULT, &[]),
    (Block::Make, "LATE_INSTALL_ARGS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Make, "TEST_ARGS", VarFlags::PRINT_AS_NEWLINES, &[]),
    (Block::Make, "TEST_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Make, "TEST_TARGET", VarFlags::DEFAULT, &[]),
    (Block::Make, "QA_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Make, "DO_MAKE_BUILD", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::Make, "DO_MAKE_TEST", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::CFlags, "CFLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "CPPFLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "CXXFLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "DEBUG_FLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "DPADD", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "FFLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "FCFLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "OBJCFLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "RUSTFLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "LDADD", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "LDFLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "LIBS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "LLD_UNSAFE", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "SSP_UNSAFE", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "SSP_CFLAGS", VarFlags::DEFAULT, &[]),
    (Block::CFlags, "WITHOUT_CPU_CFLAGS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::CFlags, "WITHOUT_NO_STRICT_ALIASING", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::CFlags, "WITHOUT_SSP", VarFlags::DEFAULT, &[]),
    (Block::Conflicts, "CONFLICTS", VarFlags::SORTED, &[]),
    (Block::Conflicts, "CONFLICTS_BUILD", VarFlags::SORTED, &[]),
    (Block::Conflicts, "CONFLICTS_INSTALL", VarFlags::SORTED, &[]),
    (Block::Standard, "AR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "AS", VarFlags::DEFAULT, &[]),
    (Block::Standard, "CC", VarFlags::DEFAULT, &[]),
    (Block::Standard, "CPP", VarFlags::DEFAULT, &[]),
    (Block::Standard, "CXX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "LD", VarFlags::DEFAULT, &[]),
    (Block::Standard, "STRIP", VarFlags::DEFAULT, &[]),
    (Block::Standard, "BINDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "ETCDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "ETCDIR_REL", VarFlags::DEFAULT, &[]),
    (Block::Standard, "DATADIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "DATADIR_REL", VarFlags::DEFAULT, &[]),
    (Block::Standard, "DOCSDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "DOCSDIR_REL", VarFlags::DEFAULT, &[]),
    (Block::Standard, "EXAMPLESDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "FILESDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "LIB_DIRS", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MASTERDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MANDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MANDIRS", VarFlags::SORTED, &[]),
    (Block::Standard, "MANPREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MAN1PREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MAN2PREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MAN3PREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MAN4PREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MAN5PREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MAN6PREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MAN7PREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MAN8PREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MAN9PREFIX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "PATCHDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "PKGDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "SCRIPTDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "STAGEDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "SRC_BASE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "TMPDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "WWWDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "WWWDIR_REL", VarFlags::DEFAULT, &[]),
    (Block::Standard, "BINARY_ALIAS", VarFlags::SORTED, &[]),
    (Block::Standard, "BINARY_WRAPPERS", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &[]),
    (Block::Standard, "BINOWN", VarFlags::DEFAULT, &[]),
    (Block::Standard, "BINGRP", VarFlags::DEFAULT, &[]),
    (Block::Standard, "BINMODE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MANMODE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "SHAREOWN", VarFlags::DEFAULT, &[]),
    (Block::Standard, "SHAREGRP", VarFlags::DEFAULT, &[]),
    (Block::Standard, "_SHAREMODE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "SHAREMODE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "WWWOWN", VarFlags::DEFAULT, &[]),
    (Block::Standard, "WWWGRP", VarFlags::DEFAULT, &[]),
    (Block::Standard, "BUNDLE_LIBS", VarFlags::SORTED, &[]),
    (Block::Standard, "DESKTOP_ENTRIES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL), &[]),
    (Block::Standard, "DESKTOPDIR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "EXTRA_PATCHES", VarFlags::DEFAULT, &[]),
    (Block::Standard, "EXTRACT_CMD", VarFlags::DEFAULT, &[]),
    (Block::Standard, "EXTRACT_BEFORE_ARGS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Standard, "EXTRACT_AFTER_ARGS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Standard, "FETCH_CMD", VarFlags::DEFAULT, &[]),
    (Block::Standard, "FETCH_ARGS", VarFlags::DEFAULT, &[]),
    (Block::Standard, "FETCH_REGET", VarFlags::DEFAULT, &[]),
    (Block::Standard, "FETCH_ENV", VarFlags::SORTED, &[]),
    (Block::Standard, "FETCH_BEFORE_ARGS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Standard, "FETCH_AFTER_ARGS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Standard, "PATCH_STRIP", VarFlags::DEFAULT, &[]),
    (Block::Standard, "PATCH_ARGS", VarFlags::DEFAULT, &[]),
    (Block::Standard, "PATCH_DIST_ARGS", VarFlags::DEFAULT, &[]),
    (Block::Standard, "REINPLACE_CMD", VarFlags::DEFAULT, &[]),
    (Block::Standard, "REINPLACE_ARGS", VarFlags::DEFAULT, &[]),
    (Block::Standard, "DISTORIG", VarFlags::DEFAULT, &[]),
    (Block::Standard, "IA32_BINARY_PORT", VarFlags::DEFAULT, &[]),
    (Block::Standard, "INSTALL", VarFlags::DEFAULT, &[]),
    (Block::Standard, "IS_INTERACTIVE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "NO_ARCH", VarFlags::DEFAULT, &[]),
    (Block::Standard, "NO_ARCH_IGNORE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "NO_BUILD", VarFlags::DEFAULT, &[]),
    (Block::Standard, "NOCCACHE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "NO_CCACHE", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::Standard, "NO_CCACHE_DEPEND", VarFlags::IGNORE_WRAP_COL, &[]),
    (Block::Standard, "NO_CHECKSUM", VarFlags::DEFAULT, &[]),
    (Block::Standard, "NO_INSTALL", VarFlags::DEFAULT, &[]),
    (Block::Standard, "NO_MTREE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "NOT_REPRODUCIBLE", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Standard, "MASTER_SORT", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MASTER_SORT_REGEX", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MTREE_CMD", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MTREE_ARGS", VarFlags::DEFAULT, &[]),
    (Block::Standard, "MTREE_FILE", VarFlags::DEFAULT, &[]),
    (Block::Standard, "NOPRECIOUSMAKEVARS", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Standard, "NO_TEST", VarFlags::DEFAULT, &[]),
    (Block::Standard, "PORTSCOUT", VarFlags::DEFAULT, &[]),
    (Block::Standard, "SUB_FILES", VarFlags::SORTED, &[]),
    (Block::Standard, "SUB_LIST", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Standard, "TARGET_ORDER_OVERRIDE", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::Standard, "UID_FILES", VarFlags::SORTED, &[]),
    (Block::Standard, "ERROR", VarFlags::DEFAULT, &[]),
    (Block::Standard, "WARNING", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "NO_WRKSUBDIR", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "AUTORECONF_WRKSRC", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "BUILD_WRKSRC", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "CONFIGURE_WRKSRC", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "INSTALL_WRKSRC", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "PATCH_WRKSRC", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "TEST_WRKSRC", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "WRKDIR", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "WRKSRC", VarFlags::DEFAULT, &[]),
    (Block::WrkSrc, "WRKSRC_SUBDIR", VarFlags::DEFAULT, &[]),
    (Block::Users, "USERS", VarFlags::SORTED, &[]),
    (Block::Users, "GROUPS", VarFlags::SORTED, &[]),
    (Block::Plist, "DESCR", VarFlags::SUBPKG_HELPER, &[]),
    (Block::Plist, "DISTINFO_FILE", VarFlags::DEFAULT, &[]),
    (Block::Plist, "PKGHELP", VarFlags::DEFAULT, &[]),
    (Block::Plist, "PKGPREINSTALL", VarFlags::SUBPKG_HELPER, &[]),
    (Block::Plist, "PKGINSTALL", VarFlags::SUBPKG_HELPER, &[]),
    (Block::Plist, "PKGPOSTINSTALL", VarFlags::SUBPKG_HELPER, &[]),
    (Block::Plist, "PKGPREDEINSTALL", VarFlags::SUBPKG_HELPER, &[]),
    (Block::Plist, "PKGDEINSTALL", VarFlags::SUBPKG_HELPER, &[]),
    (Block::Plist, "PKGPOSTDEINSTALL", VarFlags::SUBPKG_HELPER, &[]),
    (Block::Plist, "PKGMESSAGE", VarFlags::SUBPKG_HELPER, &[]),
    (Block::Plist, "PKG_DBDIR", VarFlags::DEFAULT, &[]),
    (Block::Plist, "PKG_SUFX", VarFlags::DEFAULT, &[]),
    (Block::Plist, "PLIST", VarFlags::DEFAULT, &[]),
    (Block::Plist, "POST_PLIST", VarFlags::DEFAULT, &[]),
    (Block::Plist, "TMPPLIST", VarFlags::DEFAULT, &[]),
    (Block::Plist, "INFO", VarFlags::DEFAULT, &[]),
    (Block::Plist, "INFO_PATH", VarFlags::DEFAULT, &[]),
    (Block::Plist, "PLIST_DIRS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Plist, "PLIST_FILES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Plist, "PLIST_SUB", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), &[]),
    (Block::Plist, "PORTDATA", VarFlags::CASE_SENSITIVE_SORT.union(VarFlags::SORTED), &[]),
    (Block::Plist, "PORTDOCS", VarFlags::CASE_SENSITIVE_SORT.union(VarFlags::SORTED), &[]),
    (Block::Plist, "PORTEXAMPLES", VarFlags::CASE_SENSITIVE_SORT.union(VarFlags::SORTED), &[]),
    (Block::OptDef, "OPTIONS_DEFINE", VarFlags::SORTED, &[]),
    (Block::OptDef, "OPTIONS_DEFINE_DragonFly", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &[]),
    (Block::OptDef, "OPTIONS_DEFAULT", VarFlags::SORTED, &[]),
    (Block::OptDef, "OPTIONS_DEFAULT_DragonFly", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &[]),
    (Block::OptDef, "OPTIONS_GROUP", VarFlags::SORTED, &[]),
    (Block::OptDef, "OPTIONS_MULTI", VarFlags::SORTED, &[]),
    (Block::OptDef, "OPTIONS_RADIO", VarFlags::SORTED, &[]),
    (Block::OptDef, "OPTIONS_SINGLE", VarFlags::SORTED, &[]),
    (Block::OptDef, "OPTIONS_EXCLUDE", VarFlags::SORTED, &[]),
    (Block::OptDef, "OPTIONS_EXCLUDE_DragonFly", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), &[]),
    (Block::OptDef, "OPTIONS_SLAVE", VarFlags::SORTED, &[]),
    (Block::OptDef, "OPTIONS_OVERRIDE", VarFlags::SORTED, &[]),
    (Block::OptDef, "NO_OPTIONS_SORT", VarFlags::SKIP_GOAL_COL, &[]),
    (Block::OptDef, "OPTIONS_FILE", VarFlags::DEFAULT, &[]),
    (Block::OptDef, "OPTIONS_SUB", VarFlags::DEFAULT, &[]),
    (Block::OptDesc, "DESC", VarFlags::IGNORE_WRAP_COL.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "IMPLIES", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PREVENTS", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PREVENTS_MSG", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "SUBPACKAGES", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CATEGORIES", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CATEGORIES_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "MASTER_SITES", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "MASTER_SITES_OFF", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "DISTFILES", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "DISTFILES_OFF", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "EXTRACT_ONLY", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "EXTRACT_ONLY_OFF", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PATCH_SITES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PATCH_SITES_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PATCHFILES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PATCHFILES_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "BROKEN", VarFlags::IGNORE_WRAP_COL.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "BROKEN_OFF", VarFlags::IGNORE_WRAP_COL.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "IGNORE", VarFlags::IGNORE_WRAP_COL.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "IGNORE_OFF", VarFlags::IGNORE_WRAP_COL.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PKG_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PKG_DEPENDS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "FETCH_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "FETCH_DEPENDS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "EXTRACT_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "EXTRACT_DEPENDS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PATCH_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PATCH_DEPENDS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "BUILD_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "BUILD_DEPENDS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "LIB_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "LIB_DEPENDS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "RUN_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "RUN_DEPENDS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "TEST_DEPENDS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "TEST_DEPENDS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::SUBPKG_HELPER).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "USES", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "USES_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "USE", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "USE_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "GH_ACCOUNT", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GH_ACCOUNT_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GH_PROJECT", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GH_PROJECT_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GH_SUBDIR", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GH_SUBDIR_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GH_TAGNAME", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GH_TAGNAME_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GH_TUPLE", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "GH_TUPLE_OFF", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "GL_ACCOUNT", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_ACCOUNT_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_COMMIT", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_COMMIT_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_PROJECT", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_PROJECT_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_SITE", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_SITE_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_SUBDIR", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_SUBDIR_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "GL_TUPLE", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "GL_TUPLE_OFF", VarFlags::IGNORE_WRAP_COL.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CMAKE_BOOL", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["cmake"]),
    (Block::OptHelper, "CMAKE_BOOL_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["cmake"]),
    (Block::OptHelper, "CMAKE_ON", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &["cmake"]),
    (Block::OptHelper, "CMAKE_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &["cmake"]),
    (Block::OptHelper, "CONFIGURE_ON", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFIGURE_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFIGURE_ENABLE", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFIGURE_WITH", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFIGURE_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFIGURE_ENV_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "QMAKE_ON", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["qmake"]),
    (Block::OptHelper, "QMAKE_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["qmake"]),
    (Block::OptHelper, "MESON_ENABLED", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["meson"]),
    (Block::OptHelper, "MESON_DISABLED", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["meson"]),
    (Block::OptHelper, "MESON_ON", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["meson"]),
    (Block::OptHelper, "MESON_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["meson"]),
    (Block::OptHelper, "MESON_TRUE", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["meson"]),
    (Block::OptHelper, "MESON_FALSE", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["meson"]),
    (Block::OptHelper, "MESON_YES", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["meson"]),
    (Block::OptHelper, "MESON_NO", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["meson"]),
    (Block::OptHelper, "USE_CABAL", VarFlags::CASE_SENSITIVE_SORT.union(VarFlags::PRINT_AS_NEWLINES).union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &["cabal"]),
    (Block::OptHelper, "CABAL_FLAGS", VarFlags::NOT_COMPARABLE, &["cabal"]),
    (Block::OptHelper, "EXECUTABLES", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &["cabal"]),
    (Block::OptHelper, "MAKE_ARGS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "MAKE_ARGS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "MAKE_ENV", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "MAKE_ENV_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "ALL_TARGET", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "ALL_TARGET_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "INSTALL_TARGET", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "INSTALL_TARGET_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "TEST_TARGET", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "TEST_TARGET_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "CFLAGS", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "CFLAGS_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "CPPFLAGS", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "CPPFLAGS_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "CXXFLAGS", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "CXXFLAGS_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "LDFLAGS", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "LDFLAGS_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "LIBS", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "LIBS_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "CONFLICTS", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFLICTS_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFLICTS_BUILD", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFLICTS_BUILD_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFLICTS_INSTALL", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "CONFLICTS_INSTALL_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "BINARY_ALIAS", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "BINARY_ALIAS_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "DESKTOP_ENTRIES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "DESKTOP_ENTRIES_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "EXTRA_PATCHES", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "EXTRA_PATCHES_OFF", VarFlags::NOT_COMPARABLE, &[]),
    (Block::OptHelper, "SUB_FILES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "SUB_FILES_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "SUB_LIST", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "SUB_LIST_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "INFO", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "INFO_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PLIST_DIRS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PLIST_DIRS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PLIST_FILES", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PLIST_FILES_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PLIST_SUB", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PLIST_SUB_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PORTDOCS", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PORTDOCS_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PORTEXAMPLES", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "PORTEXAMPLES_OFF", VarFlags::SORTED.union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "VARS", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
    (Block::OptHelper, "VARS_OFF", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED).union(VarFlags::NOT_COMPARABLE), &[]),
];

pub static EXPAND_TABLE: &[ExpandEntry] = &[
    (Block::Broken, "BROKEN_", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), ExpandKind::Arch, &[]),
    (Block::Broken, "BROKEN_", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), ExpandKind::FreebsdVersionAndArch, &[]),
    (Block::Broken, "IGNORE_", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), ExpandKind::Arch, &[]),
    (Block::Broken, "IGNORE_", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), ExpandKind::FreebsdVersionAndArch, &[]),
    (Block::Broken, "ONLY_FOR_ARCHS_REASON_", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), ExpandKind::Arch, &[]),
    (Block::Broken, "NOT_FOR_ARCHS_REASON_", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), ExpandKind::Arch, &[]),
    (Block::Depends, "FETCH_DEPENDS_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Depends, "EXTRACT_DEPENDS_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Depends, "PATCH_DEPENDS_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Depends, "BUILD_DEPENDS_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Depends, "LIB_DEPENDS_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Depends, "RUN_DEPENDS_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Depends, "TEST_DEPENDS_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SKIP_GOAL_COL).union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Uses, "BROKEN_SSL_REASON_", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), ExpandKind::Ssl, &["ssl"]),
    (Block::Uses, "IGNORE_SSL_REASON_", VarFlags::IGNORE_WRAP_COL.union(VarFlags::SKIP_GOAL_COL), ExpandKind::Ssl, &["ssl"]),
    (Block::CFlags, "CFLAGS_", VarFlags::DEFAULT, ExpandKind::Arch, &[]),
    (Block::CFlags, "CXXFLAGS_", VarFlags::DEFAULT, ExpandKind::Arch, &[]),
    (Block::CFlags, "LDFLAGS_", VarFlags::DEFAULT, ExpandKind::Arch, &[]),
    (Block::OptDef, "OPTIONS_DEFINE_", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), ExpandKind::FreebsdVersion, &[]),
    (Block::OptDef, "OPTIONS_DEFINE_", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::OptDef, "OPTIONS_DEFAULT_", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), ExpandKind::FreebsdVersion, &[]),
    (Block::OptDef, "OPTIONS_DEFAULT_", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::OptDef, "OPTIONS_EXCLUDE_", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), ExpandKind::FreebsdVersion, &[]),
    (Block::OptDef, "OPTIONS_EXCLUDE_", VarFlags::SKIP_GOAL_COL.union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Unknown, "CONFIGURE_ARGS_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Unknown, "CONFIGURE_ENV_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Unknown, "EXTRA_PATCHES_", VarFlags::DEFAULT, ExpandKind::Arch, &[]),
    (Block::Unknown, "MAKE_ARGS_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), ExpandKind::Arch, &[]),
    (Block::Unknown, "MAKE_ENV_", VarFlags::PRINT_AS_NEWLINES.union(VarFlags::SORTED), ExpandKind::Arch, &[]),
];

fn expand_name(prefix: &str, kind: ExpandKind, out: &mut Vec<String>) {
    match kind {
        ExpandKind::Arch => {
            for arch in super::ARCHITECTURES {
                out.push(format!("{prefix}{arch}"));
            }
        }
        ExpandKind::FreebsdVersion => {
            for ver in super::FREEBSD_VERSIONS {
                out.push(format!("{prefix}{ver}"));
            }
        }
        ExpandKind::FreebsdVersionAndArch => {
            for ver in super::FREEBSD_VERSIONS {
                for arch in super::ARCHITECTURES {
                    out.push(format!("{prefix}{ver}_{arch}"));
                }
            }
        }
        ExpandKind::Ssl => {
            for impl_ in super::SSL_IMPLS {
                out.push(format!("{prefix}{}", impl_.replace('-', "_")));
            }
        }
    }
}

struct KnowledgeBase {
    by_name: HashMap<&'static str, (Block, VarFlags, &'static [&'static str])>,
    expanded: HashMap<String, (Block, VarFlags, &'static [&'static str])>,
}

static KB: Lazy<KnowledgeBase> = Lazy::new(|| {
    let mut by_name = HashMap::with_capacity(VARIABLE_TABLE.len());
    for &(block, name, flags, uses) in VARIABLE_TABLE {
        by_name.insert(name, (block, flags, uses));
    }

    let mut expanded = HashMap::new();
    for &(block, prefix, flags, kind, uses) in EXPAND_TABLE {
        let mut names = Vec::new();
        expand_name(prefix, kind, &mut names);
        for name in names {
            expanded.insert(name, (block, flags, uses));
        }
    }

    KnowledgeBase { by_name, expanded }
});

/// Look up a variable's block, flags and USES requirement. Falls back to
/// the expansion-template table (arch/version/ssl suffixed names), then
/// to `Block::Unknown` with default flags.
pub fn lookup_variable(name: &str) -> (Block, VarFlags, &'static [&'static str]) {
    if let Some(&entry) = KB.by_name.get(name) {
        return entry;
    }
    if let Some(entry) = KB.expanded.get(name) {
        return *entry;
    }
    (Block::Unknown, VarFlags::DEFAULT, &[])
}

pub fn is_known_variable(name: &str) -> bool {
    KB.by_name.contains_key(name) || KB.expanded.contains_key(name)
}

/// Canonical within-block order index, used by the merge pass's insertion
/// algorithm and by `lint_order`. Variables sharing a block keep their
/// table order; unknown variables sort after every known one in their
/// block.
pub fn variable_order_index(name: &str) -> Option<usize> {
    VARIABLE_TABLE.iter().position(|&(_, n, _, _)| n == name)
}

/// A small perfect-hash subset used for option-helper suffix recognition
/// (§4.3); kept separate from the main table since these are suffixes,
/// not full variable names.
pub static OPTION_HELPER_SUFFIXES: phf::Map<&'static str, ()> = phf_map! {
    "USES" => (),
    "USES_OFF" => (),
    "VARS" => (),
    "VARS_OFF" => (),
    "CMAKE_ON" => (),
    "CMAKE_OFF" => (),
    "CONFIGURE_ON" => (),
    "CONFIGURE_OFF" => (),
    "CONFIGURE_ENABLE" => (),
    "CONFIGURE_WITH" => (),
    "MESON_ON" => (),
    "MESON_OFF" => (),
    "MESON_ENABLED" => (),
    "MESON_DISABLED" => (),
    "MESON_TRUE" => (),
    "MESON_FALSE" => (),
    "MESON_YES" => (),
    "MESON_NO" => (),
    "EXTRA_PATCHES" => (),
    "DESC" => (),
    "IMPLIES" => (),
    "PREVENTS" => (),
    "PREVENTS_MSG" => (),
    "CFLAGS" => (),
    "CFLAGS_OFF" => (),
    "CXXFLAGS" => (),
    "CXXFLAGS_OFF" => (),
    "LDFLAGS" => (),
    "LDFLAGS_OFF" => (),
    "CPPFLAGS" => (),
    "CPPFLAGS_OFF" => (),
    "MAKE_ENV" => (),
    "MAKE_ENV_OFF" => (),
    "MAKE_ARGS" => (),
    "MAKE_ARGS_OFF" => (),
    "CATEGORIES" => (),
    "PKG_DEPENDS" => (),
    "EXTRACT_DEPENDS" => (),
    "PATCH_DEPENDS" => (),
    "FETCH_DEPENDS" => (),
    "BUILD_DEPENDS" => (),
    "RUN_DEPENDS" => (),
    "TEST_DEPENDS" => (),
    "LIB_DEPENDS" => (),
    "DISTFILES" => (),
    "EXTRA_PATCH_SITES" => (),
    "PLIST_FILES" => (),
    "PLIST_FILES_OFF" => (),
    "PLIST_SUB" => (),
    "PLIST_SUB_OFF" => (),
    "PORTDOCS" => (),
    "PORTDOCS_OFF" => (),
    "PORTEXAMPLES" => (),
    "PORTEXAMPLES_OFF" => (),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portname_is_known_with_default_flags() {
        let (block, flags, uses) = lookup_variable("PORTNAME");
        assert_eq!(block, Block::PortName);
        assert_eq!(flags, VarFlags::DEFAULT);
        assert!(uses.is_empty());
    }

    #[test]
    fn master_sites_prints_as_newlines() {
        let (_, flags, _) = lookup_variable("MASTER_SITES");
        assert!(flags.contains(VarFlags::PRINT_AS_NEWLINES));
    }

    #[test]
    fn cmake_args_expands_with_required_uses() {
        let (block, flags, uses) = lookup_variable("CMAKE_ARGS");
        assert_eq!(block, Block::Cmake);
        assert!(flags.contains(VarFlags::SORTED));
        assert_eq!(uses, &["cmake"]);
    }

    #[test]
    fn arch_expanded_variable_is_recognized() {
        let (block, flags, _) = lookup_variable("CFLAGS_amd64");
        assert_eq!(block, Block::CFlags);
        assert_eq!(flags, VarFlags::DEFAULT);
    }

    #[test]
    fn unknown_variable_falls_back() {
        let (block, flags, uses) = lookup_variable("TOTALLY_MADE_UP_VAR");
        assert_eq!(block, Block::Unknown);
        assert_eq!(flags, VarFlags::DEFAULT);
        assert!(uses.is_empty());
    }

    #[test]
    fn variable_order_respects_table_position() {
        let portname = variable_order_index("PORTNAME").unwrap();
        let portversion = variable_order_index("PORTVERSION").unwrap();
        assert!(portname < portversion);
    }
}
