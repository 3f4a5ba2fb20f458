//! Per-parser metadata cache (C7).
//!
//! Several passes and knowledge-base lookups need answers to questions
//! like "what does this port's `USES` list contain" that require
//! scanning the whole tree once and then being asked many times. This
//! module does that scan lazily, on first access, and caches the result
//! for the lifetime of the [`Metadata`] value.

use std::cell::OnceCell;

use crate::ast::{Node, VarModifier};
use crate::ast::Ast;

/// Controls how [`Metadata::lookup_variable`] treats repeated or
/// conditionally-assigned values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupBehavior {
    /// Return every value assigned to the variable, in source order.
    All,
    /// Return only the first assignment found.
    First,
    /// Skip assignments nested inside `.if`/`.for` bodies entirely.
    IgnoreVariablesInConditionals,
}

#[derive(Debug, Default)]
pub struct Metadata<'a> {
    ast: Option<&'a Ast>,
    uses: OnceCell<Vec<String>>,
    options: OnceCell<Vec<String>>,
    option_groups: OnceCell<Vec<String>>,
    option_descriptions: OnceCell<Vec<String>>,
    flavors: OnceCell<Vec<String>>,
    licenses: OnceCell<Vec<String>>,
    shebang_langs: OnceCell<Vec<String>>,
    masterdir: OnceCell<Option<String>>,
    portname: OnceCell<Option<String>>,
    post_plist_targets: OnceCell<Vec<String>>,
    cabal_executables: OnceCell<Vec<String>>,
    subpackages: OnceCell<Vec<String>>,
}

impl<'a> Metadata<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Self {
            ast: Some(ast),
            ..Default::default()
        }
    }

    fn ast(&self) -> &'a Ast {
        self.ast.expect("Metadata constructed without an Ast")
    }

    /// All values ever assigned to `name`, honoring `behavior`.
    pub fn lookup_variable(&self, name: &str, behavior: LookupBehavior) -> Vec<String> {
        let mut out = Vec::new();
        collect_variable(&self.ast().root, name, behavior, &mut out);
        out
    }

    pub fn uses(&self) -> &[String] {
        self.uses
            .get_or_init(|| split_all(self.lookup_variable("USES", LookupBehavior::All)))
    }

    pub fn options(&self) -> &[String] {
        self.options.get_or_init(|| {
            let mut opts = split_all(self.lookup_variable("OPTIONS_DEFINE", LookupBehavior::All));
            opts.extend(split_all(
                self.lookup_variable("OPTIONS_DEFAULT", LookupBehavior::All),
            ));
            opts.sort();
            opts.dedup();
            opts
        })
    }

    pub fn option_groups(&self) -> &[String] {
        self.option_groups.get_or_init(|| {
            let mut groups = Vec::new();
            for var in [
                "OPTIONS_GROUP",
                "OPTIONS_MULTI",
                "OPTIONS_RADIO",
                "OPTIONS_SINGLE",
            ] {
                groups.extend(split_all(
                    self.lookup_variable(var, LookupBehavior::All),
                ));
            }
            groups
        })
    }

    pub fn option_descriptions(&self) -> &[String] {
        self.option_descriptions.get_or_init(Vec::new)
    }

    pub fn flavors(&self) -> &[String] {
        self.flavors
            .get_or_init(|| split_all(self.lookup_variable("FLAVORS", LookupBehavior::All)))
    }

    pub fn licenses(&self) -> &[String] {
        self.licenses
            .get_or_init(|| split_all(self.lookup_variable("LICENSE", LookupBehavior::All)))
    }

    pub fn shebang_langs(&self) -> &[String] {
        self.shebang_langs
            .get_or_init(|| split_all(self.lookup_variable("SHEBANG_LANG", LookupBehavior::All)))
    }

    pub fn masterdir(&self) -> Option<&str> {
        self.masterdir
            .get_or_init(|| {
                self.lookup_variable("MASTERDIR", LookupBehavior::First)
                    .into_iter()
                    .next()
            })
            .as_deref()
    }

    pub fn portname(&self) -> Option<&str> {
        self.portname
            .get_or_init(|| {
                self.lookup_variable("PORTNAME", LookupBehavior::First)
                    .into_iter()
                    .next()
            })
            .as_deref()
    }

    pub fn post_plist_targets(&self) -> &[String] {
        self.post_plist_targets.get_or_init(Vec::new)
    }

    pub fn cabal_executables(&self) -> &[String] {
        self.cabal_executables.get_or_init(|| {
            split_all(self.lookup_variable("CABAL_EXECUTABLES", LookupBehavior::All))
        })
    }

    pub fn subpackages(&self) -> &[String] {
        self.subpackages
            .get_or_init(|| split_all(self.lookup_variable("SUBPACKAGES", LookupBehavior::All)))
    }
}

fn split_all(values: Vec<String>) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split_whitespace())
        .map(str::to_string)
        .collect()
}

fn collect_variable(nodes: &[Node], name: &str, behavior: LookupBehavior, out: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Variable(v) if v.name == name => {
                let append = v.modifier == VarModifier::Append;
                let value = v.words.join(" ");
                if append {
                    out.push(value);
                } else if behavior == LookupBehavior::First && !out.is_empty() {
                    // keep the first-seen assignment
                } else {
                    out.clear();
                    out.push(value);
                }
                if behavior == LookupBehavior::First {
                    return;
                }
            }
            Node::If(n) if behavior != LookupBehavior::IgnoreVariablesInConditionals => {
                collect_variable(&n.body, name, behavior, out);
                collect_variable(&n.orelse, name, behavior, out);
            }
            Node::For(n) if behavior != LookupBehavior::IgnoreVariablesInConditionals => {
                collect_variable(&n.body, name, behavior, out);
            }
            Node::Target(t) => {
                collect_variable(&t.body, name, behavior, out);
            }
            Node::Include(inc) => {
                collect_variable(&inc.body, name, behavior, out);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse_str;

    #[test]
    fn uses_splits_on_whitespace_and_commas_are_left_alone() {
        let ast = parse_str("USES=\tcmake pkgconfig\n").unwrap();
        let meta = Metadata::new(&ast);
        assert_eq!(meta.uses(), &["cmake".to_string(), "pkgconfig".to_string()]);
    }

    #[test]
    fn later_plain_assignment_overwrites_earlier_one() {
        let ast = parse_str("USES=\tcmake\nUSES=\tgmake\n").unwrap();
        let meta = Metadata::new(&ast);
        assert_eq!(meta.uses(), &["gmake".to_string()]);
    }

    #[test]
    fn append_accumulates_across_assignments() {
        let ast = parse_str("USES=\tcmake\nUSES+=\tgmake\n").unwrap();
        let meta = Metadata::new(&ast);
        assert_eq!(
            meta.uses(),
            &["cmake".to_string(), "gmake".to_string()]
        );
    }

    #[test]
    fn portname_reads_first_assignment() {
        let ast = parse_str("PORTNAME=\tfoo\n").unwrap();
        let meta = Metadata::new(&ast);
        assert_eq!(meta.portname(), Some("foo"));
    }

    #[test]
    fn variables_inside_targets_are_still_found() {
        let ast = parse_str("post-install:\n\t@${TRUE}\nUSES=\tcmake\n").unwrap();
        let meta = Metadata::new(&ast);
        assert_eq!(meta.uses(), &["cmake".to_string()]);
    }
}
