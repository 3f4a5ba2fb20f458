//! Include loader (C8): resolves `.include`/`include` paths against the
//! parser's settings and the values already assigned in the tree, then
//! recursively parses and splices the result into `Include.body`.

use std::path::{Path, PathBuf};

use crate::ast::{Ast, Node};
use crate::builder;
use crate::error::{ParserError, Result, SourceLocation};
use crate::metadata::{LookupBehavior, Metadata};

/// Directories consulted when resolving a non-system include path,
/// mirroring the `${MASTERDIR}`/`${.CURDIR}`/`${PORTSDIR}`/`${FILESDIR}`
/// variables a port `Makefile` conventionally sets.
#[derive(Debug, Clone, Default)]
pub struct IncludeSearchPath {
    pub curdir: PathBuf,
    pub masterdir: Option<PathBuf>,
    pub portsdir: Option<PathBuf>,
    pub filesdir: Option<PathBuf>,
}

impl IncludeSearchPath {
    pub fn for_file(path: &Path) -> Self {
        let curdir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self {
            filesdir: Some(curdir.join("files")),
            curdir,
            masterdir: None,
            portsdir: None,
        }
    }

    fn resolve(&self, raw: &str) -> PathBuf {
        if let Some(rest) = raw.strip_prefix("${MASTERDIR}/") {
            if let Some(dir) = &self.masterdir {
                return dir.join(rest);
            }
        }
        if let Some(rest) = raw.strip_prefix("${.CURDIR:H:H}/") {
            let up = self.curdir.parent().and_then(Path::parent);
            if let Some(dir) = up {
                return dir.join(rest);
            }
        }
        if let Some(rest) = raw.strip_prefix("${.CURDIR:H}/") {
            if let Some(dir) = self.curdir.parent() {
                return dir.join(rest);
            }
        }
        if let Some(rest) = raw.strip_prefix("${.CURDIR}/") {
            return self.curdir.join(rest);
        }
        if let Some(rest) = raw.strip_prefix("${.PARSEDIR}/") {
            return self.curdir.join(rest);
        }
        if let Some(rest) = raw.strip_prefix("${PORTSDIR}/") {
            if let Some(dir) = &self.portsdir {
                return dir.join(rest);
            }
        }
        if let Some(rest) = raw.strip_prefix("${FILESDIR}/") {
            if let Some(dir) = &self.filesdir {
                return dir.join(rest);
            }
        }
        self.curdir.join(raw)
    }
}

/// Walks `ast`, loading every unloaded, non-system, resolvable `Include`
/// node's target and splicing its parsed body in place. System includes
/// (`<bsd.port.mk>` and friends) are left unloaded, since their content
/// lives outside the port tree this crate edits.
pub fn resolve_includes(ast: &mut Ast, search: &IncludeSearchPath, max_depth: usize) -> Result<()> {
    let meta = Metadata::new(ast);
    let masterdir = meta
        .lookup_variable("MASTERDIR", LookupBehavior::First)
        .into_iter()
        .next();
    let mut search = search.clone();
    if search.masterdir.is_none() {
        search.masterdir = masterdir.map(PathBuf::from);
    }
    load_nodes(&mut ast.root, &search, max_depth)
}

fn load_nodes(nodes: &mut [Node], search: &IncludeSearchPath, depth_left: usize) -> Result<()> {
    for node in nodes {
        match node {
            Node::Include(inc) if !inc.sys && !inc.loaded => {
                if depth_left == 0 {
                    return Err(ParserError::AstBuildFailed {
                        location: SourceLocation::new(),
                        message: format!("include depth limit exceeded at `{}`", inc.path),
                    });
                }
                let resolved = search.resolve(&inc.path);
                let text = std::fs::read_to_string(&resolved)?;
                let mut sub = builder::parse_str(&text)?;
                let sub_search = IncludeSearchPath::for_file(&resolved);
                load_nodes(&mut sub.root, &sub_search, depth_left - 1)?;
                inc.body = sub.root;
                inc.loaded = true;
            }
            Node::Include(inc) => {
                load_nodes(&mut inc.body, search, depth_left)?;
            }
            Node::If(n) => {
                load_nodes(&mut n.body, search, depth_left)?;
                load_nodes(&mut n.orelse, search, depth_left)?;
            }
            Node::For(n) => load_nodes(&mut n.body, search, depth_left)?,
            Node::Target(t) => load_nodes(&mut t.body, search, depth_left)?,
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sys_include_is_left_unloaded() {
        let mut ast = builder::parse_str(".include <bsd.port.mk>\n").unwrap();
        resolve_includes(&mut ast, &IncludeSearchPath::default(), 8).unwrap();
        let Node::Include(inc) = &ast.root[0] else {
            panic!("expected Include");
        };
        assert!(!inc.loaded);
    }

    #[test]
    fn local_include_is_loaded_and_spliced() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Makefile.inc"), "EXTRA=\tvalue\n").unwrap();
        let main = dir.path().join("Makefile");
        std::fs::write(&main, ".include \"Makefile.inc\"\n").unwrap();

        let text = std::fs::read_to_string(&main).unwrap();
        let mut ast = builder::parse_str(&text).unwrap();
        let search = IncludeSearchPath::for_file(&main);
        resolve_includes(&mut ast, &search, 8).unwrap();

        let Node::Include(inc) = &ast.root[0] else {
            panic!("expected Include");
        };
        assert!(inc.loaded);
        assert_eq!(inc.body.len(), 1);
    }

    #[test]
    fn depth_limit_is_enforced_against_include_cycles() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.mk");
        let b = dir.path().join("b.mk");
        std::fs::write(&a, ".include \"b.mk\"\n").unwrap();
        std::fs::write(&b, ".include \"a.mk\"\n").unwrap();

        let text = std::fs::read_to_string(&a).unwrap();
        let mut ast = builder::parse_str(&text).unwrap();
        let search = IncludeSearchPath::for_file(&a);
        let err = resolve_includes(&mut ast, &search, 2).unwrap_err();
        assert!(matches!(err, ParserError::AstBuildFailed { .. }));
    }
}
