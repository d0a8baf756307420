// Public entry point.

/// Parse `source` into a root compound node.
///
/// `path` is a label used in diagnostics; no file is read here. On
/// failure the ordered diagnostics collected during recovery are
/// returned, first error first, and any partially built tree is
/// discarded.
#[tracing::instrument(skip_all, fields(path = path, source_len = source.len()))]
pub fn parse(source: &str, path: &str) -> Result<Node, Vec<ParseDiagnostic>> {
    Parser::new(source, path).parse()
}
