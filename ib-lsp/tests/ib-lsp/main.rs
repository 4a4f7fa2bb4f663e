mod from_proto;
mod report;

use ib_lsp::lsp_types;

macro_rules! lsp_range {
    ($sl:literal:$sc:literal..$el:literal:$ec:literal) => {
        lsp_types::Range {
            start: lsp_types::Position { line: $sl, character: $sc },
            end: lsp_types::Position { line: $el, character: $ec },
        }
    };
}

pub(crate) use lsp_range;

fn lsp_diagnostic(range: lsp_types::Range, message: &str) -> lsp_types::Diagnostic {
    lsp_types::Diagnostic { range, message: message.to_owned(), ..Default::default() }
}
