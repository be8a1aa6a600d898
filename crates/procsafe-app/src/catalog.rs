//! The `list` and `show` use cases: read the procedure catalog.

use anyhow::Context;
use procsafe_types::ProcedureInfo;

pub fn run_list() -> &'static [ProcedureInfo] {
    procsafe_catalog::list_all()
}

/// One `id<TAB>name` line per procedure.
pub fn format_list(procedures: &[ProcedureInfo]) -> String {
    procedures
        .iter()
        .map(|p| format!("{}\t{}\n", p.id, p.name))
        .collect()
}

pub fn run_show(identifier: &str) -> anyhow::Result<&'static ProcedureInfo> {
    procsafe_catalog::lookup(identifier).context("select procedure")
}
