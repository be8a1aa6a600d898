//! Pre-procedure safety prompts from a free-text patient history.
//!
//! ```
//! use procsafe::{analyze, Category, ProcedureId};
//!
//! let issues = analyze("Facial trauma from fall yesterday.", ProcedureId::NgTube);
//! assert_eq!(issues.len(), 2);
//! assert_eq!(issues[1].category, Category::RedFlag);
//! ```

#![forbid(unsafe_code)]

pub use procsafe_catalog::{CatalogError, get, list_all, lookup};
pub use procsafe_domain::{EffectiveConfig, MatchMode, RulePolicy, analyze, analyze_with, evaluate};
pub use procsafe_types::{
    AnalysisReport, Category, Issue, ProcedureId, ProcedureInfo, Reference, Severity,
    SeverityCounts, UnknownProcedure,
};
