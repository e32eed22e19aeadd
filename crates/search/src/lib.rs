//! # Locator Search
//!
//! Line-level content search over project files, three-tier match
//! confidence, and selection of the single best edit location.
//!
//! ## Fallback ladder
//!
//! ```text
//! SearchPlan
//!     │
//!     ├──> exact     searchTerms / regexPatterns
//!     │      └─ empty? ↓
//!     ├──> fuzzy     fallbackSearch terms / patterns
//!     │      └─ empty? ↓
//!     └──> semantic  synonym expansion of searchTerms
//! ```
//!
//! Results are ordered by confidence, then component type (page first), then
//! element type (JSX first).

mod confidence;
mod engine;
mod error;
mod expansion;
mod format;
mod selector;
mod settings;
mod typing;

pub use confidence::{score_match, MatchSignals};
pub use engine::{execute_search_plan, SearchEngine};
pub use error::{Result, SearchError};
pub use expansion::SynonymExpander;
pub use format::format_results_for_prompt;
pub use selector::select_target_file;
pub use settings::{SearchSettings, SemanticExpansion, DEFAULT_CONTEXT_LINES};
pub use typing::{classify_component, classify_element};
