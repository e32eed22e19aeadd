//! # Locator Intent
//!
//! Heuristic edit-intent classification: decide what kind of edit a free-text
//! request asks for and which project files it should touch, without calling
//! any model.
//!
//! ## Pipeline
//!
//! ```text
//! prompt + ProjectManifest
//!     │
//!     ├──> Pattern groups (ordered, first match wins)
//!     │      UPDATE_STYLE → UPDATE_COMPONENT → ADD_FEATURE → FIX_ISSUE
//!     │      → REFACTOR → FULL_REBUILD → ADD_DEPENDENCY
//!     │
//!     ├──> Per-type file resolver
//!     │      └─> target files (never empty, falls back to the entry point)
//!     │
//!     └──> EditIntent { type, targetFiles, confidence, description, suggestedContext }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use locator_intent::classify_intent;
//! use locator_protocol::{EditType, FileRecord, FileType, ProjectManifest};
//!
//! let manifest = ProjectManifest::new("src/App.jsx")
//!     .with_file("src/App.jsx", FileRecord::new("export default function App() {}", FileType::Component))
//!     .with_file("src/components/Header.jsx", FileRecord::new("<header />", FileType::Layout));
//!
//! let intent = classify_intent("make the header blue", &manifest);
//! assert_eq!(intent.edit_type, EditType::UpdateStyle);
//! assert!(intent.target_files.contains(&"src/components/Header.jsx".to_string()));
//! ```

mod classifier;
mod patterns;
mod plan;
mod resolvers;
mod tokens;

pub use classifier::{classify_intent, IntentClassifier};
pub use plan::build_search_plan;
pub use resolvers::{
    find_component_by_content, find_component_files, find_feature_insertion_points,
    find_package_files, find_problem_files, find_style_files,
};
pub use tokens::{extract_component_names, extract_quoted};
