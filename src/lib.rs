//! settings-search: LCS-based fuzzy search over settings
//!
//! Ranks candidate records against a query by the longest common
//! subsequence of each text field, plus threshold bonuses.
//!
//! ```
//! use settings_search::{RankingEngine, SettingCandidate};
//!
//! let settings = vec![
//!     SettingCandidate::new("editor", "showInvisibles").with_title("Show Invisibles"),
//!     SettingCandidate::new("editor", "fontSize").with_title("Font Size"),
//! ];
//! let ranked = RankingEngine::new().rank("invisibles", settings, 1.0);
//! assert_eq!(ranked[0].candidate.path, "editor.showInvisibles");
//! ```

pub mod candidate;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod schema;
pub mod search;

pub use candidate::{Searchable, SettingCandidate};
pub use config::SearchConfig;
pub use error::SearchError;
pub use search::{score, BonusKeying, FieldScore, RankResult, RankedList, RankingEngine};
