//! Interval-ratio search over a catalog of named scales.
//!
//! Type a few ratios (`3/2 5/4`), get back every scale whose interval list contains
//! all of them, ordered and paged, with a tone schedule for previewing each one.
//!
//! ## Modules
//! - `catalog` - Immutable scale catalog loaded from JSON
//! - `tokenizer` - Query splitting and ratio-token validation
//! - `matcher` - All-tokens substring matching
//! - `sort` - Result ordering
//! - `paginate` - Fixed-size pages
//! - `session` - Query state for interactive front ends
//! - `render` - HTML and text result rendering
//! - `audio` - Preview tone schedules and offline synthesis
//! - `settings` - YAML settings

pub mod api;
pub mod audio;
pub mod catalog;
pub mod error;
pub mod matcher;
pub mod paginate;
pub mod render;
pub mod session;
pub mod settings;
pub mod sort;
pub mod tokenizer;

pub use api::{preview, search};
pub use catalog::{Catalog, ScaleEntry};
pub use error::ScaleError;
pub use matcher::find_scales;
pub use paginate::{Paginator, PAGE_SIZE};
pub use render::{render_results_html, render_results_text, ScaleView};
pub use session::{QueryOutcome, SearchSession, SessionView};
pub use settings::{parse_base_frequency, Settings, DEFAULT_BASE_FREQUENCY};
pub use sort::{sort_scales, SortMethod};
pub use tokenizer::{clean_tokens, tokenize};
