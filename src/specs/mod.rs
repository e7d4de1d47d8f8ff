//! # Scraping “specs” module
//!
//! Page-specific extraction rules: *where the ground truth lives in the HTML*
//! and *how to read it tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched documents (no networking).
//! - **Selector choice** for the page (e.g. `table.data_wide_table` on a
//!   cost-of-living city page).
//! - **Light shaping** of results into `types::LineItem` records.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and **merging** across cities (`merge`).
//! - **GUI concerns or export formatting.**
//!
//! ## Typical call chain
//! ```text
//! compare::run → core::net::fetch_documents → specs::cost_table::extract_cost_rows
//!                                           ↘ merge::merge_rows → chart::project
//! ```
//!
//! ## Conventions & invariants
//! - Missing tables, missing rows and unreadable numbers degrade to `None`;
//!   nothing here returns an error or panics on odd markup.
//! - Extraction is a pure function of the document text.
pub mod cost_table;
