//! Output generation: the JSON article store and the static site.
//!
//! # Submodules
//!
//! - [`json`]: Writes and reads the article store
//! - [`site`]: Renders home, category, and article pages from the store
//!
//! # Output Structure
//!
//! ```text
//! assets/
//! └── news.json              # Article store
//!
//! dist/
//! ├── index.html             # Home page
//! ├── category/<id>.html     # One per configured category
//! ├── article/<slug>.html    # One per article
//! ├── news.json              # Copy of the store
//! ├── styles.css             # Optional stylesheet
//! └── _redirects             # SPA fallback for static hosts
//! ```

pub mod json;
pub mod site;
