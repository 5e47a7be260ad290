//! Services module - the resolution engine.
//!
//! Everything here is synchronous and recomputes from its inputs on every
//! call. Nothing is cached between calls.
//!
//! # Components
//!
//! - [`matcher`]: `*`-wildcard matching of unit names, without a regex engine
//! - [`version`]: staleness of the imported-by version (`major.minor` below 9.0)
//! - [`local_properties`]: optional `local.properties` overrides from the config directory
//! - [`url_resolver`]: application server, HAC and Solr URLs
//! - [`project_context`]: the [`ProjectContext`] facade over injected collaborators
//! - [`items_validation`]: whether to warn about out-of-date `items.xml` files
//!
//! # Usage Example
//!
//! ```ignore
//! use hybris_context::services::ProjectContext;
//!
//! let context = ProjectContext::new(settings_provider, unit_enumerator);
//!
//! if context.is_hybris_project(&workspace) && context.is_outdated_hybris_project(&workspace) {
//!     sink.show_warning_message("Re-import the project");
//! }
//!
//! let hac = context.host_hac_url(&workspace, None);
//! ```

pub mod items_validation;
pub mod local_properties;
pub mod matcher;
pub mod project_context;
pub mod url_resolver;
pub mod version;

pub use items_validation::{
    any_items_file_out_of_date, warn_if_file_out_of_date, warn_if_items_out_of_date,
};
pub use local_properties::LocalProperties;
pub use matcher::{WildcardPattern, match_all, matches};
pub use project_context::{
    ProjectContext, find_unit_of_kind, is_plausible_project_by_units, local_properties_for,
};
pub use url_resolver::{resolve_app_url, resolve_hac_url, resolve_search_url};
pub use version::is_outdated;
