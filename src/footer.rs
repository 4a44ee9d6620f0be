//! Footer copyright year.

use crate::config::SiteConfig;
use crate::dom;
use crate::error::BehaviorError;

/// Write the current year into the footer placeholder. Evaluated once.
pub fn set_footer_year(config: &SiteConfig) -> Result<(), BehaviorError> {
    let placeholder = dom::query(&dom::document()?, &config.selectors.year)?;
    let year = js_sys::Date::new_0().get_full_year();
    placeholder.set_text_content(Some(&year.to_string()));
    Ok(())
}
