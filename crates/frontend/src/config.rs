//! Loads the DOM contract from the page, falling back to defaults.

use contracts::shared::config::{DomContract, CONFIG_ELEMENT_ID};
use contracts::ContractError;
use web_sys::Document;

/// Read the inline `<script type="application/json" id="portfolio-config">`
/// block if present. A malformed block yields the defaults plus the error,
/// which is logged once the logger is up.
pub fn load_contract(document: &Document) -> (DomContract, Option<ContractError>) {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return (DomContract::default(), None);
    };

    match DomContract::from_json(&json) {
        Ok(contract) => (contract, None),
        Err(err) => (DomContract::default(), Some(err)),
    }
}
