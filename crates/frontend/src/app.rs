use contracts::shared::binding::BindingTable;
use contracts::shared::config::DomContract;
use web_sys::{Document, Window};

use crate::binding::{bind_all, BindSummary};
use crate::controllers::Controllers;
use crate::dom::BindingContext;

/// Resolve the page, build the controllers and register every listener.
pub fn init(window: &Window, document: &Document, contract: &DomContract) -> Option<BindSummary> {
    let table = BindingTable::standard(contract);
    if let Err(err) = table.validate() {
        log::error!("Binding table rejected: {}", err);
        return None;
    }

    let context = BindingContext::resolve(document, contract);
    context.report.log();

    let controllers = Controllers::build(window, document, &context, contract);
    let summary = bind_all(&table, &context, &controllers);
    summary.log();

    Some(summary)
}
