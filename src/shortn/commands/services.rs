use crate::commands::{CmdResult, ServiceListing};
use crate::registry::ServiceRegistry;

/// Registered services, with the one actually in use marked active.
pub fn run(registry: &ServiceRegistry, active: &str) -> CmdResult {
    let services = registry
        .ids()
        .map(|id| ServiceListing {
            id,
            active: id == active,
            default_api_url: registry.resolve(id).default_api_url,
        })
        .collect();
    CmdResult::default().with_services(services)
}
