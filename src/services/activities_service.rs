use tracing::{debug, info, warn};

use crate::database::activity_registry::ActivityRegistry;
use crate::error::RegistryError;
use crate::models::ActivityList;

pub fn list_activities(registry: &ActivityRegistry) -> ActivityList {
    registry.snapshot()
}

pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    match registry.add_participant(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, "signup");
            debug!(activity = %activity_name, email = %email, "signup");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, reason = %e, "signup rejected");
            debug!(activity = %activity_name, email = %email, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    match registry.remove_participant(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, "unregister");
            debug!(activity = %activity_name, email = %email, "unregister");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, reason = %e, "unregister rejected");
            debug!(activity = %activity_name, email = %email, "unregister rejected");
            Err(e)
        }
    }
}
