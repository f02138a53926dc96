//! Queue listing and server-side service state

use log::info;
use crate::error::{CasJobsError, Result};
use super::client::CasJobs;
use super::transport::Transport;
use super::ServiceState;

impl<T: Transport> CasJobs<T> {
    /// Raw `GetQueues` response
    ///
    /// The body lists [`Queue`](crate::Queue) records; decoding it is left
    /// to the caller.
    pub fn get_queues(&self) -> Result<String> {
        self.call_auth("GetQueues", &[])
    }

    /// Raw state label of a named service
    pub fn get_service_state(&self, service_name: &str) -> Result<String> {
        self.call_auth("GetServiceState", &[("serviceName", service_name.to_string())])
    }

    /// Requests a state change for a named service
    ///
    /// # Arguments
    ///
    /// * `service_name` - The server-side service to change
    /// * `new_state` - Either `WAKING` or `SUSPENDING`
    ///
    /// # Returns
    ///
    /// `Ok(())` once the service accepted the request. Any state other than
    /// the two above fails with [`CasJobsError::InvalidServiceState`]
    /// without contacting the service.
    pub fn set_service_state(&self, service_name: &str, new_state: &str) -> Result<()> {
        let state = new_state
            .parse::<ServiceState>()
            .ok()
            .filter(ServiceState::is_requestable)
            .ok_or_else(|| CasJobsError::InvalidServiceState(new_state.to_string()))?;

        if self.settings().verbose {
            info!("Setting service {} to {}", service_name, state);
        }
        self.call_auth(
            "SetServiceState",
            &[
                ("serviceName", service_name.to_string()),
                ("state", state.as_str().to_string()),
            ],
        )?;
        Ok(())
    }
}
