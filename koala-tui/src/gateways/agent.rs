use crate::api_client::{ApiClientError, RestClient};
use koala_core::{Agent, Envelope};

pub mod endpoints {
    use crate::gateways::Endpoint;
    use koala_core::encode_segment;

    pub fn list() -> Endpoint {
        Endpoint::get("/v1/agents")
    }

    pub fn get(id: &str) -> Endpoint {
        Endpoint::get(format!("/v1/agents/{}", encode_segment(id)))
    }
}

/// Read-only access to registered agents.
pub struct AgentGateway<'a> {
    rest: &'a RestClient,
}

impl<'a> AgentGateway<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self) -> Result<Envelope<Vec<Agent>>, ApiClientError> {
        self.rest.send(&endpoints::list()).await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<Agent>, ApiClientError> {
        self.rest.send(&endpoints::get(id)).await
    }
}
