use super::{position_of, report_failure, retain_selection};
use crate::api_client::ApiClient;
use crate::messages;
use crate::notifications::Notifications;
use koala_core::Agent;

/// `/agents`: read-only list.
#[derive(Debug, Clone, Default)]
pub struct AgentsPage {
    pub agents: Vec<Agent>,
    pub selected: Option<String>,
    pub loading: bool,
}

impl AgentsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, api: &ApiClient, notes: &mut Notifications) {
        self.loading = true;
        match api.agents().list().await {
            Ok(envelope) => {
                self.agents = envelope.data_or_default();
                retain_selection(&self.agents, &mut self.selected);
            }
            Err(err) => report_failure(notes, messages::LOAD_FAILED, "agent list", &err),
        }
        self.loading = false;
    }

    pub fn selected_agent(&self) -> Option<&Agent> {
        position_of(&self.agents, &self.selected).map(|index| &self.agents[index])
    }
}
