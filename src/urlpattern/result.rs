use serde::Serialize;

use crate::enums::Component;
use crate::types::CaptureGroups;

use super::init::UrlPatternInput;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentResult {
    pub input: String,
    pub groups: CaptureGroups,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub input: UrlPatternInput,
    #[serde(rename = "baseURL", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub protocol: ComponentResult,
    pub username: ComponentResult,
    pub password: ComponentResult,
    pub hostname: ComponentResult,
    pub port: ComponentResult,
    pub pathname: ComponentResult,
    pub search: ComponentResult,
    pub hash: ComponentResult,
}

impl MatchResult {
    pub fn component(&self, component: Component) -> &ComponentResult {
        match component {
            Component::Protocol => &self.protocol,
            Component::Username => &self.username,
            Component::Password => &self.password,
            Component::Hostname => &self.hostname,
            Component::Port => &self.port,
            Component::Pathname => &self.pathname,
            Component::Search => &self.search,
            Component::Hash => &self.hash,
        }
    }

    pub(crate) fn component_mut(&mut self, component: Component) -> &mut ComponentResult {
        match component {
            Component::Protocol => &mut self.protocol,
            Component::Username => &mut self.username,
            Component::Password => &mut self.password,
            Component::Hostname => &mut self.hostname,
            Component::Port => &mut self.port,
            Component::Pathname => &mut self.pathname,
            Component::Search => &mut self.search,
            Component::Hash => &mut self.hash,
        }
    }

    pub(crate) fn empty(input: UrlPatternInput, base_url: Option<String>) -> Self {
        Self {
            input,
            base_url,
            protocol: ComponentResult::default(),
            username: ComponentResult::default(),
            password: ComponentResult::default(),
            hostname: ComponentResult::default(),
            port: ComponentResult::default(),
            pathname: ComponentResult::default(),
            search: ComponentResult::default(),
            hash: ComponentResult::default(),
        }
    }
}
