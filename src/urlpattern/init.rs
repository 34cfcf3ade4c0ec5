use serde::{Deserialize, Serialize};
use url::Url;

use crate::canonical::{
    check_ipv6_literal, default_port, is_special_scheme, treat_as_ipv6_hostname,
};
use crate::enums::{Component, ProcessMode};
use crate::pattern::escape_pattern_string;
use crate::structures::ComponentMap;

use super::component::encoder_for;
use super::errors::{UrlPatternError, UrlPatternResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlPatternInit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(rename = "baseURL", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlPatternInput {
    String(String),
    Init(UrlPatternInit),
}

impl From<&str> for UrlPatternInput {
    fn from(value: &str) -> Self {
        UrlPatternInput::String(value.to_string())
    }
}

impl From<String> for UrlPatternInput {
    fn from(value: String) -> Self {
        UrlPatternInput::String(value)
    }
}

impl From<UrlPatternInit> for UrlPatternInput {
    fn from(value: UrlPatternInit) -> Self {
        UrlPatternInput::Init(value)
    }
}

impl UrlPatternInit {
    pub fn get(&self, component: Component) -> Option<&str> {
        self.slot(component).as_deref()
    }

    pub fn set<S: Into<String>>(&mut self, component: Component, value: S) {
        *self.slot_mut(component) = Some(value.into());
    }

    pub fn with<S: Into<String>>(mut self, component: Component, value: S) -> Self {
        self.set(component, value);
        self
    }

    pub fn contains(&self, component: Component) -> bool {
        self.slot(component).is_some()
    }

    fn slot(&self, component: Component) -> &Option<String> {
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

    fn slot_mut(&mut self, component: Component) -> &mut Option<String> {
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

    /// Merges the base URL, then the explicit fields, over `result`.
    pub fn process(
        &self,
        mut result: ComponentMap<String>,
        mode: ProcessMode,
    ) -> UrlPatternResult<ComponentMap<String>> {
        let base = match self.base_url.as_deref() {
            Some(raw) => Some(Url::parse(raw).map_err(|source| UrlPatternError::InvalidBaseUrl {
                base_url: raw.to_string(),
                source,
            })?),
            None => None,
        };

        if let Some(base) = &base {
            self.inherit_from_base(base, mode, &mut result);
        }

        for component in Component::ALL {
            let Some(raw) = self.get(component) else {
                continue;
            };

            let value = match component {
                Component::Protocol => raw.strip_suffix(':').unwrap_or(raw).to_string(),
                Component::Search => raw.strip_prefix('?').unwrap_or(raw).to_string(),
                Component::Hash => raw.strip_prefix('#').unwrap_or(raw).to_string(),
                Component::Pathname => match &base {
                    Some(base) if !base.cannot_be_a_base() && !is_absolute_pathname(raw, mode) => {
                        resolve_relative_pathname(base, raw, mode)
                    }
                    _ => raw.to_string(),
                },
                _ => raw.to_string(),
            };

            let value = match mode {
                ProcessMode::Pattern => value,
                ProcessMode::Url => canonicalize_value(component, &value, &result)?,
            };
            *result.get_mut(component) = value;
        }

        Ok(result)
    }

    fn inherit_from_base(&self, base: &Url, mode: ProcessMode, result: &mut ComponentMap<String>) {
        let inherit = |value: &str| match mode {
            ProcessMode::Pattern => escape_pattern_string(value),
            ProcessMode::Url => value.to_string(),
        };
        let unset = |components: &[Component]| components.iter().all(|c| !self.contains(*c));

        use Component::*;

        if unset(&[Protocol]) {
            result.protocol = inherit(base.scheme());
        }
        if mode == ProcessMode::Url && unset(&[Protocol, Hostname, Port, Username]) {
            result.username = base.username().to_string();
        }
        if mode == ProcessMode::Url && unset(&[Protocol, Hostname, Port, Username, Password]) {
            result.password = base.password().unwrap_or_default().to_string();
        }
        if unset(&[Protocol, Hostname]) {
            result.hostname = inherit(base.host_str().unwrap_or_default());
        }
        if unset(&[Protocol, Hostname, Port]) {
            result.port = base.port().map(|p| p.to_string()).unwrap_or_default();
        }
        if unset(&[Protocol, Hostname, Port, Pathname]) {
            result.pathname = inherit(base.path());
        }
        if unset(&[Protocol, Hostname, Port, Pathname, Search]) {
            result.search = inherit(base.query().unwrap_or_default());
        }
        if unset(&[Protocol, Hostname, Port, Pathname, Search, Hash]) {
            result.hash = inherit(base.fragment().unwrap_or_default());
        }
    }
}

pub(crate) fn is_absolute_pathname(value: &str, mode: ProcessMode) -> bool {
    if value.starts_with('/') {
        return true;
    }
    mode == ProcessMode::Pattern && (value.starts_with("\\/") || value.starts_with("{/"))
}

fn resolve_relative_pathname(base: &Url, relative: &str, mode: ProcessMode) -> String {
    let base_path = match mode {
        ProcessMode::Pattern => escape_pattern_string(base.path()),
        ProcessMode::Url => base.path().to_string(),
    };
    match memchr::memrchr(b'/', base_path.as_bytes()) {
        Some(slash) => format!("{}{}", &base_path[..=slash], relative),
        None => relative.to_string(),
    }
}

fn canonicalize_value(
    component: Component,
    value: &str,
    processed: &ComponentMap<String>,
) -> UrlPatternResult<String> {
    let protocol = processed.protocol.as_str();
    let special = protocol.is_empty() || is_special_scheme(protocol);
    let encode = encoder_for(component, value, special);
    let rejected = |source| UrlPatternError::Canonical {
        component,
        value: value.to_string(),
        source,
    };

    if component == Component::Hostname && treat_as_ipv6_hostname(value) {
        check_ipv6_literal(value).map_err(rejected)?;
    }
    let canonical = encode(value).map_err(rejected)?;

    if component == Component::Port && default_port(protocol) == Some(canonical.as_str()) {
        return Ok(String::new());
    }
    Ok(canonical)
}

pub(crate) fn components_from_url(url: &Url) -> ComponentMap<String> {
    use url::quirks;

    ComponentMap {
        protocol: quirks::protocol(url).trim_end_matches(':').to_string(),
        username: quirks::username(url).to_string(),
        password: quirks::password(url).to_string(),
        hostname: quirks::hostname(url).to_string(),
        port: quirks::port(url).to_string(),
        pathname: quirks::pathname(url).to_string(),
        search: quirks::search(url).trim_start_matches('?').to_string(),
        hash: quirks::hash(url).trim_start_matches('#').to_string(),
    }
}
