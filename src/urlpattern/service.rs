use url::Url;

use crate::canonical::default_port;
use crate::enums::{Component, ProcessMode};
use crate::structures::ComponentMap;

use super::component::{CompiledComponent, compile_component, compile_options, parse_options};
use super::errors::{UrlPatternError, UrlPatternResult};
use super::init::{UrlPatternInit, UrlPatternInput, components_from_url};
use super::options::UrlPatternOptions;
use super::result::{ComponentResult, MatchResult};

const WILDCARD: &str = "*";

#[derive(Debug, Clone)]
pub struct UrlPattern {
    components: ComponentMap<CompiledComponent>,
    options: UrlPatternOptions,
}

enum Resolution {
    Resolved(ComponentMap<String>),
    Unresolvable(UrlPatternError),
}

impl From<UrlPatternResult<ComponentMap<String>>> for Resolution {
    fn from(result: UrlPatternResult<ComponentMap<String>>) -> Self {
        match result {
            Ok(values) => Resolution::Resolved(values),
            Err(err) => Resolution::Unresolvable(err),
        }
    }
}

impl UrlPattern {
    #[tracing::instrument(level = "trace", skip(input), fields(base_url = ?base_url))]
    pub fn new<I: Into<UrlPatternInput>>(
        input: I,
        base_url: Option<&str>,
        options: UrlPatternOptions,
    ) -> UrlPatternResult<Self> {
        let init = match input.into() {
            UrlPatternInput::String(pattern) => {
                UrlPatternInit::parse_constructor_string(&pattern, base_url)?
            }
            UrlPatternInput::Init(init) => {
                if base_url.is_some() {
                    return Err(UrlPatternError::BaseUrlWithInit);
                }
                init
            }
        };
        Self::parse(init, options)
    }

    pub fn parse(init: UrlPatternInit, options: UrlPatternOptions) -> UrlPatternResult<Self> {
        let mut patterns = init.process(ComponentMap::filled(WILDCARD), ProcessMode::Pattern)?;

        if default_port(&patterns.protocol.to_ascii_lowercase()) == Some(patterns.port.as_str()) {
            patterns.port.clear();
        }

        let compile = |component: Component, special_scheme: bool| {
            let pattern = patterns.get(component);
            compile_component(
                component,
                pattern,
                &parse_options(component, pattern, special_scheme),
                &compile_options(component, options.ignore_case),
            )
        };

        // Pathname encoding depends on whether the protocol can match a
        // special scheme, so the protocol is compiled first.
        let protocol = compile(Component::Protocol, false)?;
        let special_scheme = protocol.matches_special_scheme();

        let components = ComponentMap {
            protocol,
            username: compile(Component::Username, special_scheme)?,
            password: compile(Component::Password, special_scheme)?,
            hostname: compile(Component::Hostname, special_scheme)?,
            port: compile(Component::Port, special_scheme)?,
            pathname: compile(Component::Pathname, special_scheme)?,
            search: compile(Component::Search, special_scheme)?,
            hash: compile(Component::Hash, special_scheme)?,
        };

        tracing::debug!(
            protocol = %components.protocol.pattern(),
            hostname = %components.hostname.pattern(),
            pathname = %components.pathname.pattern(),
            "url pattern compiled"
        );

        Ok(Self {
            components,
            options,
        })
    }

    pub fn test<I: Into<UrlPatternInput>>(&self, input: I, base_url: Option<&str>) -> bool {
        let input = input.into();
        let values = match resolve(&input, base_url) {
            Resolution::Resolved(values) => values,
            Resolution::Unresolvable(err) => {
                tracing::debug!(error = %err, "match input could not be resolved");
                return false;
            }
        };

        Component::ALL.iter().all(|&component| {
            let matched = self.components.get(component).is_match(values.get(component));
            if !matched {
                tracing::trace!(%component, value = %values.get(component), "component did not match");
            }
            matched
        })
    }

    pub fn exec<I: Into<UrlPatternInput>>(
        &self,
        input: I,
        base_url: Option<&str>,
    ) -> Option<MatchResult> {
        let input = input.into();
        let values = match resolve(&input, base_url) {
            Resolution::Resolved(values) => values,
            Resolution::Unresolvable(err) => {
                tracing::debug!(error = %err, "match input could not be resolved");
                return None;
            }
        };

        let mut result = MatchResult::empty(input, base_url.map(str::to_string));
        for component in Component::ALL {
            let value = values.get(component);
            let Some(groups) = self.components.get(component).groups(value) else {
                tracing::trace!(%component, value = %value, "component did not match");
                return None;
            };
            *result.component_mut(component) = ComponentResult {
                input: value.clone(),
                groups,
            };
        }
        Some(result)
    }

    pub fn component(&self, component: Component) -> &CompiledComponent {
        self.components.get(component)
    }

    pub fn protocol(&self) -> &str {
        self.components.protocol.pattern()
    }

    pub fn username(&self) -> &str {
        self.components.username.pattern()
    }

    pub fn password(&self) -> &str {
        self.components.password.pattern()
    }

    pub fn hostname(&self) -> &str {
        self.components.hostname.pattern()
    }

    pub fn port(&self) -> &str {
        self.components.port.pattern()
    }

    pub fn pathname(&self) -> &str {
        self.components.pathname.pattern()
    }

    pub fn search(&self) -> &str {
        self.components.search.pattern()
    }

    pub fn hash(&self) -> &str {
        self.components.hash.pattern()
    }

    pub fn has_regexp_groups(&self) -> bool {
        self.components
            .iter()
            .any(|(_, component)| component.has_regexp_groups())
    }

    pub fn options(&self) -> &UrlPatternOptions {
        &self.options
    }
}

fn resolve(input: &UrlPatternInput, base_url: Option<&str>) -> Resolution {
    resolve_values(input, base_url).into()
}

fn resolve_values(
    input: &UrlPatternInput,
    base_url: Option<&str>,
) -> UrlPatternResult<ComponentMap<String>> {
    match input {
        UrlPatternInput::Init(init) => {
            if base_url.is_some() {
                return Err(UrlPatternError::BaseUrlWithInit);
            }
            init.process(ComponentMap::default(), ProcessMode::Url)
        }
        UrlPatternInput::String(raw) => {
            let base = match base_url {
                Some(base) => Some(Url::parse(base).map_err(|source| {
                    UrlPatternError::InvalidBaseUrl {
                        base_url: base.to_string(),
                        source,
                    }
                })?),
                None => None,
            };
            let url = Url::options()
                .base_url(base.as_ref())
                .parse(raw)
                .map_err(|source| UrlPatternError::InvalidUrl {
                    input: raw.clone(),
                    source,
                })?;
            Ok(components_from_url(&url))
        }
    }
}
