use serde::{Deserialize, Serialize};

use crate::enums::Component;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMap<T> {
    pub protocol: T,
    pub username: T,
    pub password: T,
    pub hostname: T,
    pub port: T,
    pub pathname: T,
    pub search: T,
    pub hash: T,
}

impl<T> ComponentMap<T> {
    pub fn from_fn(mut f: impl FnMut(Component) -> T) -> Self {
        Self {
            protocol: f(Component::Protocol),
            username: f(Component::Username),
            password: f(Component::Password),
            hostname: f(Component::Hostname),
            port: f(Component::Port),
            pathname: f(Component::Pathname),
            search: f(Component::Search),
            hash: f(Component::Hash),
        }
    }

    pub fn get(&self, component: Component) -> &T {
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

    pub fn get_mut(&mut self, component: Component) -> &mut T {
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

    pub fn iter(&self) -> impl Iterator<Item = (Component, &T)> {
        Component::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn map<U>(self, mut f: impl FnMut(Component, T) -> U) -> ComponentMap<U> {
        ComponentMap {
            protocol: f(Component::Protocol, self.protocol),
            username: f(Component::Username, self.username),
            password: f(Component::Password, self.password),
            hostname: f(Component::Hostname, self.hostname),
            port: f(Component::Port, self.port),
            pathname: f(Component::Pathname, self.pathname),
            search: f(Component::Search, self.search),
            hash: f(Component::Hash, self.hash),
        }
    }
}

impl ComponentMap<String> {
    pub fn filled(value: &str) -> Self {
        Self::from_fn(|_| value.to_string())
    }
}
