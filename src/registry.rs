use crate::error::RuntimeError;
use std::{collections::HashMap, fmt};

/// `EventKind` lists the event types that have a downstream function.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EventKind {
    /// A CA asks IoT Core for a registration code
    RegistrationInit,
    /// A CA answers the registration challenge and must be imported
    SignedChallenge,
    /// A provisioning policy must be attached to an imported CA
    PolicyAttach,
    /// The CA manager asks for the current IoT Core configuration
    ConfigRequest,
}

impl EventKind {
    /// Every kind the router knows about.
    pub const ALL: [EventKind; 4] = [
        EventKind::RegistrationInit,
        EventKind::SignedChallenge,
        EventKind::PolicyAttach,
        EventKind::ConfigRequest,
    ];

    /// Exact, case-sensitive match on the CloudEvents `type` attribute.
    pub fn from_type(event_type: &str) -> Option<EventKind> {
        match event_type {
            "io.lamassu.iotcore.ca.registration.init" => Some(EventKind::RegistrationInit),
            "io.lamassu.iotcore.ca.registration.signed_challenge" => {
                Some(EventKind::SignedChallenge)
            }
            "io.lamassu.iotcore.ca.policy.attach" => Some(EventKind::PolicyAttach),
            "io.lamassu.iotcore.config.request" => Some(EventKind::ConfigRequest),
            _ => None,
        }
    }

    /// The CloudEvents `type` attribute for this kind.
    pub fn as_type(&self) -> &'static str {
        match self {
            EventKind::RegistrationInit => "io.lamassu.iotcore.ca.registration.init",
            EventKind::SignedChallenge => "io.lamassu.iotcore.ca.registration.signed_challenge",
            EventKind::PolicyAttach => "io.lamassu.iotcore.ca.policy.attach",
            EventKind::ConfigRequest => "io.lamassu.iotcore.config.request",
        }
    }

    /// Environment variable holding the function name or ARN for this kind.
    pub fn env_var(&self) -> &'static str {
        match self {
            EventKind::RegistrationInit => "LAMBDA_CA_REGISTRATION_INIT",
            EventKind::SignedChallenge => "LAMBDA_IMPORT_IOTCORE_CA",
            EventKind::PolicyAttach => "LAMBDA_ATTACH_IOTCORE_CA_POLICY",
            EventKind::ConfigRequest => "LAMBDA_GET_IOTCORE_CONFIG",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_type())
    }
}

/// `HandlerRegistry` maps each event kind to the function that handles it.
///
/// It's built once when the function starts and never changes afterwards.
/// Kinds without a function are kept out of the map, so routing an event of
/// that kind fails instead of being skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, String>,
}

impl HandlerRegistry {
    /// Load the function names from the process environment.
    #[tracing::instrument]
    pub fn from_env() -> HandlerRegistry {
        let registry = HandlerRegistry::from_lookup(|name| std::env::var(name).ok());
        for kind in EventKind::ALL {
            if !registry.handlers.contains_key(&kind) {
                tracing::warn!(kind = %kind, var = kind.env_var(), "no lambda configured");
            }
        }
        registry
    }

    /// Build the registry resolving every kind's variable with `lookup`.
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> HandlerRegistry
    where
        F: Fn(&str) -> Option<String>,
    {
        let handlers = EventKind::ALL
            .iter()
            .filter_map(|kind| {
                lookup(kind.env_var())
                    .filter(|name| !name.trim().is_empty())
                    .map(|name| (*kind, name))
            })
            .collect();
        HandlerRegistry { handlers }
    }

    /// Find the function configured for `kind`.
    pub fn handler_for(&self, kind: EventKind) -> Result<&str, RuntimeError> {
        self.handlers
            .get(&kind)
            .map(String::as_str)
            .ok_or(RuntimeError::MissingHandler(kind))
    }
}

/// Build a registry from explicit `(kind, function)` pairs, for callers
/// that don't configure the router through the environment.
impl<S: Into<String>> FromIterator<(EventKind, S)> for HandlerRegistry {
    fn from_iter<I: IntoIterator<Item = (EventKind, S)>>(iter: I) -> Self {
        HandlerRegistry {
            handlers: iter
                .into_iter()
                .map(|(kind, name)| (kind, name.into()))
                .collect(),
        }
    }
}
