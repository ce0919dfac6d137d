//! Upstream API provider policies.

use crate::domain::config::ApiProvider;

/// Endpoint injected for Zhipu AI regardless of the URL field.
pub const ZAI_API_URL: &str = "https://open.bigmodel.cn/api/anthropic";

/// How `ANTHROPIC_URL` is chosen for a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointPolicy {
    /// No URL variable is emitted.
    Omitted,
    /// A fixed URL, user input is ignored.
    Preset(&'static str),
    /// The user-supplied URL.
    UserSupplied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderProfile {
    /// Comment lines placed above the provider variables.
    pub comments: [&'static str; 2],
    pub endpoint: EndpointPolicy,
}

impl ProviderProfile {
    /// Resolve the URL to emit, if any.
    pub fn endpoint_url<'a>(&self, user_url: &'a str) -> Option<&'a str> {
        match self.endpoint {
            EndpointPolicy::Omitted => None,
            EndpointPolicy::Preset(url) => Some(url),
            EndpointPolicy::UserSupplied => Some(user_url),
        }
    }
}

pub fn provider_profile(provider: ApiProvider) -> ProviderProfile {
    match provider {
        ApiProvider::Anthropic => ProviderProfile {
            comments: [
                "# API Provider: Anthropic Official",
                "# Anthropic Official API - only ANTHROPIC_AUTH_TOKEN is required",
            ],
            endpoint: EndpointPolicy::Omitted,
        },
        ApiProvider::Zai => ProviderProfile {
            comments: [
                "# API Provider: Zhipu AI (ZAI)",
                "# Zhipu AI (ZAI) - uses Anthropic-compatible API",
            ],
            endpoint: EndpointPolicy::Preset(ZAI_API_URL),
        },
        ApiProvider::Custom => ProviderProfile {
            comments: ["# API Provider: Custom Endpoint", "# Custom Anthropic-compatible API"],
            endpoint: EndpointPolicy::UserSupplied,
        },
    }
}
