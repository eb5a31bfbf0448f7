use dioxus::prelude::*;
use serde::Deserialize;

pub const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// EmailJS account identifiers. Never secrets: they ship to the browser.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            recipient: "hello@example.com".to_string(),
        }
    }
}

impl EmailSettings {
    /// False while either id is blank or still a `YOUR_...` placeholder.
    pub fn is_configured(&self) -> bool {
        [&self.service_id, &self.template_id]
            .iter()
            .all(|id| !id.trim().is_empty() && !id.starts_with(PLACEHOLDER_PREFIX))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub email: EmailSettings,
}

pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move {
        match fetch_runtime_config().await {
            Ok(config) => config,
            Err(message) => {
                tracing::warn!("{message}; using default config");
                RuntimeConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    Ok(config_from_env(|key| std::env::var(key).ok()))
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> RuntimeConfig {
    let defaults = EmailSettings::default();
    let email = EmailSettings {
        service_id: lookup("EMAIL_SERVICE_ID").unwrap_or(defaults.service_id),
        template_id: lookup("EMAIL_TEMPLATE_ID").unwrap_or(defaults.template_id),
        public_key: lookup("EMAIL_PUBLIC_KEY").unwrap_or(defaults.public_key),
        recipient: lookup("CONTACT_RECIPIENT").unwrap_or(defaults.recipient),
    };
    RuntimeConfig { email }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn placeholders_are_not_configured() {
        assert!(!EmailSettings::default().is_configured());

        let blank = EmailSettings {
            service_id: "service_abc".to_string(),
            template_id: "  ".to_string(),
            ..EmailSettings::default()
        };
        assert!(!blank.is_configured());
    }

    #[test]
    fn real_ids_are_configured() {
        let settings = EmailSettings {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            ..EmailSettings::default()
        };
        assert!(settings.is_configured());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"email":{"service_id":"service_abc"}}"#).unwrap();
        assert_eq!(config.email.service_id, "service_abc");
        assert_eq!(config.email.template_id, "YOUR_TEMPLATE_ID");
        assert_eq!(config.email.recipient, "hello@example.com");

        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RuntimeConfig::default());
    }

    #[test]
    fn env_overrides_only_what_is_set() {
        let config = config_from_env(|key| match key {
            "EMAIL_TEMPLATE_ID" => Some("template_env".to_string()),
            "CONTACT_RECIPIENT" => Some("me@example.org".to_string()),
            _ => None,
        });
        assert_eq!(config.email.template_id, "template_env");
        assert_eq!(config.email.recipient, "me@example.org");
        assert_eq!(config.email.service_id, "YOUR_SERVICE_ID");
    }
}
