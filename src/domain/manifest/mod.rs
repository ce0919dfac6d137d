//! Docker Compose manifest rendering.
//!
//! The document is an ordered pipeline of section builders. A builder whose
//! precondition does not hold returns no lines and its section disappears.

mod header;
mod scalar;
mod services;
mod top_level;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{ComposeConfig, Locale};
use crate::ports::Translator;

pub use header::{
    KEY_GENERATED_AT, KEY_SUPPORT_INTRO, KEY_SUPPORT_QQ_GROUP, KEY_SUPPORT_TITLE,
    SUPPORT_QQ_GROUP, TITLE,
};
pub use services::{APP_SERVICE, DATABASE_SERVICE, NETWORK, RESTART_POLICY};

/// Render the manifest for `config`.
///
/// Never fails. Blank optional fields fall back to their defaults so a
/// configuration rejected by the validator still renders.
pub fn generate_with(
    config: &ComposeConfig,
    locale: Locale,
    timestamp: DateTime<Utc>,
    translator: &dyn Translator,
) -> String {
    debug!(
        locale = %locale,
        registry = ?config.image_registry,
        database = ?config.database_type,
        provider = ?config.anthropic_api_provider,
        "generating compose manifest"
    );

    let sections = [
        header::build_header(locale, timestamp, translator),
        services::build_services(config),
        top_level::build_volumes(config),
        top_level::build_networks(),
    ];

    let mut document = sections
        .iter()
        .filter(|lines| !lines.is_empty())
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    document.push('\n');
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedCatalog;
    use crate::domain::config::{ApiProvider, DatabaseType, HostOs, VolumeType};
    use crate::domain::provider::ZAI_API_URL;
    use crate::domain::validate;
    use crate::testing::{
        external_db_config, fixed_date, mock_config, provider_config, windows_config,
    };

    fn render(config: &ComposeConfig) -> String {
        generate_with(config, Locale::ZhCn, fixed_date(), &EmbeddedCatalog)
    }

    fn parse(document: &str) -> serde_yaml::Value {
        serde_yaml::from_str(document).unwrap()
    }

    #[test]
    fn sections_appear_in_order() {
        let output = render(&mock_config());

        let header = output.find(TITLE).unwrap();
        let services = output.find("\nservices:").unwrap();
        let volumes = output.find("\nvolumes:").unwrap();
        let networks = output.find("\nnetworks:").unwrap();

        assert!(header < services && services < volumes && volumes < networks);
        assert!(output.ends_with("driver: bridge\n"));
    }

    #[test]
    fn zai_provider_scenario() {
        let config = ComposeConfig { anthropic_auth_token: "test-token".into(), ..provider_config(ApiProvider::Zai) };
        let output = render(&config);

        assert!(output.contains("ANTHROPIC_AUTH_TOKEN: \"test-token\""));
        assert!(output.contains(&format!("ANTHROPIC_URL: \"{ZAI_API_URL}\"")));
        assert!(output.contains("# API Provider: Zhipu AI (ZAI)"));
    }

    #[test]
    fn blank_volume_name_scenario() {
        let config = ComposeConfig {
            database_type: DatabaseType::Internal,
            volume_type: VolumeType::Named,
            volume_name: String::new(),
            ..mock_config()
        };
        let output = render(&config);

        assert!(output.contains("- postgres-data:/bitnami/postgresql"));
        assert!(output.contains("\nvolumes:\n  postgres-data:\n"));
    }

    #[test]
    fn root_workdir_scenario_has_no_user_mapping() {
        let config = ComposeConfig { host_os: HostOs::Linux, workdir_created_by_root: true, ..mock_config() };
        let output = render(&config);

        assert!(!output.contains("PUID"));
        assert!(!output.contains("PGID"));
    }

    #[test]
    fn port_zero_scenario_is_rejected_but_rendered() {
        let config = ComposeConfig { http_port: "0".into(), ..mock_config() };

        let errors = validate(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_str(), "httpPort");
        assert!(errors[0].message.contains("between 1 and 65535"));

        assert!(render(&config).contains("- \"0:45000\""));
    }

    #[test]
    fn external_database_scenario() {
        let config = ComposeConfig {
            external_db_host: "external-db.example.com".into(),
            external_db_port: "5433".into(),
            ..external_db_config()
        };
        let output = render(&config);

        assert!(output.contains("Host=external-db.example.com"));
        assert!(output.contains("Port=5433"));
        assert!(!output.contains("postgres:"));
        assert!(!output.contains("\nvolumes:"));

        let services = parse(&output)["services"].clone();
        assert!(services.get(DATABASE_SERVICE).is_none());
    }

    #[test]
    fn locales_differ_only_in_header() {
        let config = mock_config();
        let zh = generate_with(&config, Locale::ZhCn, fixed_date(), &EmbeddedCatalog);
        let en = generate_with(&config, Locale::EnUs, fixed_date(), &EmbeddedCatalog);

        assert_ne!(zh, en);
        assert_eq!(parse(&zh), parse(&en));

        let body = |doc: &str| doc[doc.find("\nservices:").unwrap()..].to_string();
        assert_eq!(body(&zh), body(&en));
    }

    #[test]
    fn windows_paths_reach_output_unchanged() {
        let output = render(&windows_config());
        assert!(output.contains("- C:\\\\repos:/app/workdir"));

        let parsed = parse(&output);
        assert_eq!(parsed["services"]["hagicode"]["volumes"][0].as_str(), Some("C:\\\\repos:/app/workdir"));
    }

    #[test]
    fn parsed_document_exposes_service_fields() {
        let parsed = parse(&render(&mock_config()));
        let app = &parsed["services"][APP_SERVICE];

        assert_eq!(app["image"].as_str(), Some("newbe36524/hagicode:latest"));
        assert_eq!(app["ports"][0].as_str(), Some("8080:45000"));
        assert_eq!(app["environment"]["ANTHROPIC_AUTH_TOKEN"].as_str(), Some("test-token"));
        assert_eq!(app["networks"][0].as_str(), Some(NETWORK));
        assert_eq!(app["restart"].as_str(), Some(RESTART_POLICY));

        let health = &parsed["services"][DATABASE_SERVICE]["healthcheck"];
        assert_eq!(health["test"][1].as_str(), Some("pg_isready"));
        assert_eq!(health["interval"].as_str(), Some("10s"));
        assert_eq!(health["timeout"].as_str(), Some("3s"));
        assert_eq!(health["retries"].as_u64(), Some(3));
    }

    #[test]
    fn hostile_values_parse_back_verbatim() {
        let config = ComposeConfig {
            anthropic_auth_token: "tok\"en\\with\nnewline".into(),
            postgres_password: "pa: ss #x".into(),
            container_name: "true".into(),
            ..mock_config()
        };
        let parsed = parse(&render(&config));
        let app = &parsed["services"][APP_SERVICE];

        assert_eq!(app["environment"]["ANTHROPIC_AUTH_TOKEN"].as_str(), Some("tok\"en\\with\nnewline"));
        assert_eq!(app["container_name"].as_str(), Some("true"));
        assert_eq!(
            parsed["services"][DATABASE_SERVICE]["environment"]["POSTGRES_PASSWORD"].as_str(),
            Some("pa: ss #x")
        );
    }

    #[test]
    fn user_ids_that_look_like_keywords_stay_strings() {
        let config = ComposeConfig {
            puid: "true".into(),
            pgid: "null".into(),
            ..crate::testing::linux_non_root_config()
        };
        let parsed = parse(&render(&config));
        let env = &parsed["services"][APP_SERVICE]["environment"];

        assert_eq!(env["PUID"].as_str(), Some("true"));
        assert_eq!(env["PGID"].as_str(), Some("null"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = provider_config(ApiProvider::Custom);
        assert_eq!(render(&config), render(&config));
    }
}
