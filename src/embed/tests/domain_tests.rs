//! Unit tests for embed domain values.

use crate::embed::domain::{
    AgentId, AgentStatus, DomainRejection, EmbedAgent, EmbedConfig, EmbedDomainError, EmbedToken,
    NO_REFERER_MARKER, PageMetadata, ParseAgentStatusError, QueryParams, QueryValue, WidgetProps,
};
use rstest::{fixture, rstest};

#[fixture]
fn agent() -> EmbedAgent {
    EmbedAgent::new(
        AgentId::new("agt_01").expect("valid id"),
        "Billing Helper",
        EmbedToken::new("emb_secret_value").expect("valid token"),
    )
}

// ── Identifiers ────────────────────────────────────────────────────

#[rstest]
#[case("")]
#[case("   ")]
fn blank_tokens_are_rejected(#[case] input: &str) {
    assert_eq!(EmbedToken::new(input), Err(EmbedDomainError::EmptyEmbedToken));
}

#[rstest]
fn tokens_are_kept_verbatim() {
    let token = EmbedToken::new(" Mixed-Case ").expect("non-blank token");
    assert_eq!(token.as_str(), " Mixed-Case ");
}

#[rstest]
fn blank_agent_ids_are_rejected() {
    assert_eq!(AgentId::new(" "), Err(EmbedDomainError::EmptyAgentId));
}

#[rstest]
fn token_debug_output_hides_the_secret() {
    let token = EmbedToken::new("emb_secret_value").expect("valid token");
    let rendered = format!("{token:?}");

    assert!(!rendered.contains("emb_secret_value"));
    assert!(rendered.contains(&token.fingerprint()));
}

#[rstest]
fn token_fingerprint_is_stable_and_short() {
    let first = EmbedToken::new("abc").expect("valid token");
    let second = EmbedToken::new("abc").expect("valid token");
    let other = EmbedToken::new("abd").expect("valid token");

    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_ne!(first.fingerprint(), other.fingerprint());
    assert_eq!(first.fingerprint().len(), 12);
    assert_eq!(first.fingerprint(), "ba7816bf8f01");
}

// ── Agent ──────────────────────────────────────────────────────────

#[rstest]
fn new_agents_are_active_and_unrestricted(agent: EmbedAgent) {
    assert_eq!(agent.status(), AgentStatus::Active);
    assert_eq!(agent.description(), None);
    assert_eq!(agent.allowed_domains(), None);
    assert!(agent.allow_list().is_unrestricted());
}

#[rstest]
fn blank_agent_names_are_kept() {
    let agent = EmbedAgent::new(
        AgentId::new("agt").expect("valid id"),
        "",
        EmbedToken::new("tok").expect("valid token"),
    );

    assert_eq!(agent.name(), "");
    assert_eq!(PageMetadata::for_agent(Some(&agent)).title, " - Chat");
}

#[rstest]
fn allow_list_is_derived_from_raw_domains(agent: EmbedAgent) {
    let restricted = agent.with_allowed_domains("https://Example.com/, localhost:8080");
    assert_eq!(
        restricted.allowed_domains(),
        Some("https://Example.com/, localhost:8080")
    );
    assert_eq!(restricted.allow_list().iter().count(), 2);
}

#[rstest]
#[case("active", AgentStatus::Active)]
#[case(" Inactive ", AgentStatus::Inactive)]
fn status_parses_from_storage(#[case] raw: &str, #[case] expected: AgentStatus) {
    assert_eq!(AgentStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn unknown_status_is_rejected() {
    assert_eq!(
        AgentStatus::try_from("paused"),
        Err(ParseAgentStatusError("paused".to_owned()))
    );
}

// ── Metadata ───────────────────────────────────────────────────────

#[rstest]
fn metadata_uses_agent_name_and_description(agent: EmbedAgent) {
    let described = agent.with_description("Answers invoices");
    let metadata = PageMetadata::for_agent(Some(&described));

    assert_eq!(metadata.title, "Billing Helper - Chat");
    assert_eq!(metadata.description, "Answers invoices");
}

#[rstest]
fn metadata_falls_back_for_empty_description(agent: EmbedAgent) {
    let metadata = PageMetadata::for_agent(Some(&agent.with_description("")));
    assert_eq!(metadata.description, "AI Chat Assistant");
}

#[rstest]
fn metadata_without_agent_is_generic() {
    let metadata = PageMetadata::for_agent(None);
    assert_eq!(metadata, PageMetadata::fallback());
    assert_eq!(metadata.title, "Chat Assistant");
    assert_eq!(metadata.description, "AI Chat Assistant");
}

// ── Outcomes ───────────────────────────────────────────────────────

#[rstest]
#[case(Some("https://evil.test/"), "https://evil.test/")]
#[case(None, NO_REFERER_MARKER)]
#[case(Some(""), NO_REFERER_MARKER)]
fn rejection_displays_referer_or_marker(#[case] referer: Option<&str>, #[case] shown: &str) {
    assert_eq!(DomainRejection::new(referer).display_referer(), shown);
}

#[rstest]
fn widget_props_serialize_to_the_widget_contract(agent: EmbedAgent) {
    let config = EmbedConfig::resolve(&QueryParams::parse("primaryColor=ff0000&clientId=u1"));
    let props = WidgetProps::new(&agent, config);

    let json = serde_json::to_value(&props).expect("props serialize");

    assert_eq!(
        json,
        serde_json::json!({
            "agentId": "agt_01",
            "agentName": "Billing Helper",
            "isEmbed": true,
            "token": "emb_secret_value",
            "primaryColor": "#ff0000",
            "clientId": "u1",
        })
    );
}

// ── Query parameters ───────────────────────────────────────────────

#[rstest]
fn query_parsing_decodes_and_groups_repeats() {
    let query = QueryParams::parse("?a=1&b=x%20y&a=2&c=");

    assert_eq!(
        query.get("a"),
        Some(&QueryValue::Multiple(vec!["1".to_owned(), "2".to_owned()]))
    );
    assert_eq!(query.single("a"), None);
    assert_eq!(query.single("b"), Some("x y"));
    assert_eq!(query.single("c"), Some(""));
    assert_eq!(query.get("d"), None);
}

#[rstest]
fn empty_query_has_no_parameters() {
    assert!(QueryParams::parse("").is_empty());
    assert!(QueryParams::parse("?").is_empty());
}
