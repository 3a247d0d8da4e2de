//! Widget customization resolved from iframe query parameters.
//!
//! Embedders build iframe URLs by hand, so each option accepts both a
//! camelCase and a kebab-case key. [`EMBED_OPTIONS`] lists the aliases in
//! priority order and resolution walks that table. A new option is a new row
//! plus a struct field.

use super::QueryParams;
use serde::Serialize;

/// Value rewrite applied after an option is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTransform {
    /// Pass the value through untouched.
    Verbatim,
    /// Prefix `#` unless the value already starts with one.
    Color,
}

impl ValueTransform {
    /// Applies the transform to a present value.
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Verbatim => value.to_owned(),
            Self::Color if value.starts_with('#') => value.to_owned(),
            Self::Color => format!("#{value}"),
        }
    }
}

/// Field of [`EmbedConfig`] targeted by an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedField {
    /// Header title.
    Title,
    /// Header subtitle.
    Subtitle,
    /// Primary accent color.
    PrimaryColor,
    /// Secondary accent color.
    SecondaryColor,
    /// Text color.
    TextColor,
    /// Background color.
    BgColor,
    /// Header logo image URL.
    LogoUrl,
    /// Assistant avatar image URL.
    AvatarUrl,
    /// First message shown by the assistant.
    WelcomeMessage,
    /// Input box placeholder.
    Placeholder,
    /// Embedding site's identifier for the end user.
    ClientId,
    /// Embedding site's display name for the end user.
    ClientName,
    /// Embedding site's tier or level for the end user.
    ClientLevel,
}

/// One recognised query option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedOption {
    /// Target configuration field.
    pub field: EmbedField,
    /// Accepted query keys, highest priority first.
    pub aliases: &'static [&'static str],
    /// Rewrite applied to the chosen value.
    pub transform: ValueTransform,
}

const fn option(
    field: EmbedField,
    aliases: &'static [&'static str],
    transform: ValueTransform,
) -> EmbedOption {
    EmbedOption {
        field,
        aliases,
        transform,
    }
}

/// Recognised options and their accepted keys.
///
/// This key set and its precedence are relied on by embedders constructing
/// iframe URLs.
pub const EMBED_OPTIONS: [EmbedOption; 13] = [
    option(EmbedField::Title, &["title"], ValueTransform::Verbatim),
    option(EmbedField::Subtitle, &["subtitle"], ValueTransform::Verbatim),
    option(
        EmbedField::PrimaryColor,
        &["primaryColor", "primary-color"],
        ValueTransform::Color,
    ),
    option(
        EmbedField::SecondaryColor,
        &["secondaryColor", "secondary-color"],
        ValueTransform::Color,
    ),
    option(
        EmbedField::TextColor,
        &["textColor", "text-color"],
        ValueTransform::Color,
    ),
    option(
        EmbedField::BgColor,
        &["bgColor", "bg-color"],
        ValueTransform::Color,
    ),
    option(
        EmbedField::LogoUrl,
        &["logoUrl", "logo-url"],
        ValueTransform::Verbatim,
    ),
    option(
        EmbedField::AvatarUrl,
        &["avatarUrl", "avatar-url"],
        ValueTransform::Verbatim,
    ),
    option(
        EmbedField::WelcomeMessage,
        &["welcomeMessage", "welcome-message"],
        ValueTransform::Verbatim,
    ),
    option(
        EmbedField::Placeholder,
        &["placeholder"],
        ValueTransform::Verbatim,
    ),
    option(
        EmbedField::ClientId,
        &["clientId", "client-id"],
        ValueTransform::Verbatim,
    ),
    option(
        EmbedField::ClientName,
        &["clientName", "client-name"],
        ValueTransform::Verbatim,
    ),
    option(
        EmbedField::ClientLevel,
        &["clientLevel", "client-level"],
        ValueTransform::Verbatim,
    ),
];

impl EmbedOption {
    /// Looks up this option, honouring alias priority.
    ///
    /// Keys with several values and empty values are skipped, so a later
    /// alias can still supply the option.
    #[must_use]
    pub fn lookup(&self, query: &QueryParams) -> Option<String> {
        self.aliases
            .iter()
            .filter_map(|alias| query.single(alias))
            .find(|value| !value.is_empty())
            .map(|value| self.transform.apply(value))
    }
}

/// Widget overrides supplied by the embedder. Unset fields fall back to the
/// widget's own defaults.
///
/// Every present color field starts with `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedConfig {
    /// Header title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Header subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Primary accent color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Secondary accent color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    /// Text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    /// Header logo image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Assistant avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// First message shown by the assistant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
    /// Input box placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Embedding site's identifier for the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Embedding site's display name for the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Embedding site's tier or level for the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_level: Option<String>,
}

impl EmbedConfig {
    /// Resolves the widget configuration from query parameters.
    #[must_use]
    pub fn resolve(query: &QueryParams) -> Self {
        let mut config = Self::default();
        for embed_option in &EMBED_OPTIONS {
            *config.field_mut(embed_option.field) = embed_option.lookup(query);
        }
        config
    }

    const fn field_mut(&mut self, field: EmbedField) -> &mut Option<String> {
        match field {
            EmbedField::Title => &mut self.title,
            EmbedField::Subtitle => &mut self.subtitle,
            EmbedField::PrimaryColor => &mut self.primary_color,
            EmbedField::SecondaryColor => &mut self.secondary_color,
            EmbedField::TextColor => &mut self.text_color,
            EmbedField::BgColor => &mut self.bg_color,
            EmbedField::LogoUrl => &mut self.logo_url,
            EmbedField::AvatarUrl => &mut self.avatar_url,
            EmbedField::WelcomeMessage => &mut self.welcome_message,
            EmbedField::Placeholder => &mut self.placeholder,
            EmbedField::ClientId => &mut self.client_id,
            EmbedField::ClientName => &mut self.client_name,
            EmbedField::ClientLevel => &mut self.client_level,
        }
    }
}
