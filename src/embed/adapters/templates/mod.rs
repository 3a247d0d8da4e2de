//! `minijinja` page renderer.
//!
//! Templates are compiled into the binary and rendered with HTML
//! auto-escaping. Widget properties travel to the client as a JSON island,
//! with `<`, `>` and `&` escaped so a value cannot close the script element.

use crate::embed::{
    domain::{DomainRejection, PageMetadata, VIEWPORT, WidgetProps},
    ports::{EmbedPageRenderer, RenderError},
};
use minijinja::{Environment, context};

const WIDGET_TEMPLATE: &str = "widget.html";
const REJECTION_TEMPLATE: &str = "rejection.html";
const NOT_FOUND_TEMPLATE: &str = "not_found.html";

/// Renders embed pages from the bundled HTML templates.
pub struct TemplatePageRenderer {
    environment: Environment<'static>,
    widget_script_url: String,
}

impl TemplatePageRenderer {
    /// Creates a renderer loading the widget bundle from
    /// `widget_script_url`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when a bundled template fails to
    /// compile.
    pub fn new(widget_script_url: impl Into<String>) -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        for (name, source) in [
            (WIDGET_TEMPLATE, include_str!("widget.html")),
            (REJECTION_TEMPLATE, include_str!("rejection.html")),
            (NOT_FOUND_TEMPLATE, include_str!("not_found.html")),
        ] {
            environment
                .add_template(name, source)
                .map_err(|error| template_error(name, &error))?;
        }
        Ok(Self {
            environment,
            widget_script_url: widget_script_url.into(),
        })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, RenderError> {
        self.environment
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|error| template_error(name, &error))
    }
}

impl EmbedPageRenderer for TemplatePageRenderer {
    fn render_widget(
        &self,
        metadata: &PageMetadata,
        props: &WidgetProps,
    ) -> Result<String, RenderError> {
        let props_json = script_safe_json(props)?;
        self.render(
            WIDGET_TEMPLATE,
            context! {
                viewport => VIEWPORT,
                title => metadata.title,
                description => metadata.description,
                agent_id => props.agent_id.as_str(),
                props_json => props_json,
                widget_script_url => self.widget_script_url,
            },
        )
    }

    fn render_rejection(
        &self,
        metadata: &PageMetadata,
        rejection: &DomainRejection,
    ) -> Result<String, RenderError> {
        self.render(
            REJECTION_TEMPLATE,
            context! {
                viewport => VIEWPORT,
                title => metadata.title,
                description => metadata.description,
                referer => rejection.display_referer(),
            },
        )
    }

    fn render_not_found(&self, metadata: &PageMetadata) -> Result<String, RenderError> {
        self.render(
            NOT_FOUND_TEMPLATE,
            context! {
                viewport => VIEWPORT,
                title => metadata.title,
                description => metadata.description,
            },
        )
    }
}

fn template_error(name: &str, error: &minijinja::Error) -> RenderError {
    RenderError::Template {
        template: name.to_owned(),
        reason: error.to_string(),
    }
}

fn script_safe_json(props: &WidgetProps) -> Result<String, RenderError> {
    let json = serde_json::to_string(props).map_err(|error| RenderError::Props(error.to_string()))?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}
