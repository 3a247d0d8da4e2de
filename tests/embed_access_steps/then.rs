//! Then steps for embed access BDD scenarios.

use super::world::EmbedWorld;
use atrium::embed::domain::EmbedOutcome;
use rstest_bdd_macros::then;

#[then(r#"the widget is served for agent "{agent_id}""#)]
fn widget_served(world: &EmbedWorld, agent_id: String) -> Result<(), eyre::Report> {
    match world.outcome()? {
        EmbedOutcome::Widget { props, .. } if props.agent_id.as_str() == agent_id => Ok(()),
        other => Err(eyre::eyre!(
            "expected widget for '{agent_id}', got {other:?}"
        )),
    }
}

#[then(r#"the request is rejected showing "{shown}""#)]
fn request_rejected(world: &EmbedWorld, shown: String) -> Result<(), eyre::Report> {
    match world.outcome()? {
        EmbedOutcome::DomainRejected { rejection, .. } if rejection.display_referer() == shown => {
            Ok(())
        }
        other => Err(eyre::eyre!(
            "expected rejection showing '{shown}', got {other:?}"
        )),
    }
}

#[then(r#"the widget primary color is "{color}""#)]
fn widget_primary_color(world: &EmbedWorld, color: String) -> Result<(), eyre::Report> {
    let EmbedOutcome::Widget { props, .. } = world.outcome()? else {
        return Err(eyre::eyre!("expected a widget outcome"));
    };
    if props.config.primary_color.as_deref() != Some(color.as_str()) {
        return Err(eyre::eyre!(
            "expected primary color '{color}', got {:?}",
            props.config.primary_color
        ));
    }
    Ok(())
}

#[then("the page is not found")]
fn page_not_found(world: &EmbedWorld) -> Result<(), eyre::Report> {
    match world.outcome()? {
        EmbedOutcome::NotFound => Ok(()),
        other => Err(eyre::eyre!("expected not found, got {other:?}")),
    }
}
