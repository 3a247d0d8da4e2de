//! Given steps for embed access BDD scenarios.

use super::world::{EmbedWorld, build_agent};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an agent with embed token "{token}" allowing "{domains}""#)]
fn agent_allowing(
    world: &mut EmbedWorld,
    token: String,
    domains: String,
) -> Result<(), eyre::Report> {
    let agent = build_agent(&token)?.with_allowed_domains(domains);
    world
        .directory
        .insert(agent)
        .wrap_err("seed restricted agent")?;
    Ok(())
}

#[given(r#"an agent with embed token "{token}" and no domain restriction"#)]
fn agent_unrestricted(world: &mut EmbedWorld, token: String) -> Result<(), eyre::Report> {
    let agent = build_agent(&token)?;
    world
        .directory
        .insert(agent)
        .wrap_err("seed unrestricted agent")?;
    Ok(())
}
