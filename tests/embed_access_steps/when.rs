//! When steps for embed access BDD scenarios.

use super::world::{EmbedWorld, run_async};
use atrium::embed::domain::QueryParams;
use rstest_bdd_macros::when;

#[when(r#"the embed page for "{token}" is requested with referer "{referer}""#)]
fn request_with_referer(world: &mut EmbedWorld, token: String, referer: String) {
    let outcome = run_async(
        world
            .service
            .resolve(&token, Some(&referer), &QueryParams::new()),
    );
    world.last_outcome = Some(outcome);
}

#[when(r#"the embed page for "{token}" is requested without a referer"#)]
fn request_without_referer(world: &mut EmbedWorld, token: String) {
    let outcome = run_async(world.service.resolve(&token, None, &QueryParams::new()));
    world.last_outcome = Some(outcome);
}

#[when(r#"the embed page for "{token}" is requested with query "{query}""#)]
fn request_with_query(world: &mut EmbedWorld, token: String, query: String) {
    let params = QueryParams::parse(&query);
    let outcome = run_async(world.service.resolve(&token, None, &params));
    world.last_outcome = Some(outcome);
}
