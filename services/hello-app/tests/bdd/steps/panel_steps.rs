//! BDD step definitions for the API panel feature

use cucumber::{given, then, when};
use hello_app::view::PanelView;
use hello_app::FetchError;

use crate::world::HelloAppWorld;

fn panel(world: &HelloAppWorld) -> PanelView {
    PanelView::from_state(&world.state.lock().unwrap())
}

#[given(expr = "the hello endpoint responds with {string}")]
fn endpoint_responds(world: &mut HelloAppWorld, body: String) {
    world.client.push(Ok(body));
}

#[given(expr = "the hello endpoint then responds with {string}")]
fn endpoint_then_responds(world: &mut HelloAppWorld, body: String) {
    world.client.push(Ok(body));
}

#[given(expr = "the hello endpoint fails with status {int}")]
fn endpoint_fails(world: &mut HelloAppWorld, status: u16) {
    world.client.push(Err(FetchError::Status(status)));
}

#[given(expr = "the hello endpoint is unreachable with {string}")]
fn endpoint_unreachable(world: &mut HelloAppWorld, message: String) {
    world.client.push(Err(FetchError::Network(message)));
}

#[when("the page is mounted")]
async fn page_mounted(world: &mut HelloAppWorld) {
    world.page().mount().await;
}

#[when("the refetch button is clicked")]
async fn refetch_clicked(world: &mut HelloAppWorld) {
    assert!(
        !panel(world).button_disabled,
        "refetch button is disabled while a fetch is in flight"
    );
    world.page().refetch().await;
}

#[then(expr = "{int} fetch attempt(s) should have been made")]
fn fetch_attempts(world: &mut HelloAppWorld, expected: usize) {
    assert_eq!(world.client.calls(), expected);
}

#[then(expr = "the panel should show {string}")]
fn panel_shows(world: &mut HelloAppWorld, expected: String) {
    let panel = panel(world);
    let shown = [panel.result_line.as_deref(), panel.error_line.as_deref()];
    assert!(
        shown.contains(&Some(expected.as_str())),
        "expected {:?} in panel {:?}",
        expected,
        panel
    );
}

#[then(expr = "the panel error should contain {string}")]
fn panel_error_contains(world: &mut HelloAppWorld, expected: String) {
    let panel = panel(world);
    let error = panel.error_line.expect("no error shown");
    assert!(error.contains(&expected), "{error}");
}

#[then("the panel should show no result")]
fn panel_no_result(world: &mut HelloAppWorld) {
    assert_eq!(panel(world).result_line, None);
}

#[then("the panel should show no error")]
fn panel_no_error(world: &mut HelloAppWorld) {
    assert_eq!(panel(world).error_line, None);
}

#[then("the panel should not be loading")]
fn panel_not_loading(world: &mut HelloAppWorld) {
    let panel = panel(world);
    assert_eq!(panel.loading_text, None);
    assert!(!panel.button_disabled);
}

#[then(expr = "the refetch button should read {string}")]
fn refetch_label(world: &mut HelloAppWorld, expected: String) {
    assert_eq!(panel(world).button_label, expected);
}
