use yew::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;
pub mod view;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let app_handlers = handlers::build_handlers(&app_state);
    view::render_app(&app_state, &app_handlers)
}
