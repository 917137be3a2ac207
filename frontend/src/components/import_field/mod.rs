//! Import-capable text field: root module wiring the Yew `Component` implementation
//! with submodules for props, state, update logic, view rendering, and the file
//! import bridge.
//!
//! Responsibilities
//! - Re-export the public surface (`ImportField`, `ImportFieldProps`, `ImportError`, `Msg`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Keep the rendered text surface in sync with the caller-owned `value` after every render.
//! - Revoke the liveness token on `destroy` so pending reads never reach a torn-down field.

use yew::prelude::*;

mod bridge;
mod error;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use bridge::{run_import, ImportOutcome, Liveness, TextSource};
pub use error::ImportError;
pub use messages::Msg;
pub use props::{ImportFieldProps, DEFAULT_ACCEPT, DEFAULT_BUTTON_ICON, DEFAULT_BUTTON_LABEL, DEFAULT_ROWS};
pub use state::ImportField;

impl Component for ImportField {
    type Message = Msg;
    type Properties = ImportFieldProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ImportField::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        self.sync_value(&props.value);
        self.apply_extra_attributes(&props.attributes);
        if props.auto_grow && props.multiline {
            self.resize_text_surface();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.liveness.revoke();
    }
}
