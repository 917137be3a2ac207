//! Demo host: owns a JSON payload and binds it to an `ImportField`.
//!
//! Edits and imports are accepted unless the payload is locked, in which case
//! the field keeps showing the locked value.

use json_import_field::{ImportError, ImportField};
use yew::{classes, html, Component, Context, Html};

mod helpers;

use helpers::{payload_status, show_toast};

pub enum Msg {
    Edit(String),
    Imported(String),
    ImportFailed(ImportError),
    ToggleLock,
    Clear,
}

pub struct App {
    payload: String,
    locked: bool,
    last_import: Option<String>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            payload: String::new(),
            locked: false,
            last_import: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(text) => {
                if self.locked {
                    return false;
                }
                self.payload = text;
                true
            }
            Msg::Imported(text) => {
                if self.locked {
                    show_toast("Payload is locked, import ignored.");
                    return false;
                }
                show_toast(&format!("Imported {} characters.", text.chars().count()));
                self.payload = text;
                self.last_import = Some(String::from(
                    js_sys::Date::new_0().to_locale_time_string("default"),
                ));
                true
            }
            Msg::ImportFailed(err) => {
                show_toast(&format!("Import failed: {}", err));
                false
            }
            Msg::ToggleLock => {
                self.locked = !self.locked;
                true
            }
            Msg::Clear => {
                if self.locked {
                    return false;
                }
                self.payload.clear();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let status = payload_status(&self.payload);

        html! {
            <div class="app-root">
                <h3>{"Request payload"}</h3>
                <ImportField
                    value={self.payload.clone()}
                    placeholder="Paste a JSON payload or import it from a file"
                    on_change={link.callback(Msg::Edit)}
                    on_import={link.callback(Msg::Imported)}
                    on_import_error={link.callback(Msg::ImportFailed)}
                    auto_grow={true}
                />
                <div class={classes!("payload-status", status.css_class())}>
                    { status.describe() }
                    {
                        if let Some(time) = &self.last_import {
                            html! { <span class="last-import">{ format!(" (last import at {})", time) }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="icon-toolbar">
                    <button class="icon-btn" onclick={link.callback(|_| Msg::ToggleLock)}>
                        <i class="material-icons">{ if self.locked { "lock" } else { "lock_open" } }</i>
                        <span class="icon-label">{ if self.locked { "Unlock" } else { "Lock" } }</span>
                    </button>
                    <button class="icon-btn" onclick={link.callback(|_| Msg::Clear)}>
                        <i class="material-icons">{"clear"}</i>
                        <span class="icon-label">{"Clear"}</span>
                    </button>
                </div>
            </div>
        }
    }
}
