//! Update function for the import field.
//!
//! Elm-style: receives the current `ImportField` state, the `Context` and a `Msg`,
//! performs side effects and returns whether the view should re-render.
//!
//! Key behaviors
//! - Edits are relayed to `on_change` untouched; the value is never buffered here.
//!   A deferred `SyncValue` restores the caller's value if the edit was rejected.
//! - The trigger button clicks the hidden picker.
//! - A chosen file is read on a spawned task through the import bridge; the result
//!   comes back as `ImportFinished` and is emitted to `on_import` / `on_import_error`.

use gloo_file::File;
use yew::prelude::*;

use super::bridge::run_import;
use super::error::ImportError;
use super::helpers::log_outcome;
use super::messages::Msg;
use super::props::ImportFieldProps;
use super::state::ImportField;

/// Central update function for the component.
pub fn update(component: &mut ImportField, ctx: &Context<ImportField>, msg: Msg) -> bool {
    match msg {
        Msg::Edited(text) => {
            if let Some(on_change) = &ctx.props().on_change {
                on_change.emit(text);
            }
            schedule_value_sync(component, ctx);
            false
        }
        Msg::OpenFilePicker => {
            if let Some(input) = component.picker_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileChosen(file) => {
            component.pending_reads += 1;
            start_import(component, ctx, file);
            true
        }
        Msg::ImportFinished(result) => {
            component.pending_reads = component.pending_reads.saturating_sub(1);
            emit_import_result(ctx.props(), result);
            true
        }
        Msg::SyncValue => {
            component.sync_value(&ctx.props().value);
            if ctx.props().auto_grow {
                component.resize_text_surface();
            }
            false
        }
    }
}

/// Hands a finished read to the caller: text to `on_import`, failures to
/// `on_import_error`. A missing callback drops its side silently.
pub fn emit_import_result(props: &ImportFieldProps, result: Result<String, ImportError>) {
    match result {
        Ok(text) => {
            if let Some(on_import) = &props.on_import {
                on_import.emit(text);
            }
        }
        Err(err) => {
            if let Some(on_import_error) = &props.on_import_error {
                on_import_error.emit(err);
            }
        }
    }
}

/// Spawns the read of `file`. Returns immediately; the finished read is sent
/// back as `Msg::ImportFinished` unless the field was destroyed meanwhile.
fn start_import(component: &ImportField, ctx: &Context<ImportField>, file: web_sys::File) {
    let link = ctx.link().clone();
    let liveness = component.liveness.clone();
    let source = File::from(file);

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = run_import(source, liveness, move |result| {
            link.send_message(Msg::ImportFinished(result));
        })
        .await;
        log_outcome(&outcome);
    });
}

/// Defers the controlled-value check until the parent has handled `on_change`
/// and re-rendered.
fn schedule_value_sync(component: &ImportField, ctx: &Context<ImportField>) {
    let link = ctx.link().clone();
    let liveness = component.liveness.clone();
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        if liveness.is_alive() {
            link.send_message(Msg::SyncValue);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::prelude::*;

    type Seen<T> = Rc<RefCell<Vec<T>>>;

    fn recorder<T: 'static>() -> (Seen<T>, Callback<T>) {
        let seen: Seen<T> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |item: T| sink.borrow_mut().push(item)))
    }

    #[test]
    fn text_goes_to_on_import_only() {
        let (imports, on_import) = recorder::<String>();
        let (errors, on_import_error) = recorder::<ImportError>();
        let props = yew::props!(ImportFieldProps {
            value: AttrValue::from(""),
            on_import: Some(on_import),
            on_import_error: Some(on_import_error),
        });

        emit_import_result(&props, Ok(r#"{"a":1}"#.to_string()));

        assert_eq!(*imports.borrow(), vec![r#"{"a":1}"#.to_string()]);
        assert!(errors.borrow().is_empty());
    }

    #[test]
    fn failure_goes_to_on_import_error_only() {
        let (imports, on_import) = recorder::<String>();
        let (errors, on_import_error) = recorder::<ImportError>();
        let props = yew::props!(ImportFieldProps {
            value: AttrValue::from(""),
            on_import: Some(on_import),
            on_import_error: Some(on_import_error),
        });
        let err = ImportError::read("locked.json", "NotReadableError");

        emit_import_result(&props, Err(err.clone()));

        assert!(imports.borrow().is_empty());
        assert_eq!(*errors.borrow(), vec![err]);
    }

    #[test]
    fn failure_without_error_callback_is_dropped() {
        let (imports, on_import) = recorder::<String>();
        let props = yew::props!(ImportFieldProps {
            value: AttrValue::from(""),
            on_import: Some(on_import),
        });

        emit_import_result(&props, Err(ImportError::read("a.json", "gone")));

        assert!(imports.borrow().is_empty());
    }

    #[test]
    fn no_callbacks_at_all_is_harmless() {
        let props = yew::props!(ImportFieldProps {
            value: AttrValue::from(""),
        });

        emit_import_result(&props, Ok("{}".to_string()));
        emit_import_result(&props, Err(ImportError::read("a.json", "gone")));
    }
}
