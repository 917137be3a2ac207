//! View rendering for the import field.
//!
//! Three sibling elements inside one wrapper: the text surface bound to the
//! caller's `value`, a hidden `<input type="file">`, and a trigger button that
//! clicks the hidden input. The button holds nothing but the picker's `NodeRef`
//! (through `Msg::OpenFilePicker`), so it can be styled freely.

use web_sys::{Event, HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{edited_text, first_selected_file};
use super::messages::Msg;
use super::props::ImportFieldProps;
use super::state::ImportField;

/// Main view function: text surface, hidden picker and trigger button.
pub fn view(component: &ImportField, ctx: &Context<ImportField>) -> Html {
    let props = ctx.props();
    let link = ctx.link();

    html! {
        <div class={classes!("import-field", props.class.clone())}>
            { build_text_surface(component, props, link) }
            { build_hidden_picker(component, props, link) }
            { build_trigger_button(component, props, link) }
        </div>
    }
}

/// Builds the `<textarea>` (or single-line `<input>`) bound to `props.value`.
fn build_text_surface(
    component: &ImportField,
    props: &ImportFieldProps,
    link: &Scope<ImportField>,
) -> Html {
    let oninput = link.batch_callback(|e: InputEvent| edited_text(&e).map(Msg::Edited));

    if props.multiline {
        html! {
            <textarea
                ref={component.text_ref.clone()}
                class="import-field-text"
                id={props.id.clone()}
                name={props.name.clone()}
                style={props.style.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                rows={props.rows.to_string()}
                spellcheck="false"
                disabled={props.disabled}
                readonly={props.readonly}
                {oninput}
            />
        }
    } else {
        html! {
            <input
                type="text"
                ref={component.text_ref.clone()}
                class="import-field-text"
                id={props.id.clone()}
                name={props.name.clone()}
                style={props.style.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                spellcheck="false"
                disabled={props.disabled}
                readonly={props.readonly}
                {oninput}
            />
        }
    }
}

/// Builds the invisible file input. Only the first selected file is taken; a
/// dismissed dialog leaves the selection empty and sends nothing.
fn build_hidden_picker(
    component: &ImportField,
    props: &ImportFieldProps,
    link: &Scope<ImportField>,
) -> Html {
    let rearm = props.rearm_picker;
    let onchange = link.batch_callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = first_selected_file(&input);
        if rearm && file.is_some() {
            // The File handle stays readable after the selection is cleared.
            input.set_value("");
        }
        file.map(Msg::FileChosen)
    });

    html! {
        <input
            type="file"
            ref={component.picker_ref.clone()}
            id={component.picker_id.clone()}
            accept={props.accept.clone()}
            hidden={true}
            tabindex="-1"
            aria-hidden="true"
            style="display:none;"
            {onchange}
        />
    }
}

/// Renders the trigger button with a Material icon and a label.
fn build_trigger_button(
    component: &ImportField,
    props: &ImportFieldProps,
    link: &Scope<ImportField>,
) -> Html {
    let busy = if component.pending_reads > 0 { "true" } else { "false" };

    html! {
        <button
            type="button"
            class={classes!("icon-btn", "import-field-trigger", props.button_class.clone())}
            title={props.button_label.clone()}
            aria-controls={component.picker_id.clone()}
            aria-busy={busy}
            disabled={props.disabled}
            onclick={link.callback(|_: MouseEvent| Msg::OpenFilePicker)}
        >
            <i class="material-icons">{ props.button_icon.to_string() }</i>
            <span class="icon-label">{ props.button_label.to_string() }</span>
        </button>
    }
}
