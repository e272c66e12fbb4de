/// Reusable UI components

use crate::format::{Format, FormatType};
use crate::template::preview;
use patternfly_yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// A change to one field of a format row
#[derive(Debug, Clone, PartialEq)]
pub enum FormatEdit {
    Name(String),
    Template(String),
    Type(FormatType),
}

#[derive(Properties, PartialEq)]
pub struct FormatRowProps {
    pub index: usize,
    pub format: Format,
    pub on_edit: Callback<(usize, FormatEdit)>,
    pub on_delete: Callback<usize>,
}

#[function_component(FormatRow)]
pub fn format_row(props: &FormatRowProps) -> Html {
    let index = props.index;
    let format = &props.format;

    let on_name_input = props.on_edit.reform(move |e: InputEvent| {
        let value = e
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default();
        (index, FormatEdit::Name(value))
    });

    let on_template_input = props.on_edit.reform(move |e: InputEvent| {
        let value = e
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default();
        (index, FormatEdit::Template(value))
    });

    let on_type_change = props.on_edit.reform(move |e: Event| {
        let kind = e
            .target_dyn_into::<HtmlSelectElement>()
            .map(|select| FormatType::from_value(&select.value()))
            .unwrap_or_default();
        (index, FormatEdit::Type(kind))
    });

    html! {
        <div class="format-item">
            <label>{"Name:"}</label>
            <input
                type="text"
                class="name-input"
                value={format.name.clone()}
                oninput={on_name_input}
            />

            <label>{"Template:"}</label>
            <input
                type="text"
                class="template-input"
                value={format.template.clone()}
                oninput={on_template_input}
            />

            <label>{"Type:"}</label>
            <select class="type-select" onchange={on_type_change}>
                {for FormatType::ALL.iter().map(|kind| html! {
                    <option value={kind.as_str()} selected={*kind == format.kind}>
                        {kind.label()}
                    </option>
                })}
            </select>

            <div class="preview">{preview(&format.template)}</div>

            <Button
                onclick={props.on_delete.reform(move |_| index)}
                variant={ButtonVariant::Danger}
            >
                {"Delete"}
            </Button>
        </div>
    }
}
