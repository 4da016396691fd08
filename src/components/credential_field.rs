use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// The input's raw value; `None` when the event has no input target.
///
/// Unlike `event_target_value`, a missing or non-input target yields `None`
/// (read as an empty field) instead of an unchecked cast.
fn raw_value(ev: &leptos::ev::Event) -> Option<String> {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Labeled input whose value is owned by the caller.
#[component]
pub fn CredentialField(
    label: &'static str,
    input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    on_edit: Callback<Option<String>>,
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| on_edit.run(raw_value(&ev));

    view! {
        <div>
            <label>
                {label}
                <br />
                <input type=input_type prop:value=move || value.get() on:input=on_input />
            </label>
        </div>
    }
}
