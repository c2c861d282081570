use leptos::prelude::*;

/// Labelled input bound to a string signal.
///
/// The value is written as a DOM property so that clearing the signal clears
/// what the visitor sees.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", "datetime-local", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    /// Also used as the `name` submitted to the form handler
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let input_type = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let placeholder = move || placeholder.get().unwrap_or_default();
    let label_for = id.clone();

    view! {
        <div class="form-group">
            {move || label.get().map(|l| view! { <label for=label_for.clone()>{l}</label> })}
            <input
                id=id.clone()
                name=id
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
