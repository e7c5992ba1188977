use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string signal
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            title=title
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
