use super::*;

fn range_percent(value: &str, min: u32, max: u32) -> f32 {
    let value = value.parse::<f32>().unwrap_or(min as f32);
    let span = (max.saturating_sub(min) as f32).max(1.0);
    (((value - min as f32) / span) * 100.0).clamp(0.0, 100.0)
}

#[component]
/// Shared button primitive.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            aria-expanded=move || bool_token(aria_expanded.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared checkbox primitive that reports the next checked value.
pub fn CheckboxField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-selected=move || bool_token(checked.get())
        >
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(on_toggle) = on_toggle.as_ref() {
                        on_toggle.call(event_target_checked(&ev));
                    }
                }
            />
            {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
        </label>
    }
}

#[component]
/// Shared range slider reporting parsed integer values.
pub fn RangeField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = 0)] min: u32,
    #[prop(default = 100)] max: u32,
    #[prop(default = 1)] step: u32,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(into)] value: MaybeSignal<u32>,
    #[prop(optional)] on_input: Option<Callback<u32>>,
) -> impl IntoView {
    let value_text = Signal::derive(move || value.get().to_string());
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            type="range"
            min=min
            max=max
            step=step
            aria-label=aria_label
            prop:value=move || value_text.get()
            data-ui-primitive="true"
            data-ui-kind="range"
            data-ui-percent=move || format!("{:.2}", range_percent(&value_text.get(), min, max))
            on:input=move |ev| {
                let Ok(parsed) = event_target_value(&ev).parse::<u32>() else {
                    return;
                };
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(parsed.clamp(min, max));
                }
            }
        />
    }
}

#[component]
/// Shared multi-line text field.
pub fn TextArea(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = 8)] rows: u32,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <textarea
            class=merge_layout_class("ui-textarea", layout_class)
            aria-label=aria_label
            rows=rows
            spellcheck="false"
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-area"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        ></textarea>
    }
}

#[cfg(test)]
mod tests {
    use super::range_percent;

    #[test]
    fn range_percent_clamps_to_track() {
        assert_eq!(range_percent("50", 0, 100), 50.0);
        assert_eq!(range_percent("600", 0, 500), 100.0);
        assert_eq!(range_percent("junk", 100, 200), 0.0);
        assert_eq!(range_percent("5", 5, 5), 0.0);
    }
}
