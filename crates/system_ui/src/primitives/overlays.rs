use super::*;
use crate::presentation::{
    backdrop_style, content_style, panel_style, use_presentation, PresentationPhase,
    PresentationTiming,
};

#[component]
/// Bottom-anchored sheet that slides over a backdrop.
///
/// `open` is the only input that changes what is shown; the sheet reports dismissal requests
/// (backdrop click, Escape) through `on_close` and leaves the decision to the caller. While
/// closed nothing is rendered.
pub fn BottomSheet(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] on_opened: Option<Callback<()>>,
    #[prop(optional)] on_closed: Option<Callback<()>>,
    #[prop(optional)] timing: Option<PresentationTiming>,
    /// Collapses all durations; read once when the sheet is created.
    #[prop(optional, into)]
    reduced_motion: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] footer: Option<ChildrenFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let timing = if reduced_motion.get_untracked() {
        PresentationTiming::reduced_motion()
    } else {
        timing.unwrap_or_default()
    };
    let presentation = use_presentation(Signal::derive(move || open.get()), timing);
    presentation.on_settled(Callback::new(move |phase| {
        let callback = match phase {
            PresentationPhase::Open => on_opened,
            PresentationPhase::Closed => on_closed,
            PresentationPhase::Entering | PresentationPhase::Exiting => None,
        };
        if let Some(callback) = callback {
            callback.call(());
        }
    }));

    let timing = store_value(presentation.timing());
    let request_close = move || {
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };

    view! {
        <Show when=move || presentation.mounted() fallback=|| ()>
            <div
                class=merge_layout_class("ui-bottom-sheet", layout_class)
                data-ui-primitive="true"
                data-ui-kind="bottom-sheet"
                data-ui-phase=move || presentation.phase().token()
            >
                <div
                    data-ui-slot="backdrop"
                    aria-hidden="true"
                    style=move || timing.with_value(|timing| backdrop_style(presentation.panel_visible(), timing))
                    on:click=move |_| request_close()
                ></div>
                <section
                    data-ui-slot="panel"
                    role="dialog"
                    aria-modal="true"
                    aria-label=aria_label.clone()
                    tabindex="-1"
                    style=move || timing.with_value(|timing| panel_style(presentation.panel_visible(), timing))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            request_close();
                        }
                    }
                >
                    <div data-ui-slot="grabber" aria-hidden="true"></div>
                    <div
                        data-ui-slot="content"
                        style=move || timing.with_value(|timing| content_style(presentation.content_visible(), timing))
                    >
                        {title.clone().map(|title| view! {
                            <header data-ui-slot="header">
                                <Heading role=TextRole::Title>{title}</Heading>
                            </header>
                        })}
                        <div data-ui-slot="body">{children()}</div>
                        {footer.as_ref().map(|footer| view! {
                            <footer data-ui-slot="footer">{footer()}</footer>
                        })}
                    </div>
                </section>
            </div>
        </Show>
    }
}
