//! Component documentation pages built on the shared `system_ui` primitives.
//!
//! Each page pairs a live prop playground with anatomy, usage guidance, and API tables. The
//! Bottom Sheet page also renders the presentation lifecycle as a simulated timeline so timing
//! changes can be reviewed without watching the animation.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod content;

use std::rc::Rc;

use leptos::*;
use system_ui::presentation::{open_close_trace, PresentationTiming};
use system_ui::prelude::*;

use content::{timeline_rows, TimingField, ANATOMY, GUIDANCE, PROPS};

const MAX_EVENTS: usize = 6;

#[component]
/// Bottom Sheet documentation page.
pub fn BottomSheetDocs() -> impl IntoView {
    let open = create_rw_signal(false);
    let reduced_motion = create_rw_signal(false);
    let timing = create_rw_signal(PresentationTiming::default());
    let timing_draft = create_rw_signal(timing.get_untracked().to_json_pretty());
    let timing_error = create_rw_signal::<Option<String>>(None);
    let events = create_rw_signal(Vec::<String>::new());

    let push_event = move |event: &'static str| {
        events.update(|events| {
            events.insert(0, event.to_string());
            events.truncate(MAX_EVENTS);
        });
    };

    let set_timing = move |next: PresentationTiming| {
        timing_draft.set(next.to_json_pretty());
        timing_error.set(None);
        timing.set(next);
    };

    let apply_draft = move |_: ev::MouseEvent| match PresentationTiming::from_json(&timing_draft.get_untracked()) {
        Ok(next) => set_timing(next),
        Err(err) => {
            logging::warn!("bottom sheet docs timing rejected: {err}");
            timing_error.set(Some(err.to_string()));
        }
    };

    let timeline = Signal::derive(move || timeline_rows(&open_close_trace(timing.get())));

    view! {
        <AppShell>
            <Surface variant=SurfaceVariant::Muted elevation=Elevation::Inset>
                <Stack gap=LayoutGap::Lg>
                    <Cluster justify=LayoutJustify::Between>
                        <Heading>"Bottom Sheet"</Heading>
                        <Badge>"overlay"</Badge>
                    </Cluster>
                    <Text tone=TextTone::Secondary>
                        "A panel that slides up from the bottom edge. Opening mounts the sheet, waits two frames so its hidden position is painted, slides the panel in, then fades the content in shortly after. Closing hides both at once and unmounts after the exit transition."
                    </Text>

                    <Panel id="playground" aria_label="Playground">
                        <Stack gap=LayoutGap::Md>
                            <Heading role=TextRole::Label>"Playground"</Heading>
                            <Cluster gap=LayoutGap::Sm>
                                <Button
                                    variant=ButtonVariant::Primary
                                    aria_expanded=Signal::derive(move || open.get())
                                    on_click=Callback::new(move |_| open.update(|open| *open = !*open))
                                >
                                    {move || if open.get() { "Close sheet" } else { "Open sheet" }}
                                </Button>
                                <CheckboxField
                                    label="Reduced motion"
                                    checked=Signal::derive(move || reduced_motion.get())
                                    on_toggle=Callback::new(move |next| reduced_motion.set(next))
                                />
                                <Badge tone=Signal::derive(move || {
                                    if open.get() { TextTone::Accent } else { TextTone::Secondary }
                                })>
                                    {move || format!("open = {}", open.get())}
                                </Badge>
                            </Cluster>

                            {TimingField::ALL
                                .into_iter()
                                .map(|field| view! {
                                    <Stack gap=LayoutGap::Sm>
                                        <Text role=TextRole::Label>
                                            {move || format!("{}: {}ms", field.label(), field.read(&timing.get()))}
                                        </Text>
                                        <RangeField
                                            min=0
                                            max=field.max_ms()
                                            step=10
                                            aria_label=field.label()
                                            value=Signal::derive(move || field.read(&timing.get()))
                                            on_input=Callback::new(move |value_ms| {
                                                match field.apply(&timing.get_untracked(), value_ms) {
                                                    Ok(next) => set_timing(next),
                                                    Err(err) => timing_error.set(Some(err.to_string())),
                                                }
                                            })
                                        />
                                    </Stack>
                                })
                                .collect_view()}

                            <Stack gap=LayoutGap::Sm>
                                <Text role=TextRole::Label>"Timing JSON"</Text>
                                <TextArea
                                    aria_label="Timing JSON"
                                    rows=11
                                    value=Signal::derive(move || timing_draft.get())
                                    on_input=Callback::new(move |raw| timing_draft.set(raw))
                                />
                                <Cluster gap=LayoutGap::Sm>
                                    <Button on_click=Callback::new(apply_draft)>"Apply timing"</Button>
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        on_click=Callback::new(move |_| set_timing(PresentationTiming::default()))
                                    >
                                        "Reset"
                                    </Button>
                                </Cluster>
                                <Show when=move || timing_error.get().is_some() fallback=|| ()>
                                    <Text tone=TextTone::Danger>
                                        {move || timing_error.get().unwrap_or_default()}
                                    </Text>
                                </Show>
                            </Stack>

                            <Stack gap=LayoutGap::Sm>
                                <Text role=TextRole::Label>"Events"</Text>
                                <For
                                    each=move || events.get().into_iter().enumerate()
                                    key=|(index, event)| format!("{index}:{event}")
                                    children=|(_, event)| view! {
                                        <Text role=TextRole::Code tone=TextTone::Secondary>{event}</Text>
                                    }
                                />
                            </Stack>
                        </Stack>
                    </Panel>

                    {move || {
                        // Timing is fixed per sheet instance; recreate the sheet when it changes.
                        let timing = timing.get();
                        let reduced = reduced_motion.get();
                        view! {
                            <BottomSheet
                                open=Signal::derive(move || open.get())
                                timing=timing
                                reduced_motion=reduced
                                title="Share document"
                                aria_label="Share document"
                                on_close=Callback::new(move |_| open.set(false))
                                on_opened=Callback::new(move |_| push_event("opened"))
                                on_closed=Callback::new(move |_| push_event("closed"))
                                footer=Rc::new(move || Fragment::new(vec![view! {
                                    <Cluster justify=LayoutJustify::End>
                                        <Button on_click=Callback::new(move |_| open.set(false))>"Done"</Button>
                                    </Cluster>
                                }.into_view()]))
                            >
                                <Text>
                                    "Anyone with the link can view. The content block fades in after the panel has started sliding."
                                </Text>
                            </BottomSheet>
                        }
                    }}

                    <Panel id="lifecycle" aria_label="Lifecycle timeline">
                        <Stack gap=LayoutGap::Sm>
                            <Heading role=TextRole::Label>"Lifecycle"</Heading>
                            <Text tone=TextTone::Secondary>
                                "Simulated open-then-close cycle for the current timing, at 16ms per frame."
                            </Text>
                            <DataTable
                                aria_label="Lifecycle timeline"
                                columns=&["Time", "Step", "Mounted", "Panel", "Content", "Phase"]
                            >
                                {move || {
                                    timeline
                                        .get()
                                        .into_iter()
                                        .map(|row| view! {
                                            <tr data-ui-phase=row.phase>
                                                <td>{row.at}</td>
                                                <td>{row.step}</td>
                                                <td>{row.mounted}</td>
                                                <td>{row.panel}</td>
                                                <td>{row.content}</td>
                                                <td>{row.phase}</td>
                                            </tr>
                                        })
                                        .collect_view()
                                }}
                            </DataTable>
                        </Stack>
                    </Panel>

                    <Panel id="anatomy" aria_label="Anatomy">
                        <Stack gap=LayoutGap::Sm>
                            <Heading role=TextRole::Label>"Anatomy"</Heading>
                            <DataTable aria_label="Anatomy" columns=&["Part", "Slot", "Purpose"]>
                                {ANATOMY
                                    .iter()
                                    .map(|(part, slot, purpose)| view! {
                                        <tr>
                                            <td>{*part}</td>
                                            <td><code>{format!("data-ui-slot=\"{slot}\"")}</code></td>
                                            <td>{*purpose}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </DataTable>
                        </Stack>
                    </Panel>

                    <Panel id="usage" aria_label="Usage">
                        <Stack gap=LayoutGap::Sm>
                            <Heading role=TextRole::Label>"Usage"</Heading>
                            {GUIDANCE
                                .iter()
                                .map(|(kind, line)| {
                                    let tone = if *kind == "Do" { TextTone::Accent } else { TextTone::Danger };
                                    view! {
                                        <Cluster gap=LayoutGap::Sm>
                                            <Badge tone=tone>{*kind}</Badge>
                                            <Text>{*line}</Text>
                                        </Cluster>
                                    }
                                })
                                .collect_view()}
                        </Stack>
                    </Panel>

                    <Panel id="api" aria_label="API">
                        <Stack gap=LayoutGap::Sm>
                            <Heading role=TextRole::Label>"API"</Heading>
                            <DataTable aria_label="Props" columns=&["Prop", "Type", "Default", "Description"]>
                                {PROPS
                                    .iter()
                                    .map(|(prop, ty, default, description)| view! {
                                        <tr>
                                            <td><code>{*prop}</code></td>
                                            <td><code>{*ty}</code></td>
                                            <td>{*default}</td>
                                            <td>{*description}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </DataTable>
                        </Stack>
                    </Panel>
                </Stack>
            </Surface>
        </AppShell>
    }
}
