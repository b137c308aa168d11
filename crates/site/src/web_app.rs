use component_docs::BottomSheetDocs;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Documentation pages reachable under `/components/:slug`.
pub enum DocPage {
    /// Bottom Sheet overlay page.
    BottomSheet,
}

impl DocPage {
    /// Every registered page in index order.
    pub const ALL: [Self; 1] = [Self::BottomSheet];

    /// URL slug.
    pub fn slug(self) -> &'static str {
        match self {
            Self::BottomSheet => "bottom-sheet",
        }
    }

    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Self::BottomSheet => "Bottom Sheet",
        }
    }

    /// One-line index summary.
    pub fn summary(self) -> &'static str {
        match self {
            Self::BottomSheet => "Sliding overlay with staggered content reveal and delayed unmount.",
        }
    }

    /// Resolves a route slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.slug() == slug)
    }

    fn href(self) -> String {
        format!("/components/{}", self.slug())
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Component Docs" />
        <Meta name="description" content="Design system component documentation and playgrounds." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=ComponentIndex />
                    <Route path="/components/:slug" view=ComponentRoute />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ComponentIndex() -> impl IntoView {
    view! {
        <AppShell>
            <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
                <Heading>"Components"</Heading>
                {DocPage::ALL
                    .into_iter()
                    .map(|page| view! {
                        <Card>
                            <Stack gap=LayoutGap::Sm>
                                <A href=page.href()>{page.title()}</A>
                                <Text tone=TextTone::Secondary>{page.summary()}</Text>
                            </Stack>
                        </Card>
                    })
                    .collect_view()}
            </Stack>
        </AppShell>
    }
}

#[component]
fn ComponentRoute() -> impl IntoView {
    let params = use_params_map();
    let page = move || params.with(|map| map.get("slug").and_then(|slug| DocPage::from_slug(slug)));

    move || match page() {
        Some(DocPage::BottomSheet) => view! {
            <Title text="Bottom Sheet · Component Docs" />
            <BottomSheetDocs />
        }
        .into_view(),
        None => {
            let slug = params.with(|map| map.get("slug").cloned().unwrap_or_default());
            logging::warn!("unknown component docs slug `{slug}`");
            view! { <NotFound /> }.into_view()
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="canonical-content">
            <h1>"Not found"</h1>
            <p>"No documentation page lives at this address."</p>
            <A href="/">"Back to components"</A>
        </section>
    }
}
