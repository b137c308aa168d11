//! Shared UI primitive library for the component documentation site.
//!
//! The crate owns reusable Leptos primitives, the overlay presentation lifecycle that sequences
//! mount, paint-sync, reveal, and unmount for sheets, and the stable `data-ui-*` DOM contract
//! consumed by the site CSS layers. Documentation pages compose these primitives instead of
//! emitting ad hoc markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod presentation;
mod primitives;

pub use primitives::{
    AppShell, Badge, BottomSheet, Button, ButtonVariant, Card, CheckboxField, Cluster, DataTable,
    Elevation, Heading, LayoutGap, LayoutJustify, LayoutPadding, Panel, RangeField, Stack,
    Surface, SurfaceVariant, Text, TextArea, TextRole, TextTone,
};

/// Convenience imports for page crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::presentation::{PresentationPhase, PresentationTiming};
    pub use crate::{
        AppShell, Badge, BottomSheet, Button, ButtonVariant, Card, CheckboxField, Cluster,
        DataTable, Elevation, Heading, LayoutGap, LayoutJustify, LayoutPadding, Panel, RangeField,
        Stack, Surface, SurfaceVariant, Text, TextArea, TextRole, TextTone,
    };
}
