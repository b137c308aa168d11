//! Pure style lookup from presentation flags to inline transition styles.

use super::timing::PresentationTiming;

/// Panel transform/opacity style.
///
/// The transition declared on the target state is the one the renderer plays, so the shown
/// style carries the enter timing and the hidden style carries the faster exit timing.
pub fn panel_style(visible: bool, timing: &PresentationTiming) -> String {
    if visible {
        format!(
            "transform: translateY(0); opacity: 1; transition: transform {ms}ms {ease}, opacity {ms}ms {ease};",
            ms = timing.panel_enter_ms,
            ease = timing.enter_easing,
        )
    } else {
        format!(
            "transform: translateY(100%); opacity: 0; transition: transform {ms}ms {ease}, opacity {ms}ms {ease};",
            ms = timing.panel_exit_ms,
            ease = timing.exit_easing,
        )
    }
}

/// Nested content opacity/translate style.
pub fn content_style(visible: bool, timing: &PresentationTiming) -> String {
    let (opacity, offset) = if visible { (1, 0) } else { (0, 8) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); transition: opacity {ms}ms ease-out, transform {ms}ms ease-out;",
        ms = timing.content_fade_ms,
    )
}

/// Backdrop opacity style; follows the panel.
pub fn backdrop_style(visible: bool, timing: &PresentationTiming) -> String {
    let ms = if visible {
        timing.panel_enter_ms
    } else {
        timing.panel_exit_ms
    };
    format!(
        "opacity: {}; transition: opacity {ms}ms linear;",
        u8::from(visible)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn shown_panel_uses_enter_timing() {
        let style = panel_style(true, &PresentationTiming::default());
        assert_eq!(
            style,
            "transform: translateY(0); opacity: 1; transition: transform 380ms cubic-bezier(0.32, 0.72, 0, 1), opacity 380ms cubic-bezier(0.32, 0.72, 0, 1);"
        );
    }

    #[test]
    fn hidden_panel_uses_exit_timing() {
        let style = panel_style(false, &PresentationTiming::default());
        assert!(style.starts_with("transform: translateY(100%); opacity: 0;"));
        assert!(style.contains("280ms cubic-bezier(0.4, 0, 1, 1)"));
    }

    #[test]
    fn content_offsets_until_visible() {
        let timing = PresentationTiming::default();
        assert!(content_style(false, &timing).contains("translateY(8px)"));
        assert!(content_style(true, &timing).starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(content_style(true, &timing).contains("220ms"));
    }

    #[test]
    fn backdrop_tracks_panel_timing() {
        let timing = PresentationTiming::default();
        assert_eq!(
            backdrop_style(false, &timing),
            "opacity: 0; transition: opacity 280ms linear;"
        );
        assert_eq!(
            backdrop_style(true, &timing),
            "opacity: 1; transition: opacity 380ms linear;"
        );
    }
}
