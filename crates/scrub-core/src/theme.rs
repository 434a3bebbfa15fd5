// File: crates/scrub-core/src/theme.rs
// Summary: Light/Dark palettes and the animated transition between them.

use tracing::debug;

use crate::animate::Animation;
use crate::types::{COLOR_ANIM_UNITS, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Named color roles consumed by the renderer. The engine keeps its own copy;
/// no global theme state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub grid_line: Rgb,
    pub popup_surface: Rgb,
    pub popup_shadow: Rgb,
    pub popup_header_text: Rgb,
    pub selector_grip: Rgb,
    pub selector_shade: Rgb,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Rgb::new(255, 255, 255),
            text: Rgb::new(150, 162, 170),
            grid_line: Rgb::new(241, 241, 242),
            popup_surface: Rgb::new(255, 255, 255),
            popup_shadow: Rgb::new(200, 200, 200),
            popup_header_text: Rgb::new(0, 0, 0),
            selector_grip: Rgb::new(219, 231, 240),
            selector_shade: Rgb::new(245, 248, 249),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Rgb::new(29, 39, 51),
            text: Rgb::new(80, 103, 120),
            grid_line: Rgb::new(25, 34, 44),
            popup_surface: Rgb::new(32, 44, 57),
            popup_shadow: Rgb::new(18, 25, 33),
            popup_header_text: Rgb::new(255, 255, 255),
            selector_grip: Rgb::new(53, 70, 89),
            selector_shade: Rgb::new(24, 34, 45),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    fn lerp(&self, to: &Palette, t: f32) -> Palette {
        Palette {
            background: self.background.lerp(to.background, t),
            text: self.text.lerp(to.text, t),
            grid_line: self.grid_line.lerp(to.grid_line, t),
            popup_surface: self.popup_surface.lerp(to.popup_surface, t),
            popup_shadow: self.popup_shadow.lerp(to.popup_shadow, t),
            popup_header_text: self.popup_header_text.lerp(to.popup_header_text, t),
            selector_grip: self.selector_grip.lerp(to.selector_grip, t),
            selector_shade: self.selector_shade.lerp(to.selector_shade, t),
        }
    }
}

/// Tick-driven fade between palettes. Switching themes mid-fade restarts from
/// the currently blended colors, so the surface never snaps.
pub struct PaletteFade {
    from: Palette,
    to: Palette,
    theme: Theme,
    progress: Animation,
}

impl PaletteFade {
    pub fn new(theme: Theme) -> Self {
        let palette = Palette::for_theme(theme);
        Self { from: palette, to: palette, theme, progress: Animation::settled_at(1.0) }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        debug!(?theme, "theme switch");
        self.from = self.current();
        self.to = Palette::for_theme(theme);
        self.theme = theme;
        self.progress = Animation::settled_at(0.0);
        self.progress.start(1.0, COLOR_ANIM_UNITS);
    }

    pub fn tick(&mut self, dt: f32) {
        self.progress.tick(dt);
    }

    pub fn current(&self) -> Palette {
        if self.progress.is_settled() {
            return self.to;
        }
        // The animation's value is already eased progress in [0, 1].
        self.from.lerp(&self.to, self.progress.value())
    }
}
