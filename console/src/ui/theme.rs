//! # GUI Theme
//!
//! Light theme with a blue accent, plus the status badge palette.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use shared::MarcaStatus;

/// Color palette
#[derive(Clone)]
pub struct MarcasColors {
    /// Warm off-white page background
    pub background: Color32,
    /// Card and window fill
    pub surface: Color32,
    /// Primary text
    pub text: Color32,
    /// Blue accent for primary actions and the stepper
    pub blue_primary: Color32,
    /// Hover shade of the accent
    pub blue_dark: Color32,
    /// Light gray borders
    pub border: Color32,
    /// Secondary text
    pub gray_secondary: Color32,
    /// Disabled/inactive fill
    pub gray_inactive: Color32,
    /// Danger actions and error text
    pub red_error: Color32,
    pub green_success: Color32,
    pub yellow_warning: Color32,
    /// Footer band
    pub footer: Color32,
}

impl Default for MarcasColors {
    fn default() -> Self {
        MarcasColors {
            background: Color32::from_rgb(250, 249, 247),     // #FAF9F7
            surface: Color32::from_rgb(255, 255, 255),        // #FFFFFF
            text: Color32::from_rgb(31, 41, 55),              // #1F2937
            blue_primary: Color32::from_rgb(37, 99, 235),     // #2563EB
            blue_dark: Color32::from_rgb(29, 78, 216),        // #1D4ED8
            border: Color32::from_rgb(209, 213, 219),         // #D1D5DB
            gray_secondary: Color32::from_rgb(107, 114, 128), // #6B7280
            gray_inactive: Color32::from_rgb(243, 244, 246),  // #F3F4F6
            red_error: Color32::from_rgb(239, 68, 68),        // #EF4444
            green_success: Color32::from_rgb(22, 163, 74),    // #16A34A
            yellow_warning: Color32::from_rgb(202, 138, 4),   // #CA8A04
            footer: Color32::from_rgb(0, 0, 0),
        }
    }
}

/// Badge fill and text color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    pub fill: Color32,
    pub text: Color32,
}

/// Application theme
pub struct Theme {
    pub colors: MarcasColors,
    /// Normal text color
    pub normal: Color32,
    /// Accent for selected items and primary buttons
    pub selected: Color32,
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = MarcasColors::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.blue_primary,
            border: colors.border,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            background: colors.background,
        }
    }
}

impl Theme {
    /// Badge colors per status: green active, red inactive, yellow pending
    pub fn status_badge(&self, status: MarcaStatus) -> BadgeColors {
        match status {
            MarcaStatus::Active => BadgeColors {
                fill: Color32::from_rgb(220, 252, 231), // green-100
                text: Color32::from_rgb(22, 101, 52),   // green-800
            },
            MarcaStatus::Inactive => BadgeColors {
                fill: Color32::from_rgb(254, 226, 226), // red-100
                text: Color32::from_rgb(153, 27, 27),   // red-800
            },
            MarcaStatus::Pending => BadgeColors {
                fill: Color32::from_rgb(254, 249, 195), // yellow-100
                text: Color32::from_rgb(133, 77, 14),   // yellow-800
            },
        }
    }

    /// egui visuals for the palette
    pub fn marcas_visuals(colors: &MarcasColors) -> Visuals {
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.gray_inactive;
        visuals.extreme_bg_color = colors.surface;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.blue_primary);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.blue_dark);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(37, 99, 235, 60);
        visuals.selection.stroke = Stroke::new(1.0, colors.blue_primary);
        visuals.hyperlink_color = colors.blue_primary;

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(ctx: &Context) {
        let visuals = Self::marcas_visuals(&MarcasColors::default());

        // style_mut_of instead of set_visuals; both themes get the same look
        for theme in [EguiTheme::Light, EguiTheme::Dark] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
                style.spacing.window_margin = egui::Margin::same(12);
                style.spacing.tooltip_width = 300.0;
            });
        }
        ctx.set_theme(EguiTheme::Light);

        tracing::debug!("Applied light theme visuals");
    }
}
