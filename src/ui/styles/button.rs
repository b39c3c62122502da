// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Every filled button shares the same bones: a colored fill, a 1px
/// border, and the small corner radius.
fn filled(background: Color, text_color: Color, border_color: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn disabled_fill(theme: &Theme) -> Color {
    if matches!(theme, Theme::Light) {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    }
}

/// Style pour bouton primaire (action principale).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => filled(
            disabled_fill(theme),
            palette::GRAY_400,
            palette::GRAY_400,
            shadow::NONE,
        ),
    }
}

/// The active chip in a toggle group (facet chips, admin tabs). Selected
/// means the brand fill, so this is the primary look under another name
/// the call sites can say what they mean with.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// The inactive chip in a toggle group. Neutral fill; the brand-colored
/// border on hover signals it can be picked.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (rest_fill, text) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(rest_fill, text, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Hovered => {
            let hover_fill = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            filled(hover_fill, text, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => filled(
            disabled_fill(theme),
            palette::GRAY_400,
            palette::GRAY_400,
            shadow::NONE,
        ),
    }
}

/// Style for destructive actions (delete buttons in the admin lists).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => filled(
            Color::from_rgb(0.72, 0.14, 0.14),
            WHITE,
            palette::ERROR_500,
            shadow::MD,
        ),
        button::Status::Disabled => filled(
            disabled_fill(theme),
            palette::GRAY_400,
            palette::GRAY_400,
            shadow::NONE,
        ),
        _ => filled(palette::ERROR_500, WHITE, palette::ERROR_500, shadow::SM),
    }
}

/// Style pour boutons overlay (lightbox navigation, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Plain text-like button for navigation links.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(extended.background.strong.color.into()),
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: extended.background.base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_buttons_wear_the_brand_fill() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn selected_chips_match_the_primary_look() {
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Disabled,
        ] {
            let chip = selected(&Theme::Light, status);
            let action = primary(&Theme::Light, status);
            assert_eq!(chip.background, action.background);
            assert_eq!(chip.text_color, action.text_color);
        }
    }

    #[test]
    fn unselected_chips_stay_neutral_at_rest() {
        let style = unselected(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_100)));
        assert_ne!(style.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn danger_buttons_darken_on_hover() {
        let active = danger(&Theme::Light, button::Status::Active);
        let hovered = danger(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn overlay_alpha_rises_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn link_buttons_have_no_fill_at_rest() {
        let style = link(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }
}
