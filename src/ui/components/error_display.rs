// SPDX-License-Identifier: MPL-2.0
//! Inline error panel shared by the listing screens.
//!
//! Two presentations cover every failure the portal shows: a centered
//! full-screen panel when a fetch failed and nothing is cached, and a
//! banner pushed above stale content when a refresh failed. Both carry
//! a severity-tinted title, an optional friendly message, a retry
//! action, and the raw error text for anyone who needs to report it.
//!
//! ```ignore
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title(i18n.tr("gallery-load-error-title"))
//!     .message(i18n.tr("gallery-load-error-message"))
//!     .details(error.to_string())
//!     .details_heading(i18n.tr("error-details-heading"))
//!     .action(i18n.tr("action-retry"), Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Picks the accent color for the panel title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The screen has nothing to show.
    Error,
    /// Stale content is still up; only the refresh failed.
    Warning,
    /// Nothing is wrong, the panel just informs.
    Info,
}

impl ErrorSeverity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
            ErrorSeverity::Info => palette::INFO_500,
        }
    }
}

/// Builder for the error panel.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    details_heading: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            title: None,
            message: None,
            details: None,
            details_heading: None,
            action: None,
        }
    }

    /// Headline, tinted by severity.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Friendly one-line explanation under the headline.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Raw error text, rendered small below a separator.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Localized heading above the raw error text.
    #[must_use]
    pub fn details_heading(mut self, heading: impl Into<String>) -> Self {
        self.details_heading = Some(heading.into());
        self
    }

    /// Adds an action button, usually a retry.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = self.severity.color();

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::TITLE_MD).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent),
                },
            ));
        }

        if let Some(message) = self.message {
            content = content.push(
                Container::new(Text::new(message).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                Container::new(
                    button(Text::new(label))
                        .on_press(message)
                        .style(button_styles::selected),
                )
                .padding(spacing::SM)
                .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some(details) = self.details {
            let secondary = |theme: &Theme| text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            };

            let mut block = Column::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .push(rule::horizontal(1));
            if let Some(heading) = self.details_heading {
                block = block.push(Text::new(heading).size(typography::BODY).style(secondary));
            }
            block = block.push(Text::new(details).size(typography::CAPTION).style(secondary));

            content = content.push(
                Container::new(block)
                    .width(Length::Fill)
                    .padding(spacing::SM),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(panel_style)
            .into()
    }
}

fn panel_style(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(extended.background.weak.color)),
        border: iced::Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Centers the panel in the whole screen, for a failed first load.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}
