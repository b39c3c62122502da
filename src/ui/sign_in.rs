// SPDX-License-Identifier: MPL-2.0
//! Sign-in screen for committee members.
//!
//! A plain email/password form. Submission is debounced through the
//! `submitting` flag so a slow identity provider cannot be hammered with
//! duplicate requests; the shell reports the outcome back through
//! [`State::finish_failure`] or navigates away on success.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Element, Length};

// =============================================================================
// State
// =============================================================================

/// Form state owned by the application shell.
#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    password: String,
    submitting: bool,
    error: Option<String>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Re-enables the form after a rejected or failed attempt.
    pub fn finish_failure(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Clears the form, dropping the typed password.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn can_submit(&self) -> bool {
        !self.submitting && !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

// =============================================================================
// Messages and events
// =============================================================================

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
}

/// Events the shell reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Nothing for the shell to do.
    None,
    /// The visitor submitted credentials for the identity provider.
    CredentialsSubmitted { email: String, password: String },
}

// =============================================================================
// Update
// =============================================================================

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(email) => {
            state.email = email;
            Event::None
        }
        Message::PasswordChanged(password) => {
            state.password = password;
            Event::None
        }
        Message::Submit => {
            if !state.can_submit() {
                return Event::None;
            }
            state.submitting = true;
            state.error = None;
            Event::CredentialsSubmitted {
                email: state.email.trim().to_string(),
                password: state.password.clone(),
            }
        }
    }
}

// =============================================================================
// View
// =============================================================================

/// Context for rendering the sign-in screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("sign-in-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("sign-in-subtitle")).size(typography::BODY);

    let email_placeholder = ctx.i18n.tr("sign-in-email-placeholder");
    let email_input = text_input(&email_placeholder, &ctx.state.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY);

    let password_placeholder = ctx.i18n.tr("sign-in-password-placeholder");
    let password_input = text_input(&password_placeholder, &ctx.state.password)
        .secure(true)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY);

    let submit_label = if ctx.state.submitting {
        ctx.i18n.tr("sign-in-submitting")
    } else {
        ctx.i18n.tr("sign-in-submit-button")
    };
    let mut submit = button(Text::new(submit_label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);
    if ctx.state.can_submit() {
        submit = submit.on_press(Message::Submit);
    }

    let mut form = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("sign-in-email-label")).size(typography::BODY_SM))
        .push(email_input)
        .push(Text::new(ctx.i18n.tr("sign-in-password-label")).size(typography::BODY_SM))
        .push(password_input);

    if let Some(error) = ctx.state.error.as_deref() {
        form = form.push(
            Text::new(error)
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }

    form = form.push(Container::new(submit).padding([spacing::SM, 0.0]));

    let panel = Container::new(form)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel);

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::FORM_MAX_WIDTH)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(title)
        .push(subtitle)
        .push(panel);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_stays_local() {
        let mut state = State::new();

        let event = update(&mut state, Message::EmailChanged("a@b.example".to_string()));
        assert_eq!(event, Event::None);

        let event = update(&mut state, Message::PasswordChanged("hunter2".to_string()));
        assert_eq!(event, Event::None);
        assert_eq!(state.email(), "a@b.example");
    }

    #[test]
    fn blank_fields_cannot_be_submitted() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert!(!state.is_submitting());

        update(&mut state, Message::EmailChanged("   ".to_string()));
        update(&mut state, Message::PasswordChanged("pw".to_string()));
        assert_eq!(update(&mut state, Message::Submit), Event::None);
    }

    #[test]
    fn submit_sends_trimmed_credentials() {
        let mut state = State::new();
        update(
            &mut state,
            Message::EmailChanged("  secretary@rosewood.example ".to_string()),
        );
        update(&mut state, Message::PasswordChanged("hunter2".to_string()));

        let event = update(&mut state, Message::Submit);
        assert_eq!(
            event,
            Event::CredentialsSubmitted {
                email: "secretary@rosewood.example".to_string(),
                password: "hunter2".to_string(),
            }
        );
        assert!(state.is_submitting());
    }

    #[test]
    fn a_pending_attempt_swallows_further_submits() {
        let mut state = State::new();
        update(&mut state, Message::EmailChanged("a@b.example".to_string()));
        update(&mut state, Message::PasswordChanged("pw".to_string()));
        update(&mut state, Message::Submit);

        assert_eq!(update(&mut state, Message::Submit), Event::None);
    }

    #[test]
    fn failure_reenables_the_form() {
        let mut state = State::new();
        update(&mut state, Message::EmailChanged("a@b.example".to_string()));
        update(&mut state, Message::PasswordChanged("pw".to_string()));
        update(&mut state, Message::Submit);

        state.finish_failure("wrong password".to_string());
        assert!(!state.is_submitting());

        let event = update(&mut state, Message::Submit);
        assert!(matches!(event, Event::CredentialsSubmitted { .. }));
    }

    #[test]
    fn view_renders_without_panicking() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.finish_failure("identity provider unreachable".to_string());

        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
