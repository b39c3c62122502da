// SPDX-License-Identifier: MPL-2.0
//! Rendering for the back-office screen.

use super::{AdminTab, Editor, FormField, Message, State};
use crate::application::guard::GateStatus;
use crate::domain::content::{Announcement, CommunityEvent, Contact};
use crate::domain::gallery::GalleryImage;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text_input, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Longest list-row preview before the text is cut.
const PREVIEW_CHARS: usize = 80;

/// Context for rendering the admin screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Current access decision; anything but `Authorized` hides the content.
    pub gate: GateStatus,
    pub events: &'a [CommunityEvent],
    pub announcements: &'a [Announcement],
    pub contacts: &'a [Contact],
    pub images: &'a [GalleryImage],
    /// Load error of the active tab's collection, if its last fetch failed.
    pub error: Option<&'a str>,
    /// Whether the active tab's collection is still being fetched.
    pub loading: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.gate {
        GateStatus::Checking => checking_view(ctx.i18n),
        // The shell already asked for the redirect; render nothing while
        // navigation happens.
        GateStatus::Unauthorized => Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        GateStatus::Authorized => authorized_view(&ctx),
    }
}

fn checking_view(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("admin-checking-access")).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn authorized_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("admin-title")).size(typography::TITLE_LG);

    let body: Element<'a, Message> = match ctx.state.editor() {
        Some(editor) => form_view(ctx, editor),
        None => list_view(ctx),
    };

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(title)
        .push(build_tab_bar(ctx))
        .push(body);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn build_tab_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Row::new().spacing(spacing::XS);
    for tab in AdminTab::ALL {
        let style = if tab == ctx.state.tab() {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        bar = bar.push(
            button(Text::new(ctx.i18n.tr(tab.label_key())).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(style)
                .on_press(Message::TabSelected(tab)),
        );
    }
    bar.into()
}

// =============================================================================
// Lists
// =============================================================================

fn list_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM).push(
        button(Text::new(ctx.i18n.tr("admin-new-button")).size(typography::BODY))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary)
            .on_press(Message::NewRecord),
    );

    if let Some(error) = ctx.error {
        column = column.push(
            ErrorDisplay::new(ErrorSeverity::Warning)
                .title(ctx.i18n.tr("admin-list-error-title"))
                .details(error.to_string())
                .details_heading(ctx.i18n.tr("error-details-heading"))
                .action(ctx.i18n.tr("action-retry"), Message::Retry)
                .view(),
        );
    }

    let rows: Vec<Element<'a, Message>> = match ctx.state.tab() {
        AdminTab::Events => ctx
            .events
            .iter()
            .map(|event| {
                record_row(
                    ctx,
                    &event.id,
                    event.title.clone(),
                    event_meta(event),
                    Message::EditEvent(event.clone()),
                )
            })
            .collect(),
        AdminTab::Announcements => ctx
            .announcements
            .iter()
            .map(|announcement| {
                record_row(
                    ctx,
                    &announcement.id,
                    announcement.title.clone(),
                    Some(preview(&announcement.body)),
                    Message::EditAnnouncement(announcement.clone()),
                )
            })
            .collect(),
        AdminTab::Contacts => ctx
            .contacts
            .iter()
            .map(|contact| {
                record_row(
                    ctx,
                    &contact.id,
                    contact.name.clone(),
                    Some(format!("{} · {}", contact.role, contact.phone)),
                    Message::EditContact(contact.clone()),
                )
            })
            .collect(),
        AdminTab::Gallery => ctx
            .images
            .iter()
            .map(|image| {
                record_row(
                    ctx,
                    &image.id,
                    image.title.clone(),
                    Some(format!("{} · {}", image.category, image.date)),
                    Message::EditGalleryImage(image.clone()),
                )
            })
            .collect(),
    };

    if rows.is_empty() {
        let placeholder = if ctx.loading {
            ctx.i18n.tr("admin-loading")
        } else {
            ctx.i18n.tr("admin-list-empty")
        };
        column = column.push(Text::new(placeholder).size(typography::BODY));
    } else {
        for row in rows {
            column = column.push(row);
        }
    }

    column.into()
}

fn event_meta(event: &CommunityEvent) -> Option<String> {
    match event.venue.as_deref() {
        Some(venue) => Some(format!("{} · {}", event.date, venue)),
        None => Some(event.date.clone()),
    }
}

/// One list row: record summary on the left, edit/delete on the right.
/// A pending delete swaps the actions for its confirmation prompt.
fn record_row<'a>(
    ctx: &ViewContext<'a>,
    id: &str,
    label: String,
    meta: Option<String>,
    edit: Message,
) -> Element<'a, Message> {
    let mut summary = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXS)
        .push(Text::new(label.clone()).size(typography::BODY_LG));
    if let Some(meta) = meta {
        summary = summary.push(
            Text::new(meta)
                .size(typography::CAPTION)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );
    }

    let delete_pending = ctx
        .state
        .pending_delete()
        .is_some_and(|pending| pending.id == id);

    let actions: Element<'a, Message> = if delete_pending {
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                Text::new(ctx.i18n.tr("admin-delete-confirm-question"))
                    .size(typography::BODY_SM),
            )
            .push(
                button(
                    Text::new(ctx.i18n.tr("admin-delete-confirm-button"))
                        .size(typography::BODY_SM),
                )
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::danger)
                .on_press(Message::DeleteConfirmed),
            )
            .push(
                button(Text::new(ctx.i18n.tr("admin-keep-button")).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::link)
                    .on_press(Message::DeleteCancelled),
            )
            .into()
    } else {
        Row::new()
            .spacing(spacing::XS)
            .push(
                button(Text::new(ctx.i18n.tr("admin-edit-button")).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::link)
                    .on_press(edit),
            )
            .push(
                button(Text::new(ctx.i18n.tr("admin-delete-button")).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::danger)
                    .on_press(Message::DeleteRequested {
                        id: id.to_string(),
                        label,
                    }),
            )
            .into()
    };

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(summary)
            .push(actions),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}

// =============================================================================
// Forms
// =============================================================================

fn form_view<'a>(ctx: &ViewContext<'a>, editor: &'a Editor) -> Element<'a, Message> {
    let heading_key = if editor.is_new() {
        "admin-form-create-title"
    } else {
        "admin-form-edit-title"
    };

    let mut fields = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr(heading_key)).size(typography::TITLE_SM));

    match editor {
        Editor::Event(form) => {
            fields = fields
                .push(labeled_input(ctx, "admin-field-title", &form.title, FormField::Title))
                .push(labeled_input(
                    ctx,
                    "admin-field-description",
                    &form.description,
                    FormField::Description,
                ))
                .push(labeled_input(ctx, "admin-field-date", &form.date, FormField::Date))
                .push(labeled_input(ctx, "admin-field-time", &form.time, FormField::Time))
                .push(labeled_input(ctx, "admin-field-venue", &form.venue, FormField::Venue));
        }
        Editor::Announcement(form) => {
            fields = fields
                .push(labeled_input(ctx, "admin-field-title", &form.title, FormField::Title))
                .push(labeled_input(ctx, "admin-field-body", &form.body, FormField::Body));
        }
        Editor::GalleryImage(form) => {
            fields = fields
                .push(labeled_input(ctx, "admin-field-title", &form.title, FormField::Title))
                .push(labeled_input(
                    ctx,
                    "admin-field-category",
                    &form.category,
                    FormField::Category,
                ))
                .push(labeled_input(ctx, "admin-field-date", &form.date, FormField::Date))
                .push(labeled_input(
                    ctx,
                    "admin-field-public-id",
                    &form.public_id,
                    FormField::PublicId,
                ))
                .push(labeled_input(ctx, "admin-field-url", &form.url, FormField::Url));
        }
        Editor::Contact(form) => {
            fields = fields
                .push(labeled_input(ctx, "admin-field-name", &form.name, FormField::Name))
                .push(labeled_input(ctx, "admin-field-role", &form.role, FormField::Role))
                .push(labeled_input(ctx, "admin-field-phone", &form.phone, FormField::Phone))
                .push(labeled_input(ctx, "admin-field-email", &form.email, FormField::Email));
        }
    }

    if let Some(key) = ctx.state.form_error() {
        fields = fields.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }

    let save_label = if ctx.state.is_saving() {
        ctx.i18n.tr("admin-saving")
    } else {
        ctx.i18n.tr("admin-save-button")
    };
    let mut save = button(Text::new(save_label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);
    if !ctx.state.is_saving() {
        save = save.on_press(Message::SubmitForm);
    }

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(save)
        .push(
            button(Text::new(ctx.i18n.tr("admin-cancel-button")).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::link)
                .on_press(Message::CancelForm),
        );

    fields = fields.push(Container::new(buttons).padding([spacing::SM, 0.0]));

    Container::new(fields)
        .padding(spacing::LG)
        .width(Length::Fill)
        .max_width(sizing::FORM_MAX_WIDTH)
        .style(styles::container::panel)
        .into()
}

fn labeled_input<'a>(
    ctx: &ViewContext<'a>,
    key: &str,
    value: &'a str,
    field: FormField,
) -> Element<'a, Message> {
    let label = ctx.i18n.tr(key);
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(
            text_input("", value)
                .on_input(move |value| Message::FieldChanged(field, value))
                .on_submit(Message::SubmitForm)
                .padding(spacing::SM)
                .size(typography::BODY),
        )
        .into()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_events() -> Vec<CommunityEvent> {
        vec![CommunityEvent {
            id: "evt-1".to_string(),
            title: "Diwali Night".to_string(),
            date: "2026-11-08".to_string(),
            venue: Some("Clubhouse Lawn".to_string()),
            ..CommunityEvent::default()
        }]
    }

    fn render(gate: GateStatus, state: &State) {
        let i18n = I18n::default();
        let events = sample_events();
        let _element = view(ViewContext {
            i18n: &i18n,
            state,
            gate,
            events: &events,
            announcements: &[],
            contacts: &[],
            images: &[],
            error: None,
            loading: false,
        });
    }

    #[test]
    fn authorized_list_renders_without_panicking() {
        render(GateStatus::Authorized, &State::new());
    }

    #[test]
    fn checking_and_unauthorized_render_without_panicking() {
        render(GateStatus::Checking, &State::new());
        render(GateStatus::Unauthorized, &State::new());
    }

    #[test]
    fn open_form_renders_without_panicking() {
        let mut state = State::new();
        super::super::update(&mut state, Message::NewRecord);
        render(GateStatus::Authorized, &state);
    }

    #[test]
    fn pending_delete_renders_the_confirmation() {
        let mut state = State::new();
        super::super::update(
            &mut state,
            Message::DeleteRequested {
                id: "evt-1".to_string(),
                label: "Diwali Night".to_string(),
            },
        );
        render(GateStatus::Authorized, &state);
    }

    #[test]
    fn preview_cuts_long_text() {
        let long = "x".repeat(200);
        let cut = preview(&long);
        assert!(cut.chars().count() <= PREVIEW_CHARS + 1);
        assert!(cut.ends_with('…'));

        assert_eq!(preview("short"), "short");
    }
}
