// SPDX-License-Identifier: MPL-2.0
//! Contact form, contact details and the site-visit card.

use super::{frame, heading, secondary_text, Message, Surface};
use crate::content::SiteContent;
use crate::domain::inquiry::{ContactFormData, FormField, PropertyType};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::layout::{Block, PageLayout};
use crate::ui::styles;
use iced::widget::{button, pick_list, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub content: &'a SiteContent,
    pub data: &'a ContactFormData,
    /// Inputs are read-only while an inquiry is in flight.
    pub submitting: bool,
    pub layout: PageLayout,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let form = form(&ctx);
    let details = details(ctx.content);

    let columns: Element<'a, Message> = if ctx.layout.is_compact() {
        Column::new()
            .spacing(spacing::XL)
            .push(form)
            .push(details)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(form).width(Length::FillPortion(3)))
            .push(Container::new(details).width(Length::FillPortion(2)))
            .into()
    };

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(
            "Get In Touch",
            Some("Tell us what you are looking for and we will get back to you"),
        ))
        .push(columns);

    frame(ctx.layout, Block::Contact, Surface::Secondary, body)
}

fn form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let data = ctx.data;
    let editable = !ctx.submitting;

    let selector = pick_list(
        &PropertyType::ALL[..],
        data.property_type,
        Message::PropertyTypeSelected,
    )
    .placeholder("Select Property Type")
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::input::selector);

    let submit_label = if ctx.submitting {
        "Sending..."
    } else {
        "Send Message"
    };
    let submit = button(Text::new(submit_label).size(typography::BODY))
        .on_press_maybe(editable.then_some(Message::Submit))
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let column = Column::new()
        .spacing(spacing::MD)
        .push(field(data, FormField::Name, "Your name", editable))
        .push(field(data, FormField::Email, "you@example.com", editable))
        .push(field(data, FormField::Phone, "+91", editable))
        .push(labelled(FormField::PropertyType, selector.into()))
        .push(field(
            data,
            FormField::Message,
            "Tell us about the property you need",
            editable,
        ))
        .push(submit);

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}

fn field<'a>(
    data: &'a ContactFormData,
    field: FormField,
    placeholder: &'a str,
    editable: bool,
) -> Element<'a, Message> {
    let input = text_input(placeholder, data.text(field))
        .on_input_maybe(editable.then_some(move |value| Message::FieldChanged(field, value)))
        .on_submit_maybe(editable.then_some(Message::Submit))
        .size(typography::BODY)
        .padding(spacing::SM)
        .style(styles::input::field);

    labelled(field, input.into())
}

fn labelled<'a>(field: FormField, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(field.label()).size(typography::BODY_SM))
        .push(control)
        .into()
}

fn details(content: &SiteContent) -> Element<'_, Message> {
    let contact = &content.contact;

    let hours = contact.hours.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, line| column.push(Text::new(line).size(typography::BODY).style(secondary_text)),
    );

    let info = Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Contact Information").size(typography::TITLE_SM))
        .push(detail("Address", &contact.address))
        .push(detail("Phone", &contact.phone))
        .push(detail("Email", &contact.email))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new("Business Hours").size(typography::BODY_SM))
                .push(hours),
        );

    let visit = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new("Schedule a Site Visit").size(typography::TITLE_SM))
            .push(
                Text::new(format!(
                    "Call {} to arrange a guided visit to any of our properties.",
                    contact.phone
                ))
                .size(typography::BODY)
                .style(secondary_text),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::tinted_card);

    Column::new()
        .spacing(spacing::LG)
        .push(
            Container::new(info)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        )
        .push(visit)
        .into()
}

fn detail<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(Text::new(value).size(typography::BODY).style(secondary_text))
        .into()
}
