/// Quote request form
///
/// The desktop version of the site's "Feche seu orçamento" section: short
/// form, fixed service list, consent checkbox. Submitting a valid form
/// copies the WhatsApp deep link to the clipboard.

use iced::widget::{button, checkbox, pick_list, text, text_input, Column};
use iced::Element;

use crate::contact::quote::{QuoteForm, SERVICES};
use crate::Message;

pub fn quote_view<'a>(form: &'a QuoteForm) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(12)
        .max_width(520)
        .push(text("Feche seu orçamento").size(24))
        .push(
            text("Envie seus dados e receba o atendimento direto no WhatsApp da equipe.")
                .size(14),
        )
        .push(field(
            "Seu nome",
            text_input("Ex.: Ana Silva", &form.name)
                .on_input(Message::QuoteNameChanged)
                .padding(8),
        ))
        .push(field(
            "WhatsApp (somente números, com DDD)",
            text_input("(19) 99999-9999", &form.phone)
                .on_input(Message::QuotePhoneChanged)
                .padding(8),
        ))
        .push(field(
            "Serviço de interesse",
            pick_list(
                &SERVICES[..],
                Some(form.service),
                Message::QuoteServicePicked,
            )
            .padding(8),
        ))
        .push(field(
            "Detalhes (opcional)",
            text_input("Ex.: Largura 6m, altura 1,2m…", &form.details)
                .on_input(Message::QuoteDetailsChanged)
                .padding(8),
        ))
        .push(
            checkbox(
                "Autorizo contato por WhatsApp/telefone com base nos dados preenchidos.",
                form.agree,
            )
            .on_toggle(Message::QuoteAgreeToggled)
            .size(16),
        );

    if let Some(error) = &form.error {
        content = content.push(text(error.as_str()).size(14));
    }

    content
        .push(
            button(text("Copiar link do orçamento no WhatsApp").size(16))
                .padding(12)
                .on_press(Message::QuoteSubmit),
        )
        .push(text("Sem compromisso • Horário comercial (seg–sex)").size(12))
        .into()
}

fn field<'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(4)
        .push(text(label).size(14))
        .push(input)
        .into()
}
