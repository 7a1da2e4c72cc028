/// Contact channel: WhatsApp deep links and the quote form
///
/// - wa.me link construction and phone formatting (whatsapp.rs)
/// - quote form state, validation and message assembly (quote.rs)

pub mod quote;
pub mod whatsapp;
