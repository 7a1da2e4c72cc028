/// Quote request form model
///
/// Field state, the validation rule and the assembly of the WhatsApp
/// message. The UI layer owns rendering; everything here is plain data so
/// the rules stay testable without a widget tree.

use super::whatsapp::{clean_digits, wa_link, WHATSAPP_NUMBER};

/// Services offered on the quote form, in display order
pub const SERVICES: [&str; 5] = [
    "Fachada em ACM",
    "Letra Caixa",
    "Letreiro Luminoso",
    "Painel Impresso",
    "Projeto/Arte",
];

/// Shown when submission is attempted with invalid fields
pub const VALIDATION_MESSAGE: &str =
    "Preencha nome, WhatsApp válido e aceite a política de contato.";

#[derive(Debug, Clone)]
pub struct QuoteForm {
    pub name: String,
    /// Masked phone as typed ("(19) 99656-5458")
    pub phone: String,
    pub service: &'static str,
    pub details: String,
    pub agree: bool,
    /// Last validation failure, cleared on a valid submit
    pub error: Option<String>,
}

impl Default for QuoteForm {
    fn default() -> Self {
        QuoteForm {
            name: String::new(),
            phone: String::new(),
            service: SERVICES[0],
            details: String::new(),
            agree: false,
            error: None,
        }
    }
}

impl QuoteForm {
    /// A form is valid with a real name, a dialable number and consent
    pub fn is_valid(&self) -> bool {
        self.name.trim().chars().count() >= 2
            && clean_digits(&self.phone).len() >= 10
            && self.agree
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(VALIDATION_MESSAGE)
        }
    }

    /// Assemble the quote message, one bullet per filled field
    pub fn build_message(&self) -> String {
        let name = if self.name.trim().is_empty() { "-" } else { self.name.trim() };
        let phone = if self.phone.is_empty() { "-" } else { self.phone.as_str() };
        let details = self.details.trim();

        let mut lines = vec![
            "Olá, Jack Designer! Quero um orçamento.".to_string(),
            format!("• Nome: {}", name),
            format!("• WhatsApp: {}", phone),
            format!("• Serviço: {}", self.service),
        ];
        if !details.is_empty() {
            lines.push(format!("• Detalhes: {}", details));
        }
        lines.push("— Enviado pelo site jackdesign.com.br".to_string());

        lines.join("\n")
    }

    /// The final deep link for a valid form
    pub fn link(&self) -> String {
        wa_link(WHATSAPP_NUMBER, &self.build_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> QuoteForm {
        QuoteForm {
            name: "Ana Silva".to_string(),
            phone: "(19) 99999-9999".to_string(),
            service: SERVICES[2],
            details: String::new(),
            agree: true,
            error: None,
        }
    }

    #[test]
    fn test_validation_rejects_short_name() {
        let mut form = valid_form();
        form.name = "A".to_string();
        assert_eq!(form.validate(), Err(VALIDATION_MESSAGE));
    }

    #[test]
    fn test_validation_rejects_short_number() {
        let mut form = valid_form();
        form.phone = "(19) 9999".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn test_validation_requires_consent() {
        let mut form = valid_form();
        form.agree = false;
        assert!(!form.is_valid());
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_message_contains_every_filled_field() {
        let mut form = valid_form();
        form.details = "Largura 6m, altura 1,2m".to_string();

        let message = form.build_message();
        assert!(message.contains("• Nome: Ana Silva"));
        assert!(message.contains("• WhatsApp: (19) 99999-9999"));
        assert!(message.contains("• Serviço: Letreiro Luminoso"));
        assert!(message.contains("• Detalhes: Largura 6m"));
        assert!(message.ends_with("— Enviado pelo site jackdesign.com.br"));
    }

    #[test]
    fn test_message_omits_empty_details_line() {
        let message = valid_form().build_message();
        assert!(!message.contains("Detalhes"));
    }

    #[test]
    fn test_link_targets_the_business_number() {
        let link = valid_form().link();
        assert!(link.starts_with("https://wa.me/5519996565458?text="));
    }
}
