//! Spoken Prompt Templates
//!
//! All assistant speech in European Portuguese. Fixed templates from the
//! Churrascaria Quitanda script; the greeting varies with the time of day
//! and re-prompts pick a random apology opener.

use crate::session::Reservation;
use chrono::Timelike;
use rand::seq::SliceRandom;

/// Condensed spoken menu
pub const MENU: &str = "Aqui está o nosso menu. Na carne temos Frango do Churrasco a sete euros e noventa, \
meio Frango a quatro e cinquenta, Espetada de Guia e Espetada de Frango com Bacon a seis e cinquenta, \
Dose de Entrecosto a oito euros e Picanha a trinta e seis e cinquenta ao quilo. \
No peixe temos Bacalhau assado na brasa, com batata cozida, ovo e pimento. \
Para acompanhar, batata frita, arroz, salada mista, feijão preto e broa de Avintes. \
O que gostaria de encomendar?";

/// Wine options, read on request
pub const WINE_LIST: &str = "Nos vinhos verdes temos o Vinho da Casa Cruzeiro Lima a quatro euros, \
branco e tinto. Nos brancos, o Muralhas de Monção e o Casal Garcia a sete euros. \
Nos tintos, o Monte Velho e o Eugénio de Almeida, também a sete euros.";

/// Dessert options, read on request
pub const DESSERT_MENU: &str = "Nas sobremesas tradicionais temos pastéis de nata com canela, \
arroz doce, pudim Abade de Priscos, pão de ló de Ovar, queijadas de Sintra e toucinho do céu.";

pub const ASK_DATE: &str = "Com certeza. Para que dia deseja a reserva?";
pub const ASK_TIME: &str = "E para que horas?";
pub const ASK_PARTY_SIZE: &str = "Para quantas pessoas será a mesa?";

pub const TRANSFER: &str =
    "Vou passar a chamada a um colega. Um momento, por favor.";

pub const FAREWELL: &str =
    "Muito obrigado pela sua chamada para a Churrascaria Quitanda. Até à próxima!";

/// Read after an unrecognized request at the main menu
pub const MENU_HINT: &str =
    "Posso ler o menu, os vinhos ou as sobremesas, ou fazer uma reserva de mesa.";

/// Apology openers for re-prompts, one picked at random
const APOLOGIES: &[&str] = &[
    "Peço desculpa, não percebi.",
    "Desculpe, pode repetir?",
    "Não entendi bem.",
];

/// Salutation for a given hour of day in Portugal
pub fn salutation(hour: u32) -> &'static str {
    if (5..12).contains(&hour) {
        "Bom dia"
    } else if (12..20).contains(&hour) {
        "Boa tarde"
    } else {
        "Boa noite"
    }
}

/// Greeting spoken when a participant joins
pub fn welcome() -> String {
    format!(
        "{}! Churrascaria Quitanda, em que posso ajudar?",
        salutation(chrono::Local::now().hour())
    )
}

/// Random apology opener
pub fn apology() -> &'static str {
    APOLOGIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(APOLOGIES[0])
}

/// Re-prompt: apology followed by the question for the current step
pub fn reprompt(question: &str) -> String {
    format!("{} {}", apology(), question)
}

/// Final confirmation once the reservation is complete
pub fn confirmation(reservation: &Reservation) -> String {
    let party = reservation
        .party_size
        .map(|n| n.to_string())
        .unwrap_or_else(|| "algumas".to_string());
    let date = reservation.date.as_deref().unwrap_or("no dia combinado");
    let time = reservation.time.as_deref().unwrap_or("à hora combinada");
    format!(
        "Perfeito! Fica reservada uma mesa para {} pessoas, {}, às {}. Muito obrigado!",
        party, date, time
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salutation_by_hour() {
        assert_eq!(salutation(8), "Bom dia");
        assert_eq!(salutation(15), "Boa tarde");
        assert_eq!(salutation(22), "Boa noite");
        assert_eq!(salutation(3), "Boa noite");
    }

    #[test]
    fn test_welcome_mentions_restaurant() {
        assert!(welcome().contains("Churrascaria Quitanda"));
    }

    #[test]
    fn test_reprompt_contains_question() {
        let text = reprompt(ASK_PARTY_SIZE);
        assert!(text.contains(ASK_PARTY_SIZE));
    }

    #[test]
    fn test_confirmation_renders_fields() {
        let reservation = Reservation {
            date: Some("sexta-feira".to_string()),
            time: Some("20h".to_string()),
            party_size: Some(4),
        };
        let text = confirmation(&reservation);
        assert!(text.contains("4 pessoas"));
        assert!(text.contains("sexta-feira"));
        assert!(text.contains("20h"));
    }
}
