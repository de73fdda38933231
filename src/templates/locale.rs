//! Localized strings for the booking confirmation email.
//!
//! Supported languages: English (fallback) and Polish. A new language is one
//! more `Language` variant plus its arm in `Language::strings`.

use crate::models::booking::BookingRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Polish,
}

/// Every label the confirmation email needs, already filled with booking data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalizedStrings {
    pub subject: String,
    pub title: String,
    pub greeting: String,
    pub received: String,
    pub details: String,
    pub property: String,
    pub dates: String,
    pub guests: String,
    pub payment_required: String,
    pub pay_via: String,
    pub amount: String,
    pub number: String,
    pub footer: String,
    pub plain_text: String,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Polish];

    /// Exact, case-sensitive lookup. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .unwrap_or(Language::English)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Polish => "pl",
        }
    }

    pub fn strings(&self, booking: &BookingRequest) -> LocalizedStrings {
        let title = &booking.apartment_title;
        let first = &booking.first_name;
        let last = &booking.last_name;
        let price = &booking.price_per_night;
        let method = booking.payment_method.to_uppercase();

        match self {
            Language::English => LocalizedStrings {
                subject: format!("Booking Confirmation: {title}"),
                title: "Booking Confirmed!".to_string(),
                greeting: format!("Dear {first} {last},"),
                received: "Thank you for choosing UrbanStay. Your reservation request has been received."
                    .to_string(),
                details: "Reservation Details".to_string(),
                property: "Property:".to_string(),
                dates: "Dates:".to_string(),
                guests: "Guests:".to_string(),
                payment_required: "Payment Required".to_string(),
                pay_via: format!("Please complete your payment via {method}."),
                amount: "Amount:".to_string(),
                number: "Number:".to_string(),
                footer: "If you have any questions, reply to this email.".to_string(),
                plain_text: format!(
                    "Your booking for {title} is confirmed. Please pay ${price}."
                ),
            },
            Language::Polish => LocalizedStrings {
                subject: format!("Potwierdzenie Rezerwacji: {title}"),
                title: "Rezerwacja Potwierdzona!".to_string(),
                greeting: format!("Szanowny/a {first} {last},"),
                received: "Dzi\u{0119}kujemy za wyb\u{00f3}r UrbanStay. Twoja pro\u{015b}ba o rezerwacj\u{0119} zosta\u{0142}a otrzymana."
                    .to_string(),
                details: "Szczeg\u{00f3}\u{0142}y Rezerwacji".to_string(),
                property: "Obiekt:".to_string(),
                dates: "Termin:".to_string(),
                guests: "Go\u{015b}cie:".to_string(),
                payment_required: "Wymagana P\u{0142}atno\u{015b}\u{0107}".to_string(),
                pay_via: format!("Prosimy o dokonanie p\u{0142}atno\u{015b}ci przez {method}."),
                amount: "Kwota:".to_string(),
                number: "Numer:".to_string(),
                footer: "Je\u{015b}li masz pytania, odpowiedz na ten email.".to_string(),
                plain_text: format!(
                    "Twoja rezerwacja dla {title} zosta\u{0142}a potwierdzona. Prosimy o zap\u{0142}at\u{0119} ${price}."
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(payment_method: &str) -> BookingRequest {
        BookingRequest {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@example.com".to_string(),
            check_in: "2024-05-01".to_string(),
            check_out: "2024-05-05".to_string(),
            guests: 2u32.into(),
            apartment_title: "Loft 3".to_string(),
            price_per_night: 120u32.into(),
            payment_method: payment_method.to_string(),
            language: "en".to_string(),
        }
    }

    #[test]
    fn every_supported_code_resolves_to_itself() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), language);
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        for code in ["fr", "", "EN", "pl-PL", "en-US", "Polish"] {
            assert_eq!(Language::from_code(code), Language::English, "code {code:?}");
        }
    }

    #[test]
    fn subjects_carry_the_apartment_title() {
        let booking = booking("card");
        assert_eq!(
            Language::English.strings(&booking).subject,
            "Booking Confirmation: Loft 3"
        );
        assert_eq!(
            Language::Polish.strings(&booking).subject,
            "Potwierdzenie Rezerwacji: Loft 3"
        );
    }

    #[test]
    fn payment_method_is_uppercased() {
        for method in ["blik", "Blik", "BLIK", "bLiK"] {
            let strings = Language::Polish.strings(&booking(method));
            assert!(strings.pay_via.contains("BLIK"), "{}", strings.pay_via);
        }
        let strings = Language::English.strings(&booking("blik"));
        assert_eq!(strings.pay_via, "Please complete your payment via BLIK.");
    }

    #[test]
    fn plain_text_mentions_the_price() {
        let strings = Language::English.strings(&booking("card"));
        assert_eq!(
            strings.plain_text,
            "Your booking for Loft 3 is confirmed. Please pay $120."
        );
    }

    #[test]
    fn greeting_uses_full_name() {
        let strings = Language::Polish.strings(&booking("card"));
        assert_eq!(strings.greeting, "Szanowny/a Ann Lee,");
    }
}
