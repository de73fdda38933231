use crate::helpers::html::html_escape;
use crate::models::booking::BookingRequest;
use crate::templates::locale::LocalizedStrings;

/// Phone number guests call to arrange payment.
pub const CONTACT_NUMBER: &str = "+48 123 456 789";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Render the confirmation email. Pure: same inputs, same bytes.
pub fn render_booking_email(strings: &LocalizedStrings, booking: &BookingRequest) -> RenderedEmail {
    let html = format!(
        r#"
      <div style="font-family: Arial, sans-serif; padding: 20px; background-color: #ffffff; color: #333;">
        <div style="background-color: #4f46e5; padding: 20px; text-align: center; border-radius: 8px 8px 0 0;">
          <h1 style="color: white; margin: 0; font-size: 24px;">{title}</h1>
        </div>

        <div style="border: 1px solid #e0e0e0; border-top: none; border-radius: 0 0 8px 8px; padding: 20px;">
          <p><strong>{greeting}</strong></p>
          <p>{received}</p>

          <div style="background-color: #f9fafb; padding: 15px; border-radius: 6px; margin: 20px 0;">
            <h3 style="margin-top: 0; color: #111827; font-size: 18px; margin-bottom: 10px;">{details}</h3>
            <p style="margin: 5px 0;"><strong>{property_label}</strong> {apartment_title}</p>
            <p style="margin: 5px 0;"><strong>{dates_label}</strong> {check_in} - {check_out}</p>
            <p style="margin: 5px 0;"><strong>{guests_label}</strong> {guests}</p>
          </div>

          <div style="border: 2px dashed #4f46e5; padding: 15px; border-radius: 6px; background-color: #eef2ff;">
            <h3 style="margin-top: 0; color: #4f46e5; font-size: 18px; margin-bottom: 10px;">{payment_required}</h3>
            <p style="margin: 0 0 10px 0;">{pay_via}</p>
            <p style="font-size: 18px; font-weight: bold; margin: 5px 0;">{amount_label} ${price}</p>
            <p style="font-size: 18px; font-weight: bold; margin: 5px 0;">{number_label} {contact_number}</p>
          </div>

          <p style="margin-top: 20px; font-size: 12px; color: #6b7280;">{footer}</p>
        </div>
      </div>
    "#,
        title = html_escape(&strings.title),
        greeting = html_escape(&strings.greeting),
        received = html_escape(&strings.received),
        details = html_escape(&strings.details),
        property_label = html_escape(&strings.property),
        apartment_title = html_escape(&booking.apartment_title),
        dates_label = html_escape(&strings.dates),
        check_in = html_escape(&booking.check_in),
        check_out = html_escape(&booking.check_out),
        guests_label = html_escape(&strings.guests),
        guests = html_escape(&booking.guests.to_string()),
        payment_required = html_escape(&strings.payment_required),
        pay_via = html_escape(&strings.pay_via),
        amount_label = html_escape(&strings.amount),
        price = html_escape(&booking.price_per_night.to_string()),
        number_label = html_escape(&strings.number),
        contact_number = CONTACT_NUMBER,
        footer = html_escape(&strings.footer),
    );

    RenderedEmail {
        subject: strings.subject.clone(),
        html,
        text: strings.plain_text.clone(),
    }
}
