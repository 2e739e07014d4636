use iced::Length;
use signup_ui::{
    component::{button, modal, text},
    widget::*,
};

use crate::app::Message;

pub const TERMS_OF_USE: &str = "\
Terms of use are a set of guidelines and rules that govern the use of a service, product or \
platform. They protect both the user and the company by establishing rights and obligations. \
Here are some of the elements commonly found in terms of use:

1. Acceptance of the terms: by using the service, the user agrees to the terms set out here.
2. Definitions: technical or specific words used in the terms are explained so the user \
understands them clearly.
3. Permitted use: what counts as acceptable use of the service, including any restriction.
4. Account creation: how to create an account, including age requirements and identity checks.
5. Privacy: a reference to the privacy policy, explaining how user data is collected, used and \
protected.
6. Intellectual property: copyright and trademarks, and the protection of the content.
7. User responsibilities: the user's obligations, such as giving accurate information and not \
infringing the rights of others.
8. Limitation of liability: the limits of the company's liability for damages resulting from \
the use of the service.
9. Changes to the terms: the terms may change and the user should review them periodically.
10. Termination: the conditions under which the company may close the user's account or \
restrict access to the service.
11. Governing law: which jurisdiction applies to any dispute.
12. Contact: how to reach the company with questions about the terms.
";

pub fn terms_modal(terms: &str) -> Element<'_, Message> {
    modal::card(
        Column::new()
            .push(text::h3("Terms of Use"))
            .push(Scrollable::new(text::p2_regular(terms)).height(Length::Fixed(400.0)))
            .push(
                button::secondary("Close")
                    .on_press(Message::CloseTerms)
                    .width(Length::Fill),
            )
            .spacing(20),
    )
    .into()
}
