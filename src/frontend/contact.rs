use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use super::notify::{show_notification, Notice};
use crate::form::{validate, Submission, SUCCESS_MESSAGE};

// Submission is simulated: validation and a notice, no network call.
#[function_component(ContactForm)]
pub(super) fn contact_form() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(name) = name_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(email) = email_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(message) = message_ref.cast::<HtmlTextAreaElement>() else {
                return;
            };

            let submission = Submission {
                name: name.value(),
                email: email.value(),
                message: message.value(),
            };

            match validate(&submission) {
                Ok(()) => {
                    show_notification(SUCCESS_MESSAGE, Notice::Success);
                    name.set_value("");
                    email.set_value("");
                    message.set_value("");
                }
                Err(rejection) => show_notification(rejection.message(), Notice::Error),
            }
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-group">
                <label for="contact-name">{"Name"}</label>
                <input ref={name_ref} id="contact-name" name="name" type="text" placeholder="Your name" />
            </div>
            <div class="form-group">
                <label for="contact-email">{"Email"}</label>
                <input ref={email_ref} id="contact-email" name="email" type="text" placeholder="you@example.com" />
            </div>
            <div class="form-group">
                <label for="contact-message">{"Message"}</label>
                <textarea ref={message_ref} id="contact-message" name="message" rows="5" placeholder="What can I build for you?"></textarea>
            </div>
            <button class="submit-button" type="submit">{"Send Message"}</button>
        </form>
    }
}
