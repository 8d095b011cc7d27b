use wasm_bindgen::JsValue;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

fn notify_user(message: &str) {
    let Some(window) = window() else {
        log::warn!("No window to show form confirmation");
        return;
    };
    if let Some(warning) = alert_failure(window.alert_with_message(message)) {
        log::warn!("{warning}");
    }
}

fn alert_failure(result: Result<(), JsValue>) -> Option<String> {
    result
        .err()
        .map(|e| format!("Failed to show form confirmation: {:?}", e))
}

fn input_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(RegisterForm)]
pub fn register_form() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            gloo_console::log!(
                "Registration:",
                format!("{} {} <{}>", *first_name, *last_name, *email)
            );
            notify_user("Thank you for registering! We will send you updates about Visit Malaysia 2026.");
            first_name.set(String::new());
            last_name.set(String::new());
            email.set(String::new());
        })
    };

    html! {
        <form class="landing-form" {onsubmit}>
            <div class="form-row">
                <label>
                    {"First Name"}
                    <input type="text" required=true value={(*first_name).clone()} oninput={input_setter(&first_name)} />
                </label>
                <label>
                    {"Last Name"}
                    <input type="text" required=true value={(*last_name).clone()} oninput={input_setter(&last_name)} />
                </label>
            </div>
            <label>
                {"Email Address"}
                <input type="email" required=true value={(*email).clone()} oninput={input_setter(&email)} />
            </label>
            <button type="submit" class="form-submit">{"Register Now"}</button>
            <p class="form-note">{"We respect your privacy. Unsubscribe at any time."}</p>
        </form>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            gloo_console::log!(
                "Contact:",
                format!("{} {} <{}>: {}", *first_name, *last_name, *email, *message)
            );
            notify_user("Message sent successfully! We will get back to you soon.");
            first_name.set(String::new());
            last_name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        })
    };

    html! {
        <form class="landing-form" {onsubmit}>
            <div class="form-row">
                <label>
                    {"First Name"}
                    <input type="text" required=true value={(*first_name).clone()} oninput={input_setter(&first_name)} />
                </label>
                <label>
                    {"Last Name"}
                    <input type="text" required=true value={(*last_name).clone()} oninput={input_setter(&last_name)} />
                </label>
            </div>
            <label>
                {"Email Address"}
                <input type="email" required=true value={(*email).clone()} oninput={input_setter(&email)} />
            </label>
            <label>
                {"Your Message"}
                <textarea rows="5" required=true value={(*message).clone()} oninput={on_message}></textarea>
            </label>
            <button type="submit" class="form-submit">{"Send Message"}</button>
        </form>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn blocked_alerts_are_reported() {
        let warning = alert_failure(Err(JsValue::from_str("dialogs blocked"))).unwrap();
        assert!(warning.contains("dialogs blocked"));
        assert_eq!(alert_failure(Ok(())), None);
    }
}
