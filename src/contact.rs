//! Contact form submission through the EmailJS browser SDK.
//!
//! The SDK is injected on first submit. Service, template and public key come
//! from hidden inputs in the form so the page can be configured without a
//! rebuild.

use crate::core::{ContactMessage, EmailServiceConfig, MSG_SENDING, MSG_SENT, MSG_SEND_FAILED};
use crate::dom;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const EMAILJS_SDK_URL: &str = "https://cdn.emailjs.com/dist/email.min.js";

fn field_value(root: &web::Element, selector: &str) -> String {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| Reflect::get(&el, &JsValue::from_str("value")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

fn show_alert(alert: &web::HtmlElement, text: &str) {
    alert.set_text_content(Some(text));
    alert.set_hidden(false);
}

fn emailjs_global() -> Option<JsValue> {
    let window = web::window()?;
    Reflect::get(&window, &JsValue::from_str("emailjs"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> anyhow::Result<JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("emailjs.{name} is not a function"))?;
    let args: js_sys::Array = args.iter().copied().collect();
    method.apply(target, &args).map_err(dom::js_err)
}

/// Inject the SDK script once and resolve with the `emailjs` global.
async fn ensure_emailjs(document: &web::Document) -> anyhow::Result<JsValue> {
    if let Some(sdk) = emailjs_global() {
        return Ok(sdk);
    }
    let script = document
        .create_element("script")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlScriptElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    script.set_src(EMAILJS_SDK_URL);
    let loaded = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no head"))?;
    head.append_child(&script).map_err(dom::js_err)?;
    JsFuture::from(loaded).await.map_err(dom::js_err)?;
    emailjs_global().ok_or_else(|| anyhow::anyhow!("emailjs missing after load"))
}

async fn send(
    document: &web::Document,
    service: &EmailServiceConfig,
    message: &ContactMessage,
) -> anyhow::Result<()> {
    let sdk = ensure_emailjs(document).await?;
    // init is idempotent; a failure here surfaces again from send
    _ = call_method(&sdk, "init", &[&JsValue::from_str(&service.public_key)]);

    let params = Object::new();
    for (key, value) in message.template_params() {
        Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value))
            .map_err(dom::js_err)?;
    }
    let params = JsValue::from(params);
    let pending = call_method(
        &sdk,
        "send",
        &[
            &JsValue::from_str(&service.service_id),
            &JsValue::from_str(&service.template_id),
            &params,
        ],
    )?;
    JsFuture::from(Promise::from(pending))
        .await
        .map_err(dom::js_err)?;
    Ok(())
}

pub fn init_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let Some(form) = document
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let alert = document
        .get_element_by_id("contact-alert")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| anyhow::anyhow!("missing #contact-alert"))?;

    let (doc, f, al) = (document.clone(), form.clone(), alert.clone());
    dom::add_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        al.set_hidden(true);

        let message = ContactMessage::from_fields(
            &field_value(&f, "[name=\"from_name\"]"),
            &field_value(&f, "[name=\"reply_to\"]"),
            &field_value(&f, "[name=\"subject\"]"),
            &field_value(&f, "[name=\"message\"]"),
        );
        let service = EmailServiceConfig::from_fields(
            &input_value(&doc, "emailjs_service_id"),
            &input_value(&doc, "emailjs_template_id"),
            &input_value(&doc, "emailjs_public_key"),
        );
        let (message, service) = match message.and_then(|m| service.map(|s| (m, s))) {
            Ok(v) => v,
            Err(e) => {
                show_alert(&al, &e.to_string());
                return;
            }
        };

        show_alert(&al, MSG_SENDING);
        let (doc, f, al) = (doc.clone(), f.clone(), al.clone());
        spawn_local(async move {
            match send(&doc, &service, &message).await {
                Ok(()) => {
                    show_alert(&al, MSG_SENT);
                    f.reset();
                    log::info!("[contact] message sent");
                }
                Err(e) => {
                    log::error!("[contact] send failed: {:?}", e);
                    show_alert(&al, MSG_SEND_FAILED);
                }
            }
        });
    });

    if let Some(reset) = document.get_element_by_id("contact-reset") {
        dom::add_listener(&reset, "click", move |_| {
            form.reset();
            alert.set_hidden(true);
        });
    }
    Ok(())
}
