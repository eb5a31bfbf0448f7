use crate::contact::TemplateParams;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

/// A rejected send. `message` is whatever text the transport offered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliveryError {
    pub message: Option<String>,
}

impl DeliveryError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }
}

/// Something that can hand a filled-in template to an email service.
#[allow(async_fn_in_trait)]
pub trait EmailDelivery {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<(), DeliveryError>;
}

/// Binding to the EmailJS browser SDK loaded from the CDN script tag.
pub struct EmailJs {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    public_key: String,
    #[cfg(target_arch = "wasm32")]
    sdk: JsValue,
    #[cfg(target_arch = "wasm32")]
    send_fn: js_sys::Function,
}

impl EmailJs {
    /// Returns `None` until `window.emailjs.send` exists.
    #[cfg(target_arch = "wasm32")]
    pub fn detect(public_key: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let sdk = js_sys::Reflect::get(&window, &JsValue::from_str("emailjs")).ok()?;
        if sdk.is_undefined() || sdk.is_null() {
            return None;
        }
        let send_fn = js_sys::Reflect::get(&sdk, &JsValue::from_str("send"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        Some(Self {
            public_key: public_key.to_string(),
            sdk,
            send_fn,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect(public_key: &str) -> Option<Self> {
        let _ = public_key;
        None
    }
}

impl EmailDelivery for EmailJs {
    #[cfg(target_arch = "wasm32")]
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<(), DeliveryError> {
        let encoded = serde_json::to_string(params)
            .map_err(|err| DeliveryError::new(format!("encode failed: {err}")))?;
        let params = js_sys::JSON::parse(&encoded).map_err(|err| describe_rejection(&err))?;

        let options = js_sys::Object::new();
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("publicKey"),
            &JsValue::from_str(&self.public_key),
        )
        .map_err(|err| describe_rejection(&err))?;

        let args = js_sys::Array::of4(
            &JsValue::from_str(service_id),
            &JsValue::from_str(template_id),
            &params,
            &options,
        );
        let promise = self
            .send_fn
            .apply(&self.sdk, &args)
            .map_err(|err| describe_rejection(&err))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| DeliveryError::new("emailjs.send did not return a promise"))?;

        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| describe_rejection(&err))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<(), DeliveryError> {
        let _ = (service_id, template_id, params);
        Err(DeliveryError::new("EmailJS is only available in the browser"))
    }
}

#[cfg(target_arch = "wasm32")]
fn describe_rejection(error: &JsValue) -> DeliveryError {
    ["text", "message"]
        .iter()
        .filter_map(|key| js_sys::Reflect::get(error, &JsValue::from_str(key)).ok())
        .filter_map(|value| value.as_string())
        .find(|text| !text.is_empty())
        .map(DeliveryError::new)
        .unwrap_or_else(DeliveryError::unknown)
}
