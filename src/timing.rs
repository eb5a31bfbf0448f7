use std::future::Future;

use dioxus::core::Task;
use dioxus::prelude::*;

/// Owns a long-running animation task. Stopping it cancels the task at its
/// next await point.
#[derive(Clone, Copy)]
pub struct AnimationHandle {
    task: Task,
}

impl AnimationHandle {
    pub fn stop(&self) {
        self.task.cancel();
    }
}

/// Spawns `make()` once for the calling component and stops it when the
/// component is dropped.
pub fn use_animation<F, Fut>(make: F) -> AnimationHandle
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    let handle = use_hook(|| AnimationHandle {
        task: spawn(make()),
    });
    use_drop(move || handle.stop());
    handle
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// Desktop and mobile renderers run on a tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        match web_sys::window() {
            Some(window) => {
                if window.request_animation_frame(&resolve).is_err() {
                    let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
                }
            }
            None => {
                let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
            }
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

pub const HOST_FRAME_MS: u32 = 16;

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    sleep_ms(HOST_FRAME_MS).await;
}

pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Uniform sample in `[0, 1)`.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn host_sleep_completes() {
        let finished = tokio::time::timeout(Duration::from_millis(500), sleep_ms(10)).await;
        assert!(finished.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn host_frame_is_about_sixteen_ms() {
        let start = tokio::time::Instant::now();
        next_frame().await;
        assert_eq!(start.elapsed(), Duration::from_millis(u64::from(HOST_FRAME_MS)));
    }
}
