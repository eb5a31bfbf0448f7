#[cfg(target_arch = "wasm32")]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> u32 {
    2025
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_year_is_plausible() {
        assert!(current_year() >= 2025);
    }
}
