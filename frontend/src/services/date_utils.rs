use chrono::NaiveDate;
use js_sys::Date;

/// Today's local calendar date from the browser clock
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Today in `YYYY-MM-DD`, for `<input type="date">` bounds
pub fn today_string() -> String {
    shared::dates::to_input_value(today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_matches_browser_clock() {
        let now = Date::new_0();
        let today = today();
        assert_eq!(today_string().len(), 10);
        assert_eq!(chrono::Datelike::year(&today), now.get_full_year() as i32);
    }
}
