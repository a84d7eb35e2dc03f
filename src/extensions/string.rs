pub trait ToDateKey {
    /// Trims the input and drops `-` and `/` separators, so `2024-09-02`,
    /// `2024/09/02` and `20240902` all become `20240902`.
    fn to_date_key(&self) -> String;
}

impl ToDateKey for str {
    fn to_date_key(&self) -> String {
        self.trim().chars().filter(|c| *c != '-' && *c != '/').collect()
    }
}

impl ToDateKey for String {
    fn to_date_key(&self) -> String {
        self.as_str().to_date_key()
    }
}
