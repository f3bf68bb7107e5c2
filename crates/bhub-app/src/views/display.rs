//! Display formatting helpers shared by frontends.

/// "150 members", with the singular form for exactly one.
#[must_use]
pub fn member_count_label(count: u32) -> String {
    if count == 1 {
        "1 member".to_string()
    } else {
        format!("{count} members")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_member_counts() {
        assert_eq!(member_count_label(0), "0 members");
        assert_eq!(member_count_label(1), "1 member");
        assert_eq!(member_count_label(150), "150 members");
    }
}
