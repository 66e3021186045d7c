//! Demonstration records written the first time no vault blob exists.

use chrono::NaiveDate;

use super::record::CredentialRecord;
use super::strength::classify;

const DEMO: [(&str, &str, &str, &str, &str, (i32, u32, u32)); 5] = [
    ("1", "Gmail", "user@gmail.com", "P@ssw0rd123", "gmail.com", (2023, 10, 15)),
    ("2", "Facebook", "user.name", "FB_secure789!", "facebook.com", (2023, 11, 22)),
    ("3", "Amazon", "amazon_user", "shop123", "amazon.com", (2023, 9, 5)),
    ("4", "Twitter", "twitter_handle", "Tweet!2023Secure", "twitter.com", (2023, 12, 1)),
    ("5", "Netflix", "netflix_user", "NetflixAndChill2023!", "netflix.com", (2023, 11, 10)),
];

/// The fixed seed collection, in insertion order.
pub fn demo_records() -> Vec<CredentialRecord> {
    DEMO.iter()
        .filter_map(|&(id, title, username, password, url, (y, m, d))| {
            Some(CredentialRecord {
                id: id.to_string(),
                title: title.to_string(),
                username: username.to_string(),
                password: password.to_string(),
                url: url.to_string(),
                strength: classify(password),
                last_updated: NaiveDate::from_ymd_opt(y, m, d)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::record::Strength;

    #[test]
    fn five_records_in_order() {
        let seed = demo_records();
        let titles: Vec<&str> = seed.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Gmail", "Facebook", "Amazon", "Twitter", "Netflix"]);
    }

    #[test]
    fn only_amazon_is_weak() {
        let weak: Vec<String> = demo_records()
            .into_iter()
            .filter(|r| r.strength == Strength::Weak)
            .map(|r| r.title)
            .collect();
        assert_eq!(weak, ["Amazon"]);
    }
}
