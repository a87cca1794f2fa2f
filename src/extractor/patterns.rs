// file: src/extractor/patterns.rs
// description: compiled regex patterns for asset filename classification
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // <stem>[~_]<variant>.<ext>, e.g. PIA22228~orig.jpg or a_thumb.jpg
    pub static ref ASSET_FILENAME: Regex = Regex::new(
        r"^(?P<stem>.+?)(?:[~_](?P<variant>[A-Za-z]+))?\.(?P<ext>[A-Za-z0-9]+)$"
    ).expect("ASSET_FILENAME regex is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_filename_captures() {
        let caps = ASSET_FILENAME.captures("PIA22228~orig.jpg").unwrap();
        assert_eq!(&caps["stem"], "PIA22228");
        assert_eq!(&caps["variant"], "orig");
        assert_eq!(&caps["ext"], "jpg");

        let caps = ASSET_FILENAME.captures("metadata.json").unwrap();
        assert_eq!(&caps["stem"], "metadata");
        assert!(caps.name("variant").is_none());
        assert_eq!(&caps["ext"], "json");

        let caps = ASSET_FILENAME.captures("NHQ_2018_0426_Mars~preview.mp4").unwrap();
        assert_eq!(&caps["stem"], "NHQ_2018_0426_Mars");
        assert_eq!(&caps["variant"], "preview");
    }

    #[test]
    fn test_asset_filename_requires_extension() {
        assert!(ASSET_FILENAME.captures("collection").is_none());
        assert!(ASSET_FILENAME.captures("").is_none());
    }
}
