//! Site table
//!
//! Maps logical site keys to the configuration references holding each site's
//! secret and redirect target. Built once at startup and shared read-only.

use crate::config::SiteConfig;
use std::collections::HashMap;

/// Built-in sites: (key, credential reference, target reference).
///
/// The reference names are what deployments store their secrets under, so
/// they must not be "corrected" (`KUAIHOU_HASH`, `ICOURESE_HASH`).
const BUILTIN_SITES: &[(&str, &str, &str)] = &[
    // Utilities
    ("baidu", "BAIDU_HASH", "BAIDU_URL"),
    ("google", "GOOGLE_HASH", "GOOGLE_URL"),
    ("github", "GITHUB_HASH", "GITHUB_URL"),
    ("codepen", "CODEPEN_HASH", "CODEPEN_URL"),
    // Video
    ("bilibili", "BILIBILI_HASH", "BILIBILI_URL"),
    ("youku", "YOUKU_HASH", "YOUKU_URL"),
    ("iqiyi", "IQIYI_HASH", "IQIYI_URL"),
    ("youtube", "YOUTUBE_HASH", "YOUTUBE_URL"),
    ("tencent", "TENCENT_HASH", "TENCENT_URL"),
    // Social
    ("weixin", "WEIXIN_HASH", "WEIXIN_URL"),
    ("weibo", "WEIBO_HASH", "WEIBO_URL"),
    ("douyin", "DOUYIN_HASH", "DOUYIN_URL"),
    ("kuaishou", "KUAIHOU_HASH", "KUAISHOU_URL"),
    // Music
    ("neteaseMusic", "NETEASE_MUSIC_HASH", "NETEASE_MUSIC_URL"),
    ("qqMusic", "QQ_MUSIC_HASH", "QQ_MUSIC_URL"),
    ("kugouMusic", "KUGOU_MUSIC_HASH", "KUGOU_MUSIC_URL"),
    ("kuwoMusic", "KUWO_MUSIC_HASH", "KUWO_MUSIC_URL"),
    ("xiamiMusic", "XIAMI_MUSIC_HASH", "XIAMI_MUSIC_URL"),
    ("spotify", "SPOTIFY_HASH", "SPOTIFY_URL"),
    // Mail
    ("neteaseMail", "NETEASE_MAIL_HASH", "NETEASE_MAIL_URL"),
    ("qqMail", "QQ_MAIL_HASH", "QQ_MAIL_URL"),
    ("gmail", "GMAIL_HASH", "GMAIL_URL"),
    ("outlook", "OUTLOOK_HASH", "OUTLOOK_URL"),
    ("sinaMail", "SINA_MAIL_HASH", "SINA_MAIL_URL"),
    ("sohuMail", "SOHU_MAIL_HASH", "SOHU_MAIL_URL"),
    // Learning
    ("icourse", "ICOURESE_HASH", "ICOURSE_URL"),
    ("coursera", "COURSERA_HASH", "COURSERA_URL"),
    ("neteaseClass", "NETEASE_CLASS_HASH", "NETEASE_CLASS_URL"),
    ("baijiajiangtan", "BAIJIA_HASH", "BAIJIA_URL"),
];

/// One gated site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEntry {
    pub key: String,
    pub credential_ref: String,
    pub target_ref: Option<String>,
}

impl SiteEntry {
    pub fn new(key: &str, credential_ref: &str, target_ref: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            credential_ref: credential_ref.to_string(),
            target_ref: target_ref.map(str::to_string),
        }
    }
}

impl From<&SiteConfig> for SiteEntry {
    fn from(site: &SiteConfig) -> Self {
        Self {
            key: site.key.clone(),
            credential_ref: site.credential_ref.clone(),
            target_ref: site.target_ref.clone().filter(|r| !r.is_empty()),
        }
    }
}

/// Immutable key -> entry mapping
#[derive(Debug, Clone, Default)]
pub struct SiteTable {
    entries: HashMap<String, SiteEntry>,
}

impl SiteTable {
    /// Table with only the built-in sites
    pub fn builtin() -> Self {
        let entries = BUILTIN_SITES
            .iter()
            .map(|&(key, cred, target)| (key.to_string(), SiteEntry::new(key, cred, Some(target))))
            .collect();
        Self { entries }
    }

    /// Build a table from arbitrary entries, rejecting duplicate keys.
    pub fn from_entries<I>(entries: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = SiteEntry>,
    {
        let mut table = Self::default();
        table.extend(entries)?;
        Ok(table)
    }

    /// Built-in sites plus the ones declared in configuration.
    pub fn with_configured(extra: &[SiteConfig]) -> Result<Self, config::ConfigError> {
        let mut table = Self::builtin();
        table.extend(extra.iter().map(SiteEntry::from))?;
        Ok(table)
    }

    fn extend<I>(&mut self, entries: I) -> Result<(), config::ConfigError>
    where
        I: IntoIterator<Item = SiteEntry>,
    {
        for entry in entries {
            if self.entries.contains_key(&entry.key) {
                return Err(config::ConfigError::Message(format!(
                    "site key already defined: {}",
                    entry.key
                )));
            }
            self.entries.insert(entry.key.clone(), entry);
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&SiteEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
