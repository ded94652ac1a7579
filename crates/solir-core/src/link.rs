use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    TwitterX = 1,
    Telegram = 2,
    Facebook = 3,
    Github = 4,
    Gitlab = 5,
    Reddit = 6,
    Medium = 7,
    Linkedin = 8,
    Discord = 9,
    Bitcointalk = 10,
    Youtube = 11,
    Clubhouse = 12,
}

const PLATFORM_HOSTS: &[(&str, Platform)] = &[
    ("twitter.com", Platform::TwitterX),
    ("x.com", Platform::TwitterX),
    ("t.me", Platform::Telegram),
    ("telegram.me", Platform::Telegram),
    ("telegram.org", Platform::Telegram),
    ("facebook.com", Platform::Facebook),
    ("fb.com", Platform::Facebook),
    ("github.com", Platform::Github),
    ("gitlab.com", Platform::Gitlab),
    ("reddit.com", Platform::Reddit),
    ("medium.com", Platform::Medium),
    ("linkedin.com", Platform::Linkedin),
    ("discord.gg", Platform::Discord),
    ("discord.com", Platform::Discord),
    ("bitcointalk.org", Platform::Bitcointalk),
    ("youtube.com", Platform::Youtube),
    ("youtu.be", Platform::Youtube),
    ("clubhouse.com", Platform::Clubhouse),
    ("joinclubhouse.com", Platform::Clubhouse),
];

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::TwitterX => "twitter_x",
            Platform::Telegram => "telegram",
            Platform::Facebook => "facebook",
            Platform::Github => "github",
            Platform::Gitlab => "gitlab",
            Platform::Reddit => "reddit",
            Platform::Medium => "medium",
            Platform::Linkedin => "linkedin",
            Platform::Discord => "discord",
            Platform::Bitcointalk => "bitcointalk",
            Platform::Youtube => "youtube",
            Platform::Clubhouse => "clubhouse",
        }
    }

    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Platform for a lowercased host; subdomains of a known host match too.
    pub fn from_host(host: &str) -> Option<Platform> {
        let host = host.strip_prefix("www.").unwrap_or(host);
        PLATFORM_HOSTS.iter().find_map(|(known, platform)| {
            let subdomain = host
                .strip_suffix(known)
                .is_some_and(|prefix| prefix.ends_with('.'));
            (host == *known || subdomain).then_some(*platform)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub social: bool,
    pub platform: Option<Platform>,
}

impl Link {
    pub fn platform_name(&self) -> &'static str {
        self.platform.map(Platform::as_str).unwrap_or("")
    }
}
