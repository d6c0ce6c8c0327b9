//! Lightweight user-agent string parsing for opinionated tag enrichment.
//!
//! Not a full UA database: covers the major browser and OS families and
//! falls back to `"Other"`. Order matters — Chromium-derived browsers embed
//! `Chrome/…` in their strings, so Edge and Opera are checked first.

use std::sync::LazyLock;

use higuard_core::Tag;
use regex::Regex;

static EDGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Edg(?:e|A|iOS)?/([\d.]+)").unwrap());
static OPERA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"OPR/([\d.]+)").unwrap());
static FIREFOX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Firefox/([\d.]+)").unwrap());
static CHROME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Chrome/([\d.]+)").unwrap());
static SAFARI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Version/([\d.]+).*Safari").unwrap());

static WINDOWS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Windows NT ([\d.]+)").unwrap());
static MACOS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Mac OS X ([\d_.]+)").unwrap());
static ANDROID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Android ([\d.]+)").unwrap());
static IOS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:iPhone OS|CPU OS) ([\d_]+)").unwrap());

/// Structured breakdown of a raw user-agent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentInfo {
    pub browser_name: String,
    pub browser_version: String,
    pub operating_system: String,
    pub os_version: String,
    /// Device family, when it is something more specific than "a computer".
    pub device: Option<String>,
}

/// Parse a raw user-agent string into its browser/OS/device parts.
pub fn parse_user_agent(user_agent: &str) -> UserAgentInfo {
    let (browser_name, browser_version) = parse_browser(user_agent);
    let (operating_system, os_version) = parse_os(user_agent);
    UserAgentInfo {
        browser_name,
        browser_version,
        operating_system,
        os_version,
        device: parse_device(user_agent),
    }
}

/// Derived metadata tags for one parsed user agent.
///
/// Key names mirror the dashboard's user-agent fields.
pub fn opinionated_tags(info: &UserAgentInfo) -> Vec<Tag> {
    let mut tags = vec![
        Tag::new("browserName", &info.browser_name),
        Tag::new("browserVersion", &info.browser_version),
        Tag::new("operatingSystem", &info.operating_system),
        Tag::new("osVersion", &info.os_version),
    ];
    if let Some(device) = &info.device {
        tags.push(Tag::new("device", device));
    }
    tags
}

fn parse_browser(user_agent: &str) -> (String, String) {
    let families: [(&str, &LazyLock<Regex>); 5] = [
        ("Edge", &EDGE_RE),
        ("Opera", &OPERA_RE),
        ("Firefox", &FIREFOX_RE),
        ("Chrome", &CHROME_RE),
        ("Safari", &SAFARI_RE),
    ];
    for (name, regex) in families {
        if let Some(captures) = regex.captures(user_agent) {
            let version = captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            return (name.to_string(), version);
        }
    }
    ("Other".to_string(), String::new())
}

fn parse_os(user_agent: &str) -> (String, String) {
    if let Some(captures) = WINDOWS_RE.captures(user_agent) {
        return ("Windows".to_string(), captures[1].to_string());
    }
    if let Some(captures) = IOS_RE.captures(user_agent) {
        return ("iOS".to_string(), captures[1].replace('_', "."));
    }
    if let Some(captures) = ANDROID_RE.captures(user_agent) {
        return ("Android".to_string(), captures[1].to_string());
    }
    if let Some(captures) = MACOS_RE.captures(user_agent) {
        return ("macOS".to_string(), captures[1].replace('_', "."));
    }
    if user_agent.contains("Linux") {
        return ("Linux".to_string(), String::new());
    }
    ("Other".to_string(), String::new())
}

fn parse_device(user_agent: &str) -> Option<String> {
    if user_agent.contains("iPhone") {
        Some("iPhone".to_string())
    } else if user_agent.contains("iPad") {
        Some("iPad".to_string())
    } else if user_agent.contains("Android") {
        Some("Android".to_string())
    } else {
        None
    }
}
