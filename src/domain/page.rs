// Page view models: listings plus charts for one archive, package or version
use super::chart::Chart;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

impl LinkItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountItem {
    pub label: String,
    pub count: u64,
}

impl CountItem {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

impl fmt::Display for CountItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.count)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageEntry {
    pub link: LinkItem,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PpaPage {
    pub title: String,
    pub packages: Vec<PackageEntry>,
    pub total_downloads: u64,
    pub daily_chart: Chart,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackagePage {
    pub ppa_owner: String,
    pub ppa_name: String,
    pub name: String,
    pub versions: Vec<LinkItem>,
    pub distros: Vec<CountItem>,
    pub total_downloads: u64,
    pub daily_chart: Chart,
    pub distro_chart: Chart,
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionPage {
    pub ppa_owner: String,
    pub ppa_name: String,
    pub package: LinkItem,
    pub version: String,
    pub archs: Vec<CountItem>,
    pub total_downloads: u64,
    pub daily_chart: Chart,
    pub date_created: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_item_display() {
        assert_eq!(CountItem::new("focal", 40).to_string(), "focal: 40");
        assert_eq!(CountItem::new("focal_amd64", 0).to_string(), "focal_amd64: 0");
    }
}
