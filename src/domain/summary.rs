// Pre-computed download summaries, as published next to the archive pages
use super::downloads::{CountRecord, NamedSeries};
use serde::Deserialize;

/// `index.json`: the archive as a whole.
#[derive(Debug, Clone, Deserialize)]
pub struct PpaIndex {
    pub ppa_owner: String,
    pub ppa_name: String,
    pub packages: Vec<PackageCount>,
    pub ddts: Vec<CountRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageCount {
    pub name: String,
    pub count: u64,
}

impl PpaIndex {
    pub fn total_downloads(&self) -> u64 {
        self.packages.iter().map(|p| p.count).fold(0, u64::saturating_add)
    }
}

/// `<package>.json`: one source package across all of its versions.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageStats {
    pub ppa_owner: String,
    pub ppa_name: String,
    pub name: String,
    pub versions: Vec<String>,
    pub distros: Vec<DistroStats>,
    pub ddts: Vec<CountRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistroStats {
    pub name: String,
    pub count: u64,
    pub ddts: Vec<CountRecord>,
}

impl PackageStats {
    pub fn total_downloads(&self) -> u64 {
        self.distros.iter().map(|d| d.count).fold(0, u64::saturating_add)
    }

    /// Per-distribution daily counts, in the order the distributions were listed.
    pub fn distro_series(&self) -> Vec<NamedSeries> {
        self.distros
            .iter()
            .map(|d| NamedSeries::new(d.name.clone(), d.ddts.clone()))
            .collect()
    }
}

/// `<package>_<version>.json`: a single published version.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionStats {
    pub ppa_owner: String,
    pub ppa_name: String,
    pub pkg_name: String,
    pub name: String,
    pub distros: Vec<VersionDistro>,
    pub ddts: Vec<CountRecord>,
    pub date_created: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionDistro {
    pub name: String,
    pub archs: Vec<ArchCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchCount {
    pub name: String,
    pub count: u64,
}

impl VersionStats {
    /// `(distro_arch, count)` pairs, distro order first, then arch order.
    pub fn arch_counts(&self) -> Vec<(String, u64)> {
        self.distros
            .iter()
            .flat_map(|distro| {
                distro
                    .archs
                    .iter()
                    .map(move |arch| (format!("{}_{}", distro.name, arch.name), arch.count))
            })
            .collect()
    }

    pub fn total_downloads(&self) -> u64 {
        self.distros
            .iter()
            .flat_map(|d| d.archs.iter())
            .map(|a| a.count)
            .fold(0, u64::saturating_add)
    }
}
