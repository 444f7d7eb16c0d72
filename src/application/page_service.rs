// Page service - Use cases for the archive, package and version pages
use crate::application::shaper::TimeSeriesShaper;
use crate::application::stats_repository::{SourceError, StatsRepository};
use crate::domain::calendar::DateError;
use crate::domain::chart::Chart;
use crate::domain::page::{CountItem, LinkItem, PackageEntry, PackagePage, PpaPage, VersionPage};
use std::sync::Arc;
use thiserror::Error;

pub const DAILY_CHART_TITLE: &str = "Daily Download Count";
pub const DISTRO_CHART_TITLE: &str = "Daily Download Count by Ubuntu Distribution";

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Date(#[from] DateError),
}

#[derive(Clone)]
pub struct PageService {
    repository: Arc<dyn StatsRepository>,
    shaper: TimeSeriesShaper,
}

impl PageService {
    pub fn new(repository: Arc<dyn StatsRepository>, shaper: TimeSeriesShaper) -> Self {
        Self { repository, shaper }
    }

    pub async fn ppa_page(&self) -> Result<PpaPage, PageError> {
        let index = self.repository.fetch_ppa_index().await?;

        let packages = index
            .packages
            .iter()
            .map(|p| PackageEntry {
                link: LinkItem::new(p.name.clone(), package_href(&p.name)),
                count: p.count,
            })
            .collect();

        let daily_chart = Chart::single(DAILY_CHART_TITLE, self.shaper.shape_single(&index.ddts)?);

        Ok(PpaPage {
            title: format!("{}/{}", index.ppa_owner, index.ppa_name),
            total_downloads: index.total_downloads(),
            packages,
            daily_chart,
        })
    }

    pub async fn package_page(&self, package: &str) -> Result<PackagePage, PageError> {
        let stats = self.repository.fetch_package(package).await?;

        let versions = stats
            .versions
            .iter()
            .map(|v| LinkItem::new(v.clone(), version_href(&stats.name, v)))
            .collect();
        let distros = stats
            .distros
            .iter()
            .map(|d| CountItem::new(d.name.clone(), d.count))
            .collect();

        let daily_chart = Chart::single(DAILY_CHART_TITLE, self.shaper.shape_single(&stats.ddts)?);
        let distro_chart = Chart::grouped(
            DISTRO_CHART_TITLE,
            self.shaper.shape_grouped(&stats.distro_series())?,
        );

        if !daily_chart.is_drawable() {
            tracing::debug!("No daily downloads recorded for {}", stats.name);
        }
        tracing::debug!(
            "Built page for {} with {} versions, {} distros",
            stats.name,
            stats.versions.len(),
            stats.distros.len()
        );

        Ok(PackagePage {
            total_downloads: stats.total_downloads(),
            ppa_owner: stats.ppa_owner,
            ppa_name: stats.ppa_name,
            name: stats.name,
            versions,
            distros,
            daily_chart,
            distro_chart,
        })
    }

    pub async fn version_page(&self, package: &str, version: &str) -> Result<VersionPage, PageError> {
        let stats = self.repository.fetch_version(package, version).await?;

        let archs = stats
            .arch_counts()
            .into_iter()
            .map(|(label, count)| CountItem::new(label, count))
            .collect();

        let daily_chart = Chart::single(DAILY_CHART_TITLE, self.shaper.shape_single(&stats.ddts)?);

        Ok(VersionPage {
            package: LinkItem::new(stats.pkg_name.clone(), package_href(&stats.pkg_name)),
            total_downloads: stats.total_downloads(),
            ppa_owner: stats.ppa_owner,
            ppa_name: stats.ppa_name,
            version: stats.name,
            archs,
            daily_chart,
            date_created: stats.date_created,
        })
    }
}

fn package_href(package: &str) -> String {
    format!("/packages/{}", urlencoding::encode(package))
}

fn version_href(package: &str, version: &str) -> String {
    format!(
        "{}/versions/{}",
        package_href(package),
        urlencoding::encode(version)
    )
}
