use anyhow::{anyhow, Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::model::day_record::GrassData;
use crate::model::histogram::location_histogram;
use crate::render::draw::save;
use crate::render::grass::Renderer;
use crate::repository::RecordRepository;
use crate::service::dto::LocationSummary;

pub const LEGEND_FILE_NAME: &str = "legend.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub year_images: Vec<PathBuf>,
    pub legend: PathBuf,
    pub days: usize,
}

pub struct GrassUseCase<'a, R: RecordRepository> {
    repo: &'a R,
    renderer: &'a Renderer,
}

impl<'a, R: RecordRepository> GrassUseCase<'a, R> {
    pub fn new(repo: &'a R, renderer: &'a Renderer) -> Self {
        Self { repo, renderer }
    }

    /// Load everything, then write `<year>.svg` per year and the legend.
    pub fn render(&self, image_dir: &Path, only_year: Option<i32>) -> Result<RenderReport> {
        let data = self.repo.load()?;
        self.write_images(&data, image_dir, only_year)
    }

    pub fn write_images(
        &self,
        data: &GrassData,
        image_dir: &Path,
        only_year: Option<i32>,
    ) -> Result<RenderReport> {
        let years = select_years(data, only_year)?;
        fs::create_dir_all(image_dir)
            .with_context(|| format!("creating image directory {}", image_dir.display()))?;

        for location in self.unknown_locations(data) {
            warn!("no color for '{}', using fallback", location);
        }

        let mut year_images = Vec::new();
        for year in years {
            let path = image_dir.join(format!("{}.svg", year));
            save(&path, &self.renderer.year_document(data, year))?;
            info!("wrote {}", path.display());
            year_images.push(path);
        }

        let histo = location_histogram(data.days.values());
        let legend = image_dir.join(LEGEND_FILE_NAME);
        save(&legend, &self.renderer.legend_document(&histo))?;
        info!("wrote {} ({} locations)", legend.display(), histo.len());

        Ok(RenderReport {
            year_images,
            legend,
            days: data.len(),
        })
    }

    /// Ranked days per location, over one year or all of them.
    pub fn summarize(&self, only_year: Option<i32>) -> Result<Vec<LocationSummary>> {
        let data = self.repo.load()?;
        let years = select_years(&data, only_year)?;
        let histo = location_histogram(data.days.values().filter(|r| years.contains(&r.year)));
        Ok(LocationSummary::from_histogram(&histo, self.renderer.colors()))
    }

    fn unknown_locations(&self, data: &GrassData) -> BTreeSet<String> {
        data.days
            .values()
            .flat_map(|r| r.locations.iter())
            .filter(|l| !self.renderer.colors().is_known(l))
            .cloned()
            .collect()
    }
}

fn select_years(data: &GrassData, only_year: Option<i32>) -> Result<BTreeSet<i32>> {
    match only_year {
        Some(year) if data.years.contains(&year) => Ok(BTreeSet::from([year])),
        Some(year) => Err(anyhow!("no data file for year {}", year)),
        None => Ok(data.years.clone()),
    }
}
