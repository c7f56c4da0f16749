use crate::date_format::DashConvention;
use crate::file_info::FileDateInfo;
use chrono::NaiveDate;

/// An optional inclusive date window. An unset side is unbounded.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct DateWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether the file's range intersects the window. With an unbounded
    /// window every file passes; otherwise files without valid dates fail.
    pub fn overlaps(&self, file: &FileDateInfo, convention: DashConvention) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some((start, end)) = file.date_span(convention) else {
            return false;
        };
        self.from.map_or(true, |from| end >= from) && self.to.map_or(true, |to| start <= to)
    }

    pub fn apply(&self, files: Vec<FileDateInfo>, convention: DashConvention) -> Vec<FileDateInfo> {
        files
            .into_iter()
            .filter(|file| self.overlaps(file, convention))
            .collect()
    }
}
