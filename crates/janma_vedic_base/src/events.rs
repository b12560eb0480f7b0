//! Life-event scoring through Vimshottari dasha and divisional charts.
//!
//! Each event category pairs the running mahadasha at the event date with
//! the lord of one house in the relevant varga:
//! - Marriage: D9, 7th sign from the navamsha lagna.
//! - Children: D7, 5th sign from the saptamsha lagna.
//! - Career: D10, the dashamsha lagna sign itself.
//!
//! Event dates are taken at 00:00 UT.

use chrono::NaiveDate;

use crate::amsha::{D7, D9, D10, divisional_chart};
use crate::dasha::running_period_at_date;
use crate::error::VedicError;
use crate::graha::{Graha, GrahaLongitudes, sign_lord};
use crate::rashi::nth_sign_from;
use crate::traits::mean_of_evaluated;
use crate::util::sign_of;

const MARRIAGE_DASHAS: [Graha; 3] = [Graha::Shukra, Graha::Guru, Graha::Chandra];
const MARRIAGE_D9_LORDS: [Graha; 4] = [Graha::Shukra, Graha::Guru, Graha::Chandra, Graha::Buddh];
const CHILDREN_DASHAS: [Graha; 3] = [Graha::Guru, Graha::Chandra, Graha::Shukra];
const CHILDREN_D7_LORDS: [Graha; 3] = [Graha::Guru, Graha::Chandra, Graha::Shukra];
const CAREER_DASHAS: [Graha; 3] = [Graha::Surya, Graha::Guru, Graha::Buddh];
const CAREER_D10_LORDS: [Graha; 3] = [Graha::Surya, Graha::Guru, Graha::Mangal];

const FAVOURABLE: f64 = 100.0;
const NEUTRAL: f64 = 50.0;

/// Declared children: how many, and their birth dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildrenEvents {
    pub count: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dates: Vec<NaiveDate>,
}

/// Life events declared for the native.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeEvents {
    #[cfg_attr(feature = "serde", serde(default))]
    pub marriage: Option<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Option<ChildrenEvents>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub career: Vec<NaiveDate>,
}

impl LifeEvents {
    pub fn is_empty(&self) -> bool {
        self.marriage.is_none() && self.children.is_none() && self.career.is_empty()
    }
}

/// Per-category scores; `None` for categories not evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventScores {
    pub marriage: Option<f64>,
    pub children: Option<f64>,
    pub career: Option<f64>,
    /// Mean of the evaluated categories, 0 when none were.
    pub overall: f64,
}

fn favour(graha: Graha, list: &[Graha]) -> f64 {
    if list.contains(&graha) { FAVOURABLE } else { NEUTRAL }
}

/// Inputs shared by every event check for one candidate chart.
#[derive(Debug, Clone, Copy)]
pub struct NatalChart<'a> {
    pub birth_jd: f64,
    pub lagna: f64,
    pub grahas: &'a GrahaLongitudes,
}

impl NatalChart<'_> {
    fn mahadasha_at(&self, date: NaiveDate) -> Graha {
        running_period_at_date(self.birth_jd, date, self.grahas.longitude(Graha::Chandra))
            .major_lord
    }

    /// Lord of whole-sign `house` (1-12) counted from the varga lagna.
    fn varga_house_lord(&self, division: u16, house: u8) -> Result<Graha, VedicError> {
        let chart = divisional_chart(self.lagna, self.grahas, division)?;
        Ok(sign_lord(nth_sign_from(sign_of(chart.lagna), house)))
    }

    /// Mean of per-date dasha scores averaged with the varga score.
    fn dated_score(&self, dates: &[NaiveDate], dashas: &[Graha], varga: f64) -> f64 {
        let per_date: Vec<Option<f64>> = dates
            .iter()
            .map(|&d| Some(favour(self.mahadasha_at(d), dashas)))
            .collect();
        (mean_of_evaluated(&per_date) + varga) / 2.0
    }

    /// Marriage: dasha at the wedding and the navamsha 7th lord.
    pub fn marriage_score(&self, date: NaiveDate) -> Result<f64, VedicError> {
        let d9_lord = self.varga_house_lord(D9, 7)?;
        Ok(self.dated_score(&[date], &MARRIAGE_DASHAS, favour(d9_lord, &MARRIAGE_D9_LORDS)))
    }

    /// Children: dashas at each declared birth and the saptamsha 5th lord.
    /// `None` when no count or no dates were given.
    pub fn children_score(&self, children: &ChildrenEvents) -> Result<Option<f64>, VedicError> {
        if children.count == 0 || children.dates.is_empty() {
            return Ok(None);
        }
        let dates = &children.dates[..children.count.min(children.dates.len())];
        let d7_lord = self.varga_house_lord(D7, 5)?;
        Ok(Some(self.dated_score(
            dates,
            &CHILDREN_DASHAS,
            favour(d7_lord, &CHILDREN_D7_LORDS),
        )))
    }

    /// Career: dashas at each career milestone and the dashamsha lagna lord.
    /// `None` when no dates were given.
    pub fn career_score(&self, dates: &[NaiveDate]) -> Result<Option<f64>, VedicError> {
        if dates.is_empty() {
            return Ok(None);
        }
        let d10_lord = self.varga_house_lord(D10, 1)?;
        Ok(Some(self.dated_score(
            dates,
            &CAREER_DASHAS,
            favour(d10_lord, &CAREER_D10_LORDS),
        )))
    }

    /// Score all declared events.
    pub fn score_events(&self, events: &LifeEvents) -> Result<EventScores, VedicError> {
        let marriage = events.marriage.map(|d| self.marriage_score(d)).transpose()?;
        let children = match &events.children {
            Some(c) => self.children_score(c)?,
            None => None,
        };
        let career = self.career_score(&events.career)?;
        Ok(EventScores {
            marriage,
            children,
            career,
            overall: mean_of_evaluated(&[marriage, children, career]),
        })
    }
}
