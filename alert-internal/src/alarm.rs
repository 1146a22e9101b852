use serde::{Deserialize, Serialize};
use ufmt::derive::uDebug;

use crate::{CAUTION_MIN_CM, DANGER_MAX_CM, NEAR_CM};

/// Classification of a distance reading
#[derive(uDebug, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlarmBand{
    Safe,
    Caution,
    Danger,
}

/// The branches of one evaluation pass that match a reading.
///
/// The conditions are independent: `caution` and `danger` are both set where the
/// bands overlap and the evaluator then runs both holds back to back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Branches{
    pub near: bool,
    pub caution: bool,
    pub danger: bool,
}

/// Band limits in centimeters, all inclusive
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Thresholds{
    pub near_cm: u16,
    pub caution_min_cm: u16,
    pub danger_max_cm: u16,
}

impl Default for Thresholds{
    fn default() -> Self{
        Self{
            near_cm: NEAR_CM,
            caution_min_cm: CAUTION_MIN_CM,
            danger_max_cm: DANGER_MAX_CM,
        }
    }
}

impl Thresholds{
    pub fn is_near(&self, distance_cm: u16) -> bool{
        distance_cm <= self.near_cm
    }
    pub fn is_caution(&self, distance_cm: u16) -> bool{
        distance_cm >= self.caution_min_cm && distance_cm <= self.near_cm
    }
    pub fn is_danger(&self, distance_cm: u16) -> bool{
        distance_cm <= self.danger_max_cm
    }

    /// Every branch the evaluator has to run for this reading, in no particular exclusivity
    pub fn branches(&self, distance_cm: u16) -> Branches{
        Branches{
            near: self.is_near(distance_cm),
            caution: self.is_caution(distance_cm),
            danger: self.is_danger(distance_cm),
        }
    }

    /// Single band for reporting. Caution wins on the shared boundary, matching the
    /// order in which the status broadcast checks the bands.
    pub fn band(&self, distance_cm: u16) -> AlarmBand{
        if self.is_caution(distance_cm){
            AlarmBand::Caution
        } else if self.is_danger(distance_cm){
            AlarmBand::Danger
        } else{
            AlarmBand::Safe
        }
    }
}
