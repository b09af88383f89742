use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ATTENDING_LABEL: &str = "Yes, joyfully attending";
pub const NOT_ATTENDING_LABEL: &str = "Regretfully cannot attend";

/// Closed choice offered by the RSVP form.
/// The two labels are the exact strings rendered in the form
/// and carried through the mailto path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attendance {
    #[serde(rename = "Yes, joyfully attending")]
    Attending,
    #[serde(rename = "Regretfully cannot attend")]
    NotAttending,
}

impl Attendance {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attending => ATTENDING_LABEL,
            Self::NotAttending => NOT_ATTENDING_LABEL,
        }
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownAttendance(pub String);

impl FromStr for Attendance {
    type Err = UnknownAttendance;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            ATTENDING_LABEL => Ok(Self::Attending),
            NOT_ATTENDING_LABEL => Ok(Self::NotAttending),
            _ => Err(UnknownAttendance(value.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        label = {ATTENDING_LABEL, NOT_ATTENDING_LABEL},
        expected_attendance = {Attendance::Attending, Attendance::NotAttending}
    )]
    fn should_parse_label(label: &str, expected_attendance: Attendance) {
        assert_eq!(Ok(expected_attendance), label.parse());
        assert_eq!(label, expected_attendance.to_string());
    }

    #[test]
    fn should_reject_unknown_label() {
        let result = "Maybe".parse::<Attendance>();

        assert_eq!(Err(UnknownAttendance("Maybe".to_owned())), result);
    }
}
