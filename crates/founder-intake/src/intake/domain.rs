use serde::ser::Serializer;
use serde::Serialize;

/// Self-described experience level of the submitter (wire field
/// `businessDescription`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    StudentFresher,
    LessThanOneYear,
    OneToThreeYears,
    ThreeToFiveYears,
    FiveToTenYears,
    TenPlusYears,
}

impl ExperienceLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student_fresher" => Some(Self::StudentFresher),
            "less_than_1_year" => Some(Self::LessThanOneYear),
            "1_to_3_years" => Some(Self::OneToThreeYears),
            "3_to_5_years" => Some(Self::ThreeToFiveYears),
            "5_to_10_years" => Some(Self::FiveToTenYears),
            "10_plus_years" => Some(Self::TenPlusYears),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::StudentFresher => "student_fresher",
            Self::LessThanOneYear => "less_than_1_year",
            Self::OneToThreeYears => "1_to_3_years",
            Self::ThreeToFiveYears => "3_to_5_years",
            Self::FiveToTenYears => "5_to_10_years",
            Self::TenPlusYears => "10_plus_years",
        }
    }
}

/// How long the business has been operating (wire field `businessYears`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessTenure {
    LessThanOne,
    OneToThree,
    ThreeToFive,
    FiveToTen,
    TenPlus,
}

impl BusinessTenure {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "less_than_1" => Some(Self::LessThanOne),
            "1_to_3" => Some(Self::OneToThree),
            "3_to_5" => Some(Self::ThreeToFive),
            "5_to_10" => Some(Self::FiveToTen),
            "10_plus" => Some(Self::TenPlus),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::LessThanOne => "less_than_1",
            Self::OneToThree => "1_to_3",
            Self::ThreeToFive => "3_to_5",
            Self::FiveToTen => "5_to_10",
            Self::TenPlus => "10_plus",
        }
    }
}

/// Declared annual revenue bracket (wire field `annualRevenue`). The
/// `NotSpecified` sentinel stands in when the lenient schema lets the field
/// default; it is also accepted as an explicit wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueBracket {
    UnderFiveLakhs,
    FiveToTenLakhs,
    TenToTwentyFiveLakhs,
    TwentyFiveToFiftyLakhs,
    FiftyLakhsToOneCrore,
    OneToFiveCrores,
    FiveToTenCrores,
    TenToTwentyFiveCrores,
    TwentyFiveToFiftyCrores,
    FiftyToHundredCrores,
    OverHundredCrores,
    NotSpecified,
}

impl RevenueBracket {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "less_than_5_lakhs" => Some(Self::UnderFiveLakhs),
            "5_to_10_lakhs" => Some(Self::FiveToTenLakhs),
            "10_to_25_lakhs" => Some(Self::TenToTwentyFiveLakhs),
            "25_to_50_lakhs" => Some(Self::TwentyFiveToFiftyLakhs),
            "50_lakhs_to_1_crore" => Some(Self::FiftyLakhsToOneCrore),
            "1_to_5_crores" => Some(Self::OneToFiveCrores),
            "5_to_10_crores" => Some(Self::FiveToTenCrores),
            "10_to_25_crores" => Some(Self::TenToTwentyFiveCrores),
            "25_to_50_crores" => Some(Self::TwentyFiveToFiftyCrores),
            "50_to_100_crores" => Some(Self::FiftyToHundredCrores),
            "more_than_100_crores" => Some(Self::OverHundredCrores),
            "not_specified" => Some(Self::NotSpecified),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::UnderFiveLakhs => "less_than_5_lakhs",
            Self::FiveToTenLakhs => "5_to_10_lakhs",
            Self::TenToTwentyFiveLakhs => "10_to_25_lakhs",
            Self::TwentyFiveToFiftyLakhs => "25_to_50_lakhs",
            Self::FiftyLakhsToOneCrore => "50_lakhs_to_1_crore",
            Self::OneToFiveCrores => "1_to_5_crores",
            Self::FiveToTenCrores => "5_to_10_crores",
            Self::TenToTwentyFiveCrores => "10_to_25_crores",
            Self::TwentyFiveToFiftyCrores => "25_to_50_crores",
            Self::FiftyToHundredCrores => "50_to_100_crores",
            Self::OverHundredCrores => "more_than_100_crores",
            Self::NotSpecified => "not_specified",
        }
    }
}

impl Serialize for ExperienceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl Serialize for BusinessTenure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl Serialize for RevenueBracket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// A validated form submission. Built once per request by the decoder,
/// discarded after the response is composed; never persisted or mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub business_description: ExperienceLevel,
    pub business_years: BusinessTenure,
    pub annual_revenue: RevenueBracket,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biggest_challenge: Option<String>,
    pub open_to_contact: bool,
}
